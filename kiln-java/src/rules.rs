//! Structural rules for each method kind and declaration kind.
//!
//! Builders call these at `build()`/`finish()` time. A model that passes
//! them is always renderable.

use std::collections::HashSet;

use crate::{
    Declaration, DeclarationKind, Error, Method, MethodKind, Result, VisibleElement, Visibility,
    names,
};

/// Validate a method-like element owned by the declaration named `owner`.
///
/// Annotation attributes are checked visibility first, then return type,
/// then body.
pub(crate) fn check_method(owner: &str, method: &Method) -> Result<()> {
    let what = method.kind.describe();
    method.element.check(owner, what)?;

    let name = &method.element.name;
    let fail = |reason: &str| Err(Error::definition(owner, format!("{what} '{name}' {reason}")));

    let mut seen = HashSet::new();
    for param in &method.parameters {
        param.check(owner, name)?;
        if !seen.insert(param.name()) {
            return fail(&format!("declares parameter '{}' twice", param.name()));
        }
    }

    if method.default_value.is_some() && method.kind != MethodKind::AnnotationAttribute {
        return fail("cannot declare a default value; only annotation attributes can");
    }

    let element = &method.element;
    let has_body = method.body.is_some();
    match method.kind {
        MethodKind::Concrete | MethodKind::Abstract => {
            if !has_body && (element.is_final || element.is_static) {
                return fail("has no body, so it cannot be final or static");
            }
            if !has_body && element.visibility.is_private() {
                return fail("has no body, so it cannot be private");
            }
        }
        MethodKind::Interface => {
            if !matches!(element.visibility, Visibility::Public | Visibility::Private) {
                return fail("must be public or private");
            }
            if element.is_final {
                return fail("cannot be final in an interface");
            }
            if element.is_static && !has_body {
                return fail("is static, so it needs a body");
            }
            if element.visibility.is_private() && !has_body {
                return fail("is private, so it needs a body");
            }
        }
        MethodKind::AnnotationAttribute => {
            if !element.visibility.is_public() {
                return fail("must be public");
            }
            if method.return_type.is_void() {
                return fail("cannot return void");
            }
            if has_body {
                return fail("cannot have a body");
            }
            if !method.parameters.is_empty() {
                return fail("cannot declare parameters");
            }
            if element.is_static || element.is_final {
                return fail("cannot be static or final");
            }
            if let Some(value) = &method.default_value {
                if !method.return_type.accepts(value.ty()) {
                    return fail(&format!(
                        "returns {} but its default value is of type {}",
                        method.return_type,
                        value.ty()
                    ));
                }
            }
        }
        MethodKind::Constructor => {
            if element.is_static || element.is_final {
                return fail("cannot be static or final");
            }
            if !has_body {
                return fail("must have a body");
            }
        }
        MethodKind::Descriptor => {}
    }
    Ok(())
}

/// Validate a complete declaration and every member it holds.
pub(crate) fn check_declaration(decl: &Declaration) -> Result<()> {
    let owner = decl.fully_qualified_name();
    let kind = decl.kind;
    let element = &decl.element;
    let fail = |reason: String| Err(Error::definition(&owner, reason));

    element.check(&owner, kind.describe())?;
    if let Some(reason) = names::validate_type_name(decl.ty.name()) {
        return fail(format!("'{}': {reason}", decl.ty.name()));
    }
    if let Some(reason) = names::validate_package(decl.package()) {
        return fail(format!("package '{}': {reason}", decl.package()));
    }

    if element.is_static {
        return fail(format!("top-level {} cannot be static", kind.describe()));
    }

    match kind {
        DeclarationKind::Class | DeclarationKind::AbstractClass => {
            if element.visibility.is_private() {
                return fail(format!("{} cannot be private", kind.describe()));
            }
            if kind == DeclarationKind::AbstractClass && element.is_final {
                return fail("abstract class cannot be final".into());
            }
        }
        DeclarationKind::Interface | DeclarationKind::Annotation => {
            if !matches!(element.visibility, Visibility::Public | Visibility::PackagePrivate) {
                return fail(format!(
                    "{} must be public or package-private",
                    kind.describe()
                ));
            }
            if element.is_final {
                return fail(format!("{} cannot be final", kind.describe()));
            }
            if decl.parent.is_some() {
                return fail(format!("{} cannot have a parent class", kind.describe()));
            }
            if kind == DeclarationKind::Annotation && !decl.interfaces.is_empty() {
                return fail("annotation cannot extend other interfaces".into());
            }
        }
        DeclarationKind::Enum => {
            if element.visibility.is_private() {
                return fail("enum cannot be private".into());
            }
            if !element.is_final {
                return fail("enum must be final".into());
            }
            if decl.parent.is_some() {
                return fail("enum cannot have a parent class".into());
            }
        }
    }

    if kind != DeclarationKind::Enum && !decl.entries.is_empty() {
        return fail(format!("only enums can declare entries, not {}", kind.describe()));
    }
    if matches!(kind, DeclarationKind::Enum | DeclarationKind::Annotation)
        && !element.generics.is_empty()
    {
        return fail(format!("{} cannot declare type parameters", kind.describe()));
    }
    let mut entry_names = HashSet::new();
    for entry in &decl.entries {
        if let Some(reason) = names::validate_identifier(entry.name()) {
            return fail(format!("enum entry '{}': {reason}", entry.name()));
        }
        if !entry_names.insert(entry.name()) {
            return fail(format!("enum entry '{}' is declared twice", entry.name()));
        }
    }

    let mut field_names = HashSet::new();
    for field in &decl.fields {
        field.check(&owner)?;
        if !field_names.insert(field.name()) || entry_names.contains(field.name()) {
            return fail(format!("field '{}' is declared twice", field.name()));
        }
    }

    if !kind.allows_constructors() && !decl.constructors.is_empty() {
        return fail(format!("{} cannot declare constructors", kind.describe()));
    }
    for (i, ctor) in decl.constructors.iter().enumerate() {
        if ctor.kind != MethodKind::Constructor {
            return fail(format!("'{}' is not a constructor", ctor.name()));
        }
        if ctor.name() != decl.ty.name() {
            return fail(format!(
                "constructor is named '{}' but the {} is '{}'",
                ctor.name(),
                kind.describe(),
                decl.ty.name()
            ));
        }
        check_method(&owner, ctor)?;
        if kind == DeclarationKind::Enum
            && !matches!(ctor.visibility(), Visibility::Private | Visibility::PackagePrivate)
        {
            return fail("enum constructors must be private or package-private".into());
        }
        if decl.constructors[..i]
            .iter()
            .any(|other| other.same_parameter_types(ctor))
        {
            return fail("two constructors have the same parameters".into());
        }
    }

    for (i, method) in decl.methods.iter().enumerate() {
        if method.kind == MethodKind::Descriptor {
            return fail(format!(
                "method descriptor '{}' cannot be declared",
                method.name()
            ));
        }
        if !kind.accepts_method(method.kind) {
            return fail(format!(
                "{} '{}' does not belong in {}",
                method.kind.describe(),
                method.name(),
                kind.describe()
            ));
        }
        check_method(&owner, method)?;
        if method.is_abstract() && !decl.is_abstract() {
            return fail(format!(
                "method '{}' has no body but {} is not abstract",
                method.name(),
                kind.describe()
            ));
        }
        if decl.methods[..i].iter().any(|other| other.same_signature(method)) {
            return fail(format!("method '{}' is declared twice", method.name()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        ClassType, ConstructorBuilder, DeclarationBuilder, EnumEntry, GenericType, MethodBuilder,
        MethodKind, Type, Value, Visibility,
    };

    const ALL_VISIBILITIES: [Visibility; 4] = [
        Visibility::Public,
        Visibility::Protected,
        Visibility::PackagePrivate,
        Visibility::Private,
    ];

    fn starters() -> [(fn(&str, &str) -> DeclarationBuilder, &'static [Visibility]); 5] {
        [
            (
                |p, n| DeclarationBuilder::class(p, n),
                &[Visibility::Public, Visibility::Protected, Visibility::PackagePrivate],
            ),
            (
                |p, n| DeclarationBuilder::abstract_class(p, n),
                &[Visibility::Public, Visibility::Protected, Visibility::PackagePrivate],
            ),
            (
                |p, n| DeclarationBuilder::interface(p, n),
                &[Visibility::Public, Visibility::PackagePrivate],
            ),
            (
                |p, n| DeclarationBuilder::annotation_type(p, n),
                &[Visibility::Public, Visibility::PackagePrivate],
            ),
            (
                |p, n| DeclarationBuilder::enumeration(p, n),
                &[Visibility::Public, Visibility::Protected, Visibility::PackagePrivate],
            ),
        ]
    }

    #[test]
    fn test_visibility_per_declaration_kind() {
        for (start, legal) in starters() {
            for visibility in ALL_VISIBILITIES {
                let result = start("com.acme", "Thing").visibility(visibility).build();
                if legal.contains(&visibility) {
                    assert!(result.is_ok(), "{visibility:?} should be accepted");
                } else {
                    let err = result.unwrap_err();
                    assert!(err.is_definition());
                    assert!(err.to_string().contains("'com.acme.Thing'"));
                }
            }
        }
    }

    #[test]
    fn test_static_declarations_rejected() {
        for (start, _) in starters() {
            let err = start("a", "Thing").static_().build().unwrap_err();
            assert!(err.is_definition());
        }
    }

    #[test]
    fn test_invalid_names() {
        assert!(DeclarationBuilder::class("a", "class").build().is_err());
        assert!(DeclarationBuilder::class("a.2b", "Ok").build().is_err());
        assert!(DeclarationBuilder::class("", "Ok").build().is_ok());
    }

    #[test]
    fn test_restricted_type_names() {
        let err = DeclarationBuilder::class("a", "var").build().unwrap_err();
        assert!(err.to_string().contains("restricted"));
        assert!(DeclarationBuilder::enumeration("a", "record").build().is_err());
        assert!(DeclarationBuilder::interface("a", "yield").build().is_err());

        let ok = DeclarationBuilder::class("a", "C")
            .field("var", Type::int())
            .finish()
            .unwrap()
            .method("record")
            .empty_implementation()
            .finish()
            .unwrap()
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_abstract_final_class() {
        let err = DeclarationBuilder::abstract_class("a", "Base")
            .final_()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot be final"));
        assert!(DeclarationBuilder::class("a", "Leaf").final_().build().is_ok());
    }

    #[test]
    fn test_interface_restrictions() {
        let err = DeclarationBuilder::interface("a", "Api")
            .final_()
            .build()
            .unwrap_err();
        assert!(err.is_definition());

        let err = DeclarationBuilder::annotation_type("a", "Marker")
            .extends(ClassType::new("a", "Other"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot extend"));

        let err = DeclarationBuilder::annotation_type("a", "Marker")
            .generic(GenericType::new("T"))
            .build()
            .unwrap_err();
        assert!(err.is_definition());
    }

    #[test]
    fn test_enum_restrictions() {
        let err = DeclarationBuilder::enumeration("a", "Color")
            .extends(ClassType::new("a", "Base"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("parent class"));

        let err = DeclarationBuilder::enumeration("a", "Color")
            .constructor()
            .unwrap()
            .public()
            .empty_implementation()
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("private or package-private"));

        for visibility in [Visibility::Private, Visibility::PackagePrivate] {
            let ok = DeclarationBuilder::enumeration("a", "Color")
                .constructor()
                .unwrap()
                .visibility(visibility)
                .param("rgb", Type::int())
                .add_code("this.rgb = rgb;")
                .finish()
                .unwrap()
                .build();
            assert!(ok.is_ok());
        }
    }

    #[test]
    fn test_enum_entry_uniqueness() {
        for count in [0, 1, 5] {
            let decl = (0..count).fold(DeclarationBuilder::enumeration("a", "E"), |b, i| {
                b.entry(EnumEntry::new(format!("E{i}")))
            });
            assert!(decl.build().is_ok());
        }

        let err = DeclarationBuilder::enumeration("a", "E")
            .entry(EnumEntry::new("A"))
            .entry(EnumEntry::new("B"))
            .entry(EnumEntry::new("A"))
            .build()
            .unwrap_err();
        assert!(err.is_definition());
        assert!(err.to_string().contains("entry 'A' is declared twice"));
    }

    #[test]
    fn test_entries_only_on_enums() {
        let err = DeclarationBuilder::class("a", "C")
            .entry(EnumEntry::new("A"))
            .build()
            .unwrap_err();
        assert!(err.is_definition());
    }

    #[test]
    fn test_duplicate_members() {
        let err = DeclarationBuilder::class("a", "C")
            .field("x", Type::int())
            .finish()
            .unwrap()
            .field("x", Type::long())
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("field 'x'"));

        let err = DeclarationBuilder::class("a", "C")
            .method("run")
            .empty_implementation()
            .finish()
            .unwrap()
            .method("run")
            .add_code("other();")
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("method 'run' is declared twice"));

        let overloads = DeclarationBuilder::class("a", "C")
            .method("run")
            .empty_implementation()
            .finish()
            .unwrap()
            .method("run")
            .param("times", Type::int())
            .empty_implementation()
            .finish()
            .unwrap()
            .build();
        assert!(overloads.is_ok());
    }

    #[test]
    fn test_parameter_names_do_not_distinguish_members() {
        let err = DeclarationBuilder::class("a", "C")
            .constructor()
            .unwrap()
            .param("a", Type::int())
            .empty_implementation()
            .finish()
            .unwrap()
            .constructor()
            .unwrap()
            .param("b", Type::int())
            .empty_implementation()
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("two constructors have the same parameters"));

        let err = DeclarationBuilder::class("a", "C")
            .method("m")
            .param("x", Type::int())
            .empty_implementation()
            .finish()
            .unwrap()
            .method("m")
            .param("y", Type::int())
            .empty_implementation()
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("method 'm' is declared twice"));

        let err = DeclarationBuilder::class("a", "C")
            .method("m")
            .param("x", Type::int())
            .empty_implementation()
            .finish()
            .unwrap()
            .method("m")
            .returns(Type::int())
            .param("x", Type::int())
            .add_code("return x;")
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("method 'm' is declared twice"));
    }

    #[test]
    fn test_bodiless_method_in_concrete_class() {
        let err = DeclarationBuilder::class("a", "C")
            .method("run")
            .finish()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("is not abstract"));

        let ok = DeclarationBuilder::abstract_class("a", "C")
            .method("run")
            .finish()
            .unwrap()
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_detached_constructor_must_match_name() {
        let ctor = ConstructorBuilder::new(&ClassType::new("a", "Other"))
            .empty_implementation()
            .build()
            .unwrap();
        let err = DeclarationBuilder::class("a", "C")
            .add_constructor(ctor)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("constructor is named 'Other'"));

        let method = MethodBuilder::new(&ClassType::new("a", "C"), MethodKind::Concrete, "C")
            .empty_implementation()
            .build()
            .unwrap();
        let err = DeclarationBuilder::class("a", "C")
            .add_constructor(method)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("is not a constructor"));
    }

    #[test]
    fn test_descriptor_cannot_be_declared() {
        let owner = ClassType::new("a", "Marker");
        let descriptor = MethodBuilder::descriptor(&owner, "value")
            .returns(Type::string())
            .build()
            .unwrap();
        let err = DeclarationBuilder::annotation_type("a", "Marker")
            .add_method(descriptor)
            .build()
            .unwrap_err();
        assert!(err.is_definition());
    }

    #[test]
    fn test_annotation_type_attributes() {
        let decl = DeclarationBuilder::annotation_type("a", "Retry")
            .public()
            .method("times")
            .returns(Type::int())
            .default_value(Value::int(3))
            .finish()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(decl.methods()[0].kind(), MethodKind::AnnotationAttribute);
    }
}
