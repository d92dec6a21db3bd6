//! Builder for top-level declarations.

use tracing::debug;

use super::{ConstructorBuilder, FieldBuilder, MethodBuilder};
use crate::{
    ClassType, Declaration, DeclarationKind, Element, EnumEntry, Error, Field, Method, Result,
    Type, rules,
};

/// Accumulates a class, interface, annotation or enum declaration.
///
/// Member entry points consume the builder and hand it back from the
/// member builder's `finish()`.
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    element: Element,
    kind: DeclarationKind,
    ty: ClassType,
    fields: Vec<Field>,
    methods: Vec<Method>,
    constructors: Vec<Method>,
    parent: Option<ClassType>,
    interfaces: Vec<ClassType>,
    entries: Vec<EnumEntry>,
}

impl DeclarationBuilder {
    fn new(kind: DeclarationKind, package: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            element: Element {
                is_final: kind == DeclarationKind::Enum,
                ..Element::new(name.clone())
            },
            kind,
            ty: ClassType::new(package, name),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            parent: None,
            interfaces: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Start a concrete class.
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Class, package, name)
    }

    /// Start an abstract class.
    pub fn abstract_class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::AbstractClass, package, name)
    }

    /// Start an interface.
    pub fn interface(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Interface, package, name)
    }

    /// Start an annotation type (`@interface`).
    pub fn annotation_type(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Annotation, package, name)
    }

    /// Start an enum. Enums start out `final`.
    pub fn enumeration(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Enum, package, name)
    }

    element_modifiers!();

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// The raw class type being declared.
    pub fn ty(&self) -> &ClassType {
        &self.ty
    }

    /// Set the parent class, or add an extended interface when building an
    /// interface-like declaration.
    pub fn extends(mut self, ty: ClassType) -> Self {
        if self.kind.is_interface() {
            self.interfaces.push(ty);
        } else {
            self.parent = Some(ty);
        }
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, ty: ClassType) -> Self {
        self.interfaces.push(ty);
        self
    }

    /// Append an enum entry.
    pub fn entry(mut self, entry: EnumEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Start a field attached to this declaration.
    pub fn field(self, name: impl Into<String>, ty: impl Into<Type>) -> FieldBuilder<Self> {
        let owner = self.ty.clone();
        FieldBuilder::attached(self, &owner, name, ty)
    }

    /// Start a method of the kind this declaration holds.
    pub fn method(self, name: impl Into<String>) -> MethodBuilder<Self> {
        let owner = self.ty.clone();
        let kind = self.kind.method_kind();
        MethodBuilder::attached(self, &owner, kind, name)
    }

    /// Start a constructor. Interfaces and annotation types have none.
    pub fn constructor(self) -> Result<ConstructorBuilder<Self>> {
        if !self.kind.allows_constructors() {
            return Err(Error::contract(format!(
                "{} '{}' cannot declare constructors",
                self.kind.describe(),
                self.ty.fully_qualified_name()
            )));
        }
        let owner = self.ty.clone();
        Ok(ConstructorBuilder::attached(self, &owner))
    }

    /// Attach a detached field.
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Attach a detached method.
    pub fn add_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Attach a detached constructor.
    pub fn add_constructor(mut self, constructor: Method) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Validate and produce the declaration.
    pub fn build(self) -> Result<Declaration> {
        let declaration = Declaration {
            element: self.element,
            kind: self.kind,
            ty: self.ty,
            fields: self.fields,
            methods: self.methods,
            constructors: self.constructors,
            parent: self.parent,
            interfaces: self.interfaces,
            entries: self.entries,
        };
        rules::check_declaration(&declaration)?;
        debug!(
            name = %declaration.fully_qualified_name(),
            kind = declaration.kind.describe(),
            fields = declaration.fields.len(),
            methods = declaration.methods.len(),
            constructors = declaration.constructors.len(),
            "built declaration"
        );
        Ok(declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Annotation, GenericType, Parameter, Value, Visibility, VisibleElement};

    #[test]
    fn test_class_defaults() {
        let decl = DeclarationBuilder::class("com.acme", "Widget").build().unwrap();
        assert_eq!(decl.kind(), DeclarationKind::Class);
        assert_eq!(decl.visibility(), Visibility::PackagePrivate);
        assert_eq!(decl.fully_qualified_name(), "com.acme.Widget");
        assert!(!decl.is_abstract());
        assert!(!decl.is_final());
    }

    #[test]
    fn test_enum_starts_final() {
        let decl = DeclarationBuilder::enumeration("a", "Color").build().unwrap();
        assert!(decl.is_final());

        let err = DeclarationBuilder::enumeration("a", "Color")
            .set_final(false)
            .build()
            .unwrap_err();
        assert!(err.is_definition());
    }

    #[test]
    fn test_members_attach_in_order() {
        let decl = DeclarationBuilder::class("a", "Point")
            .public()
            .field("x", Type::int())
            .private()
            .finish()
            .unwrap()
            .field("y", Type::int())
            .private()
            .finish()
            .unwrap()
            .constructor()
            .unwrap()
            .public()
            .param("x", Type::int())
            .param("y", Type::int())
            .add_code("this.x = x;")
            .add_code("this.y = y;")
            .finish()
            .unwrap()
            .method("x")
            .public()
            .returns(Type::int())
            .add_code("return x;")
            .finish()
            .unwrap()
            .build()
            .unwrap();

        let names: Vec<_> = decl.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(decl.constructors().len(), 1);
        assert_eq!(decl.constructors()[0].name(), "Point");
        assert_eq!(decl.method("x").unwrap().return_type(), &Type::int());
    }

    #[test]
    fn test_extends_on_interface_adds_interfaces() {
        let decl = DeclarationBuilder::interface("a", "Repo")
            .extends(ClassType::new("java.io", "Closeable"))
            .extends(ClassType::lang("AutoCloseable"))
            .build()
            .unwrap();
        assert!(decl.parent().is_none());
        assert_eq!(decl.interfaces().len(), 2);
    }

    #[test]
    fn test_constructor_rejected_for_interfaces() {
        let err = DeclarationBuilder::interface("a", "Repo")
            .constructor()
            .unwrap_err();
        assert!(err.is_contract());

        let err = DeclarationBuilder::annotation_type("a", "Marker")
            .constructor()
            .unwrap_err();
        assert!(err.is_contract());
    }

    #[test]
    fn test_type_carries_generics() {
        let decl = DeclarationBuilder::class("a", "Box")
            .generic(GenericType::new("T"))
            .build()
            .unwrap();
        assert_eq!(decl.type_().simple_name(), "Box<T>");
        assert_eq!(decl.package(), "a");
    }

    #[test]
    fn test_add_detached_members() {
        let owner = ClassType::new("a", "Service");
        let field = FieldBuilder::new(&owner, "name", Type::string())
            .value(Value::string("svc"))
            .build()
            .unwrap();
        let method = MethodBuilder::new(&owner, crate::MethodKind::Concrete, "start")
            .empty_implementation()
            .build()
            .unwrap();
        let ctor = ConstructorBuilder::new(&owner)
            .parameter(Parameter::new("name", Type::string()))
            .empty_implementation()
            .build()
            .unwrap();

        let decl = DeclarationBuilder::class("a", "Service")
            .add_field(field)
            .add_method(method)
            .add_constructor(ctor)
            .build()
            .unwrap();
        assert!(decl.field("name").is_some());
        assert!(decl.method("start").is_some());
    }

    #[test]
    fn test_detached_member_kind_checked_at_build() {
        let owner = ClassType::new("a", "Api");
        let method = MethodBuilder::new(&owner, crate::MethodKind::Concrete, "call")
            .empty_implementation()
            .build()
            .unwrap();
        let err = DeclarationBuilder::interface("a", "Api")
            .add_method(method)
            .build()
            .unwrap_err();
        assert!(err.is_definition());
    }

    #[test]
    fn test_annotations_are_queryable() {
        let deprecated = ClassType::lang("Deprecated");
        let decl = DeclarationBuilder::class("a", "Old")
            .annotation(Annotation::new(deprecated.clone()))
            .build()
            .unwrap();
        assert!(decl.has_annotation(&deprecated));
    }
}
