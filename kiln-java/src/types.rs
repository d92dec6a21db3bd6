//! The Java type system: void, primitives, classes, arrays and generics.
//!
//! Every [`Type`] can register itself into an [`ImportSet`], report the
//! name it renders with, and answer assignability questions. Class types
//! compare by package and simple name only when checking assignability;
//! generic arguments are a rendering concern.

use std::fmt;

use crate::{
    Error, ImportSet, Result,
    names::qualify,
    value::{Constant, Value},
};

/// The closed set of Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

impl Primitive {
    /// Every primitive, in keyword order.
    pub const ALL: [Primitive; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
    ];

    /// The Java keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Simple name of the `java.lang` wrapper class.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Character",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Short => "Short",
        }
    }

    /// Parse a Java primitive keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Whether a constant of this kind can back a value of this primitive.
    ///
    /// A Java `char` is one UTF-16 code unit, so characters outside the
    /// Basic Multilingual Plane are rejected.
    pub fn accepts(&self, datum: &Constant) -> bool {
        match (self, datum) {
            (Self::Char, Constant::Char(c)) => c.len_utf16() == 1,
            (Self::Boolean, Constant::Boolean(_))
            | (Self::Byte, Constant::Byte(_))
            | (Self::Double, Constant::Double(_))
            | (Self::Float, Constant::Float(_))
            | (Self::Int, Constant::Int(_))
            | (Self::Long, Constant::Long(_))
            | (Self::Short, Constant::Short(_)) => true,
            _ => false,
        }
    }
}

/// A reference to a class, interface, enum or annotation type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    package: String,
    name: String,
    arguments: Vec<Type>,
}

impl ClassType {
    /// Create a raw class reference. An empty package is the default namespace.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Reference a `java.lang` class.
    pub fn lang(name: impl Into<String>) -> Self {
        Self::new(crate::imports::IMPLICIT_PACKAGE, name)
    }

    /// The wrapper class of a primitive.
    pub fn boxed(primitive: Primitive) -> Self {
        Self::lang(primitive.boxed_name())
    }

    /// Attach generic arguments, replacing any existing ones.
    pub fn with_arguments(mut self, arguments: Vec<Type>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Type] {
        &self.arguments
    }

    /// The same class without generic arguments.
    pub fn raw(&self) -> ClassType {
        Self::new(self.package.clone(), self.name.clone())
    }

    /// Fully-qualified name without generic arguments.
    pub fn fully_qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }

    /// Whether both references name the same class, ignoring arguments.
    pub fn same_class(&self, other: &ClassType) -> bool {
        self.package == other.package && self.name == other.name
    }

    /// The primitive this class wraps, if it is a `java.lang` wrapper.
    pub fn unboxed(&self) -> Option<Primitive> {
        if self.package != crate::imports::IMPLICIT_PACKAGE {
            return None;
        }
        Primitive::ALL
            .into_iter()
            .find(|p| p.boxed_name() == self.name)
    }

    fn is_lang(&self, name: &str) -> bool {
        self.package == crate::imports::IMPLICIT_PACKAGE && self.name == name
    }

    /// Name used in source, including rendered generic arguments.
    pub fn simple_name(&self) -> String {
        if self.arguments.is_empty() {
            self.name.clone()
        } else {
            let args: Vec<_> = self.arguments.iter().map(Type::simple_name).collect();
            format!("{}<{}>", self.name, args.join(", "))
        }
    }

    /// Register this class and every class in its arguments.
    pub fn register_import(&self, imports: &mut ImportSet) {
        imports.add(self);
        for arg in &self.arguments {
            arg.register_import(imports);
        }
    }
}

impl From<ClassType> for Type {
    fn from(ty: ClassType) -> Self {
        Type::Class(ty)
    }
}

/// The bound attached to a generic placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bound {
    Unbounded,
    /// Upper bound: `T extends B`.
    Extends(Box<Type>),
    /// Lower bound: `? super B`.
    Super(Box<Type>),
}

/// A generic placeholder such as `T`, `T extends Comparable<T>` or `? super E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericType {
    name: String,
    bound: Bound,
}

impl GenericType {
    const WILDCARD: &'static str = "?";

    /// An unbounded named placeholder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: Bound::Unbounded,
        }
    }

    /// The unbounded wildcard `?`.
    pub fn wildcard() -> Self {
        Self::new(Self::WILDCARD)
    }

    /// Set an upper bound.
    pub fn extends(mut self, bound: impl Into<Type>) -> Self {
        self.bound = Bound::Extends(Box::new(bound.into()));
        self
    }

    /// Set a lower bound.
    pub fn super_(mut self, bound: impl Into<Type>) -> Self {
        self.bound = Bound::Super(Box::new(bound.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bound(&self) -> &Bound {
        &self.bound
    }

    pub fn is_wildcard(&self) -> bool {
        self.name == Self::WILDCARD
    }

    fn bound_suffix(&self) -> String {
        match &self.bound {
            Bound::Unbounded => String::new(),
            Bound::Extends(ty) => format!(" extends {}", ty.simple_name()),
            Bound::Super(ty) => format!(" super {}", ty.simple_name()),
        }
    }

    /// Text used where the placeholder is declared, e.g. `T extends Number`.
    pub fn declaration(&self) -> String {
        format!("{}{}", self.name, self.bound_suffix())
    }

    /// Text used where the placeholder is referenced. Named placeholders
    /// render their name only; wildcards carry their bound.
    pub fn simple_name(&self) -> String {
        if self.is_wildcard() {
            self.declaration()
        } else {
            self.name.clone()
        }
    }

    pub fn register_import(&self, imports: &mut ImportSet) {
        match &self.bound {
            Bound::Unbounded => {}
            Bound::Extends(ty) | Bound::Super(ty) => ty.register_import(imports),
        }
    }
}

impl From<GenericType> for Type {
    fn from(ty: GenericType) -> Self {
        Type::Generic(ty)
    }
}

/// A Java type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `void`; valid only as a method return type.
    Void,
    Primitive(Primitive),
    Class(ClassType),
    Array(Box<Type>),
    Generic(GenericType),
}

impl Type {
    pub fn void() -> Self {
        Self::Void
    }

    pub fn boolean() -> Self {
        Self::Primitive(Primitive::Boolean)
    }

    pub fn byte() -> Self {
        Self::Primitive(Primitive::Byte)
    }

    pub fn char() -> Self {
        Self::Primitive(Primitive::Char)
    }

    pub fn short() -> Self {
        Self::Primitive(Primitive::Short)
    }

    pub fn int() -> Self {
        Self::Primitive(Primitive::Int)
    }

    pub fn long() -> Self {
        Self::Primitive(Primitive::Long)
    }

    pub fn float() -> Self {
        Self::Primitive(Primitive::Float)
    }

    pub fn double() -> Self {
        Self::Primitive(Primitive::Double)
    }

    /// `java.lang.String`.
    pub fn string() -> Self {
        Self::Class(ClassType::lang("String"))
    }

    /// A raw class reference.
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Class(ClassType::new(package, name))
    }

    /// An array of `contained`.
    pub fn array(contained: impl Into<Type>) -> Self {
        Self::Array(Box::new(contained.into()))
    }

    /// An unbounded generic placeholder.
    pub fn generic(name: impl Into<String>) -> Self {
        Self::Generic(GenericType::new(name))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Name used in source.
    pub fn simple_name(&self) -> String {
        match self {
            Self::Void => "void".to_string(),
            Self::Primitive(p) => p.keyword().to_string(),
            Self::Class(c) => c.simple_name(),
            Self::Array(contained) => format!("{}[]", contained.simple_name()),
            Self::Generic(g) => g.simple_name(),
        }
    }

    /// Name used in diagnostics; classes are package-qualified throughout.
    pub fn fully_qualified_name(&self) -> String {
        match self {
            Self::Class(c) if c.arguments.is_empty() => c.fully_qualified_name(),
            Self::Class(c) => {
                let args: Vec<_> = c.arguments.iter().map(Type::fully_qualified_name).collect();
                format!("{}<{}>", c.fully_qualified_name(), args.join(", "))
            }
            Self::Array(contained) => format!("{}[]", contained.fully_qualified_name()),
            other => other.simple_name(),
        }
    }

    /// Name of the erased type, as used in class literals (`List.class`).
    pub(crate) fn erased_name(&self) -> String {
        match self {
            Self::Class(c) => c.name.clone(),
            Self::Array(contained) => format!("{}[]", contained.erased_name()),
            other => other.simple_name(),
        }
    }

    /// Register every class this type mentions.
    pub fn register_import(&self, imports: &mut ImportSet) {
        match self {
            Self::Void | Self::Primitive(_) => {}
            Self::Class(c) => c.register_import(imports),
            Self::Array(contained) => contained.register_import(imports),
            Self::Generic(g) => g.register_import(imports),
        }
    }

    /// Register imports and return the source name in one step.
    pub(crate) fn generate(&self, imports: &mut ImportSet) -> String {
        self.register_import(imports);
        self.simple_name()
    }

    /// Whether a value of type `other` can be assigned to this type.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        match (self, other) {
            (Self::Void, _) | (_, Self::Void) => false,
            (Self::Primitive(a), Self::Primitive(b)) => a == b,
            (Self::Primitive(_), _) => false,
            (Self::Class(c), _) if c.is_lang("Object") => !other.is_primitive(),
            (Self::Generic(a), Self::Generic(b)) if a.name == b.name => true,
            (_, Self::Generic(g)) if !matches!(self, Self::Generic(_)) => match &g.bound {
                Bound::Extends(bound) => self.is_assignable_from(bound),
                _ => false,
            },
            (Self::Class(a), Self::Class(b)) => a.same_class(b),
            (Self::Array(a), Self::Array(b)) => a.is_assignable_from(b),
            (Self::Generic(g), other) => match &g.bound {
                Bound::Unbounded => !other.is_primitive(),
                Bound::Extends(bound) | Bound::Super(bound) => bound.is_assignable_from(other),
            },
            _ => false,
        }
    }

    /// Like [`Type::is_assignable_from`], but also accepts boxing between a
    /// primitive and its `java.lang` wrapper.
    pub fn accepts(&self, other: &Type) -> bool {
        if self.is_assignable_from(other) {
            return true;
        }
        match (self, other) {
            (Self::Class(c), Self::Primitive(p)) | (Self::Primitive(p), Self::Class(c)) => {
                c.unboxed() == Some(*p)
            }
            _ => false,
        }
    }

    /// Convert a host constant into a [`Value`] of this type.
    ///
    /// Fails with a conversion error when the constant's kind cannot be
    /// represented by this type.
    pub fn as_value(&self, datum: impl Into<Constant>) -> Result<Value> {
        let datum = datum.into();
        match (self, &datum) {
            (Self::Primitive(p), d) if p.accepts(d) => Ok(Value::from_constant(self.clone(), datum)),
            (Self::Class(c), d) if c.unboxed().is_some_and(|p| p.accepts(d)) => {
                Ok(Value::from_constant(self.clone(), datum))
            }
            (Self::Class(c), Constant::String(_)) if c.is_lang("String") => {
                Ok(Value::from_constant(self.clone(), datum))
            }
            (Self::Class(c), Constant::Class(_)) if c.is_lang("Class") => {
                Ok(Value::from_constant(self.clone(), datum))
            }
            (Self::Class(c), Constant::Enum { ty, .. }) if c.same_class(ty) => {
                Ok(Value::from_constant(self.clone(), datum))
            }
            (Self::Array(contained), Constant::Array(items)) => {
                let values = items
                    .iter()
                    .map(|item| contained.as_value(item.clone()))
                    .collect::<Result<Vec<_>>>()?;
                Value::array(contained.as_ref().clone(), values)
            }
            _ => Err(Error::conversion(
                self.fully_qualified_name(),
                datum.describe(),
            )),
        }
    }
}

impl From<Primitive> for Type {
    fn from(p: Primitive) -> Self {
        Type::Primitive(p)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(Type::void().simple_name(), "void");
        assert_eq!(Type::int().simple_name(), "int");
        assert_eq!(Type::array(Type::int()).simple_name(), "int[]");
        assert_eq!(
            Type::array(Type::array(Type::string())).simple_name(),
            "String[][]"
        );
        let list = ClassType::new("java.util", "List").with_arguments(vec![Type::string()]);
        assert_eq!(Type::from(list).simple_name(), "List<String>");
    }

    #[test]
    fn test_fully_qualified_names() {
        let map = ClassType::new("java.util", "Map")
            .with_arguments(vec![Type::string(), Type::class("com.acme", "Widget")]);
        assert_eq!(
            Type::from(map).fully_qualified_name(),
            "java.util.Map<java.lang.String, com.acme.Widget>"
        );
        assert_eq!(Type::class("", "Loose").fully_qualified_name(), "Loose");
    }

    #[test]
    fn test_generic_rendering() {
        let t = GenericType::new("T").extends(Type::class("java.lang", "Number"));
        assert_eq!(t.declaration(), "T extends Number");
        assert_eq!(t.simple_name(), "T");

        let wildcard = GenericType::wildcard().super_(Type::class("java.lang", "Integer"));
        assert_eq!(wildcard.simple_name(), "? super Integer");
        assert_eq!(GenericType::wildcard().simple_name(), "?");

        let list = ClassType::new("java.util", "List")
            .with_arguments(vec![GenericType::wildcard().extends(Type::string()).into()]);
        assert_eq!(list.simple_name(), "List<? extends String>");
    }

    #[test]
    fn test_register_import() {
        let mut imports = ImportSet::new();
        let ty = Type::array(
            ClassType::new("java.util", "List")
                .with_arguments(vec![Type::class("java.time", "Instant")]),
        );
        ty.register_import(&mut imports);
        Type::int().register_import(&mut imports);
        Type::generic("T").register_import(&mut imports);
        assert_eq!(
            imports.iter().collect::<Vec<_>>(),
            vec!["java.time.Instant", "java.util.List"]
        );
    }

    #[test]
    fn test_primitive_assignability() {
        for p in Primitive::ALL {
            for q in Primitive::ALL {
                assert_eq!(Type::from(p).is_assignable_from(&Type::from(q)), p == q);
            }
        }
        assert!(!Type::int().is_assignable_from(&Type::class("java.lang", "Integer")));
    }

    #[test]
    fn test_void_is_never_assignable() {
        assert!(!Type::void().is_assignable_from(&Type::void()));
        assert!(!Type::string().is_assignable_from(&Type::void()));
    }

    #[test]
    fn test_class_assignability_ignores_arguments() {
        let raw = Type::class("java.util", "List");
        let of_string = Type::from(
            ClassType::new("java.util", "List").with_arguments(vec![Type::string()]),
        );
        assert!(raw.is_assignable_from(&of_string));
        assert!(of_string.is_assignable_from(&raw));
        assert!(!raw.is_assignable_from(&Type::class("java.awt", "List")));
    }

    #[test]
    fn test_array_assignability() {
        let strings = Type::array(Type::string());
        assert!(strings.is_assignable_from(&Type::array(Type::string())));
        assert!(!strings.is_assignable_from(&Type::array(Type::int())));
        assert!(!strings.is_assignable_from(&Type::string()));
    }

    #[test]
    fn test_generic_bounds_participate() {
        let number = Type::class("java.lang", "Number");
        let t: Type = GenericType::new("T").extends(number.clone()).into();
        assert!(number.is_assignable_from(&t));
        assert!(t.is_assignable_from(&number));
        assert!(!t.is_assignable_from(&Type::string()));
        assert!(Type::generic("U").is_assignable_from(&Type::string()));
        assert!(!Type::generic("U").is_assignable_from(&Type::int()));
    }

    #[test]
    fn test_object_accepts_references() {
        let object = Type::class("java.lang", "Object");
        assert!(object.is_assignable_from(&Type::string()));
        assert!(object.is_assignable_from(&Type::array(Type::int())));
        assert!(object.is_assignable_from(&Type::generic("T")));
        assert!(!object.is_assignable_from(&Type::int()));
    }

    #[test]
    fn test_accepts_boxing() {
        let integer = Type::from(ClassType::boxed(Primitive::Int));
        assert!(integer.accepts(&Type::int()));
        assert!(Type::int().accepts(&integer));
        assert!(!integer.accepts(&Type::long()));
    }

    #[test]
    fn test_as_value_matching_kinds() {
        let integer = Type::class("java.lang", "Integer");
        assert_eq!(integer.as_value(123).unwrap().to_string(), "123");
        assert_eq!(Type::string().as_value("abc").unwrap().to_string(), "\"abc\"");
        assert_eq!(Type::long().as_value(5i64).unwrap().to_string(), "5L");
    }

    #[test]
    fn test_as_value_rejects_mismatch() {
        let integer = Type::class("java.lang", "Integer");
        let err = integer.as_value("abc").unwrap_err();
        assert!(err.is_conversion());
        assert!(Type::int().as_value(5i64).unwrap_err().is_conversion());
        assert!(Type::void().as_value(true).unwrap_err().is_conversion());
        assert!(Type::generic("T").as_value(1).unwrap_err().is_conversion());

        let character = Type::from(ClassType::boxed(Primitive::Char));
        assert!(character.as_value('\u{1F600}').unwrap_err().is_conversion());
        assert!(Type::char().as_value('\u{1F600}').unwrap_err().is_conversion());
        assert_eq!(character.as_value('z').unwrap().to_string(), "'z'");
    }

    #[test]
    fn test_as_value_arrays() {
        let ints = Type::array(Type::int());
        let value = ints
            .as_value(Constant::Array(vec![Constant::Int(1), Constant::Int(2)]))
            .unwrap();
        assert_eq!(value.to_string(), "{1, 2}");

        let mixed = Constant::Array(vec![Constant::Int(1), Constant::from("x")]);
        assert!(ints.as_value(mixed).unwrap_err().is_conversion());
    }

    #[test]
    fn test_as_value_enum_constant() {
        let color = ClassType::new("com.acme", "Color");
        let value = Type::from(color.clone())
            .as_value(Constant::enum_constant(color, "RED"))
            .unwrap();
        assert_eq!(value.to_string(), "Color.RED");

        let other = Constant::enum_constant(ClassType::new("com.acme", "Shape"), "SQUARE");
        assert!(Type::class("com.acme", "Color").as_value(other).is_err());
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(Primitive::from_keyword("int"), Some(Primitive::Int));
        assert_eq!(Primitive::from_keyword("Integer"), None);
    }
}
