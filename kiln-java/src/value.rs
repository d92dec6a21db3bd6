//! Typed literal values.
//!
//! A [`Value`] pairs a [`Type`] with the datum it was built from and
//! renders the Java literal for it. The pairing is checked when the value
//! is constructed, so rendering never fails.

use std::fmt;

use crate::{ClassType, Error, ImportSet, Result, Type};

/// A constant supplied by the host, before it is bound to a type.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// A class literal such as `String.class`.
    Class(Type),
    /// A reference to an enum member.
    Enum { ty: ClassType, name: String },
    Array(Vec<Constant>),
}

impl Constant {
    /// A reference to the enum member `name` of `ty`.
    pub fn enum_constant(ty: ClassType, name: impl Into<String>) -> Self {
        Self::Enum {
            ty,
            name: name.into(),
        }
    }

    /// Human-readable name of the constant's runtime kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Byte(_) => "byte",
            Self::Char(_) => "char",
            Self::Short(_) => "short",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Class(_) => "class literal",
            Self::Enum { .. } => "enum constant",
            Self::Array(_) => "array",
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::String(s) => format!("string {s:?}"),
            Self::Class(ty) => format!("class literal {ty}"),
            Self::Enum { ty, name } => format!("enum constant {}.{name}", ty.fully_qualified_name()),
            Self::Array(items) => format!("array of {} element(s)", items.len()),
            Self::Boolean(v) => format!("boolean {v}"),
            Self::Byte(v) => format!("byte {v}"),
            Self::Char(v) => format!("char {v:?}"),
            Self::Short(v) => format!("short {v}"),
            Self::Int(v) => format!("int {v}"),
            Self::Long(v) => format!("long {v}"),
            Self::Float(v) => format!("float {v}"),
            Self::Double(v) => format!("double {v}"),
        }
    }
}

macro_rules! constant_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Constant {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

constant_from! {
    bool => Boolean,
    i8 => Byte,
    char => Char,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
}

impl From<&str> for Constant {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// The datum carried by a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Class(Type),
    Enum { ty: ClassType, name: String },
    Array(Vec<Value>),
}

/// A literal bound to the type that accepts it.
///
/// # Example
///
/// ```
/// use kiln_java::{Type, Value};
///
/// let flag = Value::boolean(false);
/// assert_eq!(flag.to_string(), "false");
///
/// let names = Value::array(Type::string(), vec![Value::string("a"), Value::string("b")]).unwrap();
/// assert_eq!(names.to_string(), r#"{"a", "b"}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    ty: Type,
    literal: Literal,
}

impl Value {
    pub fn boolean(v: bool) -> Self {
        Self::from_constant(Type::boolean(), Constant::Boolean(v))
    }

    pub fn byte(v: i8) -> Self {
        Self::from_constant(Type::byte(), Constant::Byte(v))
    }

    /// A `char` literal. Fails for characters that need a surrogate pair.
    pub fn char(v: char) -> Result<Self> {
        Type::char().as_value(v)
    }

    pub fn short(v: i16) -> Self {
        Self::from_constant(Type::short(), Constant::Short(v))
    }

    pub fn int(v: i32) -> Self {
        Self::from_constant(Type::int(), Constant::Int(v))
    }

    pub fn long(v: i64) -> Self {
        Self::from_constant(Type::long(), Constant::Long(v))
    }

    pub fn float(v: f32) -> Self {
        Self::from_constant(Type::float(), Constant::Float(v))
    }

    pub fn double(v: f64) -> Self {
        Self::from_constant(Type::double(), Constant::Double(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::from_constant(Type::string(), Constant::String(v.into()))
    }

    /// A class literal. Generic placeholders have no class literal.
    pub fn class_literal(ty: impl Into<Type>) -> Result<Self> {
        let ty = ty.into();
        if matches!(ty, Type::Generic(_)) {
            return Err(Error::conversion(
                "java.lang.Class",
                format!("class literal {ty}"),
            ));
        }
        Ok(Self::from_constant(
            Type::Class(ClassType::lang("Class")),
            Constant::Class(ty),
        ))
    }

    /// A reference to the enum member `name` of `ty`.
    pub fn enum_constant(ty: ClassType, name: impl Into<String>) -> Self {
        let ty = ty.raw();
        Self::from_constant(Type::Class(ty.clone()), Constant::enum_constant(ty, name))
    }

    /// An array of values, each of which must be assignable to `element`.
    pub fn array(element: impl Into<Type>, values: Vec<Value>) -> Result<Self> {
        let element = element.into();
        if let Some(bad) = values.iter().find(|v| !element.accepts(&v.ty)) {
            return Err(Error::conversion(
                Type::array(element).fully_qualified_name(),
                format!("element of type {}", bad.ty),
            ));
        }
        Ok(Self {
            ty: Type::array(element),
            literal: Literal::Array(values),
        })
    }

    /// Bind a constant to a type that has already been checked to accept it.
    pub(crate) fn from_constant(ty: Type, datum: Constant) -> Self {
        let literal = match datum {
            Constant::Boolean(v) => Literal::Boolean(v),
            Constant::Byte(v) => Literal::Byte(v),
            Constant::Char(v) => Literal::Char(v),
            Constant::Short(v) => Literal::Short(v),
            Constant::Int(v) => Literal::Int(v),
            Constant::Long(v) => Literal::Long(v),
            Constant::Float(v) => Literal::Float(v),
            Constant::Double(v) => Literal::Double(v),
            Constant::String(v) => Literal::String(v),
            Constant::Class(v) => Literal::Class(v),
            Constant::Enum { ty, name } => Literal::Enum { ty, name },
            Constant::Array(items) => {
                let element = match &ty {
                    Type::Array(contained) => contained.as_ref().clone(),
                    other => other.clone(),
                };
                Literal::Array(
                    items
                        .into_iter()
                        .map(|item| Self::from_constant(element.clone(), item))
                        .collect(),
                )
            }
        };
        Self { ty, literal }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// Render the literal, registering any classes it references.
    pub fn generate(&self, imports: &mut ImportSet) -> String {
        match &self.literal {
            Literal::Boolean(v) => v.to_string(),
            Literal::Byte(v) => format!("(byte) {v}"),
            Literal::Char(v) => format!("'{}'", escape(&v.to_string(), '\'')),
            Literal::Short(v) => format!("(short) {v}"),
            Literal::Int(v) => v.to_string(),
            Literal::Long(v) => format!("{v}L"),
            Literal::Float(v) => float_literal(f64::from(*v), v.to_string(), "Float", "f"),
            Literal::Double(v) => float_literal(*v, v.to_string(), "Double", ""),
            Literal::String(v) => format!("\"{}\"", escape(v, '"')),
            Literal::Class(ty) => {
                ty.register_import(imports);
                format!("{}.class", ty.erased_name())
            }
            Literal::Enum { ty, name } => {
                ty.register_import(imports);
                format!("{}.{name}", ty.name())
            }
            Literal::Array(values) => {
                let items: Vec<_> = values.iter().map(|v| v.generate(imports)).collect();
                format!("{{{}}}", items.join(", "))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate(&mut ImportSet::new()))
    }
}

fn float_literal(v: f64, text: String, class: &str, suffix: &str) -> String {
    if v.is_nan() {
        format!("{class}.NaN")
    } else if v.is_infinite() {
        let sign = if v > 0.0 { "POSITIVE" } else { "NEGATIVE" };
        format!("{class}.{sign}_INFINITY")
    } else if text.contains('.') {
        format!("{text}{suffix}")
    } else {
        format!("{text}.0{suffix}")
    }
}

/// Escape text for a Java string or char literal delimited by `quote`.
fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}
