//! Validated Java declaration model with fluent builders and a
//! deterministic source emitter.
//!
//! Declarations are assembled with [`DeclarationBuilder`], validated once at
//! `build()`, and rendered any number of times with
//! [`Declaration::generate_code`]. A declaration that builds successfully
//! always renders.
//!
//! ```
//! use kiln_java::{DeclarationBuilder, Type, Value};
//!
//! let foo = DeclarationBuilder::class("pkg", "Foo")
//!     .public()
//!     .field("flag", Type::boolean())
//!     .public()
//!     .static_()
//!     .final_()
//!     .value(Value::boolean(false))
//!     .finish()?
//!     .method("run")
//!     .public()
//!     .empty_implementation()
//!     .finish()?
//!     .build()?;
//!
//! assert!(foo.generate_code().contains("public class Foo {"));
//! # Ok::<(), Box<kiln_java::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`Type`], [`Value`], [`Annotation`] - the type and literal system
//! - [`Declaration`] and its members - the immutable element model
//! - [`DeclarationBuilder`] and member builders - construction and validation
//! - [`Emitter`] and [`RenderOptions`] - source rendering

mod annotation;
mod builder;
mod element;
mod emit;
mod error;
mod imports;
pub mod names;
mod rules;
mod types;
mod value;

pub use annotation::Annotation;
pub use builder::{ConstructorBuilder, DeclarationBuilder, Detached, FieldBuilder, MethodBuilder};
pub use element::{
    Declaration, DeclarationKind, Element, EnumEntry, Field, Initializer, Method, MethodKind,
    Parameter, Visibility, VisibleElement,
};
pub use emit::{Emitter, GeneratedMarker, RenderOptions};
pub use error::{Error, Result};
pub use imports::{IMPLICIT_PACKAGE, ImportSet};
pub use types::{Bound, ClassType, GenericType, Primitive, Type};
pub use value::{Constant, Literal, Value};
