//! Declaration elements: the named, annotated building blocks of a
//! compilation unit.
//!
//! - [`Element`] - name, visibility, modifiers, annotations, generics
//! - [`Field`], [`Parameter`], [`Method`] - members
//! - [`EnumEntry`] - enum constants
//! - [`Declaration`] - a top-level class, interface, enum or annotation

mod declaration;
mod entry;
mod field;
mod method;
mod parameter;

pub use declaration::{Declaration, DeclarationKind};
pub use entry::EnumEntry;
pub use field::{Field, Initializer};
pub use method::{Method, MethodKind};
pub use parameter::Parameter;

use crate::{Annotation, ClassType, Error, GenericType, ImportSet, Result, names, types::Bound};

/// Access level of a declaration or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Public,
    Protected,
    /// No modifier.
    #[default]
    PackagePrivate,
    Private,
}

impl Visibility {
    /// The modifier keyword, empty for package-private.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::PackagePrivate => "",
            Self::Private => "private",
        }
    }

    /// The keyword followed by a space, or nothing for package-private.
    pub(crate) fn prefix(&self) -> String {
        match self {
            Self::PackagePrivate => String::new(),
            other => format!("{} ", other.keyword()),
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// The state shared by every named declaration element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) visibility: Visibility,
    pub(crate) is_static: bool,
    pub(crate) is_final: bool,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) generics: Vec<GenericType>,
}

impl Element {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn generics(&self) -> &[GenericType] {
        &self.generics
    }

    /// Whether an annotation of type `ty` is applied.
    pub fn has_annotation(&self, ty: &ClassType) -> bool {
        self.annotations.iter().any(|a| a.is(ty))
    }

    /// The applied annotation of type `ty`, if any.
    pub fn annotation(&self, ty: &ClassType) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.is(ty))
    }

    /// Check the name and the declared type parameters.
    pub(crate) fn check(&self, owner: &str, what: &str) -> Result<()> {
        if let Some(reason) = names::validate_identifier(&self.name) {
            return Err(Error::definition(
                owner,
                format!("{what} '{}': {reason}", self.name),
            ));
        }
        for generic in &self.generics {
            if generic.is_wildcard() || matches!(generic.bound(), Bound::Super(_)) {
                return Err(Error::definition(
                    owner,
                    format!(
                        "{what} '{}': type parameter '{}' cannot be a wildcard or lower-bounded",
                        self.name,
                        generic.declaration()
                    ),
                ));
            }
            if let Some(reason) = names::validate_identifier(generic.name()) {
                return Err(Error::definition(
                    owner,
                    format!("{what} '{}': type parameter: {reason}", self.name),
                ));
            }
        }
        Ok(())
    }

    /// One rendered line per applied annotation.
    pub(crate) fn annotation_lines(&self, imports: &mut ImportSet) -> Vec<String> {
        self.annotations.iter().map(|a| a.generate(imports)).collect()
    }

    /// `<T, U extends Bound>` or the empty string.
    pub(crate) fn type_parameters(&self, imports: &mut ImportSet) -> String {
        if self.generics.is_empty() {
            return String::new();
        }
        let params: Vec<_> = self
            .generics
            .iter()
            .map(|g| {
                g.register_import(imports);
                g.declaration()
            })
            .collect();
        format!("<{}>", params.join(", "))
    }
}

/// Uniform read access to the [`Element`] behind a model object.
pub trait VisibleElement {
    fn element(&self) -> &Element;

    fn name(&self) -> &str {
        self.element().name()
    }

    fn visibility(&self) -> Visibility {
        self.element().visibility()
    }

    fn is_static(&self) -> bool {
        self.element().is_static()
    }

    fn is_final(&self) -> bool {
        self.element().is_final()
    }

    fn annotations(&self) -> &[Annotation] {
        self.element().annotations()
    }

    fn generics(&self) -> &[GenericType] {
        self.element().generics()
    }

    fn has_annotation(&self, ty: &ClassType) -> bool {
        self.element().has_annotation(ty)
    }
}
