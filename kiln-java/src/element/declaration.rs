//! Top-level declarations.

use super::{Element, EnumEntry, Field, Method, MethodKind, VisibleElement};
use crate::{ClassType, RenderOptions, Type, emit::Emitter};

/// The kind of a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    AbstractClass,
    Interface,
    Annotation,
    Enum,
}

impl DeclarationKind {
    /// The keyword that introduces the declaration.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class | Self::AbstractClass => "class",
            Self::Interface => "interface",
            Self::Annotation => "@interface",
            Self::Enum => "enum",
        }
    }

    /// The method kind created by this declaration's builder.
    pub fn method_kind(&self) -> MethodKind {
        match self {
            Self::Class | Self::Enum => MethodKind::Concrete,
            Self::AbstractClass => MethodKind::Abstract,
            Self::Interface => MethodKind::Interface,
            Self::Annotation => MethodKind::AnnotationAttribute,
        }
    }

    /// Whether the kind may hold `method` kinds.
    pub fn accepts_method(&self, kind: MethodKind) -> bool {
        match self {
            Self::Class | Self::Enum => kind == MethodKind::Concrete,
            Self::AbstractClass => matches!(kind, MethodKind::Concrete | MethodKind::Abstract),
            Self::Interface => kind == MethodKind::Interface,
            Self::Annotation => kind == MethodKind::AnnotationAttribute,
        }
    }

    /// Whether the kind may declare constructors.
    pub fn allows_constructors(&self) -> bool {
        matches!(self, Self::Class | Self::AbstractClass | Self::Enum)
    }

    /// Whether the kind is interface-like (interfaces and annotations).
    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Interface | Self::Annotation)
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::AbstractClass => "abstract class",
            Self::Interface => "interface",
            Self::Annotation => "annotation",
            Self::Enum => "enum",
        }
    }
}

/// A validated, immutable top-level declaration.
///
/// Built with [`crate::DeclarationBuilder`]; render it with
/// [`Declaration::generate_code`].
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub(crate) element: Element,
    pub(crate) kind: DeclarationKind,
    pub(crate) ty: ClassType,
    pub(crate) fields: Vec<Field>,
    pub(crate) methods: Vec<Method>,
    pub(crate) constructors: Vec<Method>,
    pub(crate) parent: Option<ClassType>,
    pub(crate) interfaces: Vec<ClassType>,
    pub(crate) entries: Vec<EnumEntry>,
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// The declared type, with its type parameters as generic arguments.
    pub fn type_(&self) -> ClassType {
        self.ty.clone().with_arguments(
            self.element
                .generics
                .iter()
                .map(|g| Type::generic(g.name()))
                .collect(),
        )
    }

    pub fn package(&self) -> &str {
        self.ty.package()
    }

    pub fn fully_qualified_name(&self) -> String {
        self.ty.fully_qualified_name()
    }

    /// Abstract classes, interfaces and annotations are abstract.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self.kind,
            DeclarationKind::AbstractClass | DeclarationKind::Interface | DeclarationKind::Annotation
        )
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn constructors(&self) -> &[Method] {
        &self.constructors
    }

    pub fn parent(&self) -> Option<&ClassType> {
        self.parent.as_ref()
    }

    /// Implemented interfaces, or extended interfaces for an interface.
    pub fn interfaces(&self) -> &[ClassType] {
        &self.interfaces
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Render the compilation unit with default options.
    pub fn generate_code(&self) -> String {
        Emitter::default().generate(self)
    }

    /// Render the compilation unit with the given options.
    pub fn generate_code_with(&self, options: &RenderOptions) -> String {
        Emitter::new(options.clone()).generate(self)
    }
}

impl VisibleElement for Declaration {
    fn element(&self) -> &Element {
        &self.element
    }
}
