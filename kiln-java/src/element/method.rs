//! Methods, constructors and annotation attributes.

use kiln_codegen::CodeFragment;

use super::{Element, Parameter, Visibility, VisibleElement};
use crate::{Error, ImportSet, Result, Type, Value};

/// The kind of a method-like element. Each kind has its own validation
/// rules and signature shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// A method of a concrete class or enum.
    Concrete,
    /// A method of an abstract class; may omit its body.
    Abstract,
    /// A method of an interface.
    Interface,
    /// An attribute of an annotation type.
    AnnotationAttribute,
    Constructor,
    /// A detached signature carrier that is never emitted.
    Descriptor,
}

impl MethodKind {
    /// Visibility a new method of this kind starts with.
    pub fn default_visibility(&self) -> Visibility {
        match self {
            Self::Interface | Self::AnnotationAttribute => Visibility::Public,
            _ => Visibility::PackagePrivate,
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Concrete | Self::Abstract | Self::Interface => "method",
            Self::AnnotationAttribute => "annotation attribute",
            Self::Constructor => "constructor",
            Self::Descriptor => "method descriptor",
        }
    }
}

/// A method-like member.
///
/// The body distinguishes three states: `None` is a bare signature,
/// `Some(vec![])` is an empty implementation, and anything else is an
/// implementation with lines of code.
///
/// Equality compares the return type, name and parameter types; bodies and
/// parameter names are ignored.
#[derive(Debug, Clone)]
pub struct Method {
    pub(crate) element: Element,
    pub(crate) kind: MethodKind,
    pub(crate) return_type: Type,
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) body: Option<Vec<String>>,
    pub(crate) default_value: Option<Value>,
}

impl Method {
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn body(&self) -> Option<&[String]> {
        self.body.as_deref()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Whether this is a bare signature that renders as abstract.
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, MethodKind::Concrete | MethodKind::Abstract) && self.body.is_none()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Whether both parameter lists have the same types in the same order.
    pub fn same_parameter_types(&self, other: &Method) -> bool {
        self.parameters
            .iter()
            .map(Parameter::ty)
            .eq(other.parameters.iter().map(Parameter::ty))
    }

    /// Same name and parameter types. Two such methods cannot coexist in
    /// one declaration, whatever they return.
    pub fn same_signature(&self, other: &Method) -> bool {
        self.element.name == other.element.name && self.same_parameter_types(other)
    }

    /// The signature up to and including the parameter list, e.g.
    /// `public <T> T get(Class<T> type)`.
    ///
    /// Descriptors are never emitted, so asking for their signature is a
    /// contract violation.
    pub fn signature(&self, imports: &mut ImportSet) -> Result<String> {
        self.signature_text(imports).ok_or_else(|| {
            Error::contract(format!(
                "method descriptor '{}' has no renderable signature",
                self.element.name
            ))
        })
    }

    fn modifiers(&self) -> String {
        let element = &self.element;
        let mut out = element.visibility.prefix();
        match self.kind {
            MethodKind::Concrete | MethodKind::Abstract => {
                if self.body.is_none() {
                    out.push_str("abstract ");
                } else {
                    if element.is_static {
                        out.push_str("static ");
                    }
                    if element.is_final {
                        out.push_str("final ");
                    }
                }
            }
            MethodKind::Interface => {
                if element.is_static {
                    out.push_str("static ");
                } else if self.body.is_some() && element.visibility.is_public() {
                    out.push_str("default ");
                }
            }
            MethodKind::AnnotationAttribute => return String::new(),
            MethodKind::Constructor | MethodKind::Descriptor => {}
        }
        out
    }

    fn signature_text(&self, imports: &mut ImportSet) -> Option<String> {
        if self.kind == MethodKind::Descriptor {
            return None;
        }

        let mut out = self.modifiers();
        let type_params = self.element.type_parameters(imports);
        if !type_params.is_empty() {
            out.push_str(&type_params);
            out.push(' ');
        }
        if self.kind != MethodKind::Constructor {
            out.push_str(&self.return_type.generate(imports));
            out.push(' ');
        }
        out.push_str(&self.element.name);

        let params: Vec<_> = self
            .parameters
            .iter()
            .map(|p| p.generate(imports))
            .collect();
        out.push('(');
        out.push_str(&params.join(", "));
        out.push(')');

        if let Some(value) = &self.default_value {
            out.push_str(" default ");
            out.push_str(&value.generate(imports));
        }
        Some(out)
    }

    /// Render annotations, signature and body. Returns `None` for
    /// descriptors.
    pub(crate) fn to_fragment(&self, imports: &mut ImportSet) -> Option<CodeFragment> {
        let mut fragments: Vec<_> = self
            .element
            .annotation_lines(imports)
            .into_iter()
            .map(CodeFragment::Line)
            .collect();

        let signature = self.signature_text(imports)?;
        match &self.body {
            None => fragments.push(CodeFragment::Line(format!("{signature};"))),
            Some(lines) => fragments.push(CodeFragment::block(
                format!("{signature} {{"),
                lines.iter().flat_map(|l| CodeFragment::lines(l)).collect(),
                Some("}".to_string()),
            )),
        }
        Some(CodeFragment::Sequence(fragments))
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.return_type == other.return_type
            && self.same_signature(other)
    }
}

impl VisibleElement for Method {
    fn element(&self) -> &Element {
        &self.element
    }
}
