use tracing::debug;

use super::{DeclarationBuilder, Detached};
use crate::{ClassType, Element, Method, MethodKind, Parameter, Result, Type, Value, rules};

/// Builds a [`Method`] of any non-constructor kind.
///
/// The body starts unset. [`MethodBuilder::empty_implementation`] records an
/// empty body and [`MethodBuilder::add_code`] appends lines to it, so a method
/// whose builder never touched the body is a bare signature.
#[derive(Debug, Clone)]
pub struct MethodBuilder<P = Detached> {
    parent: P,
    owner: String,
    element: Element,
    kind: MethodKind,
    return_type: Type,
    parameters: Vec<Parameter>,
    body: Option<Vec<String>>,
    default_value: Option<Value>,
}

impl MethodBuilder<Detached> {
    /// Start a detached method of the declaration `owner`.
    pub fn new(owner: &ClassType, kind: MethodKind, name: impl Into<String>) -> Self {
        Self::attached(Detached, owner, kind, name)
    }

    /// Start a detached signature carrier. Descriptors are never rendered.
    pub fn descriptor(owner: &ClassType, name: impl Into<String>) -> Self {
        Self::new(owner, MethodKind::Descriptor, name)
    }

    /// Validate and produce the method.
    pub fn build(self) -> Result<Method> {
        self.assemble().map(|(_, method)| method)
    }
}

impl MethodBuilder<DeclarationBuilder> {
    /// Validate the method, attach it and return the declaration builder.
    pub fn finish(self) -> Result<DeclarationBuilder> {
        let (parent, method) = self.assemble()?;
        Ok(parent.add_method(method))
    }
}

impl<P> MethodBuilder<P> {
    pub(crate) fn attached(
        parent: P,
        owner: &ClassType,
        kind: MethodKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            parent,
            owner: owner.fully_qualified_name(),
            element: Element {
                visibility: kind.default_visibility(),
                ..Element::new(name)
            },
            kind,
            return_type: Type::void(),
            parameters: Vec::new(),
            body: None,
            default_value: None,
        }
    }

    element_modifiers!();

    pub fn returns(mut self, ty: impl Into<Type>) -> Self {
        self.return_type = ty.into();
        self
    }

    /// Append a parameter of the given name and type.
    pub fn param(self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.parameter(Parameter::new(name, ty))
    }

    /// Append a fully configured parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Give the method an empty body.
    pub fn empty_implementation(mut self) -> Self {
        self.body.get_or_insert_with(Vec::new);
        self
    }

    /// Append a line (or several, separated by `\n`) to the body.
    pub fn add_code(mut self, code: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(code.into());
        self
    }

    /// Replace the body with the given lines.
    pub fn code(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Default value of an annotation attribute.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    fn assemble(self) -> Result<(P, Method)> {
        let method = Method {
            element: self.element,
            kind: self.kind,
            return_type: self.return_type,
            parameters: self.parameters,
            body: self.body,
            default_value: self.default_value,
        };
        rules::check_method(&self.owner, &method)?;
        debug!(
            owner = %self.owner,
            method = %method.element.name,
            kind = ?method.kind,
            "built method"
        );
        Ok((self.parent, method))
    }
}

/// Builds a constructor. Its name is always the owning declaration's simple
/// name, and it must be given a body before it validates.
#[derive(Debug, Clone)]
pub struct ConstructorBuilder<P = Detached> {
    parent: P,
    owner: String,
    element: Element,
    parameters: Vec<Parameter>,
    body: Option<Vec<String>>,
}

impl ConstructorBuilder<Detached> {
    /// Start a detached constructor of `owner`.
    pub fn new(owner: &ClassType) -> Self {
        Self::attached(Detached, owner)
    }

    /// Validate and produce the constructor.
    pub fn build(self) -> Result<Method> {
        self.assemble().map(|(_, ctor)| ctor)
    }
}

impl ConstructorBuilder<DeclarationBuilder> {
    /// Validate the constructor, attach it and return the declaration builder.
    pub fn finish(self) -> Result<DeclarationBuilder> {
        let (parent, ctor) = self.assemble()?;
        Ok(parent.add_constructor(ctor))
    }
}

impl<P> ConstructorBuilder<P> {
    pub(crate) fn attached(parent: P, owner: &ClassType) -> Self {
        Self {
            parent,
            owner: owner.fully_qualified_name(),
            element: Element::new(owner.name()),
            parameters: Vec::new(),
            body: None,
        }
    }

    element_modifiers!();

    pub fn param(self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.parameter(Parameter::new(name, ty))
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn empty_implementation(mut self) -> Self {
        self.body.get_or_insert_with(Vec::new);
        self
    }

    pub fn add_code(mut self, code: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(code.into());
        self
    }

    pub fn code(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    fn assemble(self) -> Result<(P, Method)> {
        let ctor = Method {
            element: self.element,
            kind: MethodKind::Constructor,
            return_type: Type::void(),
            parameters: self.parameters,
            body: self.body,
            default_value: None,
        };
        rules::check_method(&self.owner, &ctor)?;
        debug!(
            owner = %self.owner,
            parameters = ctor.parameters.len(),
            "built constructor"
        );
        Ok((self.parent, ctor))
    }
}
