use tracing::debug;

use super::{DeclarationBuilder, Detached};
use crate::{ClassType, Element, Field, Initializer, Result, Type, Value};

/// Builds a [`Field`].
///
/// A field holds at most one initializer: calling [`FieldBuilder::value`]
/// or [`FieldBuilder::initializer`] replaces whatever was set before.
#[derive(Debug, Clone)]
pub struct FieldBuilder<P = Detached> {
    parent: P,
    owner: String,
    element: Element,
    ty: Type,
    initializer: Option<Initializer>,
}

impl FieldBuilder<Detached> {
    /// Start a detached field of the declaration `owner`.
    pub fn new(owner: &ClassType, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::attached(Detached, owner, name, ty)
    }

    /// Validate and produce the field.
    pub fn build(self) -> Result<Field> {
        self.assemble().map(|(_, field)| field)
    }
}

impl FieldBuilder<DeclarationBuilder> {
    /// Validate the field, attach it and return the declaration builder.
    pub fn finish(self) -> Result<DeclarationBuilder> {
        let (parent, field) = self.assemble()?;
        Ok(parent.add_field(field))
    }
}

impl<P> FieldBuilder<P> {
    pub(crate) fn attached(
        parent: P,
        owner: &ClassType,
        name: impl Into<String>,
        ty: impl Into<Type>,
    ) -> Self {
        Self {
            parent,
            owner: owner.fully_qualified_name(),
            element: Element::new(name),
            ty: ty.into(),
            initializer: None,
        }
    }

    element_modifiers!();

    /// Initialize with a typed literal.
    pub fn value(mut self, value: Value) -> Self {
        self.initializer = Some(Initializer::Value(value));
        self
    }

    /// Initialize with a raw Java expression.
    pub fn initializer(mut self, expression: impl Into<String>) -> Self {
        self.initializer = Some(Initializer::Expression(expression.into()));
        self
    }

    fn assemble(self) -> Result<(P, Field)> {
        let field = Field {
            element: self.element,
            ty: self.ty,
            initializer: self.initializer,
        };
        field.check(&self.owner)?;
        debug!(owner = %self.owner, field = %field.element.name, "built field");
        Ok((self.parent, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VisibleElement;

    fn owner() -> ClassType {
        ClassType::new("a", "Config")
    }

    #[test]
    fn test_last_initializer_wins() {
        let field = FieldBuilder::new(&owner(), "port", Type::int())
            .value(Value::int(80))
            .initializer("Integer.getInteger(\"port\", 80)")
            .build()
            .unwrap();
        assert_eq!(
            field.initializer(),
            Some(&Initializer::Expression("Integer.getInteger(\"port\", 80)".into()))
        );
        assert!(field.value().is_none());

        let field = FieldBuilder::new(&owner(), "port", Type::int())
            .initializer("compute()")
            .value(Value::int(80))
            .build()
            .unwrap();
        assert_eq!(field.value(), Some(&Value::int(80)));
    }

    #[test]
    fn test_modifiers() {
        let field = FieldBuilder::new(&owner(), "NAME", Type::string())
            .public()
            .static_()
            .final_()
            .build()
            .unwrap();
        assert!(field.is_static());
        assert!(field.is_final());
        assert!(field.visibility().is_public());
    }

    #[test]
    fn test_mismatched_value_names_owner() {
        let err = FieldBuilder::new(&owner(), "port", Type::int())
            .value(Value::string("80"))
            .build()
            .unwrap_err();
        assert!(err.is_definition());
        assert!(err.to_string().contains("'a.Config'"));
    }

    #[test]
    fn test_invalid_name() {
        let err = FieldBuilder::new(&owner(), "2fast", Type::int())
            .build()
            .unwrap_err();
        assert!(err.is_definition());
    }
}
