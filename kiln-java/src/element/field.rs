//! Fields.

use kiln_codegen::CodeFragment;

use super::{Element, VisibleElement};
use crate::{Error, ImportSet, Result, Type, Value};

/// How a field is initialized. A field carries at most one initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    /// A typed literal.
    Value(Value),
    /// A raw Java expression, emitted verbatim.
    Expression(String),
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) element: Element,
    pub(crate) ty: Type,
    pub(crate) initializer: Option<Initializer>,
}

impl Field {
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn initializer(&self) -> Option<&Initializer> {
        self.initializer.as_ref()
    }

    /// The literal initializer, if the field has one.
    pub fn value(&self) -> Option<&Value> {
        match &self.initializer {
            Some(Initializer::Value(v)) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn check(&self, owner: &str) -> Result<()> {
        self.element.check(owner, "field")?;
        if self.ty.is_void() {
            return Err(Error::definition(
                owner,
                format!("field '{}' cannot be of type void", self.element.name),
            ));
        }
        match &self.initializer {
            Some(Initializer::Value(value)) if !self.ty.accepts(value.ty()) => {
                Err(Error::definition(
                    owner,
                    format!(
                        "field '{}' of type {} cannot be initialized with a value of type {}",
                        self.element.name,
                        self.ty,
                        value.ty()
                    ),
                ))
            }
            Some(Initializer::Expression(expr)) if expr.trim().is_empty() => Err(Error::definition(
                owner,
                format!("field '{}' has an empty initializer expression", self.element.name),
            )),
            _ => Ok(()),
        }
    }

    /// Render annotations and the declaration line.
    pub(crate) fn to_fragment(&self, imports: &mut ImportSet) -> CodeFragment {
        let mut lines: Vec<_> = self
            .element
            .annotation_lines(imports)
            .into_iter()
            .map(CodeFragment::Line)
            .collect();

        let mut line = self.element.visibility.prefix();
        if self.element.is_static {
            line.push_str("static ");
        }
        if self.element.is_final {
            line.push_str("final ");
        }
        line.push_str(&self.ty.generate(imports));
        line.push(' ');
        line.push_str(&self.element.name);
        match &self.initializer {
            Some(Initializer::Value(value)) => {
                line.push_str(" = ");
                line.push_str(&value.generate(imports));
            }
            Some(Initializer::Expression(expr)) => {
                line.push_str(" = ");
                line.push_str(expr.trim());
            }
            None => {}
        }
        line.push(';');

        lines.push(CodeFragment::Line(line));
        CodeFragment::Sequence(lines)
    }
}

impl VisibleElement for Field {
    fn element(&self) -> &Element {
        &self.element
    }
}
