//! Method and constructor parameters.

use crate::{Annotation, Error, GenericType, ImportSet, Result, Type, names};

/// A parameter of a method or constructor.
///
/// Annotations render inline, ahead of the type.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    ty: Type,
    is_final: bool,
    annotations: Vec<Annotation>,
    generics: Vec<GenericType>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_final: false,
            annotations: Vec::new(),
            generics: Vec::new(),
        }
    }

    /// Apply an annotation.
    pub fn annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Mark the parameter `final`.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Record a type variable this parameter's type depends on.
    /// Recorded variables are not rendered; their bounds contribute imports.
    pub fn generic(mut self, generic: GenericType) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
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

    pub(crate) fn check(&self, owner: &str, method: &str) -> Result<()> {
        if let Some(reason) = names::validate_identifier(&self.name) {
            return Err(Error::definition(
                owner,
                format!("parameter '{}' of '{method}': {reason}", self.name),
            ));
        }
        if self.ty.is_void() {
            return Err(Error::definition(
                owner,
                format!("parameter '{}' of '{method}' cannot be of type void", self.name),
            ));
        }
        Ok(())
    }

    /// Render `@A final Type name`.
    pub fn generate(&self, imports: &mut ImportSet) -> String {
        let mut out = String::new();
        for annotation in &self.annotations {
            out.push_str(&annotation.generate(imports));
            out.push(' ');
        }
        if self.is_final {
            out.push_str("final ");
        }
        for generic in &self.generics {
            generic.register_import(imports);
        }
        out.push_str(&self.ty.generate(imports));
        out.push(' ');
        out.push_str(&self.name);
        out
    }
}
