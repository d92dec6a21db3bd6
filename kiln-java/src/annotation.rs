//! Annotation instances applied to declarations and their members.

use indexmap::IndexMap;

use crate::{ClassType, ImportSet, Value};

/// An applied annotation: a type plus ordered attribute bindings.
///
/// Meta-annotations (the annotations present on the annotation type's own
/// declaration) can be attached for consumers that need to ask questions
/// such as "is this a qualifier?". They are never rendered.
///
/// # Example
///
/// ```
/// use kiln_java::{Annotation, ClassType, ImportSet, Value};
///
/// let named = Annotation::new(ClassType::new("javax.inject", "Named"))
///     .attribute("value", Value::string("primary"));
///
/// let mut imports = ImportSet::new();
/// assert_eq!(named.generate(&mut imports), r#"@Named("primary")"#);
/// assert!(imports.contains("javax.inject.Named"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    ty: ClassType,
    attributes: IndexMap<String, Value>,
    meta: Vec<Annotation>,
}

impl Annotation {
    /// Create an annotation with no attributes.
    pub fn new(ty: ClassType) -> Self {
        Self {
            ty: ty.raw(),
            attributes: IndexMap::new(),
            meta: Vec::new(),
        }
    }

    /// Bind an attribute. Binding the same name again replaces the value
    /// but keeps its original position.
    pub fn attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Attach a meta-annotation.
    pub fn meta(mut self, annotation: Annotation) -> Self {
        self.meta.push(annotation);
        self
    }

    pub fn ty(&self) -> &ClassType {
        &self.ty
    }

    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn meta_annotations(&self) -> &[Annotation] {
        &self.meta
    }

    /// Whether this annotation's type is `ty`.
    pub fn is(&self, ty: &ClassType) -> bool {
        self.ty.same_class(ty)
    }

    /// Whether a meta-annotation of type `ty` is present, searching nested
    /// meta-annotations as well.
    pub fn has_meta_annotation(&self, ty: &ClassType) -> bool {
        self.meta
            .iter()
            .any(|m| m.is(ty) || m.has_meta_annotation(ty))
    }

    /// Render the annotation, registering its type and every class its
    /// values reference.
    pub fn generate(&self, imports: &mut ImportSet) -> String {
        self.ty.register_import(imports);
        let name = self.ty.name();

        if self.attributes.is_empty() {
            return format!("@{name}");
        }
        if let (1, Some(value)) = (self.attributes.len(), self.attributes.get("value")) {
            return format!("@{name}({})", value.generate(imports));
        }
        let rendered: Vec<_> = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{key} = {}", value.generate(imports)))
            .collect();
        format!("@{name}({})", rendered.join(", "))
    }
}

impl From<ClassType> for Annotation {
    fn from(ty: ClassType) -> Self {
        Self::new(ty)
    }
}
