//! Enum constants.

use crate::{ImportSet, Value};

/// A named member of an enum, with the arguments passed to its constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    name: String,
    arguments: Vec<Value>,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Append a constructor argument.
    pub fn argument(mut self, value: Value) -> Self {
        self.arguments.push(value);
        self
    }

    /// Append several constructor arguments.
    pub fn arguments(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.arguments.extend(values);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.arguments
    }

    /// Render `NAME` or `NAME(arg, ...)`.
    pub fn generate(&self, imports: &mut ImportSet) -> String {
        if self.arguments.is_empty() {
            return self.name.clone();
        }
        let args: Vec<_> = self.arguments.iter().map(|v| v.generate(imports)).collect();
        format!("{}({})", self.name, args.join(", "))
    }
}
