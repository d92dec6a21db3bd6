//! Rendering options, loadable from TOML.

use std::str::FromStr;

use kiln_codegen::Indent;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Annotation, ClassType, Error, Result, Value, names};

/// Options that shape rendered output without touching the model.
///
/// ```toml
/// indent = { spaces = 2 }
///
/// [generated]
/// annotation = "javax.annotation.processing.Generated"
/// value = "my-tool"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub indent: Indent,
    pub generated: GeneratedMarker,
}

impl RenderOptions {
    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(content).map_err(|source| Box::new(Error::Config { source }))?;
        options.generated.validate()?;
        Ok(options)
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Turn the generation marker off.
    pub fn without_marker(mut self) -> Self {
        self.generated.enabled = false;
        self
    }
}

impl FromStr for RenderOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

/// The annotation stamped on every rendered declaration to mark it as
/// generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedMarker {
    pub enabled: bool,
    /// Fully-qualified name of the annotation type.
    pub annotation: String,
    /// Rendered as the annotation's `value` attribute; omitted when empty.
    pub value: String,
}

impl Default for GeneratedMarker {
    fn default() -> Self {
        Self {
            enabled: true,
            annotation: "javax.annotation.processing.Generated".to_string(),
            value: "kiln".to_string(),
        }
    }
}

impl GeneratedMarker {
    fn is_active(&self) -> bool {
        self.enabled && !self.annotation.is_empty()
    }

    fn package_and_name(&self) -> (&str, &str) {
        self.annotation
            .rsplit_once('.')
            .unwrap_or(("", self.annotation.as_str()))
    }

    /// Check that the annotation name is a valid fully-qualified type name.
    pub fn validate(&self) -> Result<()> {
        if !self.is_active() {
            return Ok(());
        }
        let (package, name) = self.package_and_name();
        let reason = names::validate_type_name(name).or_else(|| names::validate_package(package));
        match reason {
            Some(reason) => Err(Error::invalid_option(
                "generated.annotation",
                format!("'{}': {reason}", self.annotation),
            )),
            None => Ok(()),
        }
    }

    /// The marker as an annotation, or `None` when disabled or when the
    /// annotation name does not validate.
    pub fn to_annotation(&self) -> Option<Annotation> {
        if !self.is_active() {
            return None;
        }
        if let Err(err) = self.validate() {
            warn!(%err, "skipping generated marker");
            return None;
        }
        let (package, name) = self.package_and_name();
        let annotation = Annotation::new(ClassType::new(package, name));
        if self.value.is_empty() {
            Some(annotation)
        } else {
            Some(annotation.attribute("value", Value::string(self.value.as_str())))
        }
    }
}
