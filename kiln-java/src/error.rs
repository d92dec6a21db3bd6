use miette::Diagnostic;
use thiserror::Error;

/// Result type for kiln operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A structural rule of the declaration grammar was violated at build time.
    #[error("invalid definition of '{name}': {reason}")]
    #[diagnostic(code(kiln::definition))]
    Definition { name: String, reason: String },

    /// A builder entry point was used where the declaration kind forbids it.
    #[error("illegal builder call: {message}")]
    #[diagnostic(code(kiln::contract))]
    Contract { message: String },

    /// A constant could not be represented by the requested type.
    #[error("cannot convert {datum} to a value of type '{ty}'")]
    #[diagnostic(
        code(kiln::conversion),
        help("use a constant whose kind matches the target type")
    )]
    Conversion { ty: String, datum: String },

    #[error("failed to parse render options")]
    #[diagnostic(code(kiln::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },

    /// Render options parsed but hold a value that cannot be rendered.
    #[error("invalid render option '{key}': {reason}")]
    #[diagnostic(code(kiln::option))]
    InvalidOption { key: String, reason: String },
}

impl Error {
    /// Create a definition error for the named element.
    pub fn definition(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        let name = name.into();
        let reason = reason.into();
        tracing::trace!(%name, %reason, "definition rejected");
        Box::new(Error::Definition { name, reason })
    }

    /// Create a contract violation error.
    pub fn contract(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Contract {
            message: message.into(),
        })
    }

    /// Create a conversion error.
    pub fn conversion(ty: impl Into<String>, datum: impl Into<String>) -> Box<Self> {
        Box::new(Error::Conversion {
            ty: ty.into(),
            datum: datum.into(),
        })
    }

    /// Create an invalid render option error.
    pub fn invalid_option(key: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidOption {
            key: key.into(),
            reason: reason.into(),
        })
    }

    /// Whether this is a definition error.
    pub fn is_definition(&self) -> bool {
        matches!(self, Self::Definition { .. })
    }

    /// Whether this is a contract violation.
    pub fn is_contract(&self) -> bool {
        matches!(self, Self::Contract { .. })
    }

    /// Whether this is a conversion error.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_message_names_declaration() {
        let err = Error::definition("com.acme.Foo", "private classes are not allowed");
        assert_eq!(
            err.to_string(),
            "invalid definition of 'com.acme.Foo': private classes are not allowed"
        );
        assert!(err.is_definition());
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = Error::conversion("java.lang.Integer", "string \"abc\"");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("kiln::conversion"));
        assert!(err.is_conversion());
    }
}
