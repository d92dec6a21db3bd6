//! Indentation configuration for code generation.

use serde::{Deserialize, Serialize};

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (capped at 16).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the common Java style.
    pub const JAVA: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
