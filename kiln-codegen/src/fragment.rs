//! Intermediate representation for pieces of generated code.

/// A piece of generated code whose indentation is decided by the
/// [`CodeBuilder`](crate::CodeBuilder) it is emitted into.
///
/// Members render themselves to fragments; the enclosing declaration
/// decides nesting depth and spacing.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; a newline is appended on emission.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, the body one level deeper, then the optional `close` line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// One line fragment per `\n`-separated line of `text`, keeping empty
    /// lines.
    pub fn lines(text: &str) -> Vec<Self> {
        text.split('\n').map(Self::line).collect()
    }

    /// This fragment followed by a blank line.
    pub fn then_blank(self) -> Self {
        Self::Sequence(vec![self, Self::Blank])
    }
}
