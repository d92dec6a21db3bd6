//! Indented line buffer.

use super::{CodeFragment, Indent};

/// Line-oriented text buffer that tracks an indentation depth.
///
/// The `push_*` methods take `&mut self` for incremental rendering; `line`,
/// `blank`, `when` and `each` take `self` so short runs of output can be
/// written as a chain.
///
/// ```
/// use kiln_codegen::CodeBuilder;
///
/// let mut out = CodeBuilder::java();
/// out.push_line("void run() {")
///     .push_indent()
///     .push_line("go();")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(out.build(), "void run() {\n    go();\n}\n");
///
/// let header = CodeBuilder::java()
///     .line("package a;")
///     .blank()
///     .each(["b.C", "d.E"], |out, fqn| out.line(&format!("import {fqn};")))
///     .build();
/// assert_eq!(header, "package a;\n\nimport b.C;\nimport d.E;\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder using [`Indent::JAVA`].
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Write `s` at the current depth and end the line. Empty lines carry
    /// no indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(self.indent.as_str());
            }
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Write each line of `s` at the current depth.
    pub fn push_lines(&mut self, s: &str) -> &mut Self {
        s.lines().for_each(|line| {
            self.push_line(line);
        });
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append `s` verbatim.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Emit fragments in order.
    pub fn emit(&mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> &mut Self {
        fragments.into_iter().for_each(|f| self.apply_fragment(f));
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent().emit(body).push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Sequence(fragments) => {
                self.emit(fragments);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Apply `f` only when `condition` holds.
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }

    /// Fold every item into the builder with `f`.
    pub fn each<T>(self, items: impl IntoIterator<Item = T>, f: impl Fn(Self, T) -> Self) -> Self {
        items.into_iter().fold(self, f)
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut out = CodeBuilder::java();
        out.push_line("class Main {")
            .push_indent()
            .push_line("void run() {")
            .push_indent()
            .push_line("go();")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            out.build(),
            "class Main {\n    void run() {\n        go();\n    }\n}\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_indentation() {
        let mut out = CodeBuilder::java();
        out.push_indent().push_line("a();").push_line("").push_line("b();");
        assert_eq!(out.as_str(), "    a();\n\n    b();\n");
        assert_eq!(out.depth(), 1);
    }

    #[test]
    fn test_dedent_saturates() {
        let mut out = CodeBuilder::java();
        out.push_dedent().push_line("x");
        assert_eq!(out.depth(), 0);
        assert_eq!(out.build(), "x\n");
    }

    #[test]
    fn test_push_lines_splits_input() {
        let mut out = CodeBuilder::new(Indent::Tab);
        out.push_indent().push_lines("a();\nb();");
        assert_eq!(out.build(), "\ta();\n\tb();\n");
    }

    #[test]
    fn test_when_and_each() {
        let render = |package: &str, imports: &[&str]| {
            CodeBuilder::java()
                .when(!package.is_empty(), |b| {
                    b.line(&format!("package {package};")).blank()
                })
                .each(imports, |b, fqn| b.line(&format!("import {fqn};")))
                .build()
        };
        assert_eq!(render("", &[]), "");
        assert_eq!(render("a", &["b.C"]), "package a;\n\nimport b.C;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        let mut out = CodeBuilder::new(Indent::COMPACT);
        out.emit([CodeFragment::block(
            "enum Color {",
            vec![CodeFragment::line("RED,"), CodeFragment::line("GREEN;")],
            Some("}".to_string()),
        )]);
        assert_eq!(out.build(), "enum Color {\n  RED,\n  GREEN;\n}\n");
    }

    #[test]
    fn test_emit_nested_sequence() {
        let mut out = CodeBuilder::java();
        out.emit([CodeFragment::block(
            "class A {",
            vec![CodeFragment::line("int a;").then_blank()],
            Some("}".to_string()),
        )]);
        assert_eq!(out.build(), "class A {\n    int a;\n\n}\n");
    }

    #[test]
    fn test_block_without_close() {
        let mut out = CodeBuilder::java();
        out.emit([CodeFragment::block("label:", CodeFragment::lines("x();"), None)]);
        assert_eq!(out.build(), "label:\n    x();\n");
    }
}
