//! Rendering of declarations to Java source.
//!
//! The body is rendered first so that every element can register the
//! classes it references. The header (package statement and sorted imports)
//! is written afterwards from the collected set.

mod options;

pub use options::{GeneratedMarker, RenderOptions};

use kiln_codegen::{CodeBuilder, CodeFragment};
use tracing::debug;

use crate::{ClassType, Declaration, DeclarationKind, ImportSet};

/// Renders declarations with a fixed set of options.
///
/// Rendering reads the declaration only. Each call starts from a fresh
/// buffer and a fresh [`ImportSet`], so one emitter can be shared between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    options: RenderOptions,
}

impl Emitter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a complete compilation unit.
    pub fn generate(&self, decl: &Declaration) -> String {
        let mut imports = ImportSet::new();
        let body = self.body(decl, &mut imports);

        let package = decl.package();
        let import_lines = imports.lines(package);
        let mut out = CodeBuilder::new(self.options.indent)
            .when(!package.is_empty(), |b| {
                b.line(&format!("package {package};")).blank()
            })
            .each(&import_lines, |b, line| b.line(line))
            .when(!import_lines.is_empty(), CodeBuilder::blank);
        out.push_raw(&body);

        debug!(
            name = %decl.fully_qualified_name(),
            imports = import_lines.len(),
            "rendered declaration"
        );
        out.build()
    }

    fn body(&self, decl: &Declaration, imports: &mut ImportSet) -> String {
        let mut out = CodeBuilder::new(self.options.indent);

        if let Some(marker) = self.options.generated.to_annotation() {
            out.push_line(&marker.generate(imports));
        }
        for line in decl.element.annotation_lines(imports) {
            out.push_line(&line);
        }
        out.push_line(&signature(decl, imports));
        out.push_indent();

        if decl.kind == DeclarationKind::Enum {
            out.emit(entries(decl, imports));
        }
        for field in &decl.fields {
            out.emit([field.to_fragment(imports).then_blank()]);
        }
        let methods = decl.constructors.iter().chain(&decl.methods);
        out.emit(methods.filter_map(|m| m.to_fragment(imports)).map(CodeFragment::then_blank));

        out.push_dedent();
        out.push_line("}");
        out.build()
    }
}

/// `public final class Foo<T> extends Base implements Api {`
fn signature(decl: &Declaration, imports: &mut ImportSet) -> String {
    let element = &decl.element;
    let mut out = element.visibility.prefix();
    match decl.kind {
        DeclarationKind::AbstractClass => out.push_str("abstract "),
        DeclarationKind::Class if element.is_final => out.push_str("final "),
        _ => {}
    }
    out.push_str(decl.kind.keyword());
    out.push(' ');
    out.push_str(decl.ty.name());
    out.push_str(&element.type_parameters(imports));

    if let Some(parent) = &decl.parent {
        out.push_str(" extends ");
        out.push_str(&class_name(parent, imports));
    }
    if !decl.interfaces.is_empty() {
        let names: Vec<_> = decl
            .interfaces
            .iter()
            .map(|i| class_name(i, imports))
            .collect();
        out.push_str(if decl.kind.is_interface() {
            " extends "
        } else {
            " implements "
        });
        out.push_str(&names.join(", "));
    }
    out.push_str(" {");
    out
}

fn class_name(ty: &ClassType, imports: &mut ImportSet) -> String {
    ty.register_import(imports);
    ty.simple_name()
}

/// Enum entries, comma separated. The list is closed with `;` when members
/// follow it.
fn entries(decl: &Declaration, imports: &mut ImportSet) -> Vec<CodeFragment> {
    let has_members =
        !(decl.fields.is_empty() && decl.constructors.is_empty() && decl.methods.is_empty());
    let mut lines = Vec::new();

    if decl.entries.is_empty() {
        if has_members {
            lines.push(CodeFragment::line(";"));
            lines.push(CodeFragment::blank());
        }
        return lines;
    }

    let last = decl.entries.len() - 1;
    for (i, entry) in decl.entries.iter().enumerate() {
        let text = entry.generate(imports);
        let terminator = match (i == last, has_members) {
            (false, _) => ",",
            (true, true) => ";",
            (true, false) => "",
        };
        lines.push(CodeFragment::line(format!("{text}{terminator}")));
    }
    lines.push(CodeFragment::blank());
    lines
}
