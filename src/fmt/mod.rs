// src/fmt/mod.rs
//! C# source rendering for compilation units.
//!
//! Provides canonical formatting for parsed and generated units.

mod printer;

pub use printer::print_unit;

use crate::frontend::ast::CompilationUnit;
use pretty::Arena;

/// Maximum render width. Generated layout is hardline-driven, so this only
/// bounds incidental grouping.
const MAX_WIDTH: usize = 100;

/// Render a compilation unit to canonical C# source with a trailing newline.
pub fn render_unit(unit: &CompilationUnit) -> String {
    let arena = Arena::new();
    let doc = print_unit(&arena, unit);
    let mut rendered = String::new();
    doc.render_fmt(MAX_WIDTH, &mut rendered)
        .expect("render to string cannot fail");

    // Remove trailing whitespace from blank lines (artifact of nesting with hardlines)
    let mut output = rendered
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    if !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
