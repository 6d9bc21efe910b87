//! LaTeX interlinear example blocks.

use super::BLOCK_SEPARATOR;
use crate::error::LookupError;
use crate::models::{ExampleRow, GlossStyle, Language, RowId};
use crate::select::LanguageView;
use crate::transform::glossify;

/// Rendered LaTeX plus the numbers that could not be resolved.
#[derive(Debug, Default)]
pub struct LatexOutput {
    /// Blocks for every resolved number, separated by a blank line
    pub text: String,
    /// One entry per unresolved number, in request order
    pub failures: Vec<LookupError>,
}

/// Format a single example as an expex block.
///
/// The label uses the language name as typed; the preamble uses the
/// capitalized form.
pub fn format_latex(
    number: RowId,
    language: &Language,
    row: &ExampleRow,
    style: GlossStyle,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("\\ex\\label{{ex:{}-{}}}\n", language.raw(), number));
    out.push_str("    \\begingl\n");
    out.push_str(&format!(
        "        \\glpreamble {}, {}, \\parencite[{}]{{{}}}//\n",
        language.key(),
        row.kind,
        row.page,
        row.citekey
    ));
    out.push_str(&format!("        \\gla {}//\n", row.original));
    out.push_str(&format!("        \\glb {}//\n", glossify(&row.gloss, style)));
    out.push_str(&format!("        \\glft `{}'//\n", row.translation));
    out.push_str("    \\endgl\n");
    out.push_str("\\xe");
    out
}

/// Format the requested examples in request order.
pub fn render_latex(view: &LanguageView<'_>, numbers: &[RowId], style: GlossStyle) -> LatexOutput {
    let mut blocks = Vec::new();
    let mut failures = Vec::new();

    for result in view.by_numbers(numbers) {
        match result {
            Ok((number, row)) => blocks.push(format_latex(number, view.language(), row, style)),
            Err(err) => failures.push(err),
        }
    }

    LatexOutput {
        text: blocks.join(BLOCK_SEPARATOR),
        failures,
    }
}
