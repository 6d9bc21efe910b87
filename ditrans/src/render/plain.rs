//! Plain-text example blocks.

use super::BLOCK_SEPARATOR;
use crate::models::{ExampleRow, Language, RowId};
use crate::select::LanguageView;

/// Format a single example.
///
/// ```text
/// Example (0), English, Double-object (Smith 2000)
/// She gave him the book
/// 3SG.give-PST 3SG.M DET book
/// She gave him the book
/// ```
pub fn format_plain(number: RowId, language: &Language, row: &ExampleRow) -> String {
    format!(
        "Example ({}), {}, {} ({})\n{}\n{}\n{}",
        number,
        language.key(),
        row.kind,
        row.bare_source(),
        row.original,
        row.gloss,
        row.translation
    )
}

/// Format every row of the view, separated by a blank line.
///
/// An empty view gives an empty string.
pub fn render_plain(view: &LanguageView<'_>) -> String {
    view.iter()
        .map(|(number, row)| format_plain(number, view.language(), row))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
