//! Row selection by language and by example number.
//!
//! A [`LanguageView`] keeps each row's [`RowId`] from the full table, so
//! lookups by number never depend on how many other languages precede it.

use crate::error::{LookupError, LookupResult};
use crate::models::{ExampleRow, Language, RowId};

/// Column reported when a requested example cannot be resolved.
const LOOKUP_FIELD: &str = "Original";

/// Rows of a single language, in table order, with their example numbers.
#[derive(Debug, Clone)]
pub struct LanguageView<'a> {
    language: &'a Language,
    rows: Vec<(RowId, &'a ExampleRow)>,
}

/// Select the rows whose `Language` equals the capitalized requested name.
pub fn by_language<'a>(table: &'a [ExampleRow], language: &'a Language) -> LanguageView<'a> {
    let rows = table
        .iter()
        .enumerate()
        .filter(|(_, row)| row.language == language.key())
        .map(|(idx, row)| (RowId(idx), row))
        .collect();

    LanguageView { language, rows }
}

impl<'a> LanguageView<'a> {
    pub fn language(&self) -> &'a Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows with their example numbers, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &'a ExampleRow)> + '_ {
        self.rows.iter().copied()
    }

    /// Example numbers present in this view.
    pub fn numbers(&self) -> Vec<RowId> {
        self.rows.iter().map(|(id, _)| *id).collect()
    }

    /// Look up a row by its example number.
    pub fn get(&self, number: RowId) -> LookupResult<&'a ExampleRow> {
        // rows are sorted by RowId
        self.rows
            .binary_search_by_key(&number, |(id, _)| *id)
            .map(|pos| self.rows[pos].1)
            .map_err(|_| self.unknown(number))
    }

    /// Report whether `number` resolves, without returning the row.
    pub fn check_number(&self, number: RowId) -> LookupResult<()> {
        self.get(number).map(|_| ())
    }

    /// Resolve each requested number, in request order.
    ///
    /// Failures are returned alongside successes; none aborts the others.
    pub fn by_numbers(&self, numbers: &[RowId]) -> Vec<LookupResult<(RowId, &'a ExampleRow)>> {
        numbers
            .iter()
            .map(|&n| self.get(n).map(|row| (n, row)))
            .collect()
    }

    fn unknown(&self, number: RowId) -> LookupError {
        LookupError::UnknownExample {
            number,
            language: self.language.key().to_string(),
            field: LOOKUP_FIELD,
        }
    }
}
