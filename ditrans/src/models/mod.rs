//! Domain models for the examples table.
//!
//! - [`ExampleRow`] - One example as stored in the table
//! - [`RowId`] - Example number (position in the full table)
//! - [`Language`] - Requested language name and its lookup key
//! - [`GlossStyle`] - Target LaTeX gloss dialect

use serde::Deserialize;
use std::fmt;

// =============================================================================
// Example Row
// =============================================================================

/// One row of the examples table.
///
/// Every field is kept verbatim; column names match the file header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleRow {
    #[serde(rename = "Language")]
    pub language: String,
    /// Construction type label (`Type` column).
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Page")]
    pub page: String,
    #[serde(rename = "Citekey")]
    pub citekey: String,
    #[serde(rename = "Original")]
    pub original: String,
    #[serde(rename = "Gloss")]
    pub gloss: String,
    #[serde(rename = "Translation")]
    pub translation: String,
}

impl ExampleRow {
    /// Column names, in file order.
    pub const COLUMNS: [&'static str; 8] = [
        "Language",
        "Type",
        "Source",
        "Page",
        "Citekey",
        "Original",
        "Gloss",
        "Translation",
    ];

    /// Source note without parentheses, as shown in plain output.
    pub fn bare_source(&self) -> String {
        self.source.replace(['(', ')'], "")
    }
}

// =============================================================================
// Example Number
// =============================================================================

/// Example number: 0-based position of a row in the full loaded table.
///
/// Not the position inside a language view. Example 5 stays example 5
/// whichever language filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RowId {
    fn from(n: usize) -> Self {
        RowId(n)
    }
}

// =============================================================================
// Language
// =============================================================================

/// A requested language: the name as typed and its capitalized lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    raw: String,
    key: String,
}

impl Language {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = capitalize(&raw);
        Self { raw, key }
    }

    /// Name exactly as given on the command line (used in LaTeX labels).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Capitalized name matched against the `Language` column.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// =============================================================================
// Gloss Style
// =============================================================================

/// LaTeX dialect used for gloss tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlossStyle {
    /// Macro per tag (`\Pst{}`, `\Tsg{}`).
    #[default]
    Expex,
    /// `\textsc{...}` around lower-cased tags.
    SmallCaps,
}

impl GlossStyle {
    /// Interpret the `--style` flag: only `smallcaps` selects small caps.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("smallcaps") => GlossStyle::SmallCaps,
            _ => GlossStyle::Expex,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GlossStyle::Expex => "expex",
            GlossStyle::SmallCaps => "smallcaps",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("english"), "English");
        assert_eq!(capitalize("ENGLISH"), "English");
        assert_eq!(capitalize("mandarin chinese"), "Mandarin chinese");
        assert_eq!(capitalize("ǃxóõ"), "ǃxóõ");
        assert_eq!(capitalize("éwé"), "Éwé");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_language_keeps_raw_name() {
        let lang = Language::new("gERman");
        assert_eq!(lang.raw(), "gERman");
        assert_eq!(lang.key(), "German");
    }

    #[test]
    fn test_style_from_flag() {
        assert_eq!(GlossStyle::from_flag(Some("smallcaps")), GlossStyle::SmallCaps);
        assert_eq!(GlossStyle::from_flag(Some("expex")), GlossStyle::Expex);
        assert_eq!(GlossStyle::from_flag(Some("leipzig")), GlossStyle::Expex);
        assert_eq!(GlossStyle::from_flag(None), GlossStyle::Expex);
    }

    #[test]
    fn test_bare_source() {
        let row = ExampleRow {
            language: "English".into(),
            kind: "Double-object".into(),
            source: "(Smith 2000)".into(),
            page: "12".into(),
            citekey: "smith2000".into(),
            original: String::new(),
            gloss: String::new(),
            translation: String::new(),
        };
        assert_eq!(row.bare_source(), "Smith 2000");
    }
}
