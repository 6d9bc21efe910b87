//! Examples table loader with encoding detection.
//!
//! Reads the delimited data file into an ordered `Vec<ExampleRow>`.
//! Row order is significant: a row's index is its example number.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::ExampleRow;

/// Default column delimiter of the data file.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "languages.csv";

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as-is; anything else is handed to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let text = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).into_owned(),
        // windows-1252 agrees with latin-1 on every printable byte
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        // Fallback: lossy UTF-8
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Parse table content with an explicit delimiter.
///
/// # Example
/// ```ignore
/// let csv = "Language;Type;Source;Page;Citekey;Original;Gloss;Translation\n\
///            English;Double-object;(Smith 2000);12;smith2000;a;b;c";
/// let rows = parse_table(csv, b';')?;
/// assert_eq!(rows[0].language, "English");
/// ```
pub fn parse_table(content: &str, delimiter: u8) -> LoadResult<Vec<ExampleRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    for column in ExampleRow::COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<ExampleRow>() {
        rows.push(result.map_err(malformed_row)?);
    }

    Ok(rows)
}

/// Load the examples table from a file.
pub fn load_table<P: AsRef<Path>>(path: P, delimiter: u8) -> LoadResult<Vec<ExampleRow>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding);

    parse_table(&content, delimiter)
}

fn malformed_row(err: csv::Error) -> LoadError {
    let line = match err.position() {
        Some(pos) => pos.line(),
        None => return LoadError::Csv(err),
    };

    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("found {} fields, expected {}", len, expected_len)
        }
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    };

    LoadError::MalformedRow { line, message }
}
