//! Runtime configuration.
//!
//! Command-line flags and environment variables are resolved once into a
//! [`Config`], which is then handed to [`crate::run`].

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};
use crate::logs::{LogFormat, Verbosity};
use crate::models::{GlossStyle, Language, RowId};
use crate::parser::{DEFAULT_DATA_FILE, DEFAULT_DELIMITER};

/// Overrides the data file when `--data` is not given.
pub const DATA_ENV: &str = "DITRANS_DATA";

/// Overrides the delimiter when `--delimiter` is not given.
pub const DELIMITER_ENV: &str = "DITRANS_DELIMITER";

/// What the driver prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Every example of the language, plain text
    Plain,
    /// Requested examples, LaTeX
    Latex,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
    pub numbers: Vec<RowId>,
    pub style: GlossStyle,
    pub data_path: PathBuf,
    pub delimiter: u8,
    /// Log each rewrite rule's output for the requested glosses
    pub explain: bool,
    pub verbosity: Verbosity,
    pub log_format: LogFormat,
}

impl Config {
    /// Configuration with defaults for everything but the language.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Language::new(language),
            numbers: Vec::new(),
            style: GlossStyle::default(),
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            delimiter: DEFAULT_DELIMITER,
            explain: false,
            verbosity: Verbosity::Normal,
            log_format: LogFormat::Text,
        }
    }

    pub fn with_numbers(mut self, numbers: impl IntoIterator<Item = usize>) -> Self {
        self.numbers = numbers.into_iter().map(RowId).collect();
        self
    }

    pub fn with_style(mut self, style: GlossStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_logging(mut self, verbosity: Verbosity, format: LogFormat) -> Self {
        self.verbosity = verbosity;
        self.log_format = format;
        self
    }

    /// Enabling explain raises verbosity to debug unless logging is silenced.
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        if explain && self.verbosity != Verbosity::Quiet {
            self.verbosity = Verbosity::Debug;
        }
        self
    }

    pub fn mode(&self) -> OutputMode {
        if self.numbers.is_empty() {
            OutputMode::Plain
        } else {
            OutputMode::Latex
        }
    }
}

/// Parse a delimiter: a single ASCII character, or `\t` / `tab`.
pub fn parse_delimiter(s: &str) -> ConfigResult<u8> {
    match s {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(ConfigError::InvalidDelimiter(s.to_string())),
    }
}

pub fn parse_log_format(s: &str) -> ConfigResult<LogFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
    }
}

/// Data file from the flag, then `DITRANS_DATA`, then `languages.csv`.
pub fn resolve_data_path(flag: Option<PathBuf>) -> PathBuf {
    pick_data_path(flag, env::var(DATA_ENV).ok())
}

/// Delimiter from the flag, then `DITRANS_DELIMITER`, then `;`.
pub fn resolve_delimiter(flag: Option<&str>) -> ConfigResult<u8> {
    pick_delimiter(flag, env::var(DELIMITER_ENV).ok())
}

fn pick_data_path(flag: Option<PathBuf>, from_env: Option<String>) -> PathBuf {
    flag.or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

fn pick_delimiter(flag: Option<&str>, from_env: Option<String>) -> ConfigResult<u8> {
    match flag {
        Some(f) => parse_delimiter(f),
        None => match from_env.filter(|v| !v.is_empty()) {
            Some(v) => parse_delimiter(&v),
            None => Ok(DEFAULT_DELIMITER),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("english");
        assert_eq!(config.language.key(), "English");
        assert_eq!(config.mode(), OutputMode::Plain);
        assert_eq!(config.style, GlossStyle::Expex);
        assert_eq!(config.data_path, PathBuf::from("languages.csv"));
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn test_numbers_switch_to_latex() {
        let config = Config::new("english").with_numbers([3, 0]);
        assert_eq!(config.numbers, vec![RowId(3), RowId(0)]);
        assert_eq!(config.mode(), OutputMode::Latex);
    }

    #[test]
    fn test_explain_raises_verbosity() {
        let config = Config::new("x").with_explain(true);
        assert_eq!(config.verbosity, Verbosity::Debug);

        let config = Config::new("x")
            .with_logging(Verbosity::Quiet, LogFormat::Text)
            .with_explain(true);
        assert_eq!(config.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("§").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("text").unwrap(), LogFormat::Text);
        assert!(parse_log_format("xml").is_err());
    }

    #[test]
    fn test_data_path_precedence() {
        assert_eq!(
            pick_data_path(Some("a.csv".into()), Some("b.csv".into())),
            PathBuf::from("a.csv")
        );
        assert_eq!(pick_data_path(None, Some("b.csv".into())), PathBuf::from("b.csv"));
        assert_eq!(pick_data_path(None, Some(String::new())), PathBuf::from("languages.csv"));
        assert_eq!(pick_data_path(None, None), PathBuf::from("languages.csv"));
    }

    #[test]
    fn test_delimiter_precedence() {
        assert_eq!(pick_delimiter(Some(","), Some("|".into())).unwrap(), b',');
        assert_eq!(pick_delimiter(None, Some("|".into())).unwrap(), b'|');
        assert_eq!(pick_delimiter(None, None).unwrap(), b';');
        assert!(pick_delimiter(None, Some("ab".into())).is_err());
    }
}
