//! End-to-end driver: load, select, format, print.
//!
//! # Example
//!
//! ```rust,ignore
//! use ditrans::{run, Config};
//!
//! let config = Config::new("english").with_numbers([0, 2]);
//! let report = run(&config, &mut std::io::stdout())?;
//! for failure in &report.failures {
//!     eprintln!("{}", failure.user_message());
//! }
//! ```

use std::io::Write;

use crate::config::{Config, OutputMode};
use crate::error::{AppResult, LookupError};
use crate::models::RowId;
use crate::logs::{
    log_debug, log_debug_indent, log_info, log_info_indent, log_success, log_warning,
    log_warning_indent,
};
use crate::parser::load_table;
use crate::render::{render_latex, render_plain};
use crate::select::{by_language, LanguageView};
use crate::transform::glossify_stages;

/// What a run printed and what it could not resolve.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of example blocks written
    pub printed: usize,
    /// Requested numbers that did not resolve
    pub failures: Vec<LookupError>,
}

impl RunReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run one invocation and write the formatted examples to `out`.
///
/// Load errors abort before anything is written. Unresolved example numbers
/// are collected in the report while the rest are still printed.
pub fn run<W: Write>(config: &Config, out: &mut W) -> AppResult<RunReport> {
    log_info("📖 Reading examples");
    log_info_indent(config.data_path.display().to_string(), 1);
    let table = load_table(&config.data_path, config.delimiter)?;
    log_success(format!("Loaded {} rows", table.len()));

    let view = by_language(&table, &config.language);
    log_info(format!(
        "{} example(s) for {}",
        view.len(),
        config.language.key()
    ));

    let report = match config.mode() {
        OutputMode::Plain => {
            let text = render_plain(&view);
            if !text.is_empty() {
                writeln!(out, "{}", text)?;
            }
            RunReport {
                printed: view.len(),
                failures: Vec::new(),
            }
        }
        OutputMode::Latex => {
            let (found, mut failures) = check_numbers(&view, &config.numbers);
            if !failures.is_empty() {
                log_warning(format!("{} example number(s) not found", failures.len()));
                for failure in &failures {
                    log_warning_indent(failure.to_string(), 1);
                }
            }

            if config.explain {
                explain(&view, &found, config);
            }

            let output = render_latex(&view, &found, config.style);
            if !output.text.is_empty() {
                writeln!(out, "{}", output.text)?;
            }
            failures.extend(output.failures);
            RunReport {
                printed: config.numbers.len() - failures.len(),
                failures,
            }
        }
    };

    out.flush()?;
    Ok(report)
}

/// Split requested numbers into those present in the view and the failures.
fn check_numbers(view: &LanguageView<'_>, numbers: &[RowId]) -> (Vec<RowId>, Vec<LookupError>) {
    let mut found = Vec::new();
    let mut failures = Vec::new();

    for &number in numbers {
        match view.check_number(number) {
            Ok(()) => found.push(number),
            Err(err) => failures.push(err),
        }
    }

    (found, failures)
}

fn explain(view: &LanguageView<'_>, numbers: &[RowId], config: &Config) {
    for (number, row) in view.by_numbers(numbers).into_iter().flatten() {
        log_debug(format!(
            "Example {} gloss ({}): {}",
            number,
            config.style.as_str(),
            row.gloss
        ));
        for stage in glossify_stages(&row.gloss, config.style) {
            log_debug_indent(format!("{:<14} {}", stage.rule, stage.output), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Language;
    use std::path::PathBuf;

    const TABLE: &str = "Language;Type;Source;Page;Citekey;Original;Gloss;Translation
English;Double-object;(Smith 2000);12;smith2000;She gave him the book;3SG.give-PST 3SG.M DET book;She gave him the book
German;Dative;(Meyer 1999);4;meyer1999;Sie gab ihm das Buch;3SG.F give.PST 3SG.M.DAT DEF book;She gave him the book
English;Prepositional;(Smith 2000);13;smith2000;She gave the book to him;3SG.give-PST DET book to 3SG.M;She gave the book to him
";

    fn fixture() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.csv");
        std::fs::write(&path, TABLE).unwrap();
        (dir, path)
    }

    fn run_to_string(config: &Config) -> (String, RunReport) {
        let mut out = Vec::new();
        let report = run(config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn test_plain_run() {
        let (_dir, path) = fixture();
        let config = Config::new("english").with_data_path(&path);
        let (out, report) = run_to_string(&config);

        assert!(report.is_ok());
        assert_eq!(report.printed, 2);
        assert!(out.starts_with("Example (0), English, Double-object (Smith 2000)\n"));
        assert!(out.contains("\n\nExample (2), English, Prepositional (Smith 2000)\n"));
        assert!(out.ends_with("She gave the book to him\n"));
    }

    #[test]
    fn test_unmatched_language_prints_nothing() {
        let (_dir, path) = fixture();
        let config = Config::new("french").with_data_path(&path);
        let (out, report) = run_to_string(&config);

        assert_eq!(out, "");
        assert_eq!(report.printed, 0);
        assert!(report.is_ok());
    }

    #[test]
    fn test_latex_run_with_unknown_number() {
        let (_dir, path) = fixture();
        let config = Config::new("german")
            .with_data_path(&path)
            .with_numbers([1, 0]);
        let (out, report) = run_to_string(&config);

        assert_eq!(report.printed, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].number(), RowId(0));
        assert!(out.starts_with("\\ex\\label{ex:german-1}\n"));
        assert!(out.contains("\\glb \\Tsg{}.\\F{} give.\\Pst{} \\Tsg{}.\\M{}.\\Dat{} DEF book//"));
        assert!(out.ends_with("\\xe\n"));
    }

    #[test]
    fn test_check_numbers_keeps_request_order() {
        let (_dir, path) = fixture();
        let table = load_table(&path, b';').unwrap();
        let language = Language::new("english");
        let view = by_language(&table, &language);

        let (found, failures) = check_numbers(&view, &[RowId(2), RowId(1), RowId(0), RowId(7)]);
        assert_eq!(found, vec![RowId(2), RowId(0)]);
        let missing: Vec<RowId> = failures.iter().map(|f| f.number()).collect();
        assert_eq!(missing, vec![RowId(1), RowId(7)]);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new("english").with_data_path(dir.path().join("missing.csv"));
        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Load(_)));
        assert!(out.is_empty());
    }
}
