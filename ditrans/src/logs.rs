//! Diagnostic logging.
//!
//! A process-wide [`Logger`] writes entries to stderr so that stdout carries
//! only the formatted examples. Entries are shown as prefixed text lines or as
//! JSON objects, one per line.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Mutex;

/// Log level, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

/// How much gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    Normal,
    /// Adds info and success
    Verbose,
    /// Everything, including per-rule gloss stages
    Debug,
}

impl Verbosity {
    /// Map `-q` and the number of `-v` flags to a verbosity.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Verbose,
            (false, _) => Verbosity::Debug,
        }
    }

    fn threshold(self) -> u8 {
        match self {
            Verbosity::Debug => LogLevel::Debug as u8,
            Verbosity::Verbose => LogLevel::Info as u8,
            Verbosity::Normal => LogLevel::Warning as u8,
            Verbosity::Quiet => LogLevel::Error as u8,
        }
    }
}

/// Rendering of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level for text output
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Text form, as written to stderr.
    pub fn to_text(&self) -> String {
        let prefix = match self.level {
            LogLevel::Debug => "   ·",
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

enum Sink {
    Stderr,
    Memory(Vec<String>),
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Filters entries by level and writes them to its sink
pub struct Logger {
    threshold: AtomicU8,
    json: AtomicBool,
    sink: Mutex<Sink>,
}

impl Logger {
    /// Logger writing to stderr at [`Verbosity::Normal`].
    pub fn new() -> Self {
        Self {
            threshold: AtomicU8::new(Verbosity::Normal.threshold()),
            json: AtomicBool::new(false),
            sink: Mutex::new(Sink::Stderr),
        }
    }

    /// Logger keeping rendered lines in memory.
    pub fn capture() -> Self {
        Self {
            sink: Mutex::new(Sink::Memory(Vec::new())),
            ..Self::new()
        }
    }

    pub fn configure(&self, verbosity: Verbosity, format: LogFormat) {
        self.threshold.store(verbosity.threshold(), Ordering::Relaxed);
        self.json.store(format == LogFormat::Json, Ordering::Relaxed);
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level as u8 >= self.threshold.load(Ordering::Relaxed)
    }

    /// Write an entry if its level passes the threshold
    pub fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }

        let line = if self.json.load(Ordering::Relaxed) {
            serde_json::to_string(&entry).unwrap_or_else(|_| entry.to_text())
        } else {
            entry.to_text()
        };

        let Ok(mut sink) = self.sink.lock() else { return };
        match &mut *sink {
            Sink::Stderr => {
                let _ = writeln!(std::io::stderr(), "{}", line);
            }
            Sink::Memory(lines) => lines.push(line),
        }
    }

    /// Lines captured by an in-memory logger.
    pub fn lines(&self) -> Vec<String> {
        match self.sink.lock().as_deref() {
            Ok(Sink::Memory(lines)) => lines.clone(),
            _ => Vec::new(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_debug(msg: impl Into<String>) {
    LOGGER.log(LogEntry::new(LogLevel::Debug, msg));
}

pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::new(LogLevel::Info, msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::new(LogLevel::Success, msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::new(LogLevel::Warning, msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.log(LogEntry::new(LogLevel::Error, msg));
}

pub fn log_debug_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::new(LogLevel::Debug, msg).with_indent(indent));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::new(LogLevel::Info, msg).with_indent(indent));
}

pub fn log_warning_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::new(LogLevel::Warning, msg).with_indent(indent));
}
