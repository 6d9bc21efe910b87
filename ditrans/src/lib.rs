//! # Ditrans - examples from the ditransitives database
//!
//! Reads a semicolon-delimited table of ditransitive-construction examples
//! and prints them as plain glosses or as LaTeX interlinear markup.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV table  │────▶│   Parser    │────▶│  Selector   │────▶│  Renderer   │
//! │ (languages) │     │ (ordered)   │     │ (language)  │     │ plain/LaTeX │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                                    │
//!                                                             ┌──────▼──────┐
//!                                                             │  Glossify   │
//!                                                             │ (rewrites)  │
//!                                                             └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ditrans::{run, Config, GlossStyle};
//!
//! let config = Config::new("english")
//!     .with_numbers([0])
//!     .with_style(GlossStyle::SmallCaps);
//! run(&config, &mut std::io::stdout())?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error hierarchy
//! - [`models`] - Rows, example numbers, languages, styles
//! - [`parser`] - Table loading with encoding detection
//! - [`select`] - Language views and lookups by example number
//! - [`transform`] - Gloss rewrite rules
//! - [`render`] - Plain and LaTeX formatters
//! - [`config`] - Runtime configuration
//! - [`logs`] - Diagnostic logging to stderr
//! - [`pipeline`] - End-to-end driver

// Core modules
pub mod error;
pub mod models;

// Loading and selection
pub mod parser;
pub mod select;

// Formatting
pub mod render;
pub mod transform;

// Driver
pub mod config;
pub mod logs;
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{AppError, ConfigError, LoadError, LookupError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{capitalize, ExampleRow, GlossStyle, Language, RowId};

// =============================================================================
// Re-exports - Loading and selection
// =============================================================================

pub use parser::{load_table, parse_table, DEFAULT_DATA_FILE, DEFAULT_DELIMITER};
pub use select::{by_language, LanguageView};

// =============================================================================
// Re-exports - Formatting
// =============================================================================

pub use render::{format_latex, format_plain, render_latex, render_plain, LatexOutput};
pub use transform::{glossify, glossify_stages, RewriteRule, Stage};

// =============================================================================
// Re-exports - Driver
// =============================================================================

pub use config::{Config, OutputMode};
pub use pipeline::{run, RunReport};
