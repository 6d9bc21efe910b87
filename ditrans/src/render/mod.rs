//! Example renderers.
//!
//! - `plain`: human-readable blocks with the raw gloss
//! - `latex`: expex `\ex ... \xe` blocks with a rewritten gloss

pub mod latex;
pub mod plain;

pub use latex::{format_latex, render_latex, LatexOutput};
pub use plain::{format_plain, render_plain};

/// Separator between consecutive example blocks.
pub(crate) const BLOCK_SEPARATOR: &str = "\n\n";
