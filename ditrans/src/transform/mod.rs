//! Gloss transformation.
//!
//! - `rules`: ordered regex rewrite rules per gloss style
//! - `gloss`: apply the rules to a raw gloss string

pub mod gloss;
pub mod rules;

pub use gloss::{glossify, glossify_stages, Stage};
pub use rules::{rules_for, RewriteRule};
