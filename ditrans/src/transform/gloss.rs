//! Gloss rewriting
//!
//! Runs a style's rules over a raw gloss string, in order.

use super::rules::rules_for;
use crate::models::GlossStyle;

/// Output of one rule while rewriting a gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub rule: &'static str,
    pub output: String,
}

/// Rewrite a raw gloss into LaTeX markup for `style`.
///
/// Never fails; a gloss with no recognized tags comes back unchanged.
pub fn glossify(gloss: &str, style: GlossStyle) -> String {
    rules_for(style)
        .iter()
        .fold(gloss.to_string(), |acc, rule| rule.apply(&acc))
}

/// Like [`glossify`], but keeps the string produced by each rule.
pub fn glossify_stages(gloss: &str, style: GlossStyle) -> Vec<Stage> {
    let mut current = gloss.to_string();
    let mut stages = Vec::new();

    for rule in rules_for(style) {
        current = rule.apply(&current);
        stages.push(Stage {
            rule: rule.name,
            output: current.clone(),
        });
    }

    stages
}
