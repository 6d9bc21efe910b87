//! Gloss rewrite rules.
//!
//! Each style is an ordered list of regex rewrites. Order matters: every rule
//! runs on the output of the one before it, so a later pattern may match text
//! an earlier replacement produced.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::{capitalize, GlossStyle};

/// A single regex rewrite.
pub struct RewriteRule {
    /// Short identifier shown in `--explain` output
    pub name: &'static str,
    pattern: Regex,
    rewrite: fn(&Captures) -> String,
}

impl RewriteRule {
    fn new(name: &'static str, pattern: &str, rewrite: fn(&Captures) -> String) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for rule '{}': {}", name, e)),
            rewrite,
        }
    }

    /// Replace every non-overlapping match in `input`.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, |caps: &Captures| (self.rewrite)(caps))
            .into_owned()
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// expex: one macro per tag, person/number portmanteaus get their own macros.
static EXPEX_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        // .give -> .\Give{}
        RewriteRule::new("boundary-tag", r"(\.|-|>)([A-Za-z]{1,5})", |c| {
            format!("{}\\{}{{}}", &c[1], capitalize(&c[2]))
        }),
        // NOM. at word start -> \Nom{}.
        RewriteRule::new("leading-tag", r"( |^)([A-Z]{1,5})(\.|-)", |c| {
            format!("{}\\{}{{}}{}", &c[1], capitalize(&c[2]), &c[3])
        }),
        RewriteRule::new("first-person", r"1(SG|PL|DU)", |c| {
            format!("\\F{}", c[1].to_lowercase())
        }),
        RewriteRule::new("second-person", r"2(SG|PL|DU)", |c| {
            format!("\\S{}", c[1].to_lowercase())
        }),
        RewriteRule::new("third-person", r"3(SG|PL|DU)", |c| {
            format!("\\T{}{{}}", c[1].to_lowercase())
        }),
        RewriteRule::new("bare-third", r"3(\.|-|>)", |c| format!("\\Third{}", &c[1])),
    ]
});

static SMALLCAPS_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![RewriteRule::new(
        "boundary-tag",
        r"(\.|-|>)([0-9]?[A-Za-z]{1,5})",
        |c| format!("{}\\textsc{{{}}}", &c[1], c[2].to_lowercase()),
    )]
});

/// Ordered rules for a style.
pub fn rules_for(style: GlossStyle) -> &'static [RewriteRule] {
    match style {
        GlossStyle::Expex => EXPEX_RULES.as_slice(),
        GlossStyle::SmallCaps => SMALLCAPS_RULES.as_slice(),
    }
}
