//! Ordered rewrite rules that strip variant tokens out of product names.
//!
//! Each rule is a `(name, pattern, replacement)` triple. Base-name rules run
//! in order, each on the output of the one before. Trailing rules compete
//! instead: only the match that starts earliest is removed, with ties going
//! to the rule listed first.

use std::sync::LazyLock;

use regex::Regex;

/// One named regex rewrite.
#[derive(Debug)]
pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid rewrite rule regex"),
            replacement,
        }
    }

    /// Returns `true` if the rule would change `input`.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    /// Byte offset where the first match in `input` starts.
    fn match_start(&self, input: &str) -> Option<usize> {
        self.pattern.find(input).map(|m| m.start())
    }

    /// Rewrites the first match in `input`.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replacen(input, 1, self.replacement)
            .into_owned()
    }
}

/// Trailing tokens removed from the shortest member name when the shared
/// words of a group are too short to use as a title.
pub static TRAILING_VARIANT_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::new("quantity", r"(?i)\s+x\d+$", ""),
        RewriteRule::new("parenthetical-code", r"(?i)\s+\(\w+\)$", ""),
        RewriteRule::new("dimension-tail", r"(?i)\s+\d+mm.*$", ""),
        RewriteRule::new("grain-tail", r"(?i)\s+grão.*$", ""),
        RewriteRule::new("internal-code-tail", r"(?i)\s+mf-\d+.*$", ""),
    ]
});

/// Variant tokens removed from a name to recover the family base name.
pub static BASE_NAME_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::new("grain", r"(?i)\s*-?\s*grão\s*\d+", ""),
        RewriteRule::new("dimension", r"(?i)\s*-?\s*\d+mm(?:\s*x\s*\d+mm)?", ""),
        RewriteRule::new("grit", r"(?i)\s*-?\s*(?:\bP\d+|#\d+)", ""),
    ]
});

fn apply_all(rules: &[RewriteRule], input: &str) -> String {
    rules
        .iter()
        .fold(input.to_owned(), |acc, rule| rule.apply(&acc))
        .trim()
        .to_owned()
}

/// Strips one trailing variant token: a quantity marker, a parenthetical
/// code, or a dimension, grain, or `MF-` code tail.
///
/// ```
/// use vitrine_grouping::rules::strip_trailing_variant_tokens;
/// assert_eq!(strip_trailing_variant_tokens("Disco Flap 115mm Grão 60 x3"), "Disco Flap");
/// assert_eq!(strip_trailing_variant_tokens("Lixa Ferro (A1) x3"), "Lixa Ferro (A1)");
/// ```
#[must_use]
pub fn strip_trailing_variant_tokens(name: &str) -> String {
    let earliest = TRAILING_VARIANT_RULES
        .iter()
        .filter_map(|rule| rule.match_start(name).map(|start| (start, rule)))
        .min_by_key(|(start, _)| *start);
    match earliest {
        Some((_, rule)) => rule.apply(name).trim().to_owned(),
        None => name.trim().to_owned(),
    }
}

/// Strips the first grain marker, the first mm dimension (optionally
/// `AxBmm`), and the first grit marker (`P40`, `#40`), ignoring case.
#[must_use]
pub fn strip_variant_tokens(name: &str) -> String {
    apply_all(&BASE_NAME_RULES, name)
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
