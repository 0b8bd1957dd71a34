// ============================================================
// Layer 4 — Query Cleaner
// ============================================================
// Cleans raw query text before tokenisation.
//
// Exactly two transformations, in order:
//   1. Hyphens are deleted outright ("anti-viral" → "antiviral")
//   2. Parentheses are replaced with spaces so the words they
//      wrapped survive as separate tokens
//
// Why so little?
//   The criterion phrases in the cohort column are tokenised
//   WITHOUT this cleaning pass. Every extra transformation
//   applied to the query alone widens the gap between query
//   tokens and phrase tokens and silently kills matches. So the
//   cleaner does the minimum the upstream data requires and
//   nothing more. A phrase that itself contains a hyphen or
//   parenthesis will not align with the cleaned query — a known
//   asymmetry carried over from the upstream data definition
//   (see DESIGN.md).
//
// Reference: regex crate documentation

use regex::Regex;

pub struct QueryCleaner {
    hyphens: Regex,
    parens:  Regex,
}

impl QueryCleaner {
    /// Create a new QueryCleaner with its patterns precompiled
    pub fn new() -> Self {
        // Both patterns are literal character classes; unwrap is
        // fine because they cannot fail to compile
        Self {
            hyphens: Regex::new("-").unwrap(),
            parens:  Regex::new("[()]").unwrap(),
        }
    }

    /// Clean one query string for downstream tokenisation.
    pub fn clean(&self, text: &str) -> String {
        let no_hyphens = self.hyphens.replace_all(text, "");
        self.parens.replace_all(&no_hyphens, " ").into_owned()
    }
}

impl Default for QueryCleaner {
    fn default() -> Self {
        Self::new()
    }
}
