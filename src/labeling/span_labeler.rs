// ============================================================
// Layer 5 — Span Labeler
// ============================================================
// Produces one label per query token given the tokenised
// inclusion and exclusion phrases of the record.
//
// How matching works:
//   A phrase matches at start index i when the contiguous slice
//   query[i .. i+len(phrase)] equals the phrase token-for-token.
//   Equality is whole-token string equality — never substring-
//   within-token, and never case-folded here (casing is decided
//   once by the tokenizer's normalizer, not by the labeler).
//
// Two passes, fixed order:
//   Pass 1: every inclusion phrase paints Include over its spans
//   Pass 2: every exclusion phrase paints Exclude over its spans
//
// Exclusion precedence:
//   A token covered by both an inclusion and an exclusion match
//   ends up Exclude. This is a hard invariant of the design, not
//   an accident of pass order — reordering the two passes would
//   silently invert it, so the invariant is pinned by tests below.
//
// Within one category the order of phrases never matters: painting
// Include over Include (or Exclude over Exclude) is idempotent.
//
// Reference: Rust Book §8 (Slices)
//            Rust Book §13 (Iterators)

use crate::domain::label::Label;

pub struct SpanLabeler;

impl SpanLabeler {
    /// Create a new SpanLabeler instance
    pub fn new() -> Self {
        Self
    }

    /// Label every token of `query_tokens`.
    ///
    /// Returns a label sequence whose length always equals
    /// `query_tokens.len()`, regardless of how many or few
    /// criterion phrases match. An empty query yields an empty
    /// sequence; phrases that occur nowhere contribute nothing.
    pub fn label(
        &self,
        query_tokens:      &[String],
        inclusion_phrases: &[Vec<String>],
        exclusion_phrases: &[Vec<String>],
    ) -> Vec<Label> {
        // Every position starts as Neither
        let mut labels = vec![Label::Neither; query_tokens.len()];

        // Inclusion first, exclusion second — this ordering IS the
        // exclusion-precedence rule (see module docs above).
        paint_matches(query_tokens, inclusion_phrases, Label::Include, &mut labels);
        paint_matches(query_tokens, exclusion_phrases, Label::Exclude, &mut labels);

        labels
    }
}

impl Default for SpanLabeler {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint `label` over every occurrence of every phrase in the query.
fn paint_matches(
    query_tokens: &[String],
    phrases:      &[Vec<String>],
    label:        Label,
    labels:       &mut [Label],
) {
    for phrase in phrases {
        // An empty phrase matches nothing. Without this guard the
        // zero-length slice comparison below would succeed at every
        // start index.
        if phrase.is_empty() {
            continue;
        }

        // A phrase longer than the query has no valid start index
        if phrase.len() > query_tokens.len() {
            continue;
        }

        // Slide the phrase across every valid start position.
        // Every occurrence is painted, not just the first.
        for start in 0..=(query_tokens.len() - phrase.len()) {
            let end = start + phrase.len();
            if query_tokens[start..end] == phrase[..] {
                for slot in &mut labels[start..end] {
                    *slot = label;
                }
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand: build a Vec<String> from string literals
    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    use Label::{Exclude, Include, Neither};

    #[test]
    fn test_length_invariant_holds() {
        let labeler = SpanLabeler::new();
        let query   = toks(&["a", "b", "c", "d", "e"]);
        let labels  = labeler.label(&query, &[toks(&["b", "c"])], &[toks(&["e"])]);
        assert_eq!(labels.len(), query.len());
    }

    #[test]
    fn test_no_criteria_gives_all_neither() {
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(&toks(&["a", "b", "c"]), &[], &[]);
        assert_eq!(labels, vec![Neither, Neither, Neither]);
    }

    #[test]
    fn test_single_inclusion_span() {
        // query "a b c d", inclusion "b c" → Neither include include Neither
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(
            &toks(&["a", "b", "c", "d"]),
            &[toks(&["b", "c"])],
            &[],
        );
        assert_eq!(labels, vec![Neither, Include, Include, Neither]);
    }

    #[test]
    fn test_exclusion_wins_on_overlap() {
        // inclusion "b c" and exclusion "c d" both cover index 2 —
        // the overlapping token must come out Exclude
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(
            &toks(&["a", "b", "c", "d"]),
            &[toks(&["b", "c"])],
            &[toks(&["c", "d"])],
        );
        assert_eq!(labels, vec![Neither, Include, Exclude, Exclude]);
    }

    #[test]
    fn test_every_occurrence_is_labeled() {
        // "x y" occurs twice; both occurrences get painted
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(
            &toks(&["x", "y", "x", "y"]),
            &[toks(&["x", "y"])],
            &[],
        );
        assert_eq!(labels, vec![Include, Include, Include, Include]);
    }

    #[test]
    fn test_empty_query_gives_empty_sequence() {
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(&[], &[toks(&["a"])], &[]);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_phrase_longer_than_query_matches_nothing() {
        // No valid start index exists, so nothing is painted
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(&toks(&["a"]), &[toks(&["a", "b"])], &[]);
        assert_eq!(labels, vec![Neither]);
    }

    #[test]
    fn test_empty_phrase_is_skipped() {
        // A zero-token phrase must not be treated as matching everywhere
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(&toks(&["a", "b"]), &[Vec::new()], &[Vec::new()]);
        assert_eq!(labels, vec![Neither, Neither]);
    }

    #[test]
    fn test_non_matching_phrase_contributes_nothing() {
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(
            &toks(&["a", "b", "c"]),
            &[toks(&["z", "z"])],
            &[toks(&["q"])],
        );
        assert_eq!(labels, vec![Neither, Neither, Neither]);
    }

    #[test]
    fn test_duplicate_phrase_is_idempotent() {
        // Listing the same phrase twice must change nothing:
        // Include painted over Include is a no-op
        let labeler = SpanLabeler::new();
        let query   = toks(&["a", "b", "c", "d"]);
        let once    = labeler.label(&query, &[toks(&["b", "c"])], &[]);
        let twice   = labeler.label(&query, &[toks(&["b", "c"]), toks(&["b", "c"])], &[]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_category_overlap_order_does_not_matter() {
        // Two inclusion phrases overlapping at "c": result is the
        // same regardless of which phrase is listed first
        let labeler = SpanLabeler::new();
        let query   = toks(&["a", "b", "c", "d"]);
        let p1      = toks(&["b", "c"]);
        let p2      = toks(&["c", "d"]);

        let forward  = labeler.label(&query, &[p1.clone(), p2.clone()], &[]);
        let backward = labeler.label(&query, &[p2, p1], &[]);

        assert_eq!(forward, backward);
        assert_eq!(forward, vec![Neither, Include, Include, Include]);
    }

    #[test]
    fn test_matching_is_whole_token_not_substring() {
        // "care" must not match inside "careful" — equality is on
        // whole token strings
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(&toks(&["careful"]), &[toks(&["care"])], &[]);
        assert_eq!(labels, vec![Neither]);
    }

    #[test]
    fn test_case_is_not_folded_by_the_labeler() {
        // The labeler compares tokens verbatim; any case folding is
        // the tokenizer's job, done before the tokens arrive here
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(&toks(&["Care"]), &[toks(&["care"])], &[]);
        assert_eq!(labels, vec![Neither]);
    }

    #[test]
    fn test_phrase_matching_at_query_boundaries() {
        // Spans flush against the start and end of the query
        let labeler = SpanLabeler::new();
        let labels  = labeler.label(
            &toks(&["a", "b", "c", "d"]),
            &[toks(&["a", "b"])],
            &[toks(&["c", "d"])],
        );
        assert_eq!(labels, vec![Include, Include, Exclude, Exclude]);
    }

    #[test]
    fn test_realistic_query() {
        // Mirrors the documented example: antenatal care is wanted,
        // adverse effects are excluded
        let labeler = SpanLabeler::new();
        let query   = toks(&[
            "undergoing", "routine", "antenatal", "care", "but", "without",
            "adverse", "effect", "from", "medicinal", "substance",
        ]);
        let inc = vec![toks(&["routine", "antenatal", "care"])];
        let exc = vec![toks(&["adverse", "effect"]), toks(&["medicinal", "substance"])];

        let labels = labeler.label(&query, &inc, &exc);
        assert_eq!(
            labels,
            vec![
                Neither, Include, Include, Include, Neither, Neither,
                Exclude, Exclude, Neither, Exclude, Exclude,
            ]
        );
    }
}
