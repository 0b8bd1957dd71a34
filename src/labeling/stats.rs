// ============================================================
// Layer 5 — Label Statistics
// ============================================================
// Aggregates per-run counts over the produced label sequences.
//
// Why track these?
//   - A run where almost every token is Neither usually means the
//     tokenizer configuration drifted between query and criteria
//     (e.g. casing mismatch) and phrase matches stopped aligning.
//   - The include/exclude balance matters for training: a heavily
//     skewed label distribution is worth knowing about up front.
//
// The counts are logged at the end of a labeling run and are not
// persisted anywhere — they are an operator aid, not an artefact.

use crate::domain::label::Label;

/// Running totals over every label sequence produced in one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelStats {
    /// Number of records processed
    pub records: usize,

    /// Number of records where at least one phrase matched
    pub records_with_matches: usize,

    /// Token counts per label value
    pub include_tokens: usize,
    pub exclude_tokens: usize,
    pub neither_tokens: usize,
}

impl LabelStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record's label sequence into the totals.
    pub fn observe(&mut self, labels: &[Label]) {
        self.records += 1;

        let mut matched = false;
        for label in labels {
            match label {
                Label::Include => {
                    self.include_tokens += 1;
                    matched = true;
                }
                Label::Exclude => {
                    self.exclude_tokens += 1;
                    matched = true;
                }
                Label::Neither => self.neither_tokens += 1,
            }
        }

        if matched {
            self.records_with_matches += 1;
        }
    }

    /// Total number of tokens observed across all records
    pub fn total_tokens(&self) -> usize {
        self.include_tokens + self.exclude_tokens + self.neither_tokens
    }

    /// Log a one-line summary of the run at info level.
    pub fn log_summary(&self) {
        tracing::info!(
            "Labeled {} records ({} with at least one match): \
             {} include / {} exclude / {} Neither tokens",
            self.records,
            self.records_with_matches,
            self.include_tokens,
            self.exclude_tokens,
            self.neither_tokens,
        );
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use Label::{Exclude, Include, Neither};

    #[test]
    fn test_counts_accumulate_across_records() {
        let mut stats = LabelStats::new();
        stats.observe(&[Include, Include, Neither]);
        stats.observe(&[Exclude, Neither]);

        assert_eq!(stats.records, 2);
        assert_eq!(stats.include_tokens, 2);
        assert_eq!(stats.exclude_tokens, 1);
        assert_eq!(stats.neither_tokens, 2);
        assert_eq!(stats.total_tokens(), 5);
    }

    #[test]
    fn test_records_with_matches() {
        let mut stats = LabelStats::new();
        stats.observe(&[Neither, Neither]);
        stats.observe(&[Include, Neither]);
        stats.observe(&[]);

        assert_eq!(stats.records, 3);
        assert_eq!(stats.records_with_matches, 1);
    }
}
