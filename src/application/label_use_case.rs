// ============================================================
// Layer 2 — LabelUseCase
// ============================================================
// Orchestrates the full batch labeling pipeline in order:
//
//   Step 1: Load records from CSV       (Layer 4 - data)
//   Step 2: Clean the query text        (Layer 4 - data)
//   Step 3: Build / load tokenizer      (Layer 6 - infra)
//   Step 4: Tokenise + label per record (Layer 5 - labeling)
//   Step 5: Write the output CSV        (Layer 4 - data)
//
// Per-record failure policy:
//   Tokenisation failures fail ONLY that record — the row is
//   skipped with a warning and the batch continues. Records are
//   never mutated in place; each output record is built fresh
//   from its input record, so no partial state survives a skip.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::CsvRecordSource,
    preprocessor::QueryCleaner,
    writer::CsvRecordSink,
};
use crate::domain::record::{EligibilityRecord, LabeledRecord};
use crate::domain::traits::{RecordSink, RecordSource, Tokenize};
use crate::labeling::{span_labeler::SpanLabeler, stats::LabelStats};
use crate::infra::{
    tokenizer_adapter::TokenizerAdapter,
    tokenizer_store::{TokenizerConfig, TokenizerStore},
};

// ─── Labeling Configuration ──────────────────────────────────────────────────
// All parameters for a labeling run.
// Serialisable so a run's settings can be recorded alongside its
// output. Built from CLI args at startup and read-only afterwards —
// in particular the tokenizer settings never change mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub input_path:    String,
    pub output_path:   String,
    pub tokenizer_dir: String,
    pub vocab_size:    usize,
    pub lowercase:     bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            input_path:    "data/queries.csv".to_string(),
            output_path:   "final.csv".to_string(),
            tokenizer_dir: "tokenizer".to_string(),
            vocab_size:    30522,
            lowercase:     true,
        }
    }
}

// ─── LabelUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full labeling pipeline.
pub struct LabelUseCase {
    config: LabelConfig,
}

impl LabelUseCase {
    /// Create a new LabelUseCase with the given configuration
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    /// Execute the full labeling pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load all records from the input CSV ──────────────────────
        // Malformed rows are already skipped inside the loader
        tracing::info!("Loading records from '{}'", cfg.input_path);
        let source  = CsvRecordSource::new(&cfg.input_path);
        let records = source.load_all()?;

        // ── Step 2: Clean query text ──────────────────────────────────────────
        // Hyphens removed, parentheses replaced by spaces.
        // Criterion phrases are deliberately NOT cleaned — see the
        // QueryCleaner module docs for why the asymmetry stands.
        let cleaner = QueryCleaner::new();
        let records: Vec<EligibilityRecord> = records
            .into_iter()
            .map(|r| {
                let query = cleaner.clean(&r.query);
                EligibilityRecord::new(query, r.cohort)
            })
            .collect();

        // ── Step 3: Build / load tokenizer ────────────────────────────────────
        // The corpus covers every text this run will tokenise:
        // cleaned queries plus every criterion phrase. One tokenizer,
        // one configuration, shared by all records.
        let corpus = tokenizer_corpus(&records);
        let store  = TokenizerStore::new(
            &cfg.tokenizer_dir,
            TokenizerConfig { vocab_size: cfg.vocab_size, lowercase: cfg.lowercase },
        );
        let adapter = TokenizerAdapter::new(store.load_or_build(&corpus)?);

        // ── Step 4: Tokenise and label every record ───────────────────────────
        // Each record is an independent pure transform: tokens in,
        // labels out, nothing shared, nothing mutated.
        let labeler   = SpanLabeler::new();
        let mut stats = LabelStats::new();
        let mut labeled = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            match label_record(record, &adapter, &labeler) {
                Ok(result) => {
                    stats.observe(&result.labels);
                    labeled.push(result);
                }
                Err(e) => {
                    tracing::warn!("Skipping record {}: {}", index, e);
                }
            }
        }

        // ── Step 5: Write the output CSV ──────────────────────────────────────
        let sink = CsvRecordSink::new(&cfg.output_path);
        sink.write_all(&labeled)?;

        stats.log_summary();
        Ok(())
    }
}

/// Tokenise one record's query and criterion phrases, then label
/// every query token.
///
/// Pure per-record transform: builds a fresh LabeledRecord, never
/// touches shared state. The returned label sequence always has
/// exactly one label per query token.
pub fn label_record(
    record:    &EligibilityRecord,
    tokenizer: &dyn Tokenize,
    labeler:   &SpanLabeler,
) -> Result<LabeledRecord> {
    let query_tokens = tokenizer.tokenize(&record.query)?;

    let inclusion_tokens = tokenize_phrases(&record.cohort.inclusion, tokenizer)?;
    let exclusion_tokens = tokenize_phrases(&record.cohort.exclusion, tokenizer)?;

    let labels = labeler.label(&query_tokens, &inclusion_tokens, &exclusion_tokens);

    tracing::debug!(
        "Labeled '{}': {} tokens",
        record.query,
        labels.len()
    );

    Ok(LabeledRecord {
        query:     record.query.clone(),
        inclusion: record.cohort.inclusion.clone(),
        exclusion: record.cohort.exclusion.clone(),
        labels,
    })
}

/// Tokenise every phrase in a criterion list.
fn tokenize_phrases(
    phrases:   &[String],
    tokenizer: &dyn Tokenize,
) -> Result<Vec<Vec<String>>> {
    phrases.iter().map(|p| tokenizer.tokenize(p)).collect()
}

/// Collect every text a run will tokenise: cleaned queries plus
/// all inclusion and exclusion phrases.
fn tokenizer_corpus(records: &[EligibilityRecord]) -> Vec<String> {
    let mut corpus = Vec::new();
    for record in records {
        corpus.push(record.query.clone());
        corpus.extend(record.cohort.inclusion.iter().cloned());
        corpus.extend(record.cohort.exclusion.iter().cloned());
    }
    corpus
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::Label::{Exclude, Include, Neither};
    use crate::domain::record::CohortCriteria;

    /// Deterministic stand-in for the real tokenizer: plain
    /// lowercase whitespace splitting. Good enough to exercise the
    /// record-level plumbing without tokenizer files on disk.
    struct WhitespaceTokenizer;

    impl Tokenize for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<String>> {
            Ok(text
                .split_whitespace()
                .map(|w| w.to_lowercase())
                .collect())
        }
    }

    fn record(query: &str, inclusion: &[&str], exclusion: &[&str]) -> EligibilityRecord {
        EligibilityRecord::new(
            query,
            CohortCriteria {
                inclusion: inclusion.iter().map(|s| s.to_string()).collect(),
                exclusion: exclusion.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    #[test]
    fn test_label_record_end_to_end() {
        let rec = record(
            "routine antenatal care without adverse effect",
            &["antenatal care"],
            &["adverse effect"],
        );

        let out = label_record(&rec, &WhitespaceTokenizer, &SpanLabeler::new()).unwrap();

        assert_eq!(
            out.labels,
            vec![Neither, Include, Include, Neither, Exclude, Exclude]
        );
        // Criterion phrases are carried through untouched
        assert_eq!(out.inclusion, vec!["antenatal care"]);
        assert_eq!(out.exclusion, vec!["adverse effect"]);
    }

    #[test]
    fn test_label_count_matches_token_count() {
        let rec = record("one two three four", &["two"], &[]);
        let out = label_record(&rec, &WhitespaceTokenizer, &SpanLabeler::new()).unwrap();
        assert_eq!(out.labels.len(), 4);
    }

    #[test]
    fn test_empty_query_gives_empty_labels() {
        let rec = record("", &["anything"], &["at all"]);
        let out = label_record(&rec, &WhitespaceTokenizer, &SpanLabeler::new()).unwrap();
        assert!(out.labels.is_empty());
    }

    #[test]
    fn test_exclusion_wins_across_the_full_pipeline() {
        // The same overlap invariant as the labeler tests, but
        // exercised through real phrase tokenisation
        let rec = record("a b c d", &["b c"], &["c d"]);
        let out = label_record(&rec, &WhitespaceTokenizer, &SpanLabeler::new()).unwrap();
        assert_eq!(out.labels, vec![Neither, Include, Exclude, Exclude]);
    }

    #[test]
    fn test_corpus_covers_queries_and_phrases() {
        let records = vec![record("q one", &["inc a"], &["exc b"])];
        let corpus  = tokenizer_corpus(&records);
        assert_eq!(corpus, vec!["q one", "inc a", "exc b"]);
    }
}
