// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvRecordSource implements RecordSource
//   - A future JsonlRecordSource could also implement it
//   - The application layer only sees RecordSource
//     and works with both without any changes
//
// The Tokenize trait is the most important seam: the labeler
// only needs "text in, ordered token strings out". Production
// uses the HuggingFace tokenizers crate behind this trait;
// tests use a plain whitespace splitter.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::record::{EligibilityRecord, LabeledRecord};

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load eligibility records from a source.
///
/// Implementations:
///   - CsvRecordSource → loads from a CSV file with query/cohort columns
///   - (future) JsonlRecordSource → loads from newline-delimited JSON
pub trait RecordSource {
    /// Load all available records from this source.
    /// Malformed individual records are skipped, not fatal.
    fn load_all(&self) -> Result<Vec<EligibilityRecord>>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Any component that can persist labeled records.
///
/// Implementations:
///   - CsvRecordSink → writes a CSV with inclusion/exclusion/labels columns
pub trait RecordSink {
    /// Write every labeled record to the sink.
    fn write_all(&self, records: &[LabeledRecord]) -> Result<()>;
}

// ─── Tokenize ─────────────────────────────────────────────────────────────────
/// Any component that can split text into an ordered sequence of
/// token strings.
///
/// Contract:
///   - Deterministic: the same text always yields the same tokens.
///   - One configuration per process: the query and every criterion
///     phrase in a run MUST go through the same tokenizer, otherwise
///     token-for-token phrase matching is meaningless.
///   - An empty string tokenises to an empty sequence.
///   - Failures propagate unchanged; the labeler never reinterprets
///     tokenizer errors.
pub trait Tokenize {
    /// Split `text` into ordered subword token strings.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
