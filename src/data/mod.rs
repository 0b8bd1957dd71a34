// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw input CSV
// all the way to the labeled output CSV.
//
// The pipeline flows in this order:
//
//   input CSV (query, cohort columns)
//       │
//       ▼
//   CsvRecordSource   → reads rows, decodes the cohort JSON
//       │
//       ▼
//   QueryCleaner      → strips hyphens/parentheses from queries
//       │
//       ▼
//   TokenizerAdapter  → splits text into subword tokens (Layer 6)
//       │
//       ▼
//   SpanLabeler       → assigns one label per token (Layer 5)
//       │
//       ▼
//   CsvRecordSink     → writes the augmented output CSV
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads eligibility records from a CSV file using the csv crate
pub mod loader;

/// Cleans query text before tokenisation
pub mod preprocessor;

/// Writes labeled records to the output CSV
pub mod writer;
