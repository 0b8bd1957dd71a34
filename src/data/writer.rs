// ============================================================
// Layer 4 — Record Writer
// ============================================================
// Writes labeled records to the output CSV using the csv crate.
//
// Output columns:
//   query     — the cleaned query text that was tokenised
//   inclusion — the inclusion phrases as a JSON array
//   exclusion — the exclusion phrases as a JSON array
//   labels    — the per-token labels, comma-joined:
//               "Neither, include, include, Neither"
//
// The phrase lists are re-encoded as JSON (rather than some
// ad-hoc joined form) so a downstream reader can decode them
// with any JSON parser, symmetric with how they arrived.
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::label::join_labels;
use crate::domain::record::LabeledRecord;
use crate::domain::traits::RecordSink;

/// The flat shape of one output CSV row.
#[derive(Debug, Serialize)]
struct OutputRow {
    query:     String,
    inclusion: String,
    exclusion: String,
    labels:    String,
}

/// Writes all labeled records to a single CSV file.
/// Implements the RecordSink trait from Layer 3.
pub struct CsvRecordSink {
    /// Path of the CSV file to create
    path: String,
}

impl CsvRecordSink {
    /// Create a new CsvRecordSink pointed at an output path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for CsvRecordSink {
    fn write_all(&self, records: &[LabeledRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Cannot create output CSV '{}'", self.path))?;

        // The csv crate only emits the header on the first serialize
        // call, so an empty batch needs the header written by hand —
        // downstream readers still expect a well-formed file
        if records.is_empty() {
            writer.write_record(["query", "inclusion", "exclusion", "labels"])?;
        }

        for record in records {
            let row = OutputRow {
                query:     record.query.clone(),
                inclusion: serde_json::to_string(&record.inclusion)?,
                exclusion: serde_json::to_string(&record.exclusion)?,
                labels:    join_labels(&record.labels),
            };
            writer.serialize(row)?;
        }

        // flush() forces buffered rows to disk before we report success
        writer
            .flush()
            .with_context(|| format!("Cannot flush output CSV '{}'", self.path))?;

        tracing::info!("Wrote {} labeled records to '{}'", records.len(), self.path);
        Ok(())
    }
}
