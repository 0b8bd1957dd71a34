// ============================================================
// Layer 4 — Record Loader
// ============================================================
// Loads eligibility records from a CSV file using the csv crate.
//
// Expected input shape:
//   A CSV with at least a "query" and a "cohort" column. The
//   cohort cell holds a JSON object with two list-valued keys:
//     {"inclusion": ["example a", "example b"],
//      "exclusion": ["exclusion a"]}
//
// Rows whose cohort cell fails to decode (or whose columns are
// missing) are skipped with a warning — one bad row must never
// abort the batch. This mirrors the per-record failure policy of
// the whole pipeline.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::domain::record::{CohortCriteria, EligibilityRecord};
use crate::domain::traits::RecordSource;

/// The raw shape of one CSV row before the cohort JSON is decoded.
/// serde maps the column headers onto these fields.
#[derive(Debug, Deserialize)]
struct RawRow {
    /// The free-text eligibility query
    query: String,

    /// The cohort criteria as an undecoded JSON string
    cohort: String,
}

/// Loads all records from a single CSV file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvRecordSource {
    /// Path to the input CSV
    path: String,
}

impl CsvRecordSource {
    /// Create a new CsvRecordSource pointed at a file
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvRecordSource {
    fn load_all(&self) -> Result<Vec<EligibilityRecord>> {
        let path = Path::new(&self.path);

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Cannot open input CSV '{}'", self.path))?;

        let mut records = Vec::new();

        // deserialize() yields one Result per row so a single bad
        // row can be skipped without losing the rest of the file
        for (index, row) in reader.deserialize::<RawRow>().enumerate() {
            // Header is row 0 in the file, so data rows start at 2
            // when reporting line numbers to the operator
            let line = index + 2;

            let raw = match row {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Skipping row {} of '{}': {}", line, self.path, e);
                    continue;
                }
            };

            // The cohort column is JSON-within-CSV; decode it here
            // so the rest of the pipeline only sees typed criteria
            match serde_json::from_str::<CohortCriteria>(&raw.cohort) {
                Ok(cohort) => {
                    records.push(EligibilityRecord::new(raw.query, cohort));
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping row {} of '{}': bad cohort JSON: {}",
                        line,
                        self.path,
                        e
                    );
                }
            }
        }

        tracing::info!("Loaded {} records from '{}'", records.len(), self.path);
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Write `contents` to a temp CSV file and load it
    fn load_csv(contents: &str) -> Vec<EligibilityRecord> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        let source = CsvRecordSource::new(file.path().to_str().unwrap());
        source.load_all().unwrap()
    }

    #[test]
    fn test_loads_valid_rows() {
        let csv = concat!(
            "query,cohort\n",
            "patients with diabetes,\"{\"\"inclusion\"\": [\"\"diabetes\"\"], \"\"exclusion\"\": [\"\"pregnant\"\"]}\"\n",
        );
        let records = load_csv(csv);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].query, "patients with diabetes");
        assert_eq!(records[0].cohort.inclusion, vec!["diabetes"]);
        assert_eq!(records[0].cohort.exclusion, vec!["pregnant"]);
    }

    #[test]
    fn test_bad_cohort_json_is_skipped_not_fatal() {
        let csv = concat!(
            "query,cohort\n",
            "first query,not-json-at-all\n",
            "second query,\"{\"\"inclusion\"\": [], \"\"exclusion\"\": []}\"\n",
        );
        let records = load_csv(csv);

        // The malformed first row is dropped, the second survives
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].query, "second query");
    }

    #[test]
    fn test_empty_file_gives_no_records() {
        let records = load_csv("query,cohort\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = CsvRecordSource::new("does/not/exist.csv");
        assert!(source.load_all().is_err());
    }
}
