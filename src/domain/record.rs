// ============================================================
// Layer 3 — Eligibility Record Domain Types
// ============================================================
// Represents one row of the input dataset in domain terms:
//   - A free-text clinical eligibility query
//   - A cohort definition: inclusion and exclusion phrases
//
// The input CSV stores the cohort as a JSON object in a single
// cell, e.g.
//   {"inclusion": ["example a", "example b"],
//    "exclusion": ["exclusion a"]}
// CohortCriteria derives Deserialize so serde_json can decode
// that cell directly into a typed struct.
//
// Records are immutable once loaded: the pipeline never mutates
// a record in place, it builds a fresh LabeledRecord per input
// record. This keeps per-record processing independent and
// trivially safe to parallelise.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::label::Label;

/// The cohort definition attached to one query: two named lists
/// of criterion phrases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortCriteria {
    /// Phrases describing who belongs in the cohort
    pub inclusion: Vec<String>,

    /// Phrases describing who must be left out
    pub exclusion: Vec<String>,
}

/// One input record: a query and its cohort criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRecord {
    /// The free-text eligibility query (already cleaned by the
    /// time the labeler sees its tokens)
    pub query: String,

    /// The structured inclusion/exclusion criteria
    pub cohort: CohortCriteria,
}

impl EligibilityRecord {
    pub fn new(query: impl Into<String>, cohort: CohortCriteria) -> Self {
        Self { query: query.into(), cohort }
    }
}

/// One output record: the input record augmented with the
/// computed per-token label sequence.
///
/// Invariant: labels.len() equals the token count of the
/// tokenised query — the labeler guarantees this by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// The cleaned query text that was tokenised
    pub query: String,

    /// The inclusion phrases, carried through for traceability
    pub inclusion: Vec<String>,

    /// The exclusion phrases, carried through for traceability
    pub exclusion: Vec<String>,

    /// One label per query token, in token order
    pub labels: Vec<Label>,
}
