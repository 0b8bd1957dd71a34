// ============================================================
// Layer 5 — Labeling Core
// ============================================================
// The one part of the system with real logic: matching
// tokenised criterion phrases against a tokenised query and
// resolving overlaps when inclusion and exclusion spans collide.
//
// Everything in this layer is pure CPU-bound computation over
// small token sequences (tens to low hundreds of tokens).
// No I/O, no tokenizer library types, no shared state — one
// call per record, immutable inputs, fresh output.
//
// Reference: Rust Book §8 (Slices)

/// The core span-matching and label-assignment algorithm
pub mod span_labeler;

/// Aggregate run statistics over produced label sequences
pub mod stats;
