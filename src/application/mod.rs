// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (labeling a dataset or previewing one query).
//
// Rules for this layer:
//   - No matching logic here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The batch labeling workflow: CSV in, labeled CSV out
pub mod label_use_case;

// The single-query preview workflow
pub mod preview_use_case;
