// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   tokenizer_store.rs   — Tokenizer persistence
//                          Builds a word-level tokenizer from the
//                          run's corpus if none exists, or loads a
//                          previously saved one. Ensures the exact
//                          same vocabulary and casing policy is
//                          used for every query and every criterion
//                          phrase — phrase matching depends on it.
//
//   tokenizer_adapter.rs — The Tokenize trait implementation
//                          Wraps the HuggingFace tokenizers crate
//                          behind the domain seam so the rest of
//                          the system never sees library types.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. a pretrained BERT tokenizer file instead of the
//      corpus-built word-level one)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tokenizer building, saving, and loading
pub mod tokenizer_store;

/// Adapter from the tokenizers crate to the domain Tokenize trait
pub mod tokenizer_adapter;
