// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `label` and `preview`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::label_use_case::LabelConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Label every record of a query/cohort CSV
    Label(LabelArgs),

    /// Label a single query with inline criteria and print the result
    Preview(PreviewArgs),
}

/// All arguments for the `label` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug, Clone)]
pub struct LabelArgs {
    /// Input CSV with "query" and "cohort" columns.
    /// Each cohort cell is JSON: {"inclusion": [...], "exclusion": [...]}
    #[arg(long, default_value = "data/queries.csv")]
    pub input: String,

    /// Path of the labeled output CSV
    #[arg(long, default_value = "final.csv")]
    pub output: String,

    /// Directory where the tokenizer JSON is saved and loaded.
    /// Reusing the directory across runs reuses the vocabulary.
    #[arg(long, default_value = "tokenizer")]
    pub tokenizer_dir: String,

    /// Total number of unique tokens the vocabulary may hold
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,

    /// Keep the original casing instead of lowercasing.
    /// Applies to queries AND criterion phrases alike — matching
    /// only works when both sides share one casing policy.
    #[arg(long)]
    pub preserve_case: bool,
}

/// Convert CLI LabelArgs into the application-layer LabelConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<LabelArgs> for LabelConfig {
    fn from(a: LabelArgs) -> Self {
        LabelConfig {
            input_path:    a.input,
            output_path:   a.output,
            tokenizer_dir: a.tokenizer_dir,
            vocab_size:    a.vocab_size,
            lowercase:     !a.preserve_case,
        }
    }
}

/// All arguments for the `preview` command
#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    /// The eligibility query to label
    #[arg(long)]
    pub query: String,

    /// An inclusion criterion phrase (repeat the flag for several)
    #[arg(long = "include")]
    pub include: Vec<String>,

    /// An exclusion criterion phrase (repeat the flag for several)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Directory with a previously built tokenizer (reused if present)
    #[arg(long, default_value = "tokenizer")]
    pub tokenizer_dir: String,

    /// Vocabulary size, only used when building a fresh tokenizer
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,

    /// Keep the original casing instead of lowercasing
    #[arg(long)]
    pub preserve_case: bool,
}
