// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `label`   — labels every record of an input CSV
//   2. `preview` — labels one query given inline criteria
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, LabelArgs, PreviewArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "eligibility-labeler",
    version = "0.1.0",
    about = "Turn clinical eligibility queries into token-level include/exclude labels."
)]
pub struct Cli {
    /// The subcommand to run (label or preview)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Label(args)   => self.run_label(args.clone()),
            Commands::Preview(args) => self.run_preview(args.clone()),
        }
    }

    /// Handles the `label` subcommand.
    /// Converts CLI args into a LabelConfig and hands off to Layer 2.
    fn run_label(&self, args: LabelArgs) -> Result<()> {
        use crate::application::label_use_case::LabelUseCase;

        tracing::info!("Starting labeling run on: {}", args.input);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = LabelUseCase::new(args.into());
        use_case.execute()?;

        println!("Labeling complete. Output written.");
        Ok(())
    }

    /// Handles the `preview` subcommand.
    /// Labels one query and prints the token/label alignment.
    fn run_preview(&self, args: PreviewArgs) -> Result<()> {
        use crate::application::preview_use_case::PreviewUseCase;
        use crate::infra::tokenizer_store::TokenizerConfig;

        let use_case = PreviewUseCase::new(
            args.tokenizer_dir.clone(),
            TokenizerConfig {
                vocab_size: args.vocab_size,
                lowercase:  !args.preserve_case,
            },
        );

        let pairs = use_case.preview(&args.query, args.include, args.exclude)?;

        // One "token → label" line per token, in query order
        for (token, label) in &pairs {
            println!("{:<20} {}", token, label);
        }
        Ok(())
    }
}
