// ============================================================
// Layer 2 — Preview Use Case
// ============================================================
// Labels a single query with inline criteria and returns the
// token/label alignment — a debugging aid for checking why a
// criterion phrase did or did not match before running a whole
// batch.
//
// Reuses the batch pipeline's tokenizer store: if a tokenizer
// was already built by a `label` run it is loaded so the preview
// sees exactly the same tokenisation; otherwise a throwaway one
// is built from the preview's own texts.

use anyhow::Result;

use crate::application::label_use_case::label_record;
use crate::data::preprocessor::QueryCleaner;
use crate::domain::label::Label;
use crate::domain::record::{CohortCriteria, EligibilityRecord};
use crate::domain::traits::Tokenize;
use crate::labeling::span_labeler::SpanLabeler;
use crate::infra::{
    tokenizer_adapter::TokenizerAdapter,
    tokenizer_store::{TokenizerConfig, TokenizerStore},
};

pub struct PreviewUseCase {
    tokenizer_dir: String,
    config:        TokenizerConfig,
}

impl PreviewUseCase {
    pub fn new(tokenizer_dir: String, config: TokenizerConfig) -> Self {
        Self { tokenizer_dir, config }
    }

    /// Label one query and return (token, label) pairs in order.
    pub fn preview(
        &self,
        query:     &str,
        inclusion: Vec<String>,
        exclusion: Vec<String>,
    ) -> Result<Vec<(String, Label)>> {
        // Same cleaning as the batch pipeline — a preview that
        // tokenised differently would answer the wrong question
        let cleaner = QueryCleaner::new();
        let record  = EligibilityRecord::new(
            cleaner.clean(query),
            CohortCriteria { inclusion, exclusion },
        );

        // Load the batch run's tokenizer when one exists, or build
        // a small one from just this preview's texts
        let corpus = preview_corpus(&record);
        let store  = TokenizerStore::new(&self.tokenizer_dir, self.config);
        let adapter = TokenizerAdapter::new(store.load_or_build(&corpus)?);

        let labeled = label_record(&record, &adapter, &SpanLabeler::new())?;

        // Re-tokenise to pair each token with its label. Same
        // deterministic tokenizer, so the alignment is exact.
        let tokens = adapter.tokenize(&record.query)?;
        Ok(tokens.into_iter().zip(labeled.labels).collect())
    }
}

/// The texts a throwaway preview tokenizer must cover.
fn preview_corpus(record: &EligibilityRecord) -> Vec<String> {
    let mut corpus = vec![record.query.clone()];
    corpus.extend(record.cohort.inclusion.iter().cloned());
    corpus.extend(record.cohort.exclusion.iter().cloned());
    corpus
}
