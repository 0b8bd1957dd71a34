// ============================================================
// Layer 6 — Tokenizer Adapter
// ============================================================
// Wraps the HuggingFace tokenizers crate behind the domain
// Tokenize trait so Layers 2–5 never see library types.
//
// The adapter returns token STRINGS, not token ids: the labeler
// matches phrases by token-string equality, and strings make the
// output inspectable by eye. Ids would work identically (same
// vocabulary both sides) but debug nothing.
//
// The wrapped tokenizer is deterministic and is only ever read,
// so one adapter can serve any number of records — or threads —
// without synchronisation.
//
// Reference: tokenizers crate documentation

use anyhow::Result;
use tokenizers::Tokenizer;

use crate::domain::traits::Tokenize;

pub struct TokenizerAdapter {
    tokenizer: Tokenizer,
}

impl TokenizerAdapter {
    /// Wrap an already-configured tokenizer instance
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl Tokenize for TokenizerAdapter {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        // add_special_tokens = false: no [CLS]/[SEP] wrapping —
        // labels are per content token, specials would misalign them
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;

        Ok(encoding.get_tokens().to_vec())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::tokenizer_store::{TokenizerConfig, TokenizerStore};

    /// Build a small real tokenizer in a temp dir for the tests
    fn adapter() -> TokenizerAdapter {
        let dir   = tempfile::tempdir().unwrap();
        let store = TokenizerStore::new(
            dir.path().to_str().unwrap(),
            TokenizerConfig { vocab_size: 1000, lowercase: true },
        );
        let corpus = vec!["routine antenatal care but not adverse effect".to_string()];
        TokenizerAdapter::new(store.load_or_build(&corpus).unwrap())
    }

    #[test]
    fn test_tokenizes_known_words() {
        let tokens = adapter().tokenize("routine antenatal care").unwrap();
        assert_eq!(tokens, vec!["routine", "antenatal", "care"]);
    }

    #[test]
    fn test_empty_text_gives_empty_sequence() {
        let tokens = adapter().tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let a = adapter();
        let first  = a.tokenize("adverse effect").unwrap();
        let second = a.tokenize("adverse effect").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_special_tokens_in_output() {
        let tokens = adapter().tokenize("routine care").unwrap();
        assert!(!tokens.iter().any(|t| t == "[CLS]" || t == "[SEP]"));
    }
}
