// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Manages tokenizer building, saving, and loading.
//
// The tokenizer configuration (vocabulary size + casing policy)
// is fixed once at process start and never changes mid-run. This
// matters more here than in most systems: labels are produced by
// token-for-token phrase matching, so if the query and a phrase
// were ever tokenised under different configurations (say, one
// lowercased and one not) every match would silently fail and the
// output would be all-Neither garbage. One store, one config,
// one tokenizer per process.
//
// In tokenizers 0.15, train_from_files requires Trainer::Model
// to equal ModelWrapper. The correct approach is to build the
// tokenizer JSON manually and load it, bypassing the trainer
// type mismatch entirely.
//
// Reference: Devlin et al. (2019) BERT paper (WordPiece casing)

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokenizers::Tokenizer;

/// Process-wide tokenizer configuration: created once at startup
/// from CLI arguments, read-only thereafter.
#[derive(Debug, Clone, Copy)]
pub struct TokenizerConfig {
    /// Total number of unique tokens the vocabulary may hold
    pub vocab_size: usize,

    /// Whether the normalizer lowercases input text.
    /// Applied identically to queries and criterion phrases.
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { vocab_size: 30522, lowercase: true }
    }
}

pub struct TokenizerStore {
    dir:    PathBuf,
    config: TokenizerConfig,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<String>, config: TokenizerConfig) -> Self {
        Self { dir: PathBuf::from(dir.into()), config }
    }

    /// Load existing tokenizer or build a new one from texts
    pub fn load_or_build(&self, texts: &[String]) -> Result<Tokenizer> {
        let tok_path = self.dir.join("tokenizer.json");
        if tok_path.exists() {
            tracing::info!("Loading existing tokenizer from disk");
            self.load()
        } else {
            tracing::info!(
                "Building new tokenizer (vocab_size={}, lowercase={})",
                self.config.vocab_size,
                self.config.lowercase
            );
            self.build_and_save(texts)
        }
    }

    /// Load a previously saved tokenizer from JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.dir.join("tokenizer.json");
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))
    }

    /// Build a word-level vocabulary from the corpus texts and
    /// write a valid tokenizer JSON directly — this bypasses
    /// the train_from_files ModelWrapper type mismatch in
    /// tokenizers 0.15 entirely.
    ///
    /// The corpus must contain every text the run will tokenise:
    /// cleaned queries AND criterion phrases, so criterion words
    /// never fall out of vocabulary and miss their matches.
    fn build_and_save(&self, texts: &[String]) -> Result<Tokenizer> {
        std::fs::create_dir_all(&self.dir).ok();

        // ── Step 1: Build vocabulary from word frequencies ────────────────────
        // Count every word in the corpus, normalised the same way
        // the normalizer will normalise input at tokenise time
        use std::collections::HashMap;
        let mut freq: HashMap<String, usize> = HashMap::new();

        for text in texts {
            for word in text.split_whitespace() {
                let w = if self.config.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                };
                // Strip punctuation from edges
                let w = w.trim_matches(|c: char| !c.is_alphanumeric());
                if !w.is_empty() {
                    *freq.entry(w.to_string()).or_insert(0) += 1;
                }
            }
        }

        // Sort by frequency descending, take top vocab_size - 5
        // (reserve 5 slots for special tokens)
        let mut words: Vec<(String, usize)> = freq.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let max_words = self.config.vocab_size.saturating_sub(5);
        words.truncate(max_words);

        // ── Step 2: Build vocab JSON ──────────────────────────────────────────
        // Special tokens get fixed IDs matching BERT convention
        let mut vocab = serde_json::json!({
            "[PAD]":  0,
            "[UNK]":  1,
            "[CLS]":  101,
            "[SEP]":  102,
            "[MASK]": 103,
        });

        let mut next_id = 104usize;
        for (word, _) in &words {
            // Skip if already a special token
            if vocab.get(word).is_none() {
                vocab[word] = serde_json::json!(next_id);
                next_id += 1;
            }
        }

        // ── Step 3: Write tokenizer JSON in HuggingFace format ────────────────
        // This format is what Tokenizer::from_file() expects
        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [
                {"id": 0,   "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 1,   "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 101, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 102, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 103, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
            ],
            "normalizer": {
                "type": "BertNormalizer",
                "clean_text": true,
                "handle_chinese_chars": true,
                "strip_accents": null,
                "lowercase": self.config.lowercase
            },
            "pre_tokenizer": {
                "type": "Whitespace"
            },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": "[UNK]"
            }
        });

        let tok_path = self.dir.join("tokenizer.json");
        std::fs::write(
            &tok_path,
            serde_json::to_string_pretty(&tokenizer_json)?
        ).with_context(|| "Cannot write tokenizer JSON")?;

        tracing::info!(
            "Tokenizer built with {} words, saved to '{}'",
            next_id,
            tok_path.display()
        );

        // Load back as a proper Tokenizer instance
        Tokenizer::from_file(&tok_path)
            .map_err(|e| anyhow::anyhow!("Cannot reload tokenizer: {e}"))
    }
}
