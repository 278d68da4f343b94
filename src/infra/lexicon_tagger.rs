// ============================================================
// Layer 6 — Lexicon Tagger
// ============================================================
// A lightweight Tagger implementation backed by a word → tag
// lexicon stored as JSON:
//
//   {
//     "fallback_tag": "X",
//     "entries": { "de": "DET", "kat": "NOUN", "Amsterdam": "PROPN" }
//   }
//
// How a description is tagged:
//   1. Split into words with the HuggingFace `tokenizers`
//      BertPreTokenizer (whitespace + punctuation splitting,
//      original casing kept)
//   2. Look up each word: exact form first, then lowercase
//   3. Unknown words: all punctuation → PUNCT,
//                     all digits      → NUM,
//                     otherwise       → fallback_tag
//
// The lexicon is read once at startup and never mutated, so a
// single instance serves the whole run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::token::TaggedToken;
use crate::domain::traits::Tagger;

pub const PUNCT_TAG: &str = "PUNCT";
pub const NUM_TAG: &str = "NUM";

fn default_fallback_tag() -> String {
    "X".to_string()
}

/// On-disk lexicon format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Tag for words that are neither in the lexicon nor
    /// recognisable as punctuation or numbers
    #[serde(default = "default_fallback_tag")]
    pub fallback_tag: String,

    /// Surface form → coarse tag
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

pub struct LexiconTagger {
    lexicon: Lexicon,
}

impl LexiconTagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Read and parse a lexicon JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read lexicon from '{}'", path.display()))?;
        let lexicon: Lexicon = serde_json::from_str(&json)
            .with_context(|| format!("Invalid lexicon JSON in '{}'", path.display()))?;

        tracing::info!(
            "Loaded lexicon with {} entries from '{}'",
            lexicon.entries.len(),
            path.display()
        );
        Ok(Self::new(lexicon))
    }

    /// Split text into words, keeping punctuation as separate tokens
    fn split_words(text: &str) -> Result<Vec<String>> {
        let mut pretok = PreTokenizedString::from(text);
        BertPreTokenizer
            .pre_tokenize(&mut pretok)
            .map_err(|e| anyhow::anyhow!("Cannot split text '{}': {}", text, e))?;

        Ok(pretok
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(word, _, _)| word.to_string())
            .collect())
    }

    fn lookup(&self, word: &str) -> String {
        if let Some(tag) = self.lexicon.entries.get(word) {
            return tag.clone();
        }
        if let Some(tag) = self.lexicon.entries.get(&word.to_lowercase()) {
            return tag.clone();
        }

        if word.chars().all(|c| !c.is_alphanumeric()) {
            PUNCT_TAG.to_string()
        } else if word.chars().all(|c| c.is_numeric()) {
            NUM_TAG.to_string()
        } else {
            self.lexicon.fallback_tag.clone()
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let tokens = Self::split_words(text)?
            .into_iter()
            .map(|word| {
                let tag = self.lookup(&word);
                TaggedToken::new(word, tag)
            })
            .collect();
        Ok(tokens)
    }
}
