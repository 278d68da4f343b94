// ============================================================
// Layer 6 — Noun Vocabulary
// ============================================================
// The two word lists the noun counter depends on:
//
//   noun_tags      — coarse tags that mark a noun
//                    (default: NOUN, PROPN)
//   excluded_nouns — surface forms never counted as nouns
//                    (default: six generic Dutch locatives:
//                     voorgrond, achtergrond, midden,
//                     voorkant, achterkant, donker)
//
// Defaults match the Dutch annotation corpus. A JSON file can
// override either list:
//
//   { "noun_tags": ["NOUN", "PROPN"],
//     "excluded_nouns": ["foreground", "background"] }
//
// Missing keys keep their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, path::Path};

pub const DEFAULT_NOUN_TAGS: [&str; 2] = ["NOUN", "PROPN"];

pub const DEFAULT_EXCLUDED_NOUNS: [&str; 6] = [
    "voorgrond",
    "achtergrond",
    "midden",
    "voorkant",
    "achterkant",
    "donker",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NounVocabulary {
    pub noun_tags:      BTreeSet<String>,
    pub excluded_nouns: BTreeSet<String>,
}

impl Default for NounVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_NOUN_TAGS, DEFAULT_EXCLUDED_NOUNS)
    }
}

impl NounVocabulary {
    pub fn new<T, E>(noun_tags: T, excluded_nouns: E) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            noun_tags:      noun_tags.into_iter().map(Into::into).collect(),
            excluded_nouns: excluded_nouns.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a vocabulary override from JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;
        let vocab: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid vocabulary JSON in '{}'", path.display()))?;

        tracing::debug!(
            "Loaded vocabulary: {} noun tags, {} excluded nouns",
            vocab.noun_tags.len(),
            vocab.excluded_nouns.len()
        );
        Ok(vocab)
    }

    pub fn is_noun_tag(&self, tag: &str) -> bool {
        self.noun_tags.contains(tag)
    }

    /// Exact, case-sensitive match
    pub fn is_excluded(&self, surface_form: &str) -> bool {
        self.excluded_nouns.contains(surface_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = NounVocabulary::default();
        assert!(v.is_noun_tag("NOUN"));
        assert!(v.is_noun_tag("PROPN"));
        assert!(!v.is_noun_tag("ADJ"));
        assert_eq!(v.excluded_nouns.len(), 6);
        assert!(v.is_excluded("achtergrond"));
        assert!(!v.is_excluded("Achtergrond"));
    }

    #[test]
    fn test_load_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{ "excluded_nouns": ["foreground"] }"#).unwrap();

        let v = NounVocabulary::load(&path).unwrap();
        assert!(v.is_excluded("foreground"));
        assert!(!v.is_excluded("voorgrond"));
        // noun_tags falls back to the default
        assert!(v.is_noun_tag("PROPN"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(NounVocabulary::load(dir.path().join("nope.json")).is_err());
    }
}
