// ============================================================
// Layer 5 — Noun Counter
// ============================================================
// Counts the nouns in a tagged description.
//
// Rule, applied token by token while remembering the tag of
// the previous token:
//
//   count += 1  iff  tag(current)  ∈ noun tags
//               and  tag(previous) ∉ noun tags   (or no previous)
//               and  surface(current) ∉ excluded nouns
//
// The second condition merges a run of consecutive nouns into
// one compound noun:
//
//   "de  houten tafel  staat   in   de  woonkamer"
//    DET ADJ    NOUN   VERB    ADP  DET NOUN        → 2
//
//   "Jan  Peters  fietst"
//    PROPN PROPN  VERB                              → 1
//
// The previous tag is updated for EVERY token, including
// excluded ones, so a run that starts with an excluded noun
// ("voorgrond boom") contributes nothing.
//
// The vocabulary (noun tags + exclusions) is injected so the
// merging logic can be tested with any tag set.

use crate::domain::token::TaggedToken;
use crate::infra::vocabulary::NounVocabulary;

/// Result of analysing one tagged description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounAnalysis {
    pub num_nouns: usize,
    pub pos:       String,
}

#[derive(Debug, Clone, Default)]
pub struct NounCounter {
    vocabulary: NounVocabulary,
}

impl NounCounter {
    pub fn new(vocabulary: NounVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Count nouns, merging compounds and skipping excluded words.
    pub fn count_nouns(&self, tokens: &[TaggedToken]) -> usize {
        let mut num_nouns = 0;
        let mut preceding: Option<&str> = None;

        for tok in tokens {
            let starts_run = self.vocabulary.is_noun_tag(&tok.tag)
                && !preceding.is_some_and(|tag| self.vocabulary.is_noun_tag(tag));

            if starts_run && !self.vocabulary.is_excluded(&tok.surface_form) {
                num_nouns += 1;
            }

            preceding = Some(tok.tag.as_str());
        }

        num_nouns
    }

    /// Every tag in order, joined by single spaces. Unfiltered.
    pub fn pos_trace(tokens: &[TaggedToken]) -> String {
        tokens
            .iter()
            .map(|t| t.tag.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Noun count and POS trace in one call
    pub fn analyze(&self, tokens: &[TaggedToken]) -> NounAnalysis {
        NounAnalysis {
            num_nouns: self.count_nouns(tokens),
            pos:       Self::pos_trace(tokens),
        }
    }
}
