// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits so the
// concrete loader and tagger can be swapped without touching
// the pipeline. Tests use this to plug in a fake tagger that
// returns hand-written token sequences.
//
// Implementations:
//   - RecordSource → JsonRecordLoader (data::loader)
//   - Tagger       → LexiconTagger    (infra::lexicon_tagger)

use anyhow::Result;

use crate::domain::record::DescriptionRecord;
use crate::domain::token::TaggedToken;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full set of description records.
pub trait RecordSource {
    /// Load every record. A malformed record fails the whole load.
    fn load_all(&self) -> Result<Vec<DescriptionRecord>>;
}

// ─── Tagger ───────────────────────────────────────────────────────────────────
/// Splits a text into tokens and assigns each a coarse POS tag.
///
/// A tagger is built once per run (it may load a model or a
/// lexicon) and is read-only afterwards, hence `&self`.
pub trait Tagger {
    /// Tag one text. Token order must follow the text.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}
