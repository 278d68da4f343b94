// ============================================================
// Layer 3 — Description Record Domain Types
// ============================================================
// A DescriptionRecord is one participant's description of one
// image, exactly as loaded from the annotation file.
//
// Several participants describe the same image, so `image` is
// NOT a unique key — the aggregator groups on it.
//
// An EnrichedRecord is the same record after tagging, carrying
// the noun count and the raw tag trace. It is built once and
// never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A raw annotation record.
/// All four fields are required; extra fields in the input
/// JSON are ignored by serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    /// Identifier of the described image (shared across participants)
    pub image: String,

    /// Identifier of the annotator
    pub participant: String,

    /// The description text that gets tagged
    pub normalized_description: String,

    /// Source asset reference, carried through to the export
    pub filename: String,
}

impl DescriptionRecord {
    pub fn new(
        image:                  impl Into<String>,
        participant:            impl Into<String>,
        normalized_description: impl Into<String>,
        filename:               impl Into<String>,
    ) -> Self {
        Self {
            image:                  image.into(),
            participant:            participant.into(),
            normalized_description: normalized_description.into(),
            filename:               filename.into(),
        }
    }
}

/// A description record plus its linguistic annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: DescriptionRecord,

    /// Number of nouns after compound merging and exclusions
    pub num_nouns: usize,

    /// Every token's tag in order, separated by single spaces
    pub pos: String,
}

impl EnrichedRecord {
    pub fn new(record: DescriptionRecord, num_nouns: usize, pos: impl Into<String>) -> Self {
        Self {
            record,
            num_nouns,
            pos: pos.into(),
        }
    }

    /// Shortcut used by the aggregator for grouping
    pub fn image(&self) -> &str {
        &self.record.image
    }
}
