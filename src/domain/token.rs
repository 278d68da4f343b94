// ============================================================
// Layer 3 — TaggedToken Domain Type
// ============================================================
// One token of a description as returned by a tagger:
// the surface form exactly as it appears in the text and a
// coarse part-of-speech tag (NOUN, PROPN, ADJ, PUNCT, ...).
//
// Tags are kept as strings rather than an enum because the
// tag vocabulary belongs to the tagger, not to this crate.
// The noun counter only needs to test tag membership.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token text, case preserved
    pub surface_form: String,

    /// Coarse part-of-speech tag
    pub tag: String,
}

impl TaggedToken {
    pub fn new(surface_form: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            tag:          tag.into(),
        }
    }
}
