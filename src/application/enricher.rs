// ============================================================
// Layer 2 — Enricher
// ============================================================
// Turns DescriptionRecords into EnrichedRecords:
//
//   for each record (input order):
//       tokens    = tagger.tag(normalized_description)
//       num_nouns = counter.count_nouns(tokens)
//       pos       = tags joined by spaces
//
// The tagger is passed in already constructed, so an expensive
// model or lexicon load happens once per run and tests can hand
// in a fake. A tagging failure aborts the run: there is no
// partial-failure policy.

use anyhow::{Context, Result};

use crate::analysis::noun_counter::NounCounter;
use crate::domain::record::{DescriptionRecord, EnrichedRecord};
use crate::domain::traits::Tagger;

pub struct Enricher<'a> {
    tagger:  &'a dyn Tagger,
    counter: &'a NounCounter,
}

impl<'a> Enricher<'a> {
    pub fn new(tagger: &'a dyn Tagger, counter: &'a NounCounter) -> Self {
        Self { tagger, counter }
    }

    /// Annotate a single record
    pub fn enrich_one(&self, record: DescriptionRecord) -> Result<EnrichedRecord> {
        let tokens   = self.tagger.tag(&record.normalized_description)?;
        let analysis = self.counter.analyze(&tokens);

        tracing::debug!(
            "{} / {}: {} nouns [{}]",
            record.image,
            record.participant,
            analysis.num_nouns,
            analysis.pos
        );

        Ok(EnrichedRecord::new(record, analysis.num_nouns, analysis.pos))
    }

    /// Annotate every record, keeping input order.
    pub fn enrich(&self, records: Vec<DescriptionRecord>) -> Result<Vec<EnrichedRecord>> {
        let total = records.len();
        let mut enriched = Vec::with_capacity(total);

        for (i, record) in records.into_iter().enumerate() {
            let (image, participant) = (record.image.clone(), record.participant.clone());
            let e = self.enrich_one(record).with_context(|| {
                format!(
                    "Tagging failed for record {} (image '{}', participant '{}')",
                    i, image, participant
                )
            })?;
            enriched.push(e);
        }

        tracing::info!("Enriched {} records", total);
        Ok(enriched)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::token::TaggedToken;

    /// Test double: each whitespace-separated word is written as
    /// TAG:word, e.g. "DET:een NOUN:kat". Fails on the word "FAIL".
    pub(crate) struct FakeTagger;

    impl Tagger for FakeTagger {
        fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
            text.split_whitespace()
                .map(|w| match w.split_once(':') {
                    Some((tag, word)) => Ok(TaggedToken::new(word, tag)),
                    None => anyhow::bail!("fake tagger cannot parse '{}'", w),
                })
                .collect()
        }
    }

    #[test]
    fn test_enrich_attaches_fields_in_order() {
        let counter = NounCounter::default();
        let enricher = Enricher::new(&FakeTagger, &counter);

        let records = vec![
            DescriptionRecord::new("A", "p1", "DET:een NOUN:kat CCONJ:en DET:een NOUN:hond", "A.jpg"),
            DescriptionRecord::new("B", "p1", "NOUN:voorgrond", "B.jpg"),
            DescriptionRecord::new("A", "p2", "", "A.jpg"),
        ];

        let out = enricher.enrich(records).unwrap();
        assert_eq!(out.len(), 3);

        assert_eq!(out[0].num_nouns, 2);
        assert_eq!(out[0].pos, "DET NOUN CCONJ DET NOUN");
        assert_eq!(out[0].record.participant, "p1");

        assert_eq!(out[1].num_nouns, 0);
        assert_eq!(out[1].pos, "NOUN");

        assert_eq!(out[2].num_nouns, 0);
        assert_eq!(out[2].pos, "");
    }

    #[test]
    fn test_tagger_failure_aborts_run() {
        let counter = NounCounter::default();
        let enricher = Enricher::new(&FakeTagger, &counter);

        let records = vec![
            DescriptionRecord::new("A", "p1", "NOUN:kat", "A.jpg"),
            DescriptionRecord::new("B", "p9", "FAIL", "B.jpg"),
        ];

        let err = enricher.enrich(records).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("record 1"));
        assert!(msg.contains("p9"));
    }
}
