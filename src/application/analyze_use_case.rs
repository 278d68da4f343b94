// ============================================================
// Layer 2 — AnalyzeUseCase
// ============================================================
// Orchestrates one full analysis run:
//
//   Step 1: Load description records     (Layer 4 - data)
//   Step 2: Tag + count nouns per record (Layer 2 - enricher)
//   Step 3: Stable sort by noun count    (optional, default on)
//   Step 4: Write the flat CSV export    (Layer 6 - infra)
//   Step 5: Median noun count per image  (Layer 5 - analysis)
//   Step 6: Write the medians JSON       (Layer 6 - infra)
//
// The tagger is built by the caller and handed in, so this
// struct never knows whether it talks to a lexicon, a model,
// or a test fake.

use anyhow::Result;
use std::path::PathBuf;

use crate::analysis::aggregator::median_nouns;
use crate::analysis::noun_counter::NounCounter;
use crate::application::enricher::Enricher;
use crate::data::loader::JsonRecordLoader;
use crate::domain::traits::{RecordSource, Tagger};
use crate::infra::exporter::{write_medians_json, write_records_csv, RecordField, DEFAULT_FIELDS};
use crate::infra::vocabulary::NounVocabulary;

pub const DEFAULT_INPUT_PATH: &str = "Resources/annotations_final.json";
pub const DEFAULT_CSV_PATH: &str = "annotated_data.csv";
pub const DEFAULT_MEDIANS_PATH: &str = "noun_medians.json";

// ─── Analysis Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input_path:    PathBuf,
    pub csv_path:      PathBuf,
    pub medians_path:  PathBuf,
    /// Columns of the CSV export, in order
    pub fields:        Vec<RecordField>,
    pub vocabulary:    NounVocabulary,
    /// Stable-sort records by num_nouns (ascending) before export
    pub sort_by_nouns: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            input_path:    PathBuf::from(DEFAULT_INPUT_PATH),
            csv_path:      PathBuf::from(DEFAULT_CSV_PATH),
            medians_path:  PathBuf::from(DEFAULT_MEDIANS_PATH),
            fields:        DEFAULT_FIELDS.to_vec(),
            vocabulary:    NounVocabulary::default(),
            sort_by_nouns: true,
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub records:      usize,
    pub images:       usize,
    pub csv_path:     PathBuf,
    pub medians_path: PathBuf,
}

// ─── AnalyzeUseCase ───────────────────────────────────────────────────────────
pub struct AnalyzeUseCase {
    config:  AnalyzeConfig,
    tagger:  Box<dyn Tagger>,
    counter: NounCounter,
}

impl AnalyzeUseCase {
    pub fn new(config: AnalyzeConfig, tagger: Box<dyn Tagger>) -> Self {
        let counter = NounCounter::new(config.vocabulary.clone());
        Self { config, tagger, counter }
    }

    /// Run the pipeline on the configured annotation file
    pub fn execute(&self) -> Result<AnalysisReport> {
        let loader = JsonRecordLoader::new(&self.config.input_path);
        self.run(&loader)
    }

    /// Run the pipeline on any record source
    pub fn run(&self, source: &dyn RecordSource) -> Result<AnalysisReport> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let records = source.load_all()?;

        // ── Step 2: Enrich ────────────────────────────────────────────────────
        let enricher = Enricher::new(self.tagger.as_ref(), &self.counter);
        let mut enriched = enricher.enrich(records)?;

        // ── Step 3: Sort ──────────────────────────────────────────────────────
        // sort_by_key is stable: ties keep their input order
        if cfg.sort_by_nouns {
            enriched.sort_by_key(|r| r.num_nouns);
        }

        // ── Step 4: Flat export ───────────────────────────────────────────────
        write_records_csv(&cfg.csv_path, &enriched, &cfg.fields)?;

        // ── Step 5 + 6: Per-image medians ─────────────────────────────────────
        let medians = median_nouns(&enriched);
        write_medians_json(&cfg.medians_path, &medians)?;

        tracing::info!(
            "Analysis complete: {} records over {} images",
            enriched.len(),
            medians.len()
        );

        Ok(AnalysisReport {
            records:      enriched.len(),
            images:       medians.len(),
            csv_path:     cfg.csv_path.clone(),
            medians_path: cfg.medians_path.clone(),
        })
    }
}
