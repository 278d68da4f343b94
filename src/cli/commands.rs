// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `analyze` and `tag`
// and all their configurable flags.
//
// Every path has a default, so `description-nouns analyze
// --lexicon nl.json` runs the whole pipeline with the standard
// file locations.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::analyze_use_case::{
    AnalyzeConfig, DEFAULT_CSV_PATH, DEFAULT_INPUT_PATH, DEFAULT_MEDIANS_PATH,
};
use crate::infra::exporter::{RecordField, DEFAULT_FIELDS};
use crate::infra::vocabulary::NounVocabulary;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag all descriptions, count nouns, write the CSV and per-image medians
    Analyze(AnalyzeArgs),

    /// Tag a single description and show the noun count
    Tag(TagArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Annotation JSON file (array of description records)
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the enriched records
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub csv_out: PathBuf,

    /// Where to write the per-image median noun counts
    #[arg(long, default_value = DEFAULT_MEDIANS_PATH)]
    pub medians_out: PathBuf,

    /// Tagger lexicon JSON
    #[arg(long)]
    pub lexicon: PathBuf,

    /// Optional JSON overriding noun tags and excluded nouns
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// CSV columns, comma separated
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<RecordField>,

    /// Keep input order in the CSV instead of sorting by noun count
    #[arg(long)]
    pub no_sort: bool,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// The description to tag
    #[arg(long)]
    pub text: String,

    /// Tagger lexicon JSON
    #[arg(long)]
    pub lexicon: PathBuf,

    /// Optional JSON overriding noun tags and excluded nouns
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}

/// Default vocabulary unless an override file was given
pub fn load_vocabulary(path: Option<&PathBuf>) -> Result<NounVocabulary> {
    match path {
        Some(p) => NounVocabulary::load(p),
        None    => Ok(NounVocabulary::default()),
    }
}

/// Convert CLI AnalyzeArgs into the application-layer AnalyzeConfig.
/// Fallible because the vocabulary may come from a file.
impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = anyhow::Error;

    fn try_from(a: AnalyzeArgs) -> Result<Self> {
        let fields = if a.fields.is_empty() {
            DEFAULT_FIELDS.to_vec()
        } else {
            a.fields
        };

        Ok(AnalyzeConfig {
            input_path:    a.input,
            csv_path:      a.csv_out,
            medians_path:  a.medians_out,
            fields,
            vocabulary:    load_vocabulary(a.vocabulary.as_ref())?,
            sort_by_nouns: !a.no_sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["description-nouns", "analyze", "--lexicon", "nl.json"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        let cfg = AnalyzeConfig::try_from(args).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(cfg.fields, DEFAULT_FIELDS.to_vec());
        assert!(cfg.sort_by_nouns);
        assert_eq!(cfg.vocabulary, NounVocabulary::default());
    }

    #[test]
    fn test_analyze_fields_and_no_sort() {
        let cli = Cli::try_parse_from([
            "description-nouns", "analyze", "--lexicon", "nl.json",
            "--fields", "image,num_nouns", "--no-sort",
        ])
        .unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        let cfg = AnalyzeConfig::try_from(args).unwrap();
        assert_eq!(cfg.fields, vec![RecordField::Image, RecordField::NumNouns]);
        assert!(!cfg.sort_by_nouns);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let res = Cli::try_parse_from([
            "description-nouns", "analyze", "--lexicon", "nl.json", "--fields", "image,doc",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_lexicon_required() {
        assert!(Cli::try_parse_from(["description-nouns", "tag", "--text", "een kat"]).is_err());
    }
}
