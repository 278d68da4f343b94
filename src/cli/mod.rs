// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All work is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `analyze` — runs the full pipeline over the annotation file
//   2. `tag`     — tags one description (handy for checking a lexicon)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnalyzeArgs, Commands, TagArgs};

use crate::analysis::noun_counter::NounCounter;
use crate::application::analyze_use_case::{AnalyzeConfig, AnalyzeUseCase};
use crate::domain::traits::Tagger;
use crate::infra::lexicon_tagger::LexiconTagger;

#[derive(Parser, Debug)]
#[command(
    name = "description-nouns",
    version,
    about = "Tag image descriptions, count nouns and summarise noun usage per image."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => run_analyze(args),
            Commands::Tag(args)     => run_tag(args),
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    tracing::info!("Analysing descriptions in '{}'", args.input.display());

    // The tagger is loaded once here and injected into the use case
    let tagger = LexiconTagger::load(&args.lexicon)?;
    let config = AnalyzeConfig::try_from(args)?;

    let report = AnalyzeUseCase::new(config, Box::new(tagger)).execute()?;

    println!(
        "Annotated {} descriptions of {} images.",
        report.records, report.images
    );
    println!("  records: {}", report.csv_path.display());
    println!("  medians: {}", report.medians_path.display());
    Ok(())
}

fn run_tag(args: TagArgs) -> Result<()> {
    let tagger  = LexiconTagger::load(&args.lexicon)?;
    let counter = NounCounter::new(commands::load_vocabulary(args.vocabulary.as_ref())?);

    let tokens   = tagger.tag(&args.text)?;
    let analysis = counter.analyze(&tokens);

    for tok in &tokens {
        println!("{:<8} {}", tok.tag, tok.surface_form);
    }
    println!("\npos:       {}", analysis.pos);
    println!("num_nouns: {}", analysis.num_nouns);
    Ok(())
}
