// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns that touch the outside world or configuration:
//
//   lexicon_tagger.rs — Tagger implementation
//                       Splits text with the tokenizers crate
//                       and tags words from a JSON lexicon.
//                       Loaded once per run.
//
//   exporter.rs       — Output files
//                       Flat CSV of enriched records and the
//                       per-image medians JSON, both written
//                       atomically.
//
//   vocabulary.rs     — Noun vocabulary
//                       Noun tags and excluded nouns used by
//                       the noun counter, with Dutch defaults
//                       and an optional JSON override.

/// Lexicon-backed part-of-speech tagger
pub mod lexicon_tagger;

/// CSV and JSON writers
pub mod exporter;

/// Noun tag set and exclusion list
pub mod vocabulary;
