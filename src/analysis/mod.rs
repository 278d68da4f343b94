// ============================================================
// Layer 5 — Analysis
// ============================================================
// The only part of the system with non-trivial logic:
//
//   noun_counter.rs — counts nouns in one tagged description,
//                     merging compound nouns and skipping
//                     generic locative nouns
//
//   aggregator.rs   — groups enriched records per image and
//                     computes the median noun count
//
// Both are pure functions over in-memory data: no I/O, no
// tagger. That keeps them testable with hand-built tokens.

/// Compound-merging noun counter and POS trace
pub mod noun_counter;

/// Per-image median of noun counts
pub mod aggregator;
