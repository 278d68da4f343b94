// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that define the core concepts
// of the system: description records, tagged tokens, and the
// seams (traits) other layers implement.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tagging or counting logic
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.

// Description records before and after enrichment
pub mod record;

// A single token produced by a tagger
pub mod token;

// Core abstractions (traits) that other layers implement
pub mod traits;
