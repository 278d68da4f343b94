// ============================================================
// Layer 4 — Data Input
// ============================================================
// Everything needed to get description records into memory.
//
//   annotation JSON
//       │
//       ▼
//   JsonRecordLoader  → Vec<DescriptionRecord>
//
// Reading the file is the loader's only job; tagging and
// counting happen in the application and analysis layers.

/// Loads description records from a JSON array
pub mod loader;
