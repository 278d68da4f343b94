// ============================================================
// Layer 4 — Record Loader
// ============================================================
// Loads description records from the annotation JSON file.
//
// Expected input: a JSON array of objects, each with at least
//   image, participant, normalized_description, filename
//
//   [
//     { "image": "img_01", "participant": "p07",
//       "normalized_description": "een kat op de mat",
//       "filename": "img_01.jpg", "duration": 4.2 },
//     ...
//   ]
//
// Extra keys are ignored. A missing or non-string required
// field fails the whole load — records are never skipped, so
// the per-image medians are always computed over every
// description in the file.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::record::DescriptionRecord;
use crate::domain::traits::RecordSource;

pub struct JsonRecordLoader {
    /// Path to the annotation JSON file
    path: PathBuf,
}

impl JsonRecordLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordLoader {
    fn load_all(&self) -> Result<Vec<DescriptionRecord>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read annotations from '{}'", self.path.display()))?;

        let records: Vec<DescriptionRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Malformed annotation records in '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} description records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
