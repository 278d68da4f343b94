// ============================================================
// Layer 6 — Exporter
// ============================================================
// Writes the two outputs of a run:
//
//   write_records_csv   — one row per enriched record, limited
//                         to an allow-list of fields, header
//                         row first
//
//   write_medians_json  — image → median noun count, as an
//                         indented JSON object
//
// Example CSV output:
//   image,participant,normalized_description,num_nouns,pos,filename
//   img_01,p07,"een kat, een hond",2,DET NOUN PUNCT DET NOUN,img_01.jpg
//
// Example JSON output:
//   {
//       "img_01": 2,
//       "img_02": 2.5
//   }
//
// Both files are first written to a temporary file next to the
// destination and then renamed over it, so a failed write never
// leaves a truncated output behind.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Value};
use std::{fmt, io::Write, path::Path, str::FromStr};
use tempfile::NamedTempFile;

use crate::analysis::aggregator::ImageMedians;
use crate::domain::record::EnrichedRecord;

/// A column that may appear in the flat export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Image,
    Participant,
    NormalizedDescription,
    NumNouns,
    Pos,
    Filename,
}

/// Default column set and order of the flat export
pub const DEFAULT_FIELDS: [RecordField; 6] = [
    RecordField::Image,
    RecordField::Participant,
    RecordField::NormalizedDescription,
    RecordField::NumNouns,
    RecordField::Pos,
    RecordField::Filename,
];

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image                 => "image",
            Self::Participant           => "participant",
            Self::NormalizedDescription => "normalized_description",
            Self::NumNouns              => "num_nouns",
            Self::Pos                   => "pos",
            Self::Filename              => "filename",
        }
    }

    /// The value of this field for one record, unescaped
    pub fn value(&self, r: &EnrichedRecord) -> String {
        match self {
            Self::Image                 => r.record.image.clone(),
            Self::Participant           => r.record.participant.clone(),
            Self::NormalizedDescription => r.record.normalized_description.clone(),
            Self::NumNouns              => r.num_nouns.to_string(),
            Self::Pos                   => r.pos.clone(),
            Self::Filename              => r.record.filename.clone(),
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match DEFAULT_FIELDS.iter().find(|f| f.as_str() == s) {
            Some(f) => Ok(*f),
            None => bail!("Unknown export field '{}'", s),
        }
    }
}

// ─── CSV ──────────────────────────────────────────────────────────────────────

/// Quote a CSV value when it contains a separator, quote or newline.
/// Embedded quotes are doubled.
fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the header row plus one row per record, in supplied order.
pub fn render_records_csv(records: &[EnrichedRecord], fields: &[RecordField]) -> String {
    let mut out = String::new();

    let header: Vec<&str> = fields.iter().map(RecordField::as_str).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for r in records {
        let row: Vec<String> = fields.iter().map(|f| escape_csv(&f.value(r))).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

pub fn write_records_csv(
    path:    impl AsRef<Path>,
    records: &[EnrichedRecord],
    fields:  &[RecordField],
) -> Result<()> {
    let path = path.as_ref();
    if fields.is_empty() {
        bail!("No export fields selected for '{}'", path.display());
    }

    write_atomically(path, render_records_csv(records, fields).as_bytes())?;

    tracing::info!("Wrote {} records to '{}'", records.len(), path.display());
    Ok(())
}

// ─── JSON ─────────────────────────────────────────────────────────────────────

/// Whole medians become JSON integers, the rest stay floats
fn median_value(m: f64) -> Value {
    if m.fract() == 0.0 && m >= 0.0 && m <= u64::MAX as f64 {
        Value::from(m as u64)
    } else {
        Value::from(m)
    }
}

/// Render the medians as a JSON object with 4-space indentation.
pub fn render_medians_json(medians: &ImageMedians) -> Result<String> {
    let object: Map<String, Value> = medians
        .iter()
        .map(|(image, m)| (image.clone(), median_value(*m)))
        .collect();

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    Value::Object(object)
        .serialize(&mut ser)
        .context("Cannot serialise noun medians")?;
    buf.push(b'\n');

    String::from_utf8(buf).context("Serialised medians are not valid UTF-8")
}

pub fn write_medians_json(path: impl AsRef<Path>, medians: &ImageMedians) -> Result<()> {
    let path = path.as_ref();
    write_atomically(path, render_medians_json(medians)?.as_bytes())?;

    tracing::info!("Wrote noun medians for {} images to '{}'", medians.len(), path.display());
    Ok(())
}

// ─── Atomic write ─────────────────────────────────────────────────────────────

/// Write to a temp file in the destination directory, then rename it
/// over the destination.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Cannot create temporary file in '{}'", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("Cannot write output for '{}'", path.display()))?;
    tmp.flush()?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Cannot move output into place at '{}'", path.display()))?;

    tracing::debug!("Persisted {} bytes to '{}'", contents.len(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::DescriptionRecord;
    use std::fs;

    fn rec(image: &str, desc: &str, num_nouns: usize, pos: &str) -> EnrichedRecord {
        EnrichedRecord::new(
            DescriptionRecord::new(image, "p1", desc, format!("{image}.jpg")),
            num_nouns,
            pos,
        )
    }

    #[test]
    fn test_field_names_round_trip() {
        for f in DEFAULT_FIELDS {
            assert_eq!(f.as_str().parse::<RecordField>().unwrap(), f);
        }
        assert!("doc".parse::<RecordField>().is_err());
    }

    #[test]
    fn test_csv_header_and_rows() {
        let records = vec![rec("A", "een kat", 1, "DET NOUN")];
        let csv = render_records_csv(&records, &DEFAULT_FIELDS);
        assert_eq!(
            csv,
            "image,participant,normalized_description,num_nouns,pos,filename\n\
             A,p1,een kat,1,DET NOUN,A.jpg\n"
        );
    }

    #[test]
    fn test_csv_only_allow_listed_fields_in_given_order() {
        let records = vec![rec("A", "een kat", 1, "DET NOUN")];
        let csv = render_records_csv(&records, &[RecordField::NumNouns, RecordField::Image]);
        assert_eq!(csv, "num_nouns,image\n1,A\n");
    }

    #[test]
    fn test_csv_quotes_special_values() {
        let records = vec![rec("A", "een \"grote\" kat, links", 1, "X")];
        let csv = render_records_csv(&records, &[RecordField::NormalizedDescription]);
        assert_eq!(csv, "normalized_description\n\"een \"\"grote\"\" kat, links\"\n");
    }

    #[test]
    fn test_csv_keeps_supplied_order() {
        let records = vec![rec("B", "x", 5, ""), rec("A", "y", 0, "")];
        let csv = render_records_csv(&records, &[RecordField::Image]);
        assert_eq!(csv, "image\nB\nA\n");
    }

    #[test]
    fn test_medians_json_format() {
        let mut medians = ImageMedians::new();
        medians.insert("B".to_string(), 2.5);
        medians.insert("A".to_string(), 2.0);

        let json = render_medians_json(&medians).unwrap();
        assert_eq!(json, "{\n    \"A\": 2,\n    \"B\": 2.5\n}\n");
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path  = dir.path().join("out.csv");
        let json_path = dir.path().join("out.json");

        let records = vec![rec("A", "kat", 1, "NOUN")];
        write_records_csv(&csv_path, &records, &DEFAULT_FIELDS).unwrap();

        let mut medians = ImageMedians::new();
        medians.insert("A".to_string(), 1.0);
        write_medians_json(&json_path, &medians).unwrap();

        assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 2);
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!({ "A": 1 }));

        // Only the two outputs remain; temp files were renamed away
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_records_csv(&path, &[], &DEFAULT_FIELDS).is_err());
    }

    #[test]
    fn test_empty_field_list_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_records_csv(dir.path().join("out.csv"), &[], &[]).is_err());
    }
}
