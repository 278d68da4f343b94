// ============================================================
// Layer 5 — Aggregator
// ============================================================
// Summarises noun usage per image.
//
// Every image is described by several participants, so each
// image has a multiset of noun counts. We reduce that multiset
// to its median:
//
//   image "A": [3, 1]     → sorted [1, 3]    → (1 + 3) / 2 = 2
//   image "B": [2]        → 2
//   image "C": [1, 2, 3]  → 2
//
// Groups are built only from observed images, so no group is
// ever empty and every input image gets exactly one entry.
//
// A BTreeMap keeps the keys sorted, which makes the JSON
// export deterministic between runs.

use std::collections::BTreeMap;

use crate::domain::record::EnrichedRecord;

/// Image identifier → median noun count
pub type ImageMedians = BTreeMap<String, f64>;

/// Group records by image and compute the median noun count of each group.
pub fn median_nouns(records: &[EnrichedRecord]) -> ImageMedians {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for r in records {
        groups.entry(r.image()).or_default().push(r.num_nouns);
    }

    let medians: ImageMedians = groups
        .into_iter()
        .filter_map(|(image, mut counts)| {
            median(&mut counts).map(|m| (image.to_string(), m))
        })
        .collect();

    tracing::debug!(
        "Computed noun medians for {} images from {} records",
        medians.len(),
        records.len()
    );

    medians
}

/// Median of a multiset. Sorts the slice in place.
/// Even-sized input → mean of the two middle values.
/// Returns None for an empty slice.
pub fn median(values: &mut [usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();

    let mid = values.len() / 2;
    let m = if values.len() % 2 == 1 {
        values[mid] as f64
    } else {
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    };
    Some(m)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::DescriptionRecord;

    fn rec(image: &str, num_nouns: usize) -> EnrichedRecord {
        EnrichedRecord::new(
            DescriptionRecord::new(image, "p", "text", "f.jpg"),
            num_nouns,
            "",
        )
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&mut [1, 2, 3]), Some(2.0));
        assert_eq!(median(&mut [3, 1, 2]), Some(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&mut [1, 2, 3, 4]), Some(2.5));
        assert_eq!(median(&mut [4, 1]), Some(2.5));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&mut [5]), Some(5.0));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_median_nouns_per_image() {
        let records = vec![rec("im1", 1), rec("im2", 7), rec("im1", 3), rec("im1", 2)];
        let m = median_nouns(&records);
        assert_eq!(m.get("im1"), Some(&2.0));
        assert_eq!(m.get("im2"), Some(&7.0));
    }

    #[test]
    fn test_keys_match_image_set() {
        let records = vec![rec("b", 1), rec("a", 2), rec("c", 0), rec("a", 4), rec("b", 1)];
        let m = median_nouns(&records);
        let keys: Vec<&str> = m.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(m["a"], 3.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(median_nouns(&[]).is_empty());
    }
}
