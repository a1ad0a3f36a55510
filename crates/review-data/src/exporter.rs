//! Per-park summary export to text, CSV, and JSON files.
//!
//! [`ParkDataExporter`] aggregates the four summary fields once at
//! construction, so the exported values are a snapshot of the records it was
//! built from. All three formats overwrite the target file; write failures
//! propagate to the caller with no retry.

use std::collections::HashSet;
use std::path::Path;

use review_core::error::{ExplorerError, Result};
use review_core::formatting::format_average;
use review_core::models::{ParkSummary, Review};
use tracing::debug;

/// Computes and exports the aggregated summary for one park.
pub struct ParkDataExporter {
    park: String,
    summary: ParkSummary,
}

impl ParkDataExporter {
    /// Build an exporter for `park`, aggregating the summary immediately.
    pub fn new(reviews: &[Review], park: &str) -> Self {
        Self {
            park: park.to_string(),
            summary: aggregate(reviews, park),
        }
    }

    /// The park this exporter was built for.
    pub fn park(&self) -> &str {
        &self.park
    }

    /// The snapshot summary computed at construction.
    pub fn summary(&self) -> &ParkSummary {
        &self.summary
    }

    /// Write the summary as `Key: Value` lines in the fixed field order.
    ///
    /// The average score is written with two decimals, matching the
    /// interactive average displays.
    pub fn export_text(&self, path: &Path) -> Result<()> {
        let contents = format!(
            "Total Reviews: {}\nPositive Reviews: {}\nAverage Score: {}\nUnique Countries: {}\n",
            self.summary.total_reviews,
            self.summary.positive_reviews,
            format_average(self.summary.average_score),
            self.summary.unique_countries,
        );
        std::fs::write(path, contents).map_err(|source| ExplorerError::ExportWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Exported text summary for {} to {}", self.park, path.display());
        Ok(())
    }

    /// Write the summary as a two-line CSV: header row, then one data row.
    ///
    /// Quoting for fields containing commas is handled by the writer.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.serialize(&self.summary)?;
        writer.flush().map_err(|source| ExplorerError::ExportWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Exported CSV summary for {} to {}", self.park, path.display());
        Ok(())
    }

    /// Write the summary as one pretty-printed JSON object, keys in the
    /// fixed field order, raw float for the average.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.summary)?;
        std::fs::write(path, json).map_err(|source| ExplorerError::ExportWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Exported JSON summary for {} to {}", self.park, path.display());
        Ok(())
    }
}

/// Aggregate the four summary fields for `park` in one pass.
fn aggregate(reviews: &[Review], park: &str) -> ParkSummary {
    let mut total_reviews = 0u64;
    let mut positive_reviews = 0u64;
    let mut total_score = 0i64;
    let mut countries: HashSet<&str> = HashSet::new();

    for review in reviews {
        if review.branch != park {
            continue;
        }
        total_reviews += 1;
        if review.is_positive() {
            positive_reviews += 1;
        }
        total_score += review.rating;
        countries.insert(review.reviewer_location.as_str());
    }

    let average_score = if total_reviews > 0 {
        total_score as f64 / total_reviews as f64
    } else {
        0.0
    };

    ParkSummary {
        total_reviews,
        positive_reviews,
        average_score,
        unique_countries: countries.len() as u64,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn review(branch: &str, rating: i64, location: &str, year_month: &str) -> Review {
        Review {
            branch: branch.to_string(),
            review_id: format!("{branch}-{location}-{rating}"),
            rating,
            reviewer_location: location.to_string(),
            year_month: year_month.to_string(),
        }
    }

    fn two_review_dataset() -> Vec<Review> {
        vec![
            review("A", 4, "US", "2020-01"),
            review("A", 2, "US", "2020-02"),
        ]
    }

    // ── Aggregation ──────────────────────────────────────────────────────────

    #[test]
    fn test_summary_for_two_reviews() {
        let exporter = ParkDataExporter::new(&two_review_dataset(), "A");
        let summary = exporter.summary();
        assert_eq!(summary.total_reviews, 2);
        assert_eq!(summary.positive_reviews, 1);
        assert!((summary.average_score - 3.0).abs() < f64::EPSILON);
        assert_eq!(summary.unique_countries, 1);
    }

    #[test]
    fn test_summary_unknown_park_is_all_zero() {
        let exporter = ParkDataExporter::new(&two_review_dataset(), "B");
        let summary = exporter.summary();
        assert_eq!(summary.total_reviews, 0);
        assert_eq!(summary.positive_reviews, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.unique_countries, 0);
    }

    #[test]
    fn test_summary_positive_never_exceeds_total() {
        let data = vec![
            review("A", 5, "US", "2020-01"),
            review("A", 4, "UK", "2020-01"),
            review("A", 4, "US", "2020-03"),
            review("A", 1, "France", "2020-04"),
        ];
        let summary = ParkDataExporter::new(&data, "A").summary().clone();
        assert_eq!(summary.total_reviews, 4);
        assert_eq!(summary.positive_reviews, 3);
        assert!(summary.positive_reviews <= summary.total_reviews);
        assert_eq!(summary.unique_countries, 3);
    }

    #[test]
    fn test_summary_is_a_snapshot() {
        let mut data = two_review_dataset();
        let exporter = ParkDataExporter::new(&data, "A");
        data.push(review("A", 5, "UK", "2021-01"));
        // The exporter still reflects the records it was built from.
        assert_eq!(exporter.summary().total_reviews, 2);
    }

    // ── export_text ──────────────────────────────────────────────────────────

    #[test]
    fn test_export_text_format_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.txt");
        ParkDataExporter::new(&two_review_dataset(), "A")
            .export_text(&path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Total Reviews: 2\nPositive Reviews: 1\nAverage Score: 3.00\nUnique Countries: 1\n"
        );
    }

    #[test]
    fn test_export_text_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.txt");
        std::fs::write(&path, "stale contents").unwrap();

        ParkDataExporter::new(&two_review_dataset(), "A")
            .export_text(&path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Total Reviews: 2"));
        assert!(!contents.contains("stale"));
    }

    // ── export_csv ───────────────────────────────────────────────────────────

    #[test]
    fn test_export_csv_header_and_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.csv");
        ParkDataExporter::new(&two_review_dataset(), "A")
            .export_csv(&path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Total Reviews,Positive Reviews,Average Score,Unique Countries"
        );
        assert_eq!(lines[1], "2,1,3.0,1");
    }

    // ── export_json ──────────────────────────────────────────────────────────

    #[test]
    fn test_export_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        let exporter = ParkDataExporter::new(&two_review_dataset(), "A");
        exporter.export_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let back: ParkSummary = serde_json::from_str(&contents).unwrap();
        assert_eq!(back.total_reviews, 2);
        assert_eq!(back.positive_reviews, 1);
        assert!((back.average_score - exporter.summary().average_score).abs() < 1e-12);
        assert_eq!(back.unique_countries, 1);
    }

    #[test]
    fn test_export_json_keys_present() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        ParkDataExporter::new(&two_review_dataset(), "A")
            .export_json(&path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in [
            "Total Reviews",
            "Positive Reviews",
            "Average Score",
            "Unique Countries",
        ] {
            assert!(object.contains_key(key), "missing key: {key}");
        }
    }

    // ── Write failures ───────────────────────────────────────────────────────

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("summary.txt");
        let exporter = ParkDataExporter::new(&two_review_dataset(), "A");

        assert!(exporter.export_text(&path).is_err());
        assert!(exporter.export_csv(&path).is_err());
        assert!(exporter.export_json(&path).is_err());
    }
}
