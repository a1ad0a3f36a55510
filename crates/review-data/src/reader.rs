//! CSV dataset loading for the Park Review Explorer.
//!
//! Reads the header-driven review file into [`Review`] records for the rest
//! of the system. Loading fails softly: a missing file is reported to the
//! caller and yields an empty dataset, and malformed rows are skipped with a
//! warning rather than aborting the load.

use std::path::Path;

use review_core::error::{ExplorerError, Result};
use review_core::models::Review;
use tracing::{debug, warn};

/// Load the review dataset from `path`, in file order.
///
/// Returns [`ExplorerError::FileRead`] when the file cannot be opened (the
/// caller reports the error and continues with an empty dataset). Rows that
/// fail to parse (a non-numeric `Rating`, a short row) are skipped with a
/// warning and never abort the load.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let file = std::fs::File::open(path).map_err(|source| ExplorerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(std::io::BufReader::new(file));

    let mut reviews: Vec<Review> = Vec::new();
    let mut rows_skipped = 0u64;

    for row in reader.deserialize::<Review>() {
        match row {
            Ok(review) => reviews.push(review),
            Err(e) => {
                rows_skipped += 1;
                warn!("Skipping malformed row in {}: {}", path.display(), e);
            }
        }
    }

    debug!(
        "Loaded {} reviews from {} ({} rows skipped)",
        reviews.len(),
        path.display(),
        rows_skipped,
    );

    Ok(reviews)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "Review_ID,Rating,Year_Month,Reviewer_Location,Branch";

    fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    // ── load_reviews ─────────────────────────────────────────────────────────

    #[test]
    fn test_load_reviews_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "reviews.csv",
            &[
                "670772142,4,2019-4,Australia,Disneyland_HongKong",
                "670682799,5,2019-4,Philippines,Disneyland_HongKong",
            ],
        );

        let reviews = load_reviews(&path).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review_id, "670772142");
        assert_eq!(reviews[0].rating, 4);
        assert_eq!(reviews[1].reviewer_location, "Philippines");
    }

    #[test]
    fn test_load_reviews_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "reviews.csv",
            &[
                "3,1,2019-3,France,Disneyland_Paris",
                "1,5,2019-1,Spain,Disneyland_Paris",
                "2,3,2019-2,Italy,Disneyland_Paris",
            ],
        );

        let reviews = load_reviews(&path).unwrap();
        let ids: Vec<&str> = reviews.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_load_reviews_missing_file() {
        let err = load_reviews(Path::new("/tmp/does-not-exist-reviews-xyz.csv")).unwrap_err();
        assert!(matches!(err, ExplorerError::FileRead { .. }));
    }

    #[test]
    fn test_load_reviews_skips_non_numeric_rating() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "reviews.csv",
            &[
                "1,five,2019-4,Australia,Disneyland_HongKong",
                "2,4,2019-4,Australia,Disneyland_HongKong",
            ],
        );

        let reviews = load_reviews(&path).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].review_id, "2");
    }

    #[test]
    fn test_load_reviews_keeps_malformed_year_month_verbatim() {
        // Malformed dates are a month-aggregation concern, not a load error.
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "reviews.csv",
            &["1,4,missing,Australia,Disneyland_HongKong"],
        );

        let reviews = load_reviews(&path).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].year_month, "missing");
    }

    #[test]
    fn test_load_reviews_quoted_location_with_comma() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "reviews.csv",
            &["1,4,2019-4,\"Taiwan, Province of China\",Disneyland_HongKong"],
        );

        let reviews = load_reviews(&path).unwrap();
        assert_eq!(reviews[0].reviewer_location, "Taiwan, Province of China");
    }

    #[test]
    fn test_load_reviews_empty_data_section() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "reviews.csv", &[]);

        let reviews = load_reviews(&path).unwrap();
        assert!(reviews.is_empty());
    }
}
