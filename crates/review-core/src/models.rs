use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single park review record read from the CSV dataset.
///
/// Field names are mapped 1:1 onto the dataset's header row. Records are
/// immutable once loaded; the loaded `Vec<Review>` is passed by reference
/// into the query engine, the exporter, and the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Park identifier distinguishing which park the review belongs to.
    #[serde(rename = "Branch")]
    pub branch: String,
    /// Unique review identifier. Kept as a string; never interpreted.
    #[serde(rename = "Review_ID")]
    pub review_id: String,
    /// Star rating, 1–5 expected but not range-validated.
    #[serde(rename = "Rating")]
    pub rating: i64,
    /// Country or region the reviewer reported.
    #[serde(rename = "Reviewer_Location")]
    pub reviewer_location: String,
    /// Review date as `YYYY-MM`. May be malformed or empty; kept verbatim
    /// and parsed lazily via [`parse_year_month`].
    #[serde(rename = "Year_Month")]
    pub year_month: String,
}

impl Review {
    /// Whether this review counts as positive (rating of 4 or above).
    pub fn is_positive(&self) -> bool {
        self.rating >= 4
    }
}

/// The four-field aggregated summary produced per park for export.
///
/// Serialized key names and their order are fixed; all three export formats
/// emit the fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkSummary {
    /// Number of reviews for the park.
    #[serde(rename = "Total Reviews")]
    pub total_reviews: u64,
    /// Number of reviews with a rating of 4 or above.
    #[serde(rename = "Positive Reviews")]
    pub positive_reviews: u64,
    /// Mean rating, `0.0` when the park has no reviews.
    #[serde(rename = "Average Score")]
    pub average_score: f64,
    /// Count of distinct reviewer locations.
    #[serde(rename = "Unique Countries")]
    pub unique_countries: u64,
}

/// Parse a `Year_Month` value into `(year, month)`.
///
/// Accepts a 4-digit year, a hyphen, and a 1–2-digit month. Returns `None`
/// for empty, hyphen-less, or otherwise unparsable values and for month
/// numbers outside 1–12; callers skip such records rather than erroring.
///
/// # Examples
///
/// ```
/// use review_core::models::parse_year_month;
///
/// assert_eq!(parse_year_month("2019-4"), Some((2019, 4)));
/// assert_eq!(parse_year_month("2019-04"), Some((2019, 4)));
/// assert_eq!(parse_year_month(""), None);
/// assert_eq!(parse_year_month("missing"), None);
/// assert_eq!(parse_year_month("2019-13"), None);
/// ```
pub fn parse_year_month(value: &str) -> Option<(i32, u32)> {
    if value.is_empty() || !value.contains('-') {
        return None;
    }

    // Append a day so chrono can drive the parse; it accepts unpadded
    // month numbers the same way the dataset writes them.
    let date = NaiveDate::parse_from_str(&format!("{value}-1"), "%Y-%m-%d").ok()?;

    use chrono::Datelike;
    Some((date.year(), date.month()))
}
