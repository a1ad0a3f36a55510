//! Pure filter and aggregation queries over the loaded review records.
//!
//! Every function takes the full record slice plus its filter parameters and
//! produces a value without side effects. An empty filter result is always a
//! well-defined zero or empty value; nothing here panics or divides by zero.
//! Grouped results keep the first-occurrence order of their keys so repeated
//! runs over the same dataset display identically.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use review_core::models::{parse_year_month, Review};

// ── RatingTally ───────────────────────────────────────────────────────────────

/// Running sum and count of ratings for one grouping bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingTally {
    sum: i64,
    count: u64,
}

impl RatingTally {
    /// Add one rating to the tally.
    pub fn add(&mut self, rating: i64) {
        self.sum += rating;
        self.count += 1;
    }

    /// Mean of the added ratings, `0.0` for an empty tally.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }

    /// Number of ratings added.
    pub fn count(&self) -> u64 {
        self.count
    }
}

// ── Grouped ───────────────────────────────────────────────────────────────────

/// A string-keyed accumulator that remembers the order in which keys were
/// first seen, so grouped output follows the dataset rather than the hash or
/// sort order of the keys.
#[derive(Debug, Default)]
struct Grouped<T> {
    order: Vec<String>,
    buckets: HashMap<String, T>,
}

impl<T: Default> Grouped<T> {
    /// Mutable access to the bucket for `key`, creating it on first use.
    fn bucket(&mut self, key: &str) -> &mut T {
        match self.buckets.entry(key.to_string()) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                self.order.push(key.to_string());
                vacant.insert(T::default())
            }
        }
    }

    /// Consume the accumulator, yielding `(key, bucket)` pairs in
    /// first-occurrence order.
    fn into_pairs(mut self) -> Vec<(String, T)> {
        self.order
            .into_iter()
            .filter_map(|key| self.buckets.remove(&key).map(|bucket| (key, bucket)))
            .collect()
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// All reviews whose `branch` exactly matches `park`, in file order.
pub fn reviews_for_park<'a>(reviews: &'a [Review], park: &str) -> Vec<&'a Review> {
    reviews.iter().filter(|r| r.branch == park).collect()
}

/// Number of reviews matching both `park` and `location` exactly.
pub fn count_from_location(reviews: &[Review], park: &str, location: &str) -> u64 {
    reviews
        .iter()
        .filter(|r| r.branch == park && r.reviewer_location == location)
        .count() as u64
}

/// Average rating for `park` across all reviews whose `year_month` starts
/// with the `year` string (prefix match, no date parse).
///
/// Returns `None` when no review matches, so callers report "no data"
/// instead of dividing by zero.
pub fn average_rating_for_year(reviews: &[Review], park: &str, year: &str) -> Option<f64> {
    let mut tally = RatingTally::default();
    for review in reviews {
        if review.branch == park && review.year_month.starts_with(year) {
            tally.add(review.rating);
        }
    }
    if tally.count() == 0 {
        return None;
    }
    Some(tally.average())
}

/// Average rating per reviewer location, grouped per park.
///
/// Both grouping levels keep the first-occurrence order of their keys.
pub fn average_scores_by_location(reviews: &[Review]) -> Vec<(String, Vec<(String, f64)>)> {
    let mut parks: Grouped<Grouped<RatingTally>> = Grouped::default();

    for review in reviews {
        parks
            .bucket(&review.branch)
            .bucket(&review.reviewer_location)
            .add(review.rating);
    }

    parks
        .into_pairs()
        .into_iter()
        .map(|(park, locations)| {
            let averages = locations
                .into_pairs()
                .into_iter()
                .map(|(location, tally)| (location, tally.average()))
                .collect();
            (park, averages)
        })
        .collect()
}

/// Average rating for `park` in each calendar month, January..December.
///
/// Reviews whose `year_month` is missing, hyphen-less, or unparsable are
/// silently skipped. A month with no parsable reviews averages to `0.0`.
pub fn average_rating_by_month(reviews: &[Review], park: &str) -> [f64; 12] {
    let mut tallies = [RatingTally::default(); 12];

    for review in reviews {
        if review.branch != park {
            continue;
        }
        let Some((_, month)) = parse_year_month(&review.year_month) else {
            continue;
        };
        tallies[(month - 1) as usize].add(review.rating);
    }

    tallies.map(|tally| tally.average())
}

/// Up to `n` reviewer locations for `park` with the highest average rating,
/// sorted descending. The sort is stable, so tied locations keep their
/// first-encountered order. Locations need at least one review to appear.
pub fn top_locations_by_average(reviews: &[Review], park: &str, n: usize) -> Vec<(String, f64)> {
    let mut locations: Grouped<RatingTally> = Grouped::default();

    for review in reviews {
        if review.branch == park {
            locations.bucket(&review.reviewer_location).add(review.rating);
        }
    }

    let mut averages: Vec<(String, f64)> = locations
        .into_pairs()
        .into_iter()
        .map(|(location, tally)| (location, tally.average()))
        .collect();

    averages.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    averages.truncate(n);
    averages
}

/// Review count per park, in first-occurrence order.
pub fn review_counts_by_park(reviews: &[Review]) -> Vec<(String, u64)> {
    let mut counts: Grouped<u64> = Grouped::default();
    for review in reviews {
        *counts.bucket(&review.branch) += 1;
    }
    counts.into_pairs()
}

/// Average rating per park, in first-occurrence order.
pub fn average_score_by_park(reviews: &[Review]) -> Vec<(String, f64)> {
    let mut tallies: Grouped<RatingTally> = Grouped::default();
    for review in reviews {
        tallies.bucket(&review.branch).add(review.rating);
    }
    tallies
        .into_pairs()
        .into_iter()
        .map(|(park, tally)| (park, tally.average()))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
