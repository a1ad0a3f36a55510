//! Interactive application loop for the Park Review Explorer.
//!
//! [`App`] owns the theme and the loaded record set and drives the menu
//! state machine: main menu, view sub-menu, visualize sub-menu, exit. Each
//! operation runs to completion and returns to its menu; invalid input is
//! reported and re-prompted, and nothing short of the exit choice (or a
//! closed stdin) ends the loop.

use std::io;
use std::path::Path;

use tracing::debug;

use review_core::error::{ExplorerError, Result};
use review_core::formatting::format_average;
use review_core::models::Review;
use review_data::engine;
use review_data::exporter::ParkDataExporter;

use crate::charts::{self, HorizontalBarChart, ShareChart};
use crate::menu::{ExportFormat, MainMenuChoice, ViewMenuChoice, VisualizeMenuChoice};
use crate::prompts;
use crate::themes::Theme;

/// Rating charts share a fixed 0–5 axis so bars are comparable across
/// parks, locations, and months.
const RATING_SCALE_MAX: f64 = 5.0;

/// Root application state: the theme and the loaded, read-only dataset.
pub struct App {
    theme: Theme,
    reviews: Vec<Review>,
}

impl App {
    /// Construct the application over an already-loaded dataset.
    pub fn new(theme_name: &str, reviews: Vec<Review>) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            reviews,
        }
    }

    // ── Main loop ─────────────────────────────────────────────────────────────

    /// Run the interactive loop until the user chooses to exit.
    pub fn run(&self) -> Result<()> {
        loop {
            prompts::display_message(MainMenuChoice::TEXT);
            let Some(choice) = input(|| prompts::prompt("Enter your choice: "))? else {
                break;
            };

            match MainMenuChoice::parse(&choice) {
                Some(MainMenuChoice::ViewData) => self.run_view_menu()?,
                Some(MainMenuChoice::VisualizeData) => self.run_visualize_menu()?,
                Some(MainMenuChoice::ExportData) => self.run_export()?,
                Some(MainMenuChoice::Exit) => {
                    prompts::display_message("Exiting the program.");
                    break;
                }
                None => prompts::display_error("Invalid choice. Please try again."),
            }
        }
        Ok(())
    }

    // ── View sub-menu ─────────────────────────────────────────────────────────

    fn run_view_menu(&self) -> Result<()> {
        loop {
            prompts::display_message(ViewMenuChoice::TEXT);
            let Some(choice) = input(|| prompts::prompt("Enter your choice: "))? else {
                return Ok(());
            };

            match ViewMenuChoice::parse(&choice) {
                Some(ViewMenuChoice::ReviewsForPark) => {
                    let Some(park) = input(prompts::get_park_name)? else {
                        return Ok(());
                    };
                    self.show_reviews_for_park(&park);
                }
                Some(ViewMenuChoice::CountFromLocation) => {
                    let Some(park) = input(prompts::get_park_name)? else {
                        return Ok(());
                    };
                    let Some(location) = input(prompts::get_location_name)? else {
                        return Ok(());
                    };
                    self.show_location_count(&park, &location);
                }
                Some(ViewMenuChoice::AverageForYear) => {
                    let Some(park) = input(prompts::get_park_name)? else {
                        return Ok(());
                    };
                    let Some(year) = input(prompts::get_year)? else {
                        return Ok(());
                    };
                    self.show_average_for_year(&park, &year);
                }
                Some(ViewMenuChoice::AveragesByLocation) => self.show_averages_by_location(),
                Some(ViewMenuChoice::Back) => return Ok(()),
                None => prompts::display_error("Invalid choice. Please try again."),
            }
        }
    }

    fn show_reviews_for_park(&self, park: &str) {
        let matches = engine::reviews_for_park(&self.reviews, park);
        if matches.is_empty() {
            prompts::display_message(&format!("No reviews found for park: {park}"));
            return;
        }
        prompts::display_message(&format!("Displaying reviews for {park}:"));
        for review in matches {
            prompts::display_message(&review_line(review));
        }
    }

    fn show_location_count(&self, park: &str, location: &str) {
        let count = engine::count_from_location(&self.reviews, park, location);
        prompts::display_message(&format!(
            "Number of reviews from {location} for {park}: {count}"
        ));
    }

    fn show_average_for_year(&self, park: &str, year: &str) {
        match engine::average_rating_for_year(&self.reviews, park, year) {
            Some(average) => prompts::display_message(&format!(
                "Average rating for {park} in {year}: {}",
                format_average(average)
            )),
            None => prompts::display_message(&format!(
                "No reviews found for {park} in year {year}."
            )),
        }
    }

    fn show_averages_by_location(&self) {
        let grouped = engine::average_scores_by_location(&self.reviews);
        if grouped.is_empty() {
            prompts::display_message("No review data loaded.");
            return;
        }
        for (park, locations) in grouped {
            prompts::display_message(&format!("\n{park}:"));
            for (location, average) in locations {
                prompts::display_message(&format!(
                    "Location: {location}, Average Rating: {}",
                    format_average(average)
                ));
            }
        }
    }

    // ── Visualize sub-menu ────────────────────────────────────────────────────

    fn run_visualize_menu(&self) -> Result<()> {
        loop {
            prompts::display_message(VisualizeMenuChoice::TEXT);
            let Some(choice) = input(|| prompts::prompt("Enter your choice: "))? else {
                return Ok(());
            };

            match VisualizeMenuChoice::parse(&choice) {
                Some(VisualizeMenuChoice::ReviewShareByPark) => self.chart_review_share()?,
                Some(VisualizeMenuChoice::AverageScoreByPark) => self.chart_average_scores()?,
                Some(VisualizeMenuChoice::TopLocationsForPark) => {
                    let Some(park) = input(prompts::get_park_name)? else {
                        return Ok(());
                    };
                    self.chart_top_locations(&park)?;
                }
                Some(VisualizeMenuChoice::AverageRatingByMonth) => {
                    let Some(park) = input(prompts::get_park_name)? else {
                        return Ok(());
                    };
                    self.chart_monthly_averages(&park)?;
                }
                Some(VisualizeMenuChoice::Back) => return Ok(()),
                None => prompts::display_error("Invalid choice. Please try again."),
            }
        }
    }

    fn chart_review_share(&self) -> Result<()> {
        let counts = engine::review_counts_by_park(&self.reviews);
        if counts.is_empty() {
            prompts::display_message("No review data to chart.");
            return Ok(());
        }
        let lines = ShareChart::new(counts, &self.theme).to_lines();
        show_chart_screen("Number of Reviews by Park", lines, &self.theme)
    }

    fn chart_average_scores(&self) -> Result<()> {
        let averages = engine::average_score_by_park(&self.reviews);
        if averages.is_empty() {
            prompts::display_message("No review data to chart.");
            return Ok(());
        }
        let lines = HorizontalBarChart::new(averages, RATING_SCALE_MAX, &self.theme).to_lines();
        show_chart_screen("Average Review Scores by Park", lines, &self.theme)
    }

    fn chart_top_locations(&self, park: &str) -> Result<()> {
        let top = engine::top_locations_by_average(&self.reviews, park, 10);
        if top.is_empty() {
            prompts::display_message(&format!("No reviews found for park: {park}"));
            return Ok(());
        }
        let lines = HorizontalBarChart::new(top, RATING_SCALE_MAX, &self.theme).to_lines();
        show_chart_screen(
            &format!("Top 10 Locations by Average Rating for {park}"),
            lines,
            &self.theme,
        )
    }

    fn chart_monthly_averages(&self, park: &str) -> Result<()> {
        let months = engine::average_rating_by_month(&self.reviews, park);
        let bars = monthly_bars(&months);
        let lines = HorizontalBarChart::new(bars, RATING_SCALE_MAX, &self.theme).to_lines();
        show_chart_screen(
            &format!("Average Rating by Month for {park}"),
            lines,
            &self.theme,
        )
    }

    // ── Export flow ───────────────────────────────────────────────────────────

    fn run_export(&self) -> Result<()> {
        let Some(park) = input(prompts::get_park_name)? else {
            return Ok(());
        };
        let Some(format) = input(prompts::get_export_format)? else {
            return Ok(());
        };
        let Some(filename) = input(prompts::get_filename)? else {
            return Ok(());
        };

        let Some(format) = ExportFormat::parse(&format) else {
            prompts::display_error("Invalid format choice. Please try again.");
            return Ok(());
        };

        debug!("Exporting {:?} summary for {} to {}", format, park, filename);

        let exporter = ParkDataExporter::new(&self.reviews, &park);
        let path = Path::new(&filename);
        let result = match format {
            ExportFormat::Text => exporter.export_text(path),
            ExportFormat::Csv => exporter.export_csv(path),
            ExportFormat::Json => exporter.export_json(path),
        };

        match result {
            Ok(()) => prompts::display_message(&format!(
                "Exported data for {} to {filename}.",
                exporter.park()
            )),
            Err(e) => prompts::display_error(&e.to_string()),
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Show a chart full-screen, wrapping terminal failures into the error
/// taxonomy.
fn show_chart_screen(
    title: &str,
    lines: Vec<ratatui::text::Line<'static>>,
    theme: &Theme,
) -> Result<()> {
    charts::show_chart(title, lines, theme)
        .map_err(|e| ExplorerError::Terminal(e.to_string()))
}

/// Run a prompt, translating a closed stdin into `None` so menu loops can
/// wind down instead of erroring.
fn input(read: impl FnOnce() -> io::Result<String>) -> Result<Option<String>> {
    match read() {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// One display line per review in the view listing.
fn review_line(review: &Review) -> String {
    format!(
        "Review ID: {}, Rating: {}, Reviewer: {}",
        review.review_id, review.rating, review.reviewer_location
    )
}

/// Pair each month average with its calendar name, January..December.
fn monthly_bars(months: &[f64; 12]) -> Vec<(String, f64)> {
    months
        .iter()
        .enumerate()
        .map(|(i, average)| (charts::month_name(i as u32 + 1).to_string(), *average))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
