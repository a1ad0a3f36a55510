//! Menu definitions and choice parsing.
//!
//! Each menu is a typed enum with a `parse` constructor; unrecognised input
//! maps to `None` and the caller re-prompts. Menu text is kept next to the
//! enum it drives.

/// Top-level menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    ViewData,
    VisualizeData,
    ExportData,
    Exit,
}

impl MainMenuChoice {
    /// Menu text shown before the prompt.
    pub const TEXT: &'static str = "Main Menu\n\
         A. View data\n\
         B. Visualize data\n\
         C. Export Park Data\n\
         D. Exit";

    /// Parse a main-menu choice, accepting either case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_uppercase().as_str() {
            "A" => Some(Self::ViewData),
            "B" => Some(Self::VisualizeData),
            "C" => Some(Self::ExportData),
            "D" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Choices of the view-data sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMenuChoice {
    ReviewsForPark,
    CountFromLocation,
    AverageForYear,
    AveragesByLocation,
    Back,
}

impl ViewMenuChoice {
    pub const TEXT: &'static str = "\nSub-Menu A: View Data\n\
         1. View all reviews for a specific park\n\
         2. Count reviews from a specific location\n\
         3. Average rating for a park in a given year\n\
         4. Display average score per park by reviewer location\n\
         5. Return to main menu";

    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::ReviewsForPark),
            "2" => Some(Self::CountFromLocation),
            "3" => Some(Self::AverageForYear),
            "4" => Some(Self::AveragesByLocation),
            "5" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Choices of the visualize-data sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizeMenuChoice {
    ReviewShareByPark,
    AverageScoreByPark,
    TopLocationsForPark,
    AverageRatingByMonth,
    Back,
}

impl VisualizeMenuChoice {
    pub const TEXT: &'static str = "\nSub-Menu B: Visualize Data\n\
         1. Chart of reviews by park\n\
         2. Bar chart of average review scores\n\
         3. Top 10 locations for a park\n\
         4. Average rating by month\n\
         5. Return to main menu";

    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::ReviewShareByPark),
            "2" => Some(Self::AverageScoreByPark),
            "3" => Some(Self::TopLocationsForPark),
            "4" => Some(Self::AverageRatingByMonth),
            "5" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Export file formats offered by the export flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    /// Parse a format name as typed by the user (already lowercased).
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── MainMenuChoice ───────────────────────────────────────────────────────

    #[test]
    fn test_main_menu_parse_uppercase() {
        assert_eq!(MainMenuChoice::parse("A"), Some(MainMenuChoice::ViewData));
        assert_eq!(
            MainMenuChoice::parse("B"),
            Some(MainMenuChoice::VisualizeData)
        );
        assert_eq!(MainMenuChoice::parse("C"), Some(MainMenuChoice::ExportData));
        assert_eq!(MainMenuChoice::parse("D"), Some(MainMenuChoice::Exit));
    }

    #[test]
    fn test_main_menu_parse_lowercase() {
        assert_eq!(MainMenuChoice::parse("a"), Some(MainMenuChoice::ViewData));
        assert_eq!(MainMenuChoice::parse("d"), Some(MainMenuChoice::Exit));
    }

    #[test]
    fn test_main_menu_parse_invalid() {
        assert_eq!(MainMenuChoice::parse("E"), None);
        assert_eq!(MainMenuChoice::parse(""), None);
        assert_eq!(MainMenuChoice::parse("AB"), None);
    }

    // ── ViewMenuChoice ───────────────────────────────────────────────────────

    #[test]
    fn test_view_menu_parse() {
        assert_eq!(
            ViewMenuChoice::parse("1"),
            Some(ViewMenuChoice::ReviewsForPark)
        );
        assert_eq!(ViewMenuChoice::parse("5"), Some(ViewMenuChoice::Back));
    }

    #[test]
    fn test_view_menu_parse_invalid() {
        assert_eq!(ViewMenuChoice::parse("0"), None);
        assert_eq!(ViewMenuChoice::parse("6"), None);
        assert_eq!(ViewMenuChoice::parse("one"), None);
    }

    // ── VisualizeMenuChoice ──────────────────────────────────────────────────

    #[test]
    fn test_visualize_menu_parse() {
        assert_eq!(
            VisualizeMenuChoice::parse("1"),
            Some(VisualizeMenuChoice::ReviewShareByPark)
        );
        assert_eq!(
            VisualizeMenuChoice::parse("4"),
            Some(VisualizeMenuChoice::AverageRatingByMonth)
        );
        assert_eq!(VisualizeMenuChoice::parse("5"), Some(VisualizeMenuChoice::Back));
    }

    #[test]
    fn test_visualize_menu_parse_invalid() {
        assert_eq!(VisualizeMenuChoice::parse(""), None);
        assert_eq!(VisualizeMenuChoice::parse("9"), None);
    }

    // ── ExportFormat ─────────────────────────────────────────────────────────

    #[test]
    fn test_export_format_parse() {
        assert_eq!(ExportFormat::parse("txt"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("csv"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("json"), Some(ExportFormat::Json));
    }

    #[test]
    fn test_export_format_parse_invalid() {
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(ExportFormat::parse(""), None);
        // Parsing expects the caller to have lowercased already.
        assert_eq!(ExportFormat::parse("TXT"), None);
    }
}
