use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive explorer for a CSV dataset of theme-park reviews.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "review-explorer",
    about = "Interactive explorer for a CSV dataset of theme-park reviews",
    version
)]
pub struct Settings {
    /// Path to the review dataset
    #[arg(long, default_value = "disneyland_reviews.csv")]
    pub file: PathBuf,

    /// Display theme for chart screens
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path (stderr when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
