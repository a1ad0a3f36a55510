mod bootstrap;

use anyhow::Result;
use clap::Parser;
use review_core::error::ExplorerError;
use review_core::settings::Settings;
use review_data::reader::load_reviews;
use review_ui::app::App;
use review_ui::prompts;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Park Review Explorer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Dataset: {}, Theme: {}",
        settings.file.display(),
        settings.theme
    );

    // A missing dataset is reported, not fatal: the session continues with
    // an empty record set and every query answers "no data".
    let reviews = match load_reviews(&settings.file) {
        Ok(reviews) => {
            prompts::display_message(&format!(
                "Dataset loaded successfully. Total rows: {}",
                reviews.len()
            ));
            reviews
        }
        Err(ExplorerError::FileRead { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            prompts::display_error(&format!(
                "The file '{}' was not found.",
                settings.file.display()
            ));
            tracing::warn!("Continuing with an empty dataset");
            Vec::new()
        }
        Err(e) => {
            prompts::display_error(&e.to_string());
            tracing::warn!("Continuing with an empty dataset");
            Vec::new()
        }
    };

    let app = App::new(&settings.theme, reviews);
    app.run()?;

    Ok(())
}
