//! Book Rating Pipeline - Main Entry Point
//!
//! Loads the pre-trained rating artifacts, prompts for a book title and
//! description, and prints the linear and bucket rating predictions.

use anyhow::Result;
use book_rating_pipeline::{
    config::AppConfig, models::inference::InferenceEngine, normalizer::TextNormalizer, prompt,
    report,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config)?;
    info!(models_dir = %config.models.models_dir, "Configuration loaded");

    let engine = InferenceEngine::new(&config)?;
    info!(
        vocabulary = engine.vocabulary_size(),
        selected = engine.selected_features(),
        "Inference engine initialized"
    );

    let normalizer = TextNormalizer::new();
    let book = prompt::read_book_input()?;

    let normalized = normalizer.normalize(&book.title, &book.description);
    debug!(normalized = %normalized, "Input normalized");

    let prediction = engine.predict(&normalized)?;
    report::print_report(&prediction)?;

    Ok(())
}

/// Initialize tracing on stderr, keeping stdout for prompts and the report.
fn init_logging(config: &AppConfig) -> Result<()> {
    let directive = format!("book_rating_pipeline={}", config.logging.level);
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
