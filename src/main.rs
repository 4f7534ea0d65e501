//! WheelQuiz
//!
//! Main application entry point

use tracing::{info, warn};

use WheelQuiz::{
    config::Settings,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", WheelQuiz::info());

    // Install translations and the game store
    let context = AppContext::new(settings)?;
    let language_load = context.start();

    {
        let store = context.store.read().await;
        info!(
            teams = store.team_count(),
            team_count = store.state().settings.team_count,
            language = %store.state().settings.language,
            "Game store ready"
        );
    }

    info!(title = %context.i18n.t("app.title", None), "Application mounted");

    if let Err(e) = language_load.await {
        warn!(error = %e, "Language loading task did not complete");
    }

    info!(
        active = %context.i18n.active_language(),
        document_lang = ?context.document.lang(),
        locales = ?context.i18n.available_locales(),
        "Localization settled"
    );

    Ok(())
}
