//! Application root context
//!
//! Owns the localization subsystem and the game store for the lifetime of
//! the application and hands out shared handles to the components that need
//! them.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Settings;
use crate::document::Document;
use crate::i18n::{I18n, system_locale};
use crate::models::GameSettings;
use crate::state::store::{GameStore, StoreHandle};
use crate::utils::errors::Result;

/// Application-wide context containing the shared subsystems
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub document: Document,
    pub i18n: Arc<I18n>,
    pub store: StoreHandle,
}

impl AppContext {
    /// Build the context using the language reported by the system
    pub fn new(settings: Settings) -> Result<Self> {
        let preferred = settings
            .i18n
            .preferred_language
            .clone()
            .unwrap_or_else(system_locale);
        Self::with_locale(settings, &preferred)
    }

    /// Build the context for an explicit preferred locale tag
    pub fn with_locale(settings: Settings, preferred: &str) -> Result<Self> {
        let document = Document::new();
        let i18n = Arc::new(I18n::new(&settings.i18n, document.clone(), Some(preferred))?);

        let mut game_settings = GameSettings::for_locale(preferred);
        settings.game.apply(&mut game_settings);
        let store = GameStore::new(game_settings).into_handle();

        info!(
            preferred = preferred,
            fallback = i18n.fallback_language(),
            "Application context created"
        );

        Ok(Self {
            settings,
            document,
            i18n,
            store,
        })
    }

    /// Declare the document language and start loading the preferred bundle
    pub fn start(&self) -> JoinHandle<()> {
        self.i18n.bootstrap()
    }

    /// Another handle to the game store
    pub fn store(&self) -> StoreHandle {
        Arc::clone(&self.store)
    }
}
