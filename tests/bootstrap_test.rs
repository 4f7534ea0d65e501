//! Application bootstrap from configuration

mod helpers;

use helpers::*;
use serial_test::serial;
use WheelQuiz::{config::Settings, AppContext};

#[test]
#[serial]
fn test_settings_from_environment() {
    std::env::set_var("WHEELQUIZ__GAME__TEAM_COUNT", "5");
    std::env::set_var("WHEELQUIZ__I18N__PREFERRED_LANGUAGE", "fr");

    let settings = Settings::new().expect("settings should load");

    std::env::remove_var("WHEELQUIZ__GAME__TEAM_COUNT");
    std::env::remove_var("WHEELQUIZ__I18N__PREFERRED_LANGUAGE");

    assert_eq!(settings.game.team_count, Some(5));
    assert_eq!(settings.i18n.preferred_language.as_deref(), Some("fr"));
    assert_eq!(settings.i18n.fallback_language, "en");
    assert!(settings.validate().is_ok());
}

#[tokio::test]
#[serial]
async fn test_context_starts_with_preferred_language() {
    let bundles = BundleDir::new();
    let mut settings = Settings::default();
    settings.i18n = bundles.config();
    settings.i18n.preferred_language = Some("fr".to_string());

    let context = AppContext::new(settings).unwrap();
    context.start().await.unwrap();

    assert!(context.i18n.is_registered("fr"));
    assert_eq!(context.i18n.active_language(), "fr");
    assert_eq!(context.document.lang().as_deref(), Some("fr"));

    let store = context.store.read().await;
    assert_eq!(store.state().settings.language, "fr");
    assert!(store.state().teams.is_empty());
}

#[tokio::test]
#[serial]
async fn test_context_with_unsupported_language() {
    let bundles = BundleDir::new();
    let mut settings = Settings::default();
    settings.i18n = bundles.config();

    let context = AppContext::with_locale(settings, "pt-BR").unwrap();
    context.start().await.unwrap();

    assert_eq!(context.i18n.available_locales(), vec!["en".to_string()]);
    assert_eq!(context.i18n.active_language(), "pt-BR");
    assert_eq!(context.document.lang().as_deref(), Some("en"));

    let store = context.store.read().await;
    assert_eq!(store.state().settings.language, "pt");
}

#[tokio::test]
async fn test_store_and_i18n_are_independent() {
    let bundles = BundleDir::new();
    let mut settings = Settings::default();
    settings.i18n = bundles.config();

    let context = AppContext::with_locale(settings, "en").unwrap();
    context.store.write().await.set_team_count(4);
    context.i18n.set_language("es", true).await;

    let store = context.store.read().await;
    assert_eq!(store.team_count(), 4);
    assert_eq!(store.state().settings.language, "en");
    assert_eq!(context.i18n.active_language(), "es");
}
