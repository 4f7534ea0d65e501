//! Temporary translation directories

use std::sync::Arc;
use serde_json::{json, Value};
use tempfile::TempDir;

use WheelQuiz::{config::I18nConfig, Document, I18n};

/// French test bundle
pub fn french_bundle() -> Value {
    json!({
        "app": { "title": "La Roue de la Fortune" },
        "team": {
            "count": { "one": "{count} équipe", "other": "{count} équipes" }
        },
        "wheel": { "bankrupt": "Banqueroute" }
    })
}

/// Spanish test bundle
pub fn spanish_bundle() -> Value {
    json!({
        "app": { "title": "La Ruleta de la Suerte" }
    })
}

/// Directory holding `fr.json`, `es.json` and a malformed `broken.json`
pub struct BundleDir {
    pub dir: TempDir,
}

impl BundleDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let bundle_dir = Self { dir };
        bundle_dir.write("fr", &french_bundle().to_string());
        bundle_dir.write("es", &spanish_bundle().to_string());
        bundle_dir.write("broken", "{ not json");
        bundle_dir.write("list", "[1, 2, 3]");
        bundle_dir
    }

    pub fn write(&self, lang: &str, content: &str) {
        std::fs::write(self.dir.path().join(format!("{}.json", lang)), content)
            .expect("Failed to write bundle");
    }

    pub fn config(&self) -> I18nConfig {
        I18nConfig {
            fallback_language: "en".to_string(),
            translations_dir: self.dir.path().to_string_lossy().into_owned(),
            preferred_language: None,
        }
    }

    /// Loader over this directory with the given preferred locale
    pub fn i18n(&self, preferred: Option<&str>) -> (Arc<I18n>, Document) {
        let document = Document::new();
        let i18n = I18n::new(&self.config(), document.clone(), preferred)
            .expect("Failed to create i18n");
        (Arc::new(i18n), document)
    }
}
