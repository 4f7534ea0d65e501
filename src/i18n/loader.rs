//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality: the
//! compiled-in default bundle, on-demand loading of further bundles, the
//! active language pointer and message formatting.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::I18nConfig;
use crate::document::Document;
use crate::utils::errors::{WheelQuizError, Result};
use crate::utils::logging::{log_language_event, log_language_unsupported};

/// Language whose bundle ships inside the binary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Bundles available without touching the filesystem
const EMBEDDED_BUNDLES: &[(&str, &str)] = &[
    (DEFAULT_LANGUAGE, include_str!("../../translations/en.json")),
];

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Main internationalization manager
///
/// Shared behind an `Arc`; every method takes `&self` so several bundle
/// loads can be in flight at once.
#[derive(Debug)]
pub struct I18n {
    registry: RwLock<Registry>,
    fallback_language: String,
    translations_dir: PathBuf,
    document: Document,
}

#[derive(Debug)]
struct Registry {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Language messages are resolved in first
    active: String,
}

impl I18n {
    /// Create a new I18n instance with the fallback bundle installed
    ///
    /// The active language starts at `preferred` when given, otherwise at the
    /// fallback. It is not required to be registered yet.
    pub fn new(config: &I18nConfig, document: Document, preferred: Option<&str>) -> Result<Self> {
        let source = EMBEDDED_BUNDLES
            .iter()
            .find(|(code, _)| *code == config.fallback_language)
            .map(|(_, source)| *source)
            .ok_or_else(|| WheelQuizError::Config(format!(
                "No compiled-in bundle for fallback language '{}'",
                config.fallback_language
            )))?;

        let bundle = parse_bundle(&config.fallback_language, source)?;
        debug!("Installed {} translation keys for {}",
               count_keys(&bundle), config.fallback_language);

        let mut translations = HashMap::new();
        translations.insert(config.fallback_language.clone(), bundle);

        let active = preferred
            .map(str::to_string)
            .unwrap_or_else(|| config.fallback_language.clone());

        Ok(Self {
            registry: RwLock::new(Registry { translations, active }),
            fallback_language: config.fallback_language.clone(),
            translations_dir: PathBuf::from(&config.translations_dir),
            document,
        })
    }

    /// Register the bundle for `lang`, switching to it when `replace` is set
    ///
    /// Does nothing if `lang` is already registered. A bundle that cannot be
    /// loaded is logged and the document falls back to the fallback
    /// language; the active language is left as it was. Concurrent calls for
    /// the same code are not merged and may each read the bundle.
    pub async fn set_language(&self, lang: &str, replace: bool) {
        if self.is_registered(lang) {
            return;
        }

        match self.fetch_bundle(lang).await {
            Ok(bundle) => {
                let key_count = count_keys(&bundle);
                {
                    let mut registry = self.write();
                    registry.translations.insert(lang.to_string(), bundle);
                    if replace {
                        registry.active = lang.to_string();
                    }
                }
                if replace {
                    self.document.set_lang(lang);
                }
                log_language_event(lang, "registered", Some(&format!("{} keys", key_count)));
            }
            Err(e) => {
                log_language_unsupported(lang, &self.fallback_language, &e.to_string());
                self.document.set_lang(&self.fallback_language);
            }
        }
    }

    /// Startup sequence: declare the active language on the document, then
    /// try to register its bundle in the background without switching
    pub fn bootstrap(self: &Arc<Self>) -> JoinHandle<()> {
        let lang = self.active_language();
        self.document.set_lang(&lang);

        let i18n = Arc::clone(self);
        tokio::spawn(async move {
            i18n.set_language(&lang, false).await;
        })
    }

    /// Read and parse `<translations_dir>/<lang>.json`
    async fn fetch_bundle(&self, lang: &str) -> Result<Map<String, Value>> {
        if !is_valid_code(lang) {
            return Err(WheelQuizError::InvalidInput(
                format!("Invalid language code: '{}'", lang)
            ));
        }

        let file_path = self.bundle_path(lang);
        let content = match fs::read_to_string(&file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(WheelQuizError::BundleNotFound { lang: lang.to_string() });
            }
            Err(e) => return Err(e.into()),
        };

        parse_bundle(lang, &content)
    }

    fn bundle_path(&self, lang: &str) -> PathBuf {
        self.translations_dir.join(format!("{}.json", lang))
    }

    /// Get a translated message in the active language
    pub fn t(&self, key: &str, params: Option<&TranslationParams>) -> String {
        let registry = self.read();
        let effective_lang = self.effective_language(&registry);

        let found = lookup(&registry.translations, key, effective_lang).or_else(|| {
            if effective_lang != self.fallback_language {
                lookup(&registry.translations, key, &self.fallback_language)
            } else {
                None
            }
        });

        match found {
            Some(value) => format_message(&extract_text_from_value(value), params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Get a translated message with pluralization support
    pub fn tp(&self, key: &str, count: i64, params: Option<&TranslationParams>) -> String {
        let plural_form = {
            let registry = self.read();
            get_plural_form(count, self.effective_language(&registry))
        };
        let plural_key = format!("{}.{}", key, plural_form);

        let mut final_params = params.cloned().unwrap_or_default();
        final_params.insert("count".to_string(), count.to_string());

        self.t(&plural_key, Some(&final_params))
    }

    /// Active language if its bundle is loaded, otherwise the fallback
    fn effective_language<'a>(&'a self, registry: &'a Registry) -> &'a str {
        if registry.translations.contains_key(&registry.active) {
            &registry.active
        } else {
            &self.fallback_language
        }
    }

    /// Check if a language bundle has been registered
    pub fn is_registered(&self, lang: &str) -> bool {
        self.read().translations.contains_key(lang)
    }

    /// Registered language codes, sorted
    pub fn available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.read().translations.keys().cloned().collect();
        locales.sort();
        locales
    }

    pub fn active_language(&self) -> String {
        self.read().active.clone()
    }

    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let registry = self.read();
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for (lang, translations) in &registry.translations {
            let key_count = count_keys(translations);
            stats.languages.push(LanguageStats {
                code: lang.clone(),
                key_count,
            });
            if lang == &self.fallback_language {
                stats.total_keys = key_count;
            }
        }
        stats.languages.sort_by(|a, b| a.code.cmp(&b.code));

        stats
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Language reported by the operating system, e.g. `en-US`
pub fn system_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// First two characters of a locale tag (`"en-US"` -> `"en"`)
pub fn primary_subtag(locale: &str) -> &str {
    match locale.char_indices().nth(2) {
        Some((end, _)) => &locale[..end],
        None => locale,
    }
}

/// Codes double as file names, so only plain tag characters are accepted
fn is_valid_code(lang: &str) -> bool {
    !lang.is_empty()
        && lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_bundle(lang: &str, content: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(WheelQuizError::InvalidBundle {
            lang: lang.to_string(),
            reason: "top level is not an object".to_string(),
        }),
        Err(e) => Err(WheelQuizError::InvalidBundle {
            lang: lang.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Get translation value from nested JSON structure
fn lookup<'a>(
    translations: &'a HashMap<String, Map<String, Value>>,
    key: &str,
    lang: &str,
) -> Option<&'a Value> {
    let mut parts = key.split('.');
    let mut current = translations.get(lang)?.get(parts.next()?)?;
    for part in parts {
        current = current.get(part)?;
    }
    Some(current)
}

/// Extract text from JSON value (handle both strings and objects with pluralization)
fn extract_text_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(obj) => {
            // For pluralization objects, default to "other" or first available key
            if let Some(other) = obj.get("other") {
                extract_text_from_value(other)
            } else if let Some((_, first_value)) = obj.iter().next() {
                extract_text_from_value(first_value)
            } else {
                String::new()
            }
        }
        _ => value.to_string(),
    }
}

/// Format message with parameters
fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    match params {
        Some(params) => params.iter().fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{}}}", key), value)
        }),
        None => template.to_string(),
    }
}

/// Determine plural form based on language-specific rules
fn get_plural_form(count: i64, lang: &str) -> &'static str {
    match primary_subtag(lang) {
        "ru" | "uk" => {
            let abs_count = count.abs();
            let last_digit = abs_count % 10;
            let last_two_digits = abs_count % 100;

            if last_digit == 1 && last_two_digits != 11 {
                "one"
            } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two_digits) {
                "few"
            } else {
                "many"
            }
        }
        _ => {
            if count == 1 { "one" } else { "other" }
        }
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}
