//! Root document handle
//!
//! Shared stand-in for the root element of the page the game is mounted in.
//! Only string attributes are tracked; the localization loader keeps `lang`
//! in sync with the active language.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Name of the language attribute on the root element
pub const LANG_ATTRIBUTE: &str = "lang";

/// Cheaply clonable handle to the root element attributes
#[derive(Debug, Clone, Default)]
pub struct Document {
    attributes: Arc<RwLock<HashMap<String, String>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn set_lang(&self, lang: &str) {
        self.set_attribute(LANG_ATTRIBUTE, lang);
    }

    /// Declared language, if any has been set yet
    pub fn lang(&self) -> Option<String> {
        self.attribute(LANG_ATTRIBUTE)
    }
}
