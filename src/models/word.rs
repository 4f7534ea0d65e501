//! Word model

use serde::{Deserialize, Serialize};

/// A puzzle answer and its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub category: String,
}

/// The word currently in play, possibly not fully chosen yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDraft {
    pub word: Option<String>,
    pub category: Option<String>,
}

impl WordDraft {
    /// Both parts are present
    pub fn is_complete(&self) -> bool {
        self.word.is_some() && self.category.is_some()
    }
}

impl From<Word> for WordDraft {
    fn from(word: Word) -> Self {
        Self {
            word: Some(word.word),
            category: Some(word.category),
        }
    }
}
