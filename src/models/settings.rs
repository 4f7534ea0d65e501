//! Game settings model

use std::time::Duration;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::i18n::{primary_subtag, system_locale};

/// Game configuration chosen before and between rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub team_count: usize,
    pub buy_vowels: bool,
    pub bankrupt_per_round: bool,
    pub wheel: WheelSettings,
    pub language: String,
    pub charset: String,
    pub vowels: String,
    pub vowel_price: i64,
    pub answer_reward: i64,
    pub controlled: bool,
}

/// Wheel spin behaviour; durations are in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSettings {
    pub spin_min: u64,
    pub spin_max: u64,
    pub use_random_org: bool,
}

impl GameSettings {
    /// Defaults with the language taken from the given locale tag
    pub fn for_locale(locale: &str) -> Self {
        Self {
            team_count: 3,
            buy_vowels: true,
            bankrupt_per_round: true,
            wheel: WheelSettings::default(),
            language: primary_subtag(locale).to_string(),
            charset: String::new(),
            vowels: String::new(),
            vowel_price: 200,
            answer_reward: 1000,
            controlled: false,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::for_locale(&system_locale())
    }
}

impl WheelSettings {
    /// Pick a spin duration uniformly within the configured bounds
    pub fn spin_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let (low, high) = if self.spin_min <= self.spin_max {
            (self.spin_min, self.spin_max)
        } else {
            (self.spin_max, self.spin_min)
        };
        Duration::from_millis(rng.gen_range(low..=high))
    }
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            spin_min: 3000,
            spin_max: 6000,
            use_random_org: false,
        }
    }
}
