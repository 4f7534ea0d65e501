//! Data models module
//!
//! This module contains all game entities held by the state store

pub mod team;
pub mod board;
pub mod word;
pub mod wheel;
pub mod settings;

// Re-export commonly used models
pub use team::Team;
pub use board::{Letter, Tile};
pub use word::{Word, WordDraft};
pub use wheel::{Wheel, WheelValue, ValueUpdate};
pub use settings::{GameSettings, WheelSettings};
