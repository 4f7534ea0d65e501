//! Letter and tile models
//!
//! Letters make up the pickable alphabet, tiles make up the on-screen puzzle.

use serde::{Deserialize, Serialize};

/// One character of the configured charset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub letter: char,
    pub used: bool,
    pub vowel: bool,
}

/// One revealable slot of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub correct: bool,
    pub visible: bool,
    pub vowel: bool,
}

impl Letter {
    /// Build one unused letter per charset character, flagging vowels
    pub fn from_charset(charset: &str, vowels: &str) -> Vec<Letter> {
        charset
            .chars()
            .map(|letter| Letter {
                letter,
                used: false,
                vowel: vowels.contains(letter),
            })
            .collect()
    }
}

impl Tile {
    /// Hidden tile for a puzzle character; whitespace is shown from the start
    pub fn new(letter: char, vowels: &str) -> Self {
        Self {
            letter,
            correct: false,
            visible: letter.is_whitespace(),
            vowel: vowels.contains(letter),
        }
    }
}
