//! Team model

use serde::{Deserialize, Serialize};

/// A scoring group with one entry of points per played round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub points: Vec<i64>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Sum of all round scores
    pub fn total(&self) -> i64 {
        self.points.iter().sum()
    }
}
