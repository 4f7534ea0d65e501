//! Wheel model

use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

/// A wheel face or reward: either a point amount or a label such as "Bankrupt"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WheelValue {
    Points(i64),
    Label(String),
}

impl Default for WheelValue {
    fn default() -> Self {
        WheelValue::Points(0)
    }
}

impl fmt::Display for WheelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelValue::Points(points) => write!(f, "{}", points),
            WheelValue::Label(label) => write!(f, "{}", label),
        }
    }
}

/// Callback fired after the wheel faces change
pub type ValueUpdate = Arc<dyn Fn() + Send + Sync>;

/// Spin wheel faces; `None` entries are empty slots
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Wheel {
    pub values: Vec<Option<WheelValue>>,
    #[serde(skip)]
    pub value_update: Option<ValueUpdate>,
}

impl Wheel {
    /// Invoke the update callback if one is registered
    pub fn notify_update(&self) {
        if let Some(update) = &self.value_update {
            update();
        }
    }
}

impl fmt::Debug for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wheel")
            .field("values", &self.values)
            .field("value_update", &self.value_update.as_ref().map(|_| "Fn"))
            .finish()
    }
}
