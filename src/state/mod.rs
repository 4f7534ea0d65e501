//! State management module
//!
//! This module holds the game state store and the application root context

pub mod context;
pub mod store;

// Re-export commonly used state components
pub use context::AppContext;
pub use store::{GameState, GameStore, StoreHandle, View};
