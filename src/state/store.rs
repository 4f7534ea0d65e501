//! Game state store
//!
//! Holds every entity of a running game. Collaborators read and write most
//! fields directly; resizing the team list goes through
//! [`GameStore::set_team_count`] so it stays in step with the settings.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::{GameSettings, Letter, Team, Tile, Wheel, WheelValue, Word, WordDraft};
use crate::utils::logging::log_store_action;

/// Shared handle given to components that need the store
pub type StoreHandle = Arc<RwLock<GameStore>>;

/// Which screen is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum View {
    #[default]
    Game = 0,
    Setup = 1,
}

impl From<View> for u8 {
    fn from(view: View) -> Self {
        view as u8
    }
}

impl TryFrom<u8> for View {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(View::Game),
            1 => Ok(View::Setup),
            other => Err(format!("invalid view: {}", other)),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub wheel: Wheel,
    pub teams: Vec<Team>,
    pub words: Vec<Word>,
    pub letters: Vec<Letter>,
    pub tiles: Vec<Tile>,
    pub word: WordDraft,
    pub view: View,
    /// Index of the team whose turn it is
    pub current: usize,
    pub reward: WheelValue,
    pub round: u32,
    pub settings: GameSettings,
}

impl GameState {
    pub fn with_settings(settings: GameSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }
}

/// Owner of the game state
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    state: GameState,
}

impl GameStore {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            state: GameState::with_settings(settings),
        }
    }

    /// Wrap the store into a shareable handle
    pub fn into_handle(self) -> StoreHandle {
        Arc::new(RwLock::new(self))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Points of every team, in team order
    pub fn scores(&self) -> Vec<Vec<i64>> {
        self.state.teams.iter().map(|team| team.points.clone()).collect()
    }

    pub fn team_count(&self) -> usize {
        self.state.teams.len()
    }

    /// Resize the team list to exactly `count` entries
    ///
    /// Removed teams are dropped; new teams start unnamed with no points.
    /// `settings.team_count` is always set to `count`.
    pub fn set_team_count(&mut self, count: usize) {
        let previous = self.state.teams.len();
        self.state.teams.truncate(count);
        self.state.teams.resize_with(count, Team::default);
        self.state.settings.team_count = count;
        log_store_action("set_team_count", previous, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_teams(names: &[&str]) -> GameStore {
        let mut store = GameStore::new(GameSettings::for_locale("en-US"));
        store.state_mut().teams = names
            .iter()
            .enumerate()
            .map(|(i, name)| Team {
                name: name.to_string(),
                points: vec![100 * (i as i64 + 1)],
            })
            .collect();
        store
    }

    #[test]
    fn test_initial_state() {
        let store = GameStore::new(GameSettings::for_locale("en-US"));
        let state = store.state();
        assert!(state.teams.is_empty());
        assert!(state.words.is_empty());
        assert!(state.letters.is_empty());
        assert!(state.tiles.is_empty());
        assert!(state.wheel.values.is_empty());
        assert!(state.wheel.value_update.is_none());
        assert_eq!(state.word, WordDraft::default());
        assert_eq!(state.view, View::Game);
        assert_eq!(u8::from(state.view), 0);
        assert_eq!(state.current, 0);
        assert_eq!(state.reward, WheelValue::Points(0));
        assert_eq!(state.round, 0);
        assert_eq!(state.settings.team_count, 3);
        assert_eq!(state.settings.language, "en");
        assert_eq!(store.team_count(), 0);
    }

    #[test]
    fn test_grow_appends_blank_teams() {
        let mut store = store_with_teams(&["Red"]);
        store.set_team_count(3);

        let teams = &store.state().teams;
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].name, "Red");
        assert_eq!(teams[0].points, vec![100]);
        assert_eq!(teams[1], Team::default());
        assert_eq!(teams[2], Team::default());
        assert_eq!(store.state().settings.team_count, 3);
    }

    #[test]
    fn test_shrink_truncates_from_end() {
        let mut store = store_with_teams(&["Red", "Green", "Blue"]);
        store.set_team_count(2);

        assert_eq!(store.team_count(), 2);
        assert_eq!(store.state().teams[0].name, "Red");
        assert_eq!(store.state().teams[1].name, "Green");
        assert_eq!(store.scores(), vec![vec![100], vec![200]]);
    }

    #[test]
    fn test_same_count_still_writes_setting() {
        let mut store = store_with_teams(&["Red", "Green"]);
        store.state_mut().settings.team_count = 7;
        store.set_team_count(2);

        assert_eq!(store.team_count(), 2);
        assert_eq!(store.state().settings.team_count, 2);
    }

    #[test]
    fn test_direct_setting_write_does_not_resize() {
        let mut store = store_with_teams(&["Red"]);
        store.state_mut().settings.team_count = 5;
        assert_eq!(store.team_count(), 1);
    }

    #[test]
    fn test_scores_track_mutations() {
        let mut store = store_with_teams(&["Red", "Green"]);
        store.state_mut().teams[1].points.push(-50);
        assert_eq!(store.scores(), vec![vec![100], vec![200, -50]]);
    }

    #[test]
    fn test_view_serializes_as_number() {
        assert_eq!(serde_json::to_string(&View::Setup).unwrap(), "1");
        let view: View = serde_json::from_str("0").unwrap();
        assert_eq!(view, View::Game);
        assert!(serde_json::from_str::<View>("2").is_err());
    }
}
