//! Round phases shared by the mini-games.
//!
//! Every game moves `Idle -> Playing -> {Won, Lost}`. Terminal phases are
//! final: a new round is a new state value, never a transition out of
//! `Won` or `Lost`.

use serde::{Deserialize, Serialize};

/// Phase of a single round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing dealt yet (memory game intro screen).
    #[default]
    Idle,
    /// Accepting input.
    Playing,
    /// Terminal: player won.
    Won,
    /// Terminal: player lost.
    Lost,
}

impl GamePhase {
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    /// Move to a terminal phase.
    ///
    /// Only `Playing` can end; an already-terminal phase keeps its outcome.
    /// Returns true if the phase changed.
    pub fn finish(&mut self, result: GameResult) -> bool {
        if !self.is_playing() {
            return false;
        }
        *self = match result {
            GameResult::Won => GamePhase::Won,
            GameResult::Lost => GamePhase::Lost,
        };
        true
    }

    /// Outcome of a terminal phase.
    #[must_use]
    pub const fn result(self) -> Option<GameResult> {
        match self {
            GamePhase::Won => Some(GameResult::Won),
            GamePhase::Lost => Some(GameResult::Lost),
            GamePhase::Idle | GamePhase::Playing => None,
        }
    }
}

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}
