//! Core building blocks shared by the games and the comment thread:
//! RNG, configuration, errors, round phases and scoped timers.

pub mod rng;
pub mod config;
pub mod error;
pub mod phase;
pub mod timer;

pub use rng::{GameRng, GameRngState};
pub use config::{
    ApiConfig, HangmanConfig, MemoryConfig, NotificationConfig, PuzzleConfig, ThreadConfig,
};
pub use error::{ApiError, MoveError, SetupError};
pub use phase::{GamePhase, GameResult};
pub use timer::{TaskGuard, TimerSet};
