//! # vnfood-core
//!
//! Game and comment-thread engine for a Vietnamese food community site.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machines**: Each mini-game is a plain struct driven by
//!    discrete inputs. Timers live in thin async drivers around them.
//!
//! 2. **Reproducible Rounds**: Every shuffle and pick goes through
//!    `GameRng`, so a round can be replayed from its seed.
//!
//! 3. **Scoped Timers**: Countdowns, flip-back delays, highlight polling,
//!    fades and unread polling are owned by `TaskGuard`s and cancelled
//!    when their owner drops.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, round phases, timers
//! - `catalog`: Dish records and random selection
//! - `zones`: Piece locations for the puzzle (banks and board)
//! - `rules`: `MiniGame` trait shared by the games
//! - `games`: Memory match, hangman and puzzle
//! - `paging`: Page arithmetic and the forum topic list
//! - `comments`: Comment threads, the comments API and deep-link highlight
//! - `notifications`: Reply notifications, unread count and their deep links

pub mod core;
pub mod catalog;
pub mod zones;
pub mod rules;
pub mod games;
pub mod paging;
pub mod comments;
pub mod notifications;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    ApiConfig, HangmanConfig, MemoryConfig, NotificationConfig, PuzzleConfig, ThreadConfig,
    ApiError, MoveError, SetupError,
    GamePhase, GameResult,
    TaskGuard, TimerSet,
};

pub use crate::catalog::{Catalog, DishEntry, DishId};

pub use crate::zones::{Bank, PieceId, Zone, ZoneManager};

pub use crate::rules::MiniGame;

pub use crate::games::memory::{Card, FlipOutcome, MemoryGame, MemorySession, PairId};
pub use crate::games::hangman::{GuessOutcome, HangmanRound};
pub use crate::games::puzzle::{Destination, DragInput, PuzzleGame, TapInput};

pub use crate::paging::{page_for_position, Paginator, TopicIndex};

pub use crate::comments::{
    Comment, CommentBackend, CommentId, CommentStore, CommentThread, CommentsClient,
    CurrentUser, HighlightTarget, IdentityProvider,
};

pub use crate::notifications::{
    Notification, NotificationBackend, NotificationStore, NotificationsClient,
};
