//! Memory match: find every pair of dish cards before lives or time run out.
//!
//! ## Key Types
//!
//! - `Card`, `PairId`: Dealt cards and their match identity
//! - `MemoryGame`: Pure state machine (flip, resolve, tick)
//! - `MemorySession`: Countdown and flip-back timers around a game

pub mod deck;
pub mod game;
pub mod session;

pub use deck::{build_deck, Card, PairId};
pub use game::{FlipOutcome, IgnoreReason, MemoryGame, MemoryInput, MemoryOutcome, TickOutcome};
pub use session::MemorySession;
