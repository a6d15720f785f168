//! Rules trait for the mini-games.
//!
//! Games implement `MiniGame` to define:
//! - How inputs modify the round
//! - When the round is won or lost
//!
//! Drivers and views call into `MiniGame` without knowing which game
//! they are running.

pub mod engine;

pub use engine::MiniGame;
