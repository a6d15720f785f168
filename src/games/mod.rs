//! The three dish mini-games.

pub mod hangman;
pub mod memory;
pub mod puzzle;
