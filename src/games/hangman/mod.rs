//! Hangman: guess the English name of a dish, one letter at a time.
//!
//! ## Key Types
//!
//! - `HangmanRound`: Round state machine (guess, hint, review)
//! - `GuessOutcome`: What a guess did
//! - `LetterStatus`, `AnswerChar`: Per-key and per-character display state

pub mod round;

pub use round::{normalize_key, AnswerChar, GuessOutcome, HangmanRound, LetterStatus};
