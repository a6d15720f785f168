//! Picture puzzle: rebuild a 4×3 dish photo from pieces scattered in
//! three banks.
//!
//! ## Key Types
//!
//! - `PuzzleGame`: Board state and the canonical `move_piece`
//! - `Destination`: Board slot or bank
//! - `DragInput`, `TapInput`: Input adapters feeding `move_piece`

pub mod game;
pub mod input;

pub use game::{Destination, MoveOutcome, PieceGeometry, PuzzleGame, PuzzleMove};
pub use input::{DragInput, TapInput};
