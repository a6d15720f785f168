//! Input adapters for the puzzle.
//!
//! Mouse drag and touch tap both end in `PuzzleGame::move_piece`; the
//! adapters only track which piece is in hand.

use super::game::{Destination, MoveOutcome, PuzzleGame};
use crate::core::MoveError;
use crate::zones::PieceId;

/// Drag-and-drop: pick a piece up, drop it somewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragInput {
    dragging: Option<PieceId>,
}

impl DragInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging. Ignored once the puzzle is solved.
    pub fn start(&mut self, game: &PuzzleGame, piece: PieceId) {
        if !game.is_solved() {
            self.dragging = Some(piece);
        }
    }

    /// Drop the dragged piece. `None` when nothing was being dragged.
    pub fn drop_on(
        &mut self,
        game: &mut PuzzleGame,
        to: Destination,
    ) -> Option<Result<MoveOutcome, MoveError>> {
        let piece = self.dragging.take()?;
        Some(game.move_piece(piece, to))
    }

    /// Drag left the drop targets.
    pub fn cancel(&mut self) {
        self.dragging = None;
    }

    #[must_use]
    pub fn dragging(&self) -> Option<PieceId> {
        self.dragging
    }
}

/// Tap to select, tap a slot to place. At most one piece is selected.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapInput {
    selected: Option<PieceId>,
}

impl TapInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a piece, or deselect it if it was already selected.
    ///
    /// Returns the selection after the tap.
    pub fn tap_piece(&mut self, game: &PuzzleGame, piece: PieceId) -> Option<PieceId> {
        if game.is_solved() {
            return self.selected;
        }
        self.selected = if self.selected == Some(piece) { None } else { Some(piece) };
        self.selected
    }

    /// Place the selected piece into a board slot and clear the selection.
    /// `None` when nothing is selected.
    pub fn tap_slot(
        &mut self,
        game: &mut PuzzleGame,
        slot: usize,
    ) -> Option<Result<MoveOutcome, MoveError>> {
        if game.is_solved() {
            return None;
        }
        let piece = self.selected.take()?;
        Some(game.move_piece(piece, Destination::Board(slot)))
    }

    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }
}
