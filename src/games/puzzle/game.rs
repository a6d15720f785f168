//! Puzzle board: move image pieces from three banks onto a grid.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Catalog, DishId};
use crate::core::{ApiConfig, GamePhase, GameRng, MoveError, PuzzleConfig, SetupError};
use crate::rules::MiniGame;
use crate::zones::{Bank, PieceId, Zone, ZoneManager};

/// Where a piece is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Board(usize),
    /// Appended to the end of the bank.
    Bank(Bank),
}

/// One `move_piece` call, for `MiniGame::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleMove {
    pub piece: PieceId,
    pub to: Destination,
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Piece pushed out of the target slot, and where it went.
    pub displaced: Option<(PieceId, Zone)>,
    pub solved: bool,
}

/// Layout of one piece within the source image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceGeometry {
    pub row: usize,
    pub col: usize,
    /// CSS-style background offset, percent.
    pub offset_x: f32,
    pub offset_y: f32,
}

/// One puzzle round.
#[derive(Clone, Debug)]
pub struct PuzzleGame {
    config: PuzzleConfig,
    dish: DishId,
    dish_name: String,
    zones: ZoneManager,
    solved: bool,
    moves: u32,
}

impl PuzzleGame {
    /// Pick a random dish and scatter its pieces across the banks.
    pub fn deal(
        catalog: &Catalog,
        config: &PuzzleConfig,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let dish = catalog.choose(rng)?;
        let mut order: Vec<PieceId> = (0..config.piece_count()).map(|i| PieceId::new(i as u8)).collect();
        rng.shuffle(&mut order);
        info!(dish = %dish.slug, pieces = order.len(), "puzzle round started");
        Ok(Self::from_order(dish.id(), dish.name.clone(), config, &order))
    }

    /// Deal pieces in the given order: the first `bank_size` to the left
    /// bank, the next to the right bank, the rest to the bottom bank.
    ///
    /// Panics if the config is invalid or `order` is not a permutation of
    /// the piece ids.
    #[must_use]
    pub fn from_order(dish: DishId, dish_name: String, config: &PuzzleConfig, order: &[PieceId]) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}");
        }
        let count = config.piece_count();
        assert_eq!(order.len(), count, "Must deal every piece exactly once");

        let mut zones = ZoneManager::new(count);
        for (i, &piece) in order.iter().enumerate() {
            let bank = match i / config.bank_size {
                0 => Bank::Left,
                1 => Bank::Right,
                _ => Bank::Bottom,
            };
            zones.push_to_bank(piece, bank);
        }
        assert!(zones.is_partition_of(count), "Piece ids must be 0..{count}");

        Self {
            config: config.clone(),
            dish,
            dish_name,
            zones,
            solved: false,
            moves: 0,
        }
    }

    /// Move a piece. This is the single entry point for drag and tap
    /// input.
    ///
    /// Dropping onto an occupied board slot displaces the piece there: it
    /// takes the mover's old slot when the mover came from the board, and
    /// goes to the end of the bottom bank otherwise.
    pub fn move_piece(&mut self, piece: PieceId, to: Destination) -> Result<MoveOutcome, MoveError> {
        if self.solved {
            return Err(MoveError::AlreadySolved);
        }
        if self.zones.zone_of(piece).is_none() {
            return Err(MoveError::UnknownPiece(piece));
        }
        if let Destination::Board(slot) = to {
            let len = self.zones.slot_count();
            if slot >= len {
                return Err(MoveError::SlotOutOfRange { slot, len });
            }
        }

        let source = self.zones.take(piece).ok_or(MoveError::UnknownPiece(piece))?;
        let displaced = match to {
            Destination::Bank(bank) => {
                self.zones.push_to_bank(piece, bank);
                None
            }
            Destination::Board(slot) => self.zones.place_on_board(piece, slot).map(|old| {
                let home = match source {
                    Zone::Board(from) => {
                        self.zones.place_on_board(old, from);
                        Zone::Board(from)
                    }
                    Zone::Bank(_) => {
                        self.zones.push_to_bank(old, Bank::Bottom);
                        Zone::Bank(Bank::Bottom)
                    }
                };
                (old, home)
            }),
        };

        self.moves += 1;
        self.solved = self.zones.board_in_order();
        debug!(%piece, ?source, ?to, ?displaced, "piece moved");
        if self.solved {
            info!(moves = self.moves, "puzzle solved");
        }

        Ok(MoveOutcome {
            displaced,
            solved: self.solved,
        })
    }

    /// Grid position and background offset of a piece.
    #[must_use]
    pub fn geometry(&self, piece: PieceId) -> PieceGeometry {
        let (cols, rows) = (self.config.cols, self.config.rows);
        let id = piece.home_slot();
        let (row, col) = (id / cols, id % cols);
        let percent = |i: usize, n: usize| {
            if n > 1 {
                (i * 100) as f32 / (n - 1) as f32
            } else {
                0.0
            }
        };
        PieceGeometry {
            row,
            col,
            offset_x: percent(col, cols),
            offset_y: percent(row, rows),
        }
    }

    /// Backend URL of the image being assembled.
    #[must_use]
    pub fn image_url(&self, api: &ApiConfig) -> String {
        api.food_image_url(self.dish.as_str())
    }

    // === Accessors ===

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn bank(&self, bank: Bank) -> &[PieceId] {
        self.zones.bank(bank)
    }

    #[must_use]
    pub fn board(&self) -> &[Option<PieceId>] {
        self.zones.board()
    }

    #[must_use]
    pub fn zone_of(&self, piece: PieceId) -> Option<Zone> {
        self.zones.zone_of(piece)
    }

    #[must_use]
    pub fn dish(&self) -> &DishId {
        &self.dish
    }

    #[must_use]
    pub fn dish_name(&self) -> &str {
        &self.dish_name
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }
}

impl MiniGame for PuzzleGame {
    type Input = PuzzleMove;
    type Outcome = Result<MoveOutcome, MoveError>;

    fn phase(&self) -> GamePhase {
        if self.solved {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    fn apply(&mut self, input: PuzzleMove) -> Self::Outcome {
        self.move_piece(input.piece, input.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PieceId {
        PieceId::new(id)
    }

    /// Pieces dealt 0..12 in order: left = 0..4, right = 4..8, bottom = 8..12.
    fn ordered() -> PuzzleGame {
        let order: Vec<_> = (0..12).map(p).collect();
        PuzzleGame::from_order(DishId::new("pho"), "Phở".into(), &PuzzleConfig::default(), &order)
    }

    #[test]
    fn test_deal_splits_banks() {
        let game = ordered();
        assert_eq!(game.bank(Bank::Left), &[p(0), p(1), p(2), p(3)]);
        assert_eq!(game.bank(Bank::Right), &[p(4), p(5), p(6), p(7)]);
        assert_eq!(game.bank(Bank::Bottom), &[p(8), p(9), p(10), p(11)]);
        assert!(game.board().iter().all(Option::is_none));
    }

    #[test]
    fn test_bank_to_occupied_slot_displaces_to_bottom() {
        let mut game = ordered();
        game.move_piece(p(1), Destination::Board(0)).unwrap();
        let outcome = game.move_piece(p(0), Destination::Board(0)).unwrap();

        assert_eq!(outcome.displaced, Some((p(1), Zone::Bank(Bank::Bottom))));
        assert_eq!(game.bank(Bank::Bottom).last(), Some(&p(1)));
        assert!(game.zones().is_partition_of(12));
    }

    #[test]
    fn test_board_to_board_swaps() {
        let mut game = ordered();
        game.move_piece(p(0), Destination::Board(1)).unwrap();
        game.move_piece(p(1), Destination::Board(0)).unwrap();

        let outcome = game.move_piece(p(1), Destination::Board(1)).unwrap();
        assert_eq!(outcome.displaced, Some((p(0), Zone::Board(0))));
        assert_eq!(game.board()[0], Some(p(0)));
        assert_eq!(game.board()[1], Some(p(1)));
    }

    #[test]
    fn test_drop_on_own_slot_is_noop() {
        let mut game = ordered();
        game.move_piece(p(5), Destination::Board(3)).unwrap();
        let outcome = game.move_piece(p(5), Destination::Board(3)).unwrap();
        assert_eq!(outcome.displaced, None);
        assert_eq!(game.board()[3], Some(p(5)));
    }

    #[test]
    fn test_back_to_bank_appends() {
        let mut game = ordered();
        game.move_piece(p(0), Destination::Board(0)).unwrap();
        game.move_piece(p(0), Destination::Bank(Bank::Right)).unwrap();
        assert_eq!(game.bank(Bank::Right).last(), Some(&p(0)));
        assert_eq!(game.board()[0], None);
    }

    #[test]
    fn test_solve_is_sticky() {
        let mut game = ordered();
        for id in 0..12 {
            let outcome = game.move_piece(p(id), Destination::Board(id as usize)).unwrap();
            assert_eq!(outcome.solved, id == 11);
        }
        assert!(game.is_solved());
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.move_piece(p(0), Destination::Board(1)), Err(MoveError::AlreadySolved));
    }

    #[test]
    fn test_invalid_moves() {
        let mut game = ordered();
        assert_eq!(
            game.move_piece(p(0), Destination::Board(12)),
            Err(MoveError::SlotOutOfRange { slot: 12, len: 12 })
        );
        assert_eq!(game.move_piece(p(30), Destination::Board(0)), Err(MoveError::UnknownPiece(p(30))));
        assert_eq!(game.moves(), 0);
        assert!(game.zones().is_partition_of(12));
    }

    #[test]
    fn test_geometry() {
        let game = ordered();
        let g = game.geometry(p(7));
        assert_eq!((g.row, g.col), (1, 3));
        assert!((g.offset_x - 100.0).abs() < f32::EPSILON);
        assert!((g.offset_y - 50.0).abs() < f32::EPSILON);

        let g = game.geometry(p(0));
        assert_eq!((g.offset_x, g.offset_y), (0.0, 0.0));
    }

    #[test]
    fn test_image_url() {
        let game = ordered();
        let api = ApiConfig::default().with_base_url("http://10.0.0.2:8000");
        assert_eq!(game.image_url(&api), "http://10.0.0.2:8000/static/food_images/pho.jpg");
    }

    #[test]
    fn test_deal_is_partition() {
        let catalog: Catalog = vec![crate::catalog::DishEntry::new("Phở", "pho")].into_iter().collect();
        let game = PuzzleGame::deal(&catalog, &PuzzleConfig::default(), &mut GameRng::new(8)).unwrap();
        assert!(game.zones().is_partition_of(12));
        for bank in Bank::ALL {
            assert_eq!(game.bank(bank).len(), 4);
        }
    }

    #[test]
    fn test_deal_rejects_invalid_grid() {
        let catalog: Catalog = vec![crate::catalog::DishEntry::new("Phở", "pho")].into_iter().collect();
        let mut rng = GameRng::new(8);
        let zero_cols = PuzzleConfig {
            cols: 0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            PuzzleGame::deal(&catalog, &zero_cols, &mut rng),
            Err(SetupError::InvalidConfig(_))
        ));

        let oversized = PuzzleConfig {
            cols: 20,
            rows: 15,
            bank_size: 100,
        };
        assert!(matches!(
            PuzzleGame::deal(&catalog, &oversized, &mut rng),
            Err(SetupError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_larger_grid_geometry() {
        let config = PuzzleConfig::default().with_grid(6, 4);
        let order: Vec<_> = (0..24).map(p).collect();
        let game = PuzzleGame::from_order(DishId::new("pho"), "Phở".into(), &config, &order);
        assert!(game.zones().is_partition_of(24));
        let g = game.geometry(p(23));
        assert_eq!((g.row, g.col), (3, 5));
        assert!((g.offset_x - 100.0).abs() < f32::EPSILON);
    }
}
