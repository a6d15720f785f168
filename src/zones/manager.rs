//! Zone manager for puzzle piece locations.
//!
//! A piece is always in exactly one place: one of three ordered banks
//! (left, right, bottom) or one board slot. The `ZoneManager` keeps a
//! location index next to the bank lists and the board so lookups are
//! O(1) and the partition can be checked at any time.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier of a puzzle piece. The id is also the index of the board
/// slot the piece belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Board slot this piece belongs in.
    #[must_use]
    pub const fn home_slot(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Holding area for unplaced pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    Left,
    Right,
    Bottom,
}

impl Bank {
    pub const ALL: [Bank; 3] = [Bank::Left, Bank::Right, Bank::Bottom];

    const fn index(self) -> usize {
        match self {
            Bank::Left => 0,
            Bank::Right => 1,
            Bank::Bottom => 2,
        }
    }
}

/// Where a piece is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Bank(Bank),
    /// Board slot index.
    Board(usize),
}

/// Piece locations across banks and board.
///
/// ```
/// use vnfood_core::zones::{Bank, PieceId, Zone, ZoneManager};
///
/// let mut zones = ZoneManager::new(12);
/// zones.push_to_bank(PieceId::new(3), Bank::Left);
///
/// zones.take(PieceId::new(3));
/// let displaced = zones.place_on_board(PieceId::new(3), 3);
/// assert_eq!(displaced, None);
/// assert_eq!(zones.zone_of(PieceId::new(3)), Some(Zone::Board(3)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// piece -> zone
    locations: FxHashMap<PieceId, Zone>,

    /// Ordered bank contents, indexed by `Bank::index`.
    banks: [Vec<PieceId>; 3],

    board: Vec<Option<PieceId>>,
}

impl ZoneManager {
    /// Create an empty manager with `slots` board slots.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            locations: FxHashMap::default(),
            banks: Default::default(),
            board: vec![None; slots],
        }
    }

    /// Append a piece to the end of a bank.
    ///
    /// Panics if the piece is already tracked.
    pub fn push_to_bank(&mut self, piece: PieceId, bank: Bank) {
        if self.locations.contains_key(&piece) {
            panic!("{} already has a location", piece);
        }
        self.banks[bank.index()].push(piece);
        self.locations.insert(piece, Zone::Bank(bank));
    }

    /// Remove a piece from wherever it is.
    ///
    /// Returns the zone it left, or `None` if it is not tracked.
    pub fn take(&mut self, piece: PieceId) -> Option<Zone> {
        let zone = self.locations.remove(&piece)?;
        match zone {
            Zone::Bank(bank) => self.banks[bank.index()].retain(|&p| p != piece),
            Zone::Board(slot) => self.board[slot] = None,
        }
        Some(zone)
    }

    /// Put an untracked piece into a board slot.
    ///
    /// Returns the piece that was there; it is no longer tracked and the
    /// caller must give it a new home.
    pub fn place_on_board(&mut self, piece: PieceId, slot: usize) -> Option<PieceId> {
        debug_assert!(!self.locations.contains_key(&piece), "place an untracked piece");
        let displaced = self.board[slot].replace(piece);
        if let Some(old) = displaced {
            self.locations.remove(&old);
        }
        self.locations.insert(piece, Zone::Board(slot));
        displaced
    }

    #[must_use]
    pub fn zone_of(&self, piece: PieceId) -> Option<Zone> {
        self.locations.get(&piece).copied()
    }

    /// Position of a piece inside its bank.
    #[must_use]
    pub fn bank_index(&self, piece: PieceId) -> Option<(Bank, usize)> {
        match self.zone_of(piece)? {
            Zone::Bank(bank) => self.banks[bank.index()]
                .iter()
                .position(|&p| p == piece)
                .map(|i| (bank, i)),
            Zone::Board(_) => None,
        }
    }

    /// Pieces in a bank, in display order.
    #[must_use]
    pub fn bank(&self, bank: Bank) -> &[PieceId] {
        &self.banks[bank.index()]
    }

    #[must_use]
    pub fn board(&self) -> &[Option<PieceId>] {
        &self.board
    }

    #[must_use]
    pub fn board_slot(&self, slot: usize) -> Option<PieceId> {
        self.board.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.board.len()
    }

    /// Number of tracked pieces.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.locations.len()
    }

    /// Every slot holds the piece whose id equals the slot index.
    #[must_use]
    pub fn board_in_order(&self) -> bool {
        self.board
            .iter()
            .enumerate()
            .all(|(i, p)| p.map_or(false, |p| p.home_slot() == i))
    }

    /// Check that pieces `0..count` each appear exactly once across
    /// banks and board, and that the index agrees with the containers.
    #[must_use]
    pub fn is_partition_of(&self, count: usize) -> bool {
        let mut seen = vec![0u8; count];
        let banked = self.banks.iter().flat_map(|b| b.iter().copied());
        let placed = self.board.iter().flatten().copied();
        for piece in banked.chain(placed) {
            match seen.get_mut(piece.0 as usize) {
                Some(n) => *n += 1,
                None => return false,
            }
        }
        if !seen.iter().all(|&n| n == 1) || self.locations.len() != count {
            return false;
        }

        self.locations.iter().all(|(&piece, &zone)| match zone {
            Zone::Bank(bank) => self.banks[bank.index()].contains(&piece),
            Zone::Board(slot) => self.board[slot] == Some(piece),
        })
    }
}
