//! Memory match state machine.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::deck::{build_deck, Card};
use crate::catalog::Catalog;
use crate::core::{GamePhase, GameResult, GameRng, MemoryConfig, SetupError};
use crate::rules::MiniGame;

/// Why a tap did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    NotPlaying,
    /// A mismatched pair is still showing.
    InputLocked,
    AlreadyMatched,
    AlreadyFlipped,
    NoSuchCard,
}

/// Result of tapping a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored(IgnoreReason),
    /// First card of a turn turned over.
    Revealed,
    /// Second card matched the first.
    Matched { won: bool },
    /// Second card did not match. Unless `lost`, input stays locked until
    /// `resolve_mismatch` is called.
    Mismatched { lives_left: u32, lost: bool },
}

/// Result of a countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Running { seconds_left: u32 },
    TimeUp,
}

/// Inputs accepted through `MiniGame::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryInput {
    Flip(usize),
    ResolveMismatch,
    Tick,
}

/// Outcome of a `MemoryInput`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOutcome {
    Flip(FlipOutcome),
    Resolved(bool),
    Tick(TickOutcome),
}

/// One memory match round.
///
/// At most two cards are flipped and unresolved at any time. When two
/// are showing, input is locked until the pair resolves.
///
/// ```
/// use vnfood_core::catalog::{Catalog, DishEntry};
/// use vnfood_core::core::{GamePhase, GameRng, MemoryConfig};
/// use vnfood_core::games::memory::MemoryGame;
/// use vnfood_core::rules::MiniGame;
///
/// let catalog: Catalog = (0..10)
///     .map(|i| DishEntry::new(format!("Dish {i}"), format!("dish_{i}")))
///     .collect();
///
/// let mut game = MemoryGame::new(MemoryConfig::default());
/// assert_eq!(game.phase(), GamePhase::Idle);
///
/// game.start(&catalog, &mut GameRng::new(1)).unwrap();
/// assert_eq!(game.phase(), GamePhase::Playing);
/// assert_eq!(game.cards().len(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: MemoryConfig,
    phase: GamePhase,
    cards: Vector<Card>,
    /// Slots flipped this turn and not yet resolved.
    flipped: SmallVec<[usize; 2]>,
    input_locked: bool,
    lives: u32,
    seconds_left: u32,
    matched_pairs: usize,
    /// Incremented by every deal.
    round: u64,
}

impl MemoryGame {
    /// Create an idle game; nothing is dealt until `start`.
    #[must_use]
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            lives: config.max_lives,
            seconds_left: config.time_limit_secs,
            config,
            phase: GamePhase::Idle,
            cards: Vector::new(),
            flipped: SmallVec::new(),
            input_locked: false,
            matched_pairs: 0,
            round: 0,
        }
    }

    /// Deal a fresh deck and start playing.
    ///
    /// Also used for "reset" and "play again". On error the previous
    /// state is left untouched.
    pub fn start(&mut self, catalog: &Catalog, rng: &mut GameRng) -> Result<(), SetupError> {
        let cards = build_deck(catalog, self.config.total_pairs, rng)?;
        self.start_with_deck(cards);
        Ok(())
    }

    /// Start with an already-built deck.
    pub fn start_with_deck(&mut self, cards: Vector<Card>) {
        info!(cards = cards.len(), "memory round started");
        self.cards = cards;
        self.flipped.clear();
        self.input_locked = false;
        self.lives = self.config.max_lives;
        self.seconds_left = self.config.time_limit_secs;
        self.matched_pairs = 0;
        self.round += 1;
        self.phase = GamePhase::Playing;
    }

    /// Tap a card.
    pub fn flip(&mut self, slot: usize) -> FlipOutcome {
        if !self.phase.is_playing() {
            return FlipOutcome::Ignored(IgnoreReason::NotPlaying);
        }
        if self.input_locked {
            return FlipOutcome::Ignored(IgnoreReason::InputLocked);
        }
        let Some(card) = self.cards.get(slot) else {
            return FlipOutcome::Ignored(IgnoreReason::NoSuchCard);
        };
        if card.matched {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.flipped.contains(&slot) {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped);
        }

        self.set_face_up(slot, true);
        self.flipped.push(slot);
        debug!(slot, flipped = self.flipped.len(), "card flipped");

        if self.flipped.len() < 2 {
            return FlipOutcome::Revealed;
        }

        self.input_locked = true;
        self.compare_flipped()
    }

    fn compare_flipped(&mut self) -> FlipOutcome {
        let (a, b) = (self.flipped[0], self.flipped[1]);
        let same_pair = self.cards[a].pair == self.cards[b].pair;

        if same_pair {
            for slot in [a, b] {
                if let Some(card) = self.cards.get_mut(slot) {
                    card.matched = true;
                }
            }
            self.matched_pairs += 1;
            self.flipped.clear();
            self.input_locked = false;

            let won = self.matched_pairs * 2 == self.cards.len();
            if won {
                self.end(GameResult::Won);
            }
            return FlipOutcome::Matched { won };
        }

        self.lives = self.lives.saturating_sub(1);
        let lost = self.lives == 0;
        if lost {
            self.end(GameResult::Lost);
        }
        debug!(lives = self.lives, "mismatch");
        FlipOutcome::Mismatched {
            lives_left: self.lives,
            lost,
        }
    }

    /// Turn a shown mismatched pair face down and unlock input.
    ///
    /// Returns false if there was nothing to resolve.
    pub fn resolve_mismatch(&mut self) -> bool {
        if !self.phase.is_playing() || !self.input_locked || self.flipped.len() != 2 {
            return false;
        }
        let flipped = std::mem::take(&mut self.flipped);
        for slot in flipped {
            self.set_face_up(slot, false);
        }
        self.input_locked = false;
        true
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_playing() {
            return TickOutcome::Ignored;
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            self.end(GameResult::Lost);
            return TickOutcome::TimeUp;
        }
        TickOutcome::Running {
            seconds_left: self.seconds_left,
        }
    }

    fn end(&mut self, result: GameResult) {
        if self.phase.finish(result) {
            info!(?result, matched = self.matched_pairs, lives = self.lives, "memory round over");
        }
    }

    fn set_face_up(&mut self, slot: usize, face_up: bool) {
        if let Some(card) = self.cards.get_mut(slot) {
            card.face_up = face_up;
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    /// Slots flipped this turn and not yet resolved (never more than 2).
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Number of rounds dealt so far; identifies the current round.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Whether the card's face should be shown. Once the round is over
    /// every card is revealed.
    #[must_use]
    pub fn is_face_up(&self, slot: usize) -> bool {
        if self.phase.is_terminal() {
            return slot < self.cards.len();
        }
        self.cards.get(slot).map_or(false, |c| c.face_up || c.matched)
    }
}

impl MiniGame for MemoryGame {
    type Input = MemoryInput;
    type Outcome = MemoryOutcome;

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn apply(&mut self, input: MemoryInput) -> MemoryOutcome {
        match input {
            MemoryInput::Flip(slot) => MemoryOutcome::Flip(self.flip(slot)),
            MemoryInput::ResolveMismatch => MemoryOutcome::Resolved(self.resolve_mismatch()),
            MemoryInput::Tick => MemoryOutcome::Tick(self.tick()),
        }
    }
}
