//! Timed driver around `MemoryGame`.
//!
//! The session owns the countdown and the flip-back delays. Both are held
//! as `TaskGuard`s, so restarting or dropping the session cancels them.
//! Each timer also carries the round it was scheduled for and does nothing
//! once another round has been dealt, which covers a timer already past its
//! await when the abort lands.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::deck::build_deck;
use super::game::{FlipOutcome, MemoryGame, TickOutcome};
use crate::catalog::Catalog;
use crate::core::{GamePhase, GameRng, MemoryConfig, SetupError, TaskGuard, TimerSet};
use crate::rules::MiniGame;

type Shared = Arc<Mutex<MemoryGame>>;

fn lock(game: &Shared) -> MutexGuard<'_, MemoryGame> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One countdown step for `round`. Returns false when the countdown should
/// stop.
fn countdown_step(game: &Shared, round: u64, phase_tx: &watch::Sender<GamePhase>) -> bool {
    let mut state = lock(game);
    if state.round() != round {
        return false;
    }
    match state.tick() {
        TickOutcome::Running { .. } => true,
        TickOutcome::TimeUp | TickOutcome::Ignored => {
            phase_tx.send_replace(state.phase());
            false
        }
    }
}

fn flip_back(game: &Shared, round: u64) -> bool {
    let mut state = lock(game);
    state.round() == round && state.resolve_mismatch()
}

/// A memory round with its timers. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct MemorySession {
    game: Shared,
    countdown: Option<TaskGuard>,
    flip_backs: TimerSet,
    phase_tx: Arc<watch::Sender<GamePhase>>,
}

impl MemorySession {
    #[must_use]
    pub fn new(config: MemoryConfig) -> Self {
        let (phase_tx, _) = watch::channel(GamePhase::Idle);
        Self {
            game: Arc::new(Mutex::new(MemoryGame::new(config))),
            countdown: None,
            flip_backs: TimerSet::new(),
            phase_tx: Arc::new(phase_tx),
        }
    }

    /// Deal and start the countdown. Cancels every timer of the previous
    /// round before the new deck goes on the table. On error the previous
    /// round keeps running.
    pub fn start(&mut self, catalog: &Catalog, rng: &mut GameRng) -> Result<(), SetupError> {
        let total_pairs = lock(&self.game).config().total_pairs;
        let deck = build_deck(catalog, total_pairs, rng)?;
        self.cancel_timers();

        let (tick, round) = {
            let mut game = lock(&self.game);
            game.start_with_deck(deck);
            (game.config().tick, game.round())
        };
        self.phase_tx.send_replace(GamePhase::Playing);

        let game = Arc::clone(&self.game);
        let phase_tx = Arc::clone(&self.phase_tx);
        self.countdown = Some(TaskGuard::spawn(async move {
            let mut ticks = interval_at(Instant::now() + tick, tick);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if !countdown_step(&game, round, &phase_tx) {
                    break;
                }
            }
        }));
        Ok(())
    }

    /// Same as `start`; named for the "play again" and reset buttons.
    pub fn restart(&mut self, catalog: &Catalog, rng: &mut GameRng) -> Result<(), SetupError> {
        self.start(catalog, rng)
    }

    /// Tap a card. A mismatch that does not end the round schedules the
    /// flip-back after the configured delay.
    pub fn flip(&mut self, slot: usize) -> FlipOutcome {
        let (outcome, phase, delay, round) = {
            let mut game = lock(&self.game);
            let outcome = game.flip(slot);
            (outcome, game.phase(), game.config().mismatch_delay, game.round())
        };

        match outcome {
            FlipOutcome::Mismatched { lost: false, .. } => {
                let game = Arc::clone(&self.game);
                self.flip_backs.push(TaskGuard::after(delay, move || {
                    flip_back(&game, round);
                }));
            }
            FlipOutcome::Mismatched { lost: true, .. } | FlipOutcome::Matched { won: true } => {
                debug!(?phase, "round ended on flip");
                self.cancel_timers();
                self.phase_tx.send_replace(phase);
            }
            _ => {}
        }
        outcome
    }

    /// Copy of the current game state.
    #[must_use]
    pub fn snapshot(&self) -> MemoryGame {
        lock(&self.game).clone()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        lock(&self.game).phase()
    }

    /// Receiver that observes every phase change.
    #[must_use]
    pub fn phase_changes(&self) -> watch::Receiver<GamePhase> {
        self.phase_tx.subscribe()
    }

    /// Timers still pending (countdown included).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        let countdown = self.countdown.as_ref().map_or(0, |c| usize::from(!c.is_finished()));
        countdown + self.flip_backs.active()
    }

    fn cancel_timers(&mut self) {
        self.countdown = None;
        self.flip_backs.cancel_all();
    }
}
