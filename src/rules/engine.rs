//! Rules trait for the mini-games.
//!
//! Each game is a state machine driven by discrete inputs (a tap, a key,
//! a timer tick). `MiniGame` gives the view layer and the async drivers
//! one way to feed inputs and read the phase, whatever the game.

use crate::core::{GamePhase, GameResult};

/// A single-player round driven by discrete inputs.
///
/// ## Implementation Notes
///
/// - `apply` must ignore inputs once the phase is terminal
/// - `apply` must be deterministic given the round's dealt state
/// - `phase` never leaves `Won` or `Lost`
pub trait MiniGame {
    /// Input event (tap, key, tick, ...).
    type Input;

    /// What the input did, for the view layer.
    type Outcome;

    /// Current phase of the round.
    fn phase(&self) -> GamePhase;

    /// Feed one input to the state machine.
    fn apply(&mut self, input: Self::Input) -> Self::Outcome;

    // === Convenience Methods ===

    /// `Some(result)` once the round is over.
    fn result(&self) -> Option<GameResult> {
        self.phase().result()
    }

    fn is_over(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Feed a sequence of inputs, collecting the outcomes.
    fn apply_all<I>(&mut self, inputs: I) -> Vec<Self::Outcome>
    where
        I: IntoIterator<Item = Self::Input>,
        Self: Sized,
    {
        inputs.into_iter().map(|input| self.apply(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts to three, then wins.
    struct Counter {
        n: u32,
        phase: GamePhase,
    }

    impl MiniGame for Counter {
        type Input = ();
        type Outcome = u32;

        fn phase(&self) -> GamePhase {
            self.phase
        }

        fn apply(&mut self, _: ()) -> u32 {
            if self.phase.is_playing() {
                self.n += 1;
                if self.n == 3 {
                    self.phase.finish(GameResult::Won);
                }
            }
            self.n
        }
    }

    #[test]
    fn test_apply_all_stops_counting_after_terminal() {
        let mut game = Counter { n: 0, phase: GamePhase::Playing };
        let outcomes = game.apply_all([(), (), (), ()]);

        assert_eq!(outcomes, vec![1, 2, 3, 3]);
        assert!(game.is_over());
        assert_eq!(game.result(), Some(GameResult::Won));
    }
}
