//! Hangman round state machine.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{split_display_name, Catalog};
use crate::core::{GamePhase, GameResult, GameRng, HangmanConfig, SetupError};
use crate::rules::MiniGame;

/// Map a key press to a guessable letter. Accepts a single ASCII letter in
/// either case; everything else is ignored.
#[must_use]
pub fn normalize_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn is_guessable(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// What a guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round over, or not a letter.
    Ignored,
    /// Letter already guessed. Costs a life like a wrong guess.
    Repeat { wrong_count: u32, lost: bool },
    Wrong { wrong_count: u32, lost: bool },
    Correct { won: bool },
}

/// Keyboard key state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterStatus {
    Unused,
    Correct,
    Wrong,
}

/// One character of the answer as displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerChar {
    /// Space, digit or punctuation; always shown.
    Fixed(char),
    Revealed(char),
    Hidden,
    /// Unguessed letter shown after a loss.
    Missing(char),
}

/// One hangman round.
///
/// `wrong_count` never decreases and never exceeds `max_wrong`; reaching
/// `max_wrong` ends the round as lost.
#[derive(Clone, Debug)]
pub struct HangmanRound {
    target_word: String,
    hint_text: String,
    guessed: FxHashSet<char>,
    wrong_count: u32,
    phase: GamePhase,
    hint_used: bool,
    max_wrong: u32,
}

impl HangmanRound {
    /// Build a round from an explicit hint and answer.
    ///
    /// The answer is uppercased.
    #[must_use]
    pub fn new(hint_text: impl Into<String>, answer: &str, config: &HangmanConfig) -> Self {
        Self {
            target_word: answer.to_uppercase(),
            hint_text: hint_text.into(),
            guessed: FxHashSet::default(),
            wrong_count: 0,
            phase: GamePhase::Playing,
            hint_used: false,
            max_wrong: config.max_wrong,
        }
    }

    /// Pick a random dish whose answer has at least one A–Z letter.
    pub fn deal(
        catalog: &Catalog,
        config: &HangmanConfig,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError> {
        let dish = catalog.choose_where(rng, |dish| {
            let (_, answer) = dish.hint_and_answer();
            answer.chars().any(is_guessable)
        })?;
        let (hint, answer) = split_display_name(&dish.name);
        info!(dish = %dish.slug, letters = answer.len(), "hangman round started");
        Ok(Self::new(hint, &answer, config))
    }

    /// Guess a letter. Lowercase is accepted; non-letters are ignored.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if !self.phase.is_playing() || !letter.is_ascii_alphabetic() {
            return GuessOutcome::Ignored;
        }
        let letter = letter.to_ascii_uppercase();

        if self.guessed.contains(&letter) {
            let lost = self.add_wrong();
            debug!(%letter, wrong = self.wrong_count, "repeated guess");
            return GuessOutcome::Repeat {
                wrong_count: self.wrong_count,
                lost,
            };
        }

        self.guessed.insert(letter);
        if !self.target_word.contains(letter) {
            let lost = self.add_wrong();
            debug!(%letter, wrong = self.wrong_count, "wrong guess");
            return GuessOutcome::Wrong {
                wrong_count: self.wrong_count,
                lost,
            };
        }

        let won = self.all_revealed();
        if won {
            self.end(GameResult::Won);
        }
        GuessOutcome::Correct { won }
    }

    /// Guess from a raw key name (`"a"`, `"Q"`). Other keys are ignored.
    pub fn guess_key(&mut self, key: &str) -> GuessOutcome {
        normalize_key(key).map_or(GuessOutcome::Ignored, |c| self.guess(c))
    }

    /// Reveal one random unguessed letter of the answer.
    ///
    /// Usable once per round. Letters are weighted by how often they occur.
    /// Returns the revealed letter, or `None` when the hint is spent, the
    /// round is over, or nothing is left to reveal.
    pub fn hint(&mut self, rng: &mut GameRng) -> Option<char> {
        if self.hint_used || !self.phase.is_playing() {
            return None;
        }
        let candidates: Vec<char> = self
            .target_word
            .chars()
            .filter(|&c| is_guessable(c) && !self.guessed.contains(&c))
            .collect();
        let letter = *rng.choose(&candidates)?;

        self.guess(letter);
        self.hint_used = true;
        debug!(%letter, "hint used");
        Some(letter)
    }

    fn add_wrong(&mut self) -> bool {
        self.wrong_count = (self.wrong_count + 1).min(self.max_wrong);
        let lost = self.wrong_count >= self.max_wrong;
        if lost {
            self.end(GameResult::Lost);
        }
        lost
    }

    fn all_revealed(&self) -> bool {
        self.target_word
            .chars()
            .all(|c| !is_guessable(c) || self.guessed.contains(&c))
    }

    fn end(&mut self, result: GameResult) {
        if self.phase.finish(result) {
            info!(?result, wrong = self.wrong_count, answer = %self.target_word, "hangman round over");
        }
    }

    // === Display ===

    /// Answer with unrevealed letters as `_`. Fully shown once the round
    /// is over.
    #[must_use]
    pub fn masked(&self) -> String {
        self.answer_chars()
            .into_iter()
            .map(|c| match c {
                AnswerChar::Fixed(c) | AnswerChar::Revealed(c) | AnswerChar::Missing(c) => c,
                AnswerChar::Hidden => '_',
            })
            .collect()
    }

    /// Per-character display state of the answer.
    #[must_use]
    pub fn answer_chars(&self) -> Vec<AnswerChar> {
        self.target_word
            .chars()
            .map(|c| {
                if !is_guessable(c) {
                    AnswerChar::Fixed(c)
                } else if self.guessed.contains(&c) || self.phase == GamePhase::Won {
                    AnswerChar::Revealed(c)
                } else if self.phase == GamePhase::Lost {
                    AnswerChar::Missing(c)
                } else {
                    AnswerChar::Hidden
                }
            })
            .collect()
    }

    /// Keyboard state of a letter.
    #[must_use]
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        let letter = letter.to_ascii_uppercase();
        if !self.guessed.contains(&letter) {
            LetterStatus::Unused
        } else if self.target_word.contains(letter) {
            LetterStatus::Correct
        } else {
            LetterStatus::Wrong
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    /// Native-language name shown as the clue.
    #[must_use]
    pub fn hint_text(&self) -> &str {
        &self.hint_text
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn lives_left(&self) -> u32 {
        self.max_wrong - self.wrong_count
    }

    /// Gallows drawing stage; one part per wrong guess.
    #[must_use]
    pub fn stage(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }
}

impl MiniGame for HangmanRound {
    type Input = char;
    type Outcome = GuessOutcome;

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn apply(&mut self, letter: char) -> GuessOutcome {
        self.guess(letter)
    }
}
