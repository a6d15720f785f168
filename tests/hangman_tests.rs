//! Hangman round scenarios and invariants.

use proptest::prelude::*;
use vnfood_core::catalog::{Catalog, DishEntry};
use vnfood_core::core::{GamePhase, GameRng, HangmanConfig};
use vnfood_core::games::hangman::{AnswerChar, GuessOutcome, HangmanRound, LetterStatus};
use vnfood_core::rules::MiniGame;

fn round(answer: &str) -> HangmanRound {
    HangmanRound::new("Bún chả", answer, &HangmanConfig::default())
}

#[test]
fn test_deal_from_catalog() {
    let catalog: Catalog = vec![DishEntry::new("Bún chả – Grilled Pork Noodles", "bun_cha")]
        .into_iter()
        .collect();
    let mut game = HangmanRound::deal(&catalog, &HangmanConfig::default(), &mut GameRng::new(1)).unwrap();

    assert_eq!(game.hint_text(), "Bún chả");
    assert_eq!(game.target_word(), "GRILLED PORK NOODLES");
    assert_eq!(game.masked(), "_______ ____ _______");
    assert_eq!(game.lives_left(), 4);

    for c in "GRILEDPKNOS".chars() {
        game.guess(c);
    }
    assert_eq!(game.phase(), GamePhase::Won);
}

/// Re-pressing a correct letter is penalised like a wrong guess.
#[test]
fn test_repeated_correct_letter_costs_life() {
    let mut game = round("PHO");
    assert_eq!(game.guess('P'), GuessOutcome::Correct { won: false });
    assert_eq!(game.guess('P'), GuessOutcome::Repeat { wrong_count: 1, lost: false });
    assert_eq!(game.guess('P'), GuessOutcome::Repeat { wrong_count: 2, lost: false });

    // Same as two fresh wrong guesses
    let mut other = round("PHO");
    other.guess('P');
    other.guess('X');
    other.guess('Y');
    assert_eq!(game.wrong_count(), other.wrong_count());
    assert_eq!(game.lives_left(), other.lives_left());
}

#[test]
fn test_repeated_wrong_letter_can_lose() {
    let mut game = round("PHO");
    game.guess('Z');
    game.guess('Z');
    game.guess('Z');
    assert_eq!(game.guess('Z'), GuessOutcome::Repeat { wrong_count: 4, lost: true });
    assert_eq!(game.phase(), GamePhase::Lost);
    assert_eq!(game.letter_status('Z'), LetterStatus::Wrong);
}

#[test]
fn test_hint_after_loss_does_nothing() {
    let mut game = round("PHO");
    for c in "WXYZ".chars() {
        game.guess(c);
    }
    assert_eq!(game.hint(&mut GameRng::new(0)), None);
    assert!(!game.hint_used());
    assert_eq!(
        game.answer_chars(),
        vec![AnswerChar::Missing('P'), AnswerChar::Missing('H'), AnswerChar::Missing('O')]
    );
}

#[test]
fn test_keyboard_keys() {
    let mut game = round("COM TAM");
    assert_eq!(game.guess_key("c"), GuessOutcome::Correct { won: false });
    assert_eq!(game.guess_key("Backspace"), GuessOutcome::Ignored);
    assert_eq!(game.guess_key(" "), GuessOutcome::Ignored);
    assert_eq!(game.masked(), "C__ ___");
}

proptest! {
    #[test]
    fn prop_wrong_count_monotonic(
        answer in "[A-Z ]{1,16}",
        guesses in prop::collection::vec(prop::char::range('A', 'Z'), 0..40),
    ) {
        prop_assume!(answer.chars().any(|c| c.is_ascii_uppercase()));
        let mut game = round(&answer);
        let mut last = 0;
        let mut lost_at = None;

        for (i, c) in guesses.into_iter().enumerate() {
            game.guess(c);
            prop_assert!(game.wrong_count() >= last);
            prop_assert!(game.wrong_count() <= 4);
            last = game.wrong_count();

            if game.wrong_count() == 4 {
                prop_assert_eq!(game.phase(), GamePhase::Lost);
                lost_at.get_or_insert(i);
            }
            if lost_at.is_some() {
                prop_assert_eq!(game.phase(), GamePhase::Lost);
            }
        }
    }

    #[test]
    fn prop_hint_never_costs_life(answer in "[A-Z]{1,12}", seed in any::<u64>()) {
        let mut game = round(&answer);
        let before = game.wrong_count();
        let letter = game.hint(&mut GameRng::new(seed));
        prop_assert!(letter.is_some());
        prop_assert_eq!(game.wrong_count(), before);
        prop_assert!(game.phase() != GamePhase::Lost);
    }
}
