//! Memory match scenarios.
//!
//! Deck shape for small catalogs, the two-card limit under arbitrary tap
//! sequences, and a full timed round through `MemorySession`.

use std::time::Duration;

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use vnfood_core::catalog::{Catalog, DishEntry};
use vnfood_core::core::{GamePhase, GameRng, MemoryConfig};
use vnfood_core::games::memory::{build_deck, FlipOutcome, MemoryGame, MemoryInput, MemorySession, PairId};
use vnfood_core::rules::MiniGame;

fn catalog(n: usize) -> Catalog {
    (0..n)
        .map(|i| DishEntry::new(format!("Món {i} - Dish {i}"), format!("dish_{i}")))
        .collect()
}

/// Slots of each pair, in pair order.
fn pair_slots(game: &MemoryGame) -> Vec<(usize, usize)> {
    let mut slots: FxHashMap<PairId, Vec<usize>> = FxHashMap::default();
    for card in game.cards() {
        slots.entry(card.pair).or_default().push(card.slot);
    }
    let mut pairs: Vec<_> = slots.into_iter().collect();
    pairs.sort();
    pairs.into_iter().map(|(_, s)| (s[0], s[1])).collect()
}

/// Three dishes, eight pairs: the catalog is cycled to fill the deck.
#[test]
fn test_three_dish_catalog_deals_sixteen_cards() {
    let mut rng = GameRng::new(2024);
    let deck = build_deck(&catalog(3), 8, &mut rng).unwrap();
    assert_eq!(deck.len(), 16);

    let mut per_pair: FxHashMap<PairId, usize> = FxHashMap::default();
    for card in &deck {
        *per_pair.entry(card.pair).or_default() += 1;
        assert!(!card.face_up && !card.matched);
    }
    assert_eq!(per_pair.len(), 8);
    assert!(per_pair.values().all(|&n| n == 2));

    // Only three dishes exist, so dishes repeat across pairs
    let mut dishes: Vec<_> = deck.iter().map(|c| c.dish.clone()).collect();
    dishes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    dishes.dedup();
    assert!(dishes.len() <= 3);
}

#[test]
fn test_same_seed_same_deck() {
    let a = build_deck(&catalog(36), 8, &mut GameRng::new(5)).unwrap();
    let b = build_deck(&catalog(36), 8, &mut GameRng::new(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_perfect_round_wins() {
    let mut game = MemoryGame::new(MemoryConfig::default());
    game.start(&catalog(20), &mut GameRng::new(9)).unwrap();

    for (a, b) in pair_slots(&game) {
        game.flip(a);
        game.flip(b);
    }
    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(game.lives(), 15);
    assert_eq!(game.matched_pairs(), 8);
}

#[test]
fn test_running_out_of_lives() {
    let config = MemoryConfig::default().with_max_lives(3);
    let mut game = MemoryGame::new(config);
    game.start(&catalog(20), &mut GameRng::new(9)).unwrap();
    let pairs = pair_slots(&game);
    let (a, b) = (pairs[0].0, pairs[1].0);

    for _ in 0..2 {
        assert!(matches!(game.flip(a), FlipOutcome::Revealed));
        assert!(matches!(game.flip(b), FlipOutcome::Mismatched { lost: false, .. }));
        assert!(game.resolve_mismatch());
    }
    game.flip(a);
    assert_eq!(game.flip(b), FlipOutcome::Mismatched { lives_left: 0, lost: true });
    assert_eq!(game.phase(), GamePhase::Lost);
}

#[test]
fn test_empty_catalog_cannot_start() {
    let mut game = MemoryGame::new(MemoryConfig::default());
    assert!(game.start(&Catalog::default(), &mut GameRng::new(1)).is_err());
    assert_eq!(game.phase(), GamePhase::Idle);
}

fn input() -> impl Strategy<Value = MemoryInput> {
    prop_oneof![
        6 => (0usize..18).prop_map(MemoryInput::Flip),
        2 => Just(MemoryInput::ResolveMismatch),
        1 => Just(MemoryInput::Tick),
    ]
}

proptest! {
    #[test]
    fn prop_every_identity_twice(dishes in 1usize..40, pairs in 1usize..12, seed in any::<u64>()) {
        let deck = build_deck(&catalog(dishes), pairs, &mut GameRng::new(seed)).unwrap();
        let mut per_pair: FxHashMap<PairId, usize> = FxHashMap::default();
        for card in &deck {
            *per_pair.entry(card.pair).or_default() += 1;
        }
        prop_assert_eq!(per_pair.len(), pairs);
        prop_assert!(per_pair.values().all(|&n| n == 2));
    }

    #[test]
    fn prop_at_most_two_flipped(seed in any::<u64>(), inputs in prop::collection::vec(input(), 0..200)) {
        let mut game = MemoryGame::new(MemoryConfig::default().with_max_lives(5));
        game.start(&catalog(10), &mut GameRng::new(seed)).unwrap();

        let mut was_terminal = false;
        for input in inputs {
            let lives_before = game.lives();
            game.apply(input);

            prop_assert!(game.flipped().len() <= 2);
            if game.flipped().len() == 2 {
                prop_assert!(game.is_input_locked());
            }
            prop_assert!(game.lives() <= lives_before);
            if was_terminal {
                prop_assert!(game.is_over());
            }
            was_terminal = game.is_over();
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_session_times_out_after_sixty_seconds() {
    let mut session = MemorySession::new(MemoryConfig::default());
    let mut phases = session.phase_changes();
    session.start(&catalog(3), &mut GameRng::new(1)).unwrap();

    tokio::time::sleep(Duration::from_millis(59_500)).await;
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.snapshot().seconds_left(), 1);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(session.phase(), GamePhase::Lost);

    phases.changed().await.unwrap();
    assert_eq!(*phases.borrow(), GamePhase::Lost);

    // All cards are shown after the round ends
    let game = session.snapshot();
    assert!((0..16).all(|slot| game.is_face_up(slot)));
}

#[tokio::test(start_paused = true)]
async fn test_session_win_stops_countdown() {
    let mut session = MemorySession::new(MemoryConfig::default());
    session.start(&catalog(12), &mut GameRng::new(3)).unwrap();

    for (a, b) in pair_slots(&session.snapshot()) {
        session.flip(a);
        session.flip(b);
    }
    assert_eq!(session.phase(), GamePhase::Won);
    assert_eq!(session.pending_timers(), 0);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(session.snapshot().seconds_left(), 60);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_session_cancels_timers() {
    let mut session = MemorySession::new(MemoryConfig::default());
    let phases = session.phase_changes();
    session.start(&catalog(3), &mut GameRng::new(1)).unwrap();
    drop(session);

    tokio::time::sleep(Duration::from_secs(90)).await;
    assert_eq!(*phases.borrow(), GamePhase::Playing);
}
