//! Memory deck: pairs of dish cards in random positions.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DishId};
use crate::core::{GameRng, SetupError};

/// Match identity of a card. Exactly two cards share each `PairId`.
///
/// Padding a small catalog can deal the same dish twice, so the pair id,
/// not the dish, decides whether two cards match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u16);

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// One card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Match identity.
    pub pair: PairId,
    /// Dish shown on the face.
    pub dish: DishId,
    pub image_url: String,
    /// Table position; unique per card.
    pub slot: usize,
    pub face_up: bool,
    pub matched: bool,
}

/// Deal `total_pairs` pairs from the catalog.
///
/// Every pair id `0..total_pairs` appears on exactly two cards, cards are
/// in random order, and all start face down and unmatched.
pub fn build_deck(
    catalog: &Catalog,
    total_pairs: usize,
    rng: &mut GameRng,
) -> Result<Vector<Card>, SetupError> {
    let selected = catalog.sample_padded(total_pairs, rng)?;

    let mut cards: Vec<Card> = selected
        .iter()
        .enumerate()
        .flat_map(|(i, dish)| {
            let card = Card {
                pair: PairId(i as u16),
                dish: dish.id(),
                image_url: dish.image_or_placeholder().to_string(),
                slot: 0,
                face_up: false,
                matched: false,
            };
            [card.clone(), card]
        })
        .collect();

    rng.shuffle(&mut cards);
    for (slot, card) in cards.iter_mut().enumerate() {
        card.slot = slot;
    }

    Ok(cards.into_iter().collect())
}
