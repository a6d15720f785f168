//! Dish catalog: the fixed dataset the games deal from.
//!
//! The `Catalog` stores dish records in their bundled order and provides
//! the random selections each game needs. Only playable entries (non-empty
//! slug) are ever dealt.

use tracing::debug;

use super::dish::{DishEntry, DishId};
use crate::core::{GameRng, SetupError};

/// Ordered collection of dish records.
///
/// ```
/// use vnfood_core::catalog::{Catalog, DishEntry};
/// use vnfood_core::core::GameRng;
///
/// let catalog = Catalog::new(vec![
///     DishEntry::new("Phở - Beef Noodle Soup", "pho"),
///     DishEntry::new("Bún chả - Grilled Pork Noodles", "bun_cha"),
/// ]);
///
/// let mut rng = GameRng::new(1);
/// let picked = catalog.sample_padded(8, &mut rng).unwrap();
/// assert_eq!(picked.len(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    dishes: Vec<DishEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(dishes: Vec<DishEntry>) -> Self {
        Self { dishes }
    }

    /// Parse a JSON array of dish records.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Add a dish record.
    pub fn register(&mut self, dish: DishEntry) {
        self.dishes.push(dish);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Look up a dish by slug.
    #[must_use]
    pub fn get(&self, id: &DishId) -> Option<&DishEntry> {
        self.dishes.iter().find(|d| d.slug == id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DishEntry> {
        self.dishes.iter()
    }

    /// Entries the games may deal.
    pub fn playable(&self) -> impl Iterator<Item = &DishEntry> {
        self.dishes.iter().filter(|d| d.is_playable())
    }

    fn playable_vec(&self) -> Result<Vec<&DishEntry>, SetupError> {
        let playable: Vec<_> = self.playable().collect();
        if playable.is_empty() {
            return Err(SetupError::InsufficientData(format!(
                "catalog of {} entries has no entry with a slug",
                self.dishes.len()
            )));
        }
        Ok(playable)
    }

    /// Pick `amount` dishes without replacement.
    ///
    /// When fewer than `amount` dishes are playable, the playable list is
    /// repeated until the pool is large enough, so the same dish may come
    /// back more than once. Fails only when nothing is playable.
    pub fn sample_padded(
        &self,
        amount: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<DishEntry>, SetupError> {
        let playable = self.playable_vec()?;

        let mut pool: Vec<&DishEntry> = playable.clone();
        while pool.len() < amount {
            pool.extend(playable.iter().copied());
        }
        if pool.len() > playable.len() {
            debug!(playable = playable.len(), pool = pool.len(), "padded dish pool");
        }

        Ok(rng.sample(&pool, amount).into_iter().cloned().collect())
    }

    /// Pick one playable dish.
    pub fn choose(&self, rng: &mut GameRng) -> Result<&DishEntry, SetupError> {
        let playable = self.playable_vec()?;
        // playable_vec never returns an empty list
        let idx = rng.gen_range_usize(0..playable.len());
        Ok(playable[idx])
    }

    /// Pick one playable dish satisfying `predicate`.
    pub fn choose_where<F>(&self, rng: &mut GameRng, predicate: F) -> Result<&DishEntry, SetupError>
    where
        F: Fn(&DishEntry) -> bool,
    {
        let candidates: Vec<_> = self.playable().filter(|d| predicate(d)).collect();
        rng.choose(&candidates).copied().ok_or_else(|| {
            SetupError::InsufficientData("no catalog entry fits this game".to_string())
        })
    }
}

impl FromIterator<DishEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = DishEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Catalog {
        Catalog::new(vec![
            DishEntry::new("Phở - Beef Noodle Soup", "pho"),
            DishEntry::new("Bún chả - Grilled Pork", "bun_cha"),
            DishEntry::new("Bánh mì - Baguette", "banh_mi"),
            DishEntry::new("Unlisted", ""),
        ])
    }

    #[test]
    fn test_playable_filter() {
        let catalog = three();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.playable().count(), 3);
    }

    #[test]
    fn test_sample_unique_when_large_enough() {
        let catalog = three();
        let mut rng = GameRng::new(9);
        let mut slugs: Vec<_> = catalog
            .sample_padded(3, &mut rng)
            .unwrap()
            .into_iter()
            .map(|d| d.slug)
            .collect();
        slugs.sort();
        assert_eq!(slugs, vec!["banh_mi", "bun_cha", "pho"]);
    }

    #[test]
    fn test_sample_padding_cycles() {
        let catalog = three();
        let mut rng = GameRng::new(9);
        let picked = catalog.sample_padded(8, &mut rng).unwrap();
        assert_eq!(picked.len(), 8);
        assert!(picked.iter().all(DishEntry::is_playable));

        // 3 dishes cycled into a pool of 9: each dish appears at most 3 times
        for slug in ["pho", "bun_cha", "banh_mi"] {
            assert!(picked.iter().filter(|d| d.slug == slug).count() <= 3);
        }
    }

    #[test]
    fn test_empty_catalog_fails() {
        let catalog = Catalog::new(vec![DishEntry::new("Nameless", "")]);
        let mut rng = GameRng::new(1);
        assert!(matches!(
            catalog.sample_padded(8, &mut rng),
            Err(SetupError::InsufficientData(_))
        ));
        assert!(catalog.choose(&mut rng).is_err());
    }

    #[test]
    fn test_choose_where() {
        let catalog = three();
        let mut rng = GameRng::new(5);
        let dish = catalog.choose_where(&mut rng, |d| d.slug.starts_with("banh")).unwrap();
        assert_eq!(dish.slug, "banh_mi");

        assert!(catalog.choose_where(&mut rng, |_| false).is_err());
    }

    #[test]
    fn test_get_and_from_json() {
        let catalog = Catalog::from_json(r#"[{"name": "Cơm tấm - Broken Rice", "slug": "com_tam"}]"#).unwrap();
        assert!(catalog.get(&DishId::new("com_tam")).is_some());
        assert!(catalog.get(&DishId::new("pho")).is_none());
    }
}
