//! Dish catalog: static records and random selection.
//!
//! ## Key Types
//!
//! - `DishId`: Slug identifying a dish
//! - `DishEntry`: Static dish record (name, slug, sections, image)
//! - `Catalog`: Ordered records with padded sampling for the games

pub mod dish;
pub mod registry;

pub use dish::{split_display_name, DishEntry, DishId, DishSection, PLACEHOLDER_IMAGE};
pub use registry::Catalog;
