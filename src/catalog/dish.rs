//! Dish records from the bundled catalog.
//!
//! A `DishEntry` is static data: name, slug, article sections and an
//! optional image. Games only need the slug (identity and image lookup)
//! and the display name (hangman answer).

use serde::{Deserialize, Serialize};

/// Placeholder shown when a dish has no photo.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.png";

/// Identifier of a dish: its URL slug (e.g. `bun_bo_hue`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl DishId {
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One article section of a dish page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Static dish record.
///
/// ```
/// use vnfood_core::catalog::DishEntry;
///
/// let pho = DishEntry::new("Phở – Beef Noodle Soup", "pho");
/// assert_eq!(pho.id().as_str(), "pho");
/// assert_eq!(pho.image_or_placeholder(), "/assets/placeholder.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishEntry {
    /// Display name, usually `"<Vietnamese> - <English>"`.
    pub name: String,

    /// URL slug. Entries with an empty slug are not playable.
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub sections: Vec<DishSection>,

    #[serde(default, rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

impl DishEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            sections: Vec::new(),
            image_url: None,
        }
    }

    /// Set the image (builder pattern).
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Add an article section (builder pattern).
    #[must_use]
    pub fn with_section(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.sections.push(DishSection {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    #[must_use]
    pub fn id(&self) -> DishId {
        DishId::new(self.slug.clone())
    }

    /// Usable by the games.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.slug.trim().is_empty()
    }

    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// First section body, used as the dish introduction.
    #[must_use]
    pub fn introduction(&self) -> Option<&str> {
        self.sections.first().map(|s| s.content.as_str())
    }

    /// Split the display name into (native hint, uppercased answer).
    #[must_use]
    pub fn hint_and_answer(&self) -> (String, String) {
        split_display_name(&self.name)
    }
}

/// Split `"Phở - Beef Noodle"` into `("Phở", "BEEF NOODLE")`.
///
/// The separator is a hyphen or an en dash. Without a separator the whole
/// name is both hint and answer. Only the segment right after the first
/// separator is used as the answer.
#[must_use]
pub fn split_display_name(name: &str) -> (String, String) {
    let mut parts = name.split(&['-', '–'][..]);
    let hint = parts.next().unwrap_or_default().trim().to_string();
    let answer = match parts.next() {
        Some(latin) if !latin.trim().is_empty() => latin.trim().to_uppercase(),
        _ => hint.to_uppercase(),
    };
    (hint, answer)
}
