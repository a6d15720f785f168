//! Comment wire types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::identity::CurrentUser;

/// Server-assigned comment id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl CommentId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CommentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Which kind of page a thread lives on. Decides link paths and who may
/// modify a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    Dish,
    Forum,
}

/// Shown for authors whose profile has no display name.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Public profile of a comment's author, joined in by the server.
///
/// Profiles synced without a name come through as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl CommentAuthor {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            photo_url: None,
        }
    }

    /// Display name, or `UNKNOWN_AUTHOR`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }

    #[must_use]
    pub fn photo_url(&self) -> &str {
        self.photo_url.as_deref().unwrap_or_default()
    }
}

/// A comment as returned by `GET /comments/{slug}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub user_uid: String,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    pub user: CommentAuthor,
}

impl Comment {
    /// Whether `user` may edit or delete this comment.
    ///
    /// Dish threads match on uid only. Forum threads also accept a user
    /// whose effective name equals the author's display name, which keeps
    /// posts made before an account was linked editable.
    #[must_use]
    pub fn is_owned_by(&self, user: &CurrentUser, kind: LinkKind) -> bool {
        if self.user_uid == user.uid {
            return true;
        }
        match (kind, self.user.display_name.as_deref()) {
            (LinkKind::Forum, Some(author)) => user.effective_name().as_deref() == Some(author),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Body of `POST /comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub food_slug: String,
    pub user_uid: String,
    pub content: String,
    pub parent_id: Option<CommentId>,
}

/// Body of `PUT /comments/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub content: String,
}
