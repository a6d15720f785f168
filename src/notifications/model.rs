//! Notification wire types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::comments::HighlightTarget;

/// Sender name the server uses for notifications without a user.
pub const SYSTEM_SENDER: &str = "System";

/// Server-assigned notification id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub i64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Who triggered a notification. Every field is null for system notices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSender {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl NotificationSender {
    /// A named user, as opposed to the system.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.display_name
            .as_deref()
            .map_or(false, |name| !name.is_empty() && name != SYSTEM_SENDER)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if self.is_user() => name,
            _ => SYSTEM_SENDER,
        }
    }

    /// Profile page of a user sender.
    #[must_use]
    pub fn profile_link(&self) -> Option<String> {
        let uid = self.uid.as_deref().filter(|_| self.is_user())?;
        Some(format!("/profile/{uid}"))
    }
}

/// A notification as returned by `GET /notifications/{uid}`, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Site link, usually a comment deep link.
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: NotificationSender,
}

impl Notification {
    /// Comment the link points at, if it carries one.
    #[must_use]
    pub fn target(&self) -> Option<HighlightTarget> {
        HighlightTarget::from_link(&self.link)
    }

    /// Text shown next to the sender's name.
    ///
    /// The server writes the sender's name into the content; it is cut out
    /// so it is not shown twice.
    #[must_use]
    pub fn message(&self) -> String {
        if !self.sender.is_user() {
            return self.content.clone();
        }
        self.content.replacen(self.sender.name(), "", 1).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::CommentId;

    const LISTING: &str = r#"[
        {"id": 5, "content": "Lan replied to your comment", "link": "/dish/pho?highlight=42",
         "is_read": false, "created_at": "2024-06-02T10:00:00",
         "sender": {"uid": "u-lan", "display_name": "Lan", "photo_url": "http://x/lan.png"}},
        {"id": 4, "content": "Your post was featured", "link": null,
         "is_read": true, "created_at": "2024-06-01T09:00:00",
         "sender": {"uid": null, "display_name": "System", "photo_url": ""}}
    ]"#;

    #[test]
    fn test_parse_listing() {
        let items: Vec<Notification> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(items.len(), 2);

        let reply = &items[0];
        assert!(reply.sender.is_user());
        assert_eq!(reply.message(), "replied to your comment");
        assert_eq!(reply.target(), Some(HighlightTarget(CommentId(42))));
        assert_eq!(reply.sender.profile_link().as_deref(), Some("/profile/u-lan"));

        let notice = &items[1];
        assert_eq!(notice.link, "");
        assert_eq!(notice.sender.name(), SYSTEM_SENDER);
        assert_eq!(notice.message(), "Your post was featured");
        assert_eq!(notice.target(), None);
        assert_eq!(notice.sender.profile_link(), None);
    }

    #[test]
    fn test_sender_with_null_name_is_system() {
        let json = r#"{"id": 1, "content": "hi", "link": "/forum/x", "is_read": null,
                       "created_at": "2024-06-01T09:00:00",
                       "sender": {"uid": "u9", "display_name": null, "photo_url": null}}"#;
        let item: Notification = serde_json::from_str(json).unwrap();
        assert!(!item.is_read);
        assert!(!item.sender.is_user());
        assert_eq!(item.sender.name(), SYSTEM_SENDER);
    }
}
