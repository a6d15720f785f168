//! Notifications sent when someone replies to or comments on a user's
//! content. Each one links to the comment that triggered it.
//!
//! ## Key Types
//!
//! - `Notification`: Wire model, with its deep-link target
//! - `NotificationStore`: Paged cache, read/delete actions, unread count
//! - `NotificationsClient`: `reqwest` implementation of `NotificationBackend`

pub mod client;
pub mod model;
pub mod store;

pub use client::{NotificationBackend, NotificationsClient};
pub use model::{Notification, NotificationId, NotificationSender, SYSTEM_SENDER};
pub use store::{NotificationLink, NotificationStore};
