//! Page arithmetic for comment threads and the forum topic list.
//!
//! ## Key Types
//!
//! - `Paginator`: 1-based page cursor over a list of known length
//! - `TopicIndex`: Forum topics with accent-insensitive search

pub mod paginator;
pub mod topics;

pub use paginator::{page_for_position, Paginator};
pub use topics::{fold_for_search, ForumTopic, TopicIndex};
