//! Comment threads on dish and forum pages.
//!
//! ## Key Types
//!
//! - `Comment`, `CommentId`: Wire model of the comments API
//! - `CommentThread`: Newest-first cache with paging and reply previews
//! - `CommentStore`: Read-through cache over a `CommentBackend`
//! - `CommentsClient`: `reqwest` implementation of `CommentBackend`
//! - `HighlightTarget`: Deep-link target and the highlight protocol
//! - `IdentityProvider`: Injected signed-in user

pub mod client;
pub mod highlight;
pub mod identity;
pub mod model;
pub mod store;
pub mod thread;

pub use client::{CommentBackend, CommentsClient};
pub use highlight::{
    comment_link, highlight, reveal, wait_until_rendered, ActiveHighlight, HighlightOutcome,
    HighlightSink, HighlightTarget, RenderProbe,
};
pub use identity::{CurrentUser, IdentityProvider, StaticIdentity};
pub use model::{
    Comment, CommentAuthor, CommentId, CommentUpdate, LinkKind, NewComment, UNKNOWN_AUTHOR,
};
pub use store::CommentStore;
pub use thread::{CommentThread, ReplyPreview, ThreadEntry};
