//! Read-through comment cache for one page.
//!
//! Every mutation goes to the backend and is followed by a refetch; the
//! cache is never patched locally. Network failures are logged and
//! swallowed: the operation reports `false` and the cache stays as it was.

use tracing::{debug, warn};

use super::client::CommentBackend;
use super::highlight::comment_link;
use super::identity::{CurrentUser, IdentityProvider};
use super::model::{CommentId, LinkKind, NewComment};
use super::thread::CommentThread;
use crate::core::ThreadConfig;

/// Comment thread of one dish or topic, backed by the API.
#[derive(Debug)]
pub struct CommentStore<B, I> {
    backend: B,
    identity: I,
    kind: LinkKind,
    thread: CommentThread,
    slug: Option<String>,
}

impl<B, I> CommentStore<B, I>
where
    B: CommentBackend,
    I: IdentityProvider,
{
    /// Store for threads of one kind of page.
    #[must_use]
    pub fn new(backend: B, identity: I, kind: LinkKind, config: &ThreadConfig) -> Self {
        Self {
            backend,
            identity,
            kind,
            thread: CommentThread::new(config),
            slug: None,
        }
    }

    /// Switch to a dish or topic and load its comments.
    pub async fn open(&mut self, slug: &str) -> bool {
        self.thread.switch_context(slug);
        self.slug = Some(slug.to_string());
        self.refetch().await
    }

    /// Reload the current slug.
    pub async fn refetch(&mut self) -> bool {
        let Some(slug) = self.slug.clone() else {
            return false;
        };
        match self.backend.list(&slug).await {
            Ok(comments) => {
                self.thread.load(&slug, comments);
                true
            }
            Err(err) => {
                warn!(%slug, error = %err, "failed to fetch comments");
                false
            }
        }
    }

    /// Post a comment or a reply as the signed-in user.
    ///
    /// Blank content or a signed-out user is a no-op. A new top-level
    /// comment returns the thread to page 1.
    pub async fn submit(&mut self, content: &str, parent: Option<CommentId>) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        let (Some(user), Some(slug)) = (self.identity.current_user(), self.slug.clone()) else {
            debug!("comment submit without user or thread");
            return false;
        };

        let body = NewComment {
            food_slug: slug,
            user_uid: user.uid,
            content: content.to_string(),
            parent_id: parent,
        };
        if let Err(err) = self.backend.create(&body).await {
            warn!(error = %err, "failed to post comment");
            return false;
        }

        self.refetch().await;
        if parent.is_none() {
            self.thread.reset_page();
        }
        true
    }

    /// Replace the text of a comment the user owns.
    pub async fn edit(&mut self, id: CommentId, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() || !self.can_modify(id) {
            return false;
        }
        if let Err(err) = self.backend.update(id, content).await {
            warn!(%id, error = %err, "failed to edit comment");
            return false;
        }
        self.refetch().await;
        true
    }

    /// Delete a comment the user owns, along with its replies.
    pub async fn delete(&mut self, id: CommentId) -> bool {
        if !self.can_modify(id) {
            return false;
        }
        if let Err(err) = self.backend.delete(id).await {
            warn!(%id, error = %err, "failed to delete comment");
            return false;
        }
        self.refetch().await;
        true
    }

    /// Whether the signed-in user may edit or delete `id`.
    #[must_use]
    pub fn can_modify(&self, id: CommentId) -> bool {
        match (self.identity.current_user(), self.thread.get(id)) {
            (Some(user), Some(comment)) => comment.is_owned_by(&user, self.kind),
            _ => false,
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.identity.current_user()
    }

    #[must_use]
    pub fn thread(&self) -> &CommentThread {
        &self.thread
    }

    /// Mutable thread, for paging and highlight navigation.
    pub fn thread_mut(&mut self) -> &mut CommentThread {
        &mut self.thread
    }

    /// Deep link to a loaded comment of the open thread.
    #[must_use]
    pub fn link_to(&self, id: CommentId) -> Option<String> {
        let slug = self.slug.as_deref()?;
        self.thread.get(id)?;
        Some(comment_link(self.kind, slug, id))
    }

    #[must_use]
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
