//! Paginated, newest-first view of one page's comments.

use im::Vector;
use tracing::debug;

use super::model::{Comment, CommentId};
use crate::core::ThreadConfig;
use crate::paging::{page_for_position, Paginator};

/// "Replying to X" preview for a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyPreview<'a> {
    pub parent: CommentId,
    pub author: &'a str,
    pub content: &'a str,
}

/// One rendered row of the thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadEntry<'a> {
    pub comment: &'a Comment,
    /// `None` for top-level comments and for replies whose parent is gone.
    pub reply_to: Option<ReplyPreview<'a>>,
}

/// Comments of one dish or forum topic, newest first.
///
/// `generation` increases every time the thread switches to a different
/// page context, so async work started for an older context can tell it
/// is stale.
#[derive(Clone, Debug)]
pub struct CommentThread {
    context: Option<String>,
    comments: Vector<Comment>,
    pager: Paginator,
    generation: u64,
}

impl CommentThread {
    #[must_use]
    pub fn new(config: &ThreadConfig) -> Self {
        Self {
            context: None,
            comments: Vector::new(),
            pager: Paginator::new(config.page_size),
            generation: 0,
        }
    }

    /// Point the thread at another dish or topic. Clears the cache and
    /// returns to page 1.
    pub fn switch_context(&mut self, slug: &str) {
        if self.context.as_deref() == Some(slug) {
            return;
        }
        self.context = Some(slug.to_string());
        self.comments = Vector::new();
        self.pager.set_total(0);
        self.pager.reset();
        self.generation += 1;
        debug!(slug, generation = self.generation, "thread context switched");
    }

    /// Replace the cache with a server listing (oldest first).
    ///
    /// A listing for a different context switches to it first. The page is
    /// kept when refreshing the same context, clamped if the list shrank.
    pub fn load(&mut self, slug: &str, oldest_first: Vec<Comment>) {
        self.switch_context(slug);
        self.comments = oldest_first.into_iter().rev().collect();
        self.pager.set_total(self.comments.len());
    }

    // === Paging ===

    #[must_use]
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    #[must_use]
    pub fn has_pages(&self) -> bool {
        self.pager.has_pages()
    }

    pub fn set_page(&mut self, page: usize) -> usize {
        self.pager.set_page(page)
    }

    pub fn reset_page(&mut self) {
        self.pager.reset();
    }

    /// Rows of the current page with their reply previews.
    ///
    /// Parents are found by scanning the whole cache, so a reply on page 1
    /// can preview a parent on page 3.
    #[must_use]
    pub fn current_page(&self) -> Vec<ThreadEntry<'_>> {
        let range = self.pager.range();
        self.comments
            .iter()
            .skip(range.start)
            .take(range.len())
            .map(|comment| ThreadEntry {
                comment,
                reply_to: comment.parent_id.and_then(|parent| self.preview(parent)),
            })
            .collect()
    }

    fn preview(&self, parent: CommentId) -> Option<ReplyPreview<'_>> {
        self.get(parent).map(|c| ReplyPreview {
            parent,
            author: c.user.name(),
            content: &c.content,
        })
    }

    // === Lookup ===

    #[must_use]
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// 1-based position in the full newest-first list.
    #[must_use]
    pub fn position_of(&self, id: CommentId) -> Option<usize> {
        self.comments.iter().position(|c| c.id == id).map(|i| i + 1)
    }

    /// Page that contains `id`.
    #[must_use]
    pub fn page_of(&self, id: CommentId) -> Option<usize> {
        self.position_of(id)
            .map(|pos| page_for_position(pos, self.pager.page_size()))
    }

    // === Accessors ===

    /// Cheap snapshot of the cache, newest first.
    #[must_use]
    pub fn comments(&self) -> Vector<Comment> {
        self.comments.clone()
    }

    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
