//! Deep-link highlight: jump to the page holding a comment, wait for it to
//! render, flash it, then fade.
//!
//! Notification links carry the target as `?highlight=<id>`. Rendering is
//! asynchronous relative to the page switch, so the target is checked at a
//! fixed interval with a bounded number of attempts; when it never shows up
//! the highlight is dropped without an error.

use std::sync::Arc;

use reqwest::Url;
use tokio::time::{interval_at, Instant};
use tracing::debug;

use super::model::{CommentId, LinkKind};
use super::thread::CommentThread;
use crate::core::{TaskGuard, ThreadConfig};

/// Resolves site-relative links for parsing.
const LINK_BASE: &str = "http://localhost/";

/// Link that opens a page scrolled to one comment.
#[must_use]
pub fn comment_link(kind: LinkKind, slug: &str, id: CommentId) -> String {
    let base = match kind {
        LinkKind::Dish => "/dish",
        LinkKind::Forum => "/forum",
    };
    format!("{base}/{slug}?highlight={id}")
}

/// Comment a deep link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightTarget(pub CommentId);

impl HighlightTarget {
    /// Read `highlight` from a query string (leading `?` optional).
    /// Values are form-decoded; the first `highlight` pair wins.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let mut url = Url::parse(LINK_BASE).ok()?;
        url.set_query(Some(query.trim_start_matches('?')));
        Self::from_url(&url)
    }

    /// Read the target from a link such as `/dish/pho?highlight=7`, either
    /// site-relative or absolute.
    #[must_use]
    pub fn from_link(link: &str) -> Option<Self> {
        let url = Url::parse(LINK_BASE).ok()?.join(link).ok()?;
        Self::from_url(&url)
    }

    #[must_use]
    pub fn from_url(url: &Url) -> Option<Self> {
        url.query_pairs()
            .find(|(key, _)| key == "highlight")
            .and_then(|(_, value)| value.parse().ok())
            .map(Self)
    }

    #[must_use]
    pub fn id(self) -> CommentId {
        self.0
    }
}

/// Tells whether a comment's row exists in the rendered output.
pub trait RenderProbe {
    fn is_rendered(&self, id: CommentId) -> bool;
}

impl<F> RenderProbe for F
where
    F: Fn(CommentId) -> bool,
{
    fn is_rendered(&self, id: CommentId) -> bool {
        self(id)
    }
}

/// Applies and removes the visual highlight.
pub trait HighlightSink: Send + Sync + 'static {
    /// Scroll to the row and highlight it.
    fn apply(&self, id: CommentId);
    fn clear(&self, id: CommentId);
}

/// A highlight on screen. Dropping it cancels the pending fade.
#[derive(Debug)]
pub struct ActiveHighlight {
    pub id: CommentId,
    pub page: usize,
    fade: TaskGuard,
}

impl ActiveHighlight {
    /// The fade has already run.
    #[must_use]
    pub fn is_faded(&self) -> bool {
        self.fade.is_finished()
    }
}

/// Result of a highlight attempt.
#[derive(Debug)]
pub enum HighlightOutcome {
    /// The id is not in the loaded thread.
    NotInThread,
    /// The row never rendered within the attempt budget.
    NotRendered { page: usize },
    Applied(ActiveHighlight),
}

impl HighlightOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Switch the thread to the page that holds `target`.
///
/// Returns the page, or `None` if the comment is not loaded.
pub fn reveal(thread: &mut CommentThread, target: HighlightTarget) -> Option<usize> {
    let page = thread.page_of(target.id())?;
    thread.set_page(page);
    Some(page)
}

/// Check the probe every `highlight_poll_interval`, at most
/// `highlight_max_attempts` times.
pub async fn wait_until_rendered<P>(probe: &P, id: CommentId, config: &ThreadConfig) -> bool
where
    P: RenderProbe + ?Sized,
{
    let period = config.highlight_poll_interval;
    let mut ticks = interval_at(Instant::now() + period, period);
    for attempt in 1..=config.highlight_max_attempts {
        ticks.tick().await;
        if probe.is_rendered(id) {
            debug!(%id, attempt, "highlight target rendered");
            return true;
        }
    }
    debug!(%id, "highlight target never rendered");
    false
}

/// Full deep-link flow: reveal the page, wait for the row, highlight it
/// and schedule the fade.
pub async fn highlight<P, S>(
    thread: &mut CommentThread,
    target: HighlightTarget,
    probe: &P,
    sink: Arc<S>,
    config: &ThreadConfig,
) -> HighlightOutcome
where
    P: RenderProbe + ?Sized,
    S: HighlightSink,
{
    let Some(page) = reveal(thread, target) else {
        return HighlightOutcome::NotInThread;
    };
    let id = target.id();
    if !wait_until_rendered(probe, id, config).await {
        return HighlightOutcome::NotRendered { page };
    }

    sink.apply(id);
    let fade = TaskGuard::after(config.highlight_duration, move || sink.clear(id));
    HighlightOutcome::Applied(ActiveHighlight { id, page, fade })
}
