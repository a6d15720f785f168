//! Read-through notification cache and the unread count.
//!
//! Like the comment store, every action goes to the backend and is
//! followed by a refetch, and failures are logged and reported as `false`
//! or `None`. The unread count is published on a watch channel: this store
//! is its only writer and any number of badges can read it.

use std::sync::Arc;

use im::Vector;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{debug, warn};

use super::client::NotificationBackend;
use super::model::{Notification, NotificationId};
use crate::comments::{HighlightTarget, IdentityProvider};
use crate::core::{NotificationConfig, TaskGuard};
use crate::paging::Paginator;

/// Where opening a notification leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationLink {
    pub link: String,
    /// Comment to highlight once the linked page is loaded.
    pub highlight: Option<HighlightTarget>,
}

/// Notifications of the signed-in user, newest first, paged.
#[derive(Debug)]
pub struct NotificationStore<B, I> {
    backend: Arc<B>,
    identity: I,
    items: Vector<Notification>,
    pager: Paginator,
    unread_tx: Arc<watch::Sender<usize>>,
    poll_interval: std::time::Duration,
}

fn count_unread<'a>(items: impl IntoIterator<Item = &'a Notification>) -> usize {
    items.into_iter().filter(|n| !n.is_read).count()
}

impl<B, I> NotificationStore<B, I>
where
    B: NotificationBackend + 'static,
    I: IdentityProvider,
{
    #[must_use]
    pub fn new(backend: B, identity: I, config: &NotificationConfig) -> Self {
        let (unread_tx, _) = watch::channel(0);
        Self {
            backend: Arc::new(backend),
            identity,
            items: Vector::new(),
            pager: Paginator::new(config.page_size),
            unread_tx: Arc::new(unread_tx),
            poll_interval: config.poll_interval,
        }
    }

    /// Reload the list. Signed out, the list is emptied and the count
    /// drops to zero.
    pub async fn refresh(&mut self) -> bool {
        let Some(user) = self.identity.current_user() else {
            self.replace(Vector::new());
            return false;
        };
        match self.backend.list(&user.uid).await {
            Ok(items) => {
                self.replace(items.into_iter().collect());
                true
            }
            Err(err) => {
                warn!(uid = %user.uid, error = %err, "failed to fetch notifications");
                false
            }
        }
    }

    fn replace(&mut self, items: Vector<Notification>) {
        self.items = items;
        self.pager.set_total(self.items.len());
        self.unread_tx.send_replace(count_unread(&self.items));
    }

    /// Mark a notification read (when it is not yet) and return where it
    /// points. `None` when it is unknown or marking it failed.
    pub async fn open(&mut self, id: NotificationId) -> Option<NotificationLink> {
        let item = self.get(id)?.clone();
        if !item.is_read {
            if let Err(err) = self.backend.mark_read(id).await {
                warn!(%id, error = %err, "failed to mark notification read");
                return None;
            }
            self.refresh().await;
        }
        debug!(%id, link = %item.link, "notification opened");
        Some(NotificationLink {
            highlight: item.target(),
            link: item.link,
        })
    }

    /// Delete one notification. The page steps back when it empties.
    pub async fn delete(&mut self, id: NotificationId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if let Err(err) = self.backend.delete(id).await {
            warn!(%id, error = %err, "failed to delete notification");
            return false;
        }
        self.refresh().await;
        true
    }

    /// Mark everything read. Does nothing when nothing is unread.
    pub async fn mark_all_read(&mut self) -> bool {
        if self.unread_count() == 0 {
            return false;
        }
        let Some(user) = self.identity.current_user() else {
            return false;
        };
        if let Err(err) = self.backend.mark_all_read(&user.uid).await {
            warn!(uid = %user.uid, error = %err, "failed to mark notifications read");
            return false;
        }
        self.refresh().await;
        true
    }

    /// Delete every notification and return to page 1.
    pub async fn delete_all(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let Some(user) = self.identity.current_user() else {
            return false;
        };
        if let Err(err) = self.backend.delete_all(&user.uid).await {
            warn!(uid = %user.uid, error = %err, "failed to delete notifications");
            return false;
        }
        self.refresh().await;
        self.pager.reset();
        true
    }

    /// Refresh the unread count every `poll_interval`, starting now, until
    /// the guard is dropped. `None` when signed out.
    ///
    /// Only the count is updated; the list itself changes on `refresh`.
    #[must_use]
    pub fn poll_unread(&self) -> Option<TaskGuard> {
        let uid = self.identity.current_user()?.uid;
        let backend = Arc::clone(&self.backend);
        let unread_tx = Arc::clone(&self.unread_tx);
        let period = self.poll_interval;
        Some(TaskGuard::spawn(async move {
            let mut ticks = interval(period);
            loop {
                ticks.tick().await;
                match backend.list(&uid).await {
                    Ok(items) => {
                        unread_tx.send_replace(count_unread(&items));
                    }
                    Err(err) => debug!(%uid, error = %err, "unread poll failed"),
                }
            }
        }))
    }

    // === Reads ===

    #[must_use]
    pub fn unread_count(&self) -> usize {
        *self.unread_tx.borrow()
    }

    /// Receiver for badges that show the unread count.
    #[must_use]
    pub fn unread_changes(&self) -> watch::Receiver<usize> {
        self.unread_tx.subscribe()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &Vector<Notification> {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_page(&self) -> Vec<&Notification> {
        let range = self.pager.range();
        self.items.iter().skip(range.start).take(range.len()).collect()
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    pub fn set_page(&mut self, page: usize) -> usize {
        self.pager.set_page(page)
    }
}
