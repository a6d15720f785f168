//! Scoped ownership of background timers.
//!
//! Every timer a view starts (countdown, flip-back delay, highlight fade,
//! render polling) is held by a `TaskGuard`. Dropping the guard aborts the
//! task, so tearing down the owner releases all of its timers on every
//! exit path.
//!
//! ```no_run
//! use std::time::Duration;
//! use vnfood_core::core::TaskGuard;
//!
//! # async fn demo() {
//! let guard = TaskGuard::after(Duration::from_millis(800), || println!("flip back"));
//! drop(guard); // never fires
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a spawned task that is aborted when dropped.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct TaskGuard {
    handle: Option<JoinHandle<()>>,
}

impl TaskGuard {
    /// Spawn a future owned by this guard.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }

    /// Run `action` once after `delay`.
    pub fn after<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        })
    }

    /// Check whether the task has run to completion (or was cancelled).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Abort the task now.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// All timers started by one owner.
#[derive(Debug, Default)]
pub struct TimerSet {
    tasks: Vec<TaskGuard>,
}

impl TimerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a timer.
    pub fn push(&mut self, guard: TaskGuard) {
        self.tasks.retain(|t| !t.is_finished());
        self.tasks.push(guard);
    }

    /// Number of timers still pending.
    #[must_use]
    pub fn active(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }

    /// Abort every timer.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }
}
