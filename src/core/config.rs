//! Configuration types.
//!
//! Each game takes a small builder-style config. Defaults match the live
//! site; tests shrink budgets to reach terminal states quickly.
//!
//! - `MemoryConfig`: pairs, lives, countdown, flip-back delay
//! - `HangmanConfig`: wrong-guess budget
//! - `PuzzleConfig`: grid geometry and bank size
//! - `ThreadConfig`: comment page size and highlight timings
//! - `NotificationConfig`: notification page size and unread polling
//! - `ApiConfig`: backend location, loaded from the environment

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Memory match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Number of distinct dishes dealt (deck size is twice this).
    pub total_pairs: usize,

    /// Mismatches allowed before the round is lost.
    pub max_lives: u32,

    /// Countdown length in whole seconds.
    pub time_limit_secs: u32,

    /// How long a mismatched pair stays face up.
    pub mismatch_delay: Duration,

    /// Countdown tick period.
    pub tick: Duration,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            total_pairs: 8,
            max_lives: 15,
            time_limit_secs: 60,
            mismatch_delay: Duration::from_millis(800),
            tick: Duration::from_secs(1),
        }
    }
}

impl MemoryConfig {
    #[must_use]
    pub fn with_total_pairs(mut self, pairs: usize) -> Self {
        assert!(pairs > 0, "Must deal at least 1 pair");
        self.total_pairs = pairs;
        self
    }

    #[must_use]
    pub fn with_max_lives(mut self, lives: u32) -> Self {
        assert!(lives > 0, "Must start with at least 1 life");
        self.max_lives = lives;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.total_pairs * 2
    }
}

/// Hangman configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Wrong (or repeated) guesses that end the round.
    pub max_wrong: u32,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self { max_wrong: 4 }
    }
}

impl HangmanConfig {
    #[must_use]
    pub fn with_max_wrong(mut self, max_wrong: u32) -> Self {
        assert!(max_wrong > 0, "max_wrong must be at least 1");
        self.max_wrong = max_wrong;
        self
    }
}

/// Puzzle geometry.
///
/// The board is `cols * rows` slots; pieces are dealt `bank_size` per bank
/// across three banks, so `cols * rows` must equal `3 * bank_size`. Piece
/// ids are a byte, which caps the board at `MAX_PIECES`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub cols: usize,
    pub rows: usize,
    pub bank_size: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            bank_size: 4,
        }
    }
}

impl PuzzleConfig {
    pub const MAX_PIECES: usize = 256;

    /// Set the grid and spread its pieces evenly over the three banks.
    #[must_use]
    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "Grid must have at least 1 column and 1 row");
        let count = cols * rows;
        assert!(count <= Self::MAX_PIECES, "Grid holds at most {} pieces", Self::MAX_PIECES);
        assert!(count % 3 == 0, "Piece count must split evenly across 3 banks");
        self.cols = cols;
        self.rows = rows;
        self.bank_size = count / 3;
        self
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Check a config that was built field by field.
    pub fn validate(&self) -> Result<(), SetupError> {
        let invalid = |msg: String| Err(SetupError::InvalidConfig(msg));
        if self.cols == 0 || self.rows == 0 {
            return invalid(format!("empty grid {}x{}", self.cols, self.rows));
        }
        let count = self.cols.saturating_mul(self.rows);
        if count > Self::MAX_PIECES {
            return invalid(format!("{count} pieces exceeds {}", Self::MAX_PIECES));
        }
        if self.bank_size.saturating_mul(3) != count {
            return invalid(format!("3 banks of {} cannot hold {count} pieces", self.bank_size));
        }
        Ok(())
    }
}

/// Comment thread and deep-link highlight timings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadConfig {
    /// Comments per page.
    pub page_size: usize,

    /// Delay between render checks for a highlight target.
    pub highlight_poll_interval: Duration,

    /// Render checks before the highlight is abandoned.
    pub highlight_max_attempts: u32,

    /// How long the highlight stays applied.
    pub highlight_duration: Duration,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            highlight_poll_interval: Duration::from_millis(100),
            highlight_max_attempts: 20,
            highlight_duration: Duration::from_secs(3),
        }
    }
}

impl ThreadConfig {
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be at least 1");
        self.page_size = page_size;
        self
    }

    /// Upper bound on the time spent waiting for a highlight target.
    #[must_use]
    pub fn highlight_budget(&self) -> Duration {
        self.highlight_poll_interval * self.highlight_max_attempts
    }
}

/// Notification list settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Notifications per page.
    pub page_size: usize,

    /// How often the unread count is refreshed in the background.
    pub poll_interval: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            poll_interval: Duration::from_secs(10),
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be at least 1");
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "poll_interval must be non-zero");
        self.poll_interval = interval;
        self
    }
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server origin, without trailing slash.
    /// Env: `VNFOOD_API_URL`
    /// Default: `http://localhost:8000`
    pub base_url: String,

    /// Path prefix of the REST API.
    /// Env: `VNFOOD_API_PREFIX`
    /// Default: `/api`
    pub api_prefix: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VNFOOD_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.starts_with("http://") || url.starts_with("https://") {
                config.base_url = url.to_string();
            } else {
                tracing::warn!(value = %url, "Invalid VNFOOD_API_URL, using default");
            }
        }

        if let Ok(prefix) = std::env::var("VNFOOD_API_PREFIX") {
            let prefix = prefix.trim().trim_end_matches('/');
            config.api_prefix = if prefix.is_empty() || prefix.starts_with('/') {
                prefix.to_string()
            } else {
                format!("/{prefix}")
            };
        }

        config
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL of an API endpoint (`path` starts with `/`).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    /// Absolute URL of a dish photo served by the backend.
    #[must_use]
    pub fn food_image_url(&self, slug: &str) -> String {
        format!("{}/static/food_images/{}.jpg", self.base_url, slug)
    }
}
