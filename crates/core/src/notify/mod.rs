//! User-facing success/error notices.
//!
//! The terminal analogue of toast notifications: mutation outcomes and fetch
//! failures push a notice; the view renders the most recent entries and old
//! ones age out by count.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of notices retained.
const FEED_CAPACITY: usize = 8;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// A completed mutation.
    Success,
    /// A failed mutation or fetch.
    Error,
}

/// A single user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Display message.
    pub message: String,
}

/// A bounded, shared feed of notices.
///
/// Cheap to clone; every managed collection pushes into the same feed the
/// view renders from.
#[derive(Clone, Default)]
pub struct Notices {
    feed: Arc<Mutex<VecDeque<Notice>>>,
}

impl Notices {
    /// Creates an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a success notice.
    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    /// Pushes an error notice.
    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    fn push(&self, notice: Notice) {
        let mut feed = self.lock();
        if feed.len() == FEED_CAPACITY {
            feed.pop_front();
        }
        feed.push_back(notice);
    }

    /// Returns the most recent notice, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Notice> {
        self.lock().back().cloned()
    }

    /// Returns up to `n` of the most recent notices, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<Notice> {
        self.lock().iter().rev().take(n).cloned().collect()
    }

    /// Clears the feed.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Notice>> {
        match self.feed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
