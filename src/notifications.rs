use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_CAPACITY: usize = 60;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
pub const WORKSPACE_SWITCH_TIMEOUT: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub expires_at: Instant,
}

/// Bounded queue of transient messages shown in the tray. The oldest entry
/// is dropped once the queue is full.
#[derive(Debug)]
pub struct NotificationCenter {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        timeout: Duration,
        now: Instant,
    ) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        let title = title.into();
        let body = body.into();
        tracing::info!(%title, %body, "notification");
        self.entries.push_back(Notification {
            title,
            body,
            expires_at: now + timeout,
        });
    }

    /// Drop expired entries. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        before - self.entries.len()
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
