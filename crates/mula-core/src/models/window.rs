use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Count of events inside a rate window and when the oldest of them ages out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCount {
    pub count: u32,
    /// `None` when the window is empty.
    pub reset_at: Option<DateTime<Utc>>,
}

impl WindowCount {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn reached(&self, limit: u32) -> bool {
        self.count >= limit
    }
}
