use serde::{Deserialize, Serialize};

use super::defaults;

/// How long audit data is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Submission attempts older than this are purged.
    pub attempt_retention_days: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            attempt_retention_days: defaults::DEFAULT_ATTEMPT_RETENTION_DAYS,
        }
    }
}
