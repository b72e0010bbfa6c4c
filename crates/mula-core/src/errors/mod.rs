//! Error handling for MulaBoard.
//! One error enum per subsystem, `thiserror` only, aggregated into `MulaError`.

pub mod config_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Top-level error for every fallible operation in the workspace.
///
/// Business rejections (duplicates, rate limits, bot signals) are not errors;
/// they travel as verdict values.
#[derive(Debug, thiserror::Error)]
pub enum MulaError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("feedback not found: {id}")]
    FeedbackNotFound { id: String },

    #[error("review period not found: {id}")]
    PeriodNotFound { id: String },

    #[error("feedback already submitted for target {target_user_id} in period {review_period_id}")]
    DuplicateSubmission {
        target_user_id: String,
        review_period_id: String,
    },

    #[error("rate counter unavailable: {reason}")]
    RateCounterUnavailable { reason: String },
}

impl MulaError {
    /// Shorthand for a field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type MulaResult<T> = Result<T, MulaError>;
