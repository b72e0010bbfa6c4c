//! # mula-core
//!
//! Foundation crate for the MulaBoard feedback core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MulaConfig;
pub use errors::{MulaError, MulaResult};
pub use models::{
    AttemptStatus, EligibilityVerdict, FeedbackRecord, MulaTier, RatingCategories, RejectReason,
    ReviewPeriod, SubmissionAttempt,
};
