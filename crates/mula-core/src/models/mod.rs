pub mod attempt;
pub mod feedback;
pub mod ip_hash;
pub mod period;
pub mod rating;
pub mod request;
pub mod tier;
pub mod verdict;
pub mod window;

pub use attempt::{AttemptStatus, SubmissionAttempt};
pub use feedback::{FeedbackRecord, ModerationStatus};
pub use ip_hash::{IpHash, IpHasher};
pub use period::ReviewPeriod;
pub use rating::{Category, CategoryRating, RatingCategories};
pub use request::{AttemptRecordRequest, EligibilityRequest};
pub use tier::{Classification, MulaTier};
pub use verdict::{EligibilityVerdict, RejectReason};
pub use window::WindowCount;
