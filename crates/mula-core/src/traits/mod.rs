pub mod attempt_store;
pub mod feedback_store;
pub mod period_store;
pub mod rate_counter;

pub use attempt_store::{AttemptScope, IAttemptStore};
pub use feedback_store::IFeedbackStore;
pub use period_store::IPeriodStore;
pub use rate_counter::IRateCounter;
