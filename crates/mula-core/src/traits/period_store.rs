use chrono::{DateTime, Utc};

use crate::errors::MulaResult;
use crate::models::ReviewPeriod;

/// Review period lookups and admin toggles.
pub trait IPeriodStore: Send + Sync {
    fn create_period(&self, period: &ReviewPeriod) -> MulaResult<()>;
    fn get_period(&self, id: &str) -> MulaResult<Option<ReviewPeriod>>;
    fn list_periods(&self) -> MulaResult<Vec<ReviewPeriod>>;
    fn set_period_active(&self, id: &str, active: bool) -> MulaResult<()>;

    /// The most recently started period accepting submissions at `now`.
    fn active_period_at(&self, now: DateTime<Utc>) -> MulaResult<Option<ReviewPeriod>>;
}
