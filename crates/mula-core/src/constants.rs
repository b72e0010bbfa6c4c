/// MulaBoard core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of rating categories on every feedback record.
pub const CATEGORY_COUNT: usize = 5;

/// Lowest valid category score.
pub const MIN_SCORE: u8 = 1;

/// Highest valid category score.
pub const MAX_SCORE: u8 = 5;

/// Inclusive lower bound of the golden tier.
pub const GOLDEN_THRESHOLD: f64 = 4.5;

/// Inclusive lower bound of the fresh tier.
pub const FRESH_THRESHOLD: f64 = 3.0;

/// Decimal places kept on every stored average.
pub const AVERAGE_DECIMALS: u32 = 2;

/// Maximum length of any free-text field on a submission.
pub const MAX_TEXT_LEN: usize = 2000;

/// Key prefix for IP-scoped rate counters.
pub const IP_COUNTER_PREFIX: &str = "ip";

/// Key prefix for fingerprint-scoped rate counters.
pub const FINGERPRINT_COUNTER_PREFIX: &str = "fp";
