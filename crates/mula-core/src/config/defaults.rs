// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "mulaboard.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Eligibility ---
pub const DEFAULT_IP_LIMIT: u32 = 5;
pub const DEFAULT_IP_WINDOW_SECS: u64 = 3_600; // 60 minutes
pub const DEFAULT_FINGERPRINT_LIMIT: u32 = 10;
pub const DEFAULT_FINGERPRINT_WINDOW_SECS: u64 = 3_600; // 60 minutes
pub const DEFAULT_MIN_FILL_SECS: u64 = 30;
pub const DEFAULT_IP_HASH_SALT: &str = "mulaboard-dev-salt";

// --- Retention ---
pub const DEFAULT_ATTEMPT_RETENTION_DAYS: u32 = 365;

// --- Upper bounds enforced by validation ---
pub const MAX_RATE_WINDOW_SECS: u64 = 604_800; // 7 days
pub const MAX_MIN_FILL_SECS: u64 = 3_600;
pub const MAX_ATTEMPT_RETENTION_DAYS: u32 = 36_500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
