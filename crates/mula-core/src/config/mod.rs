//! Configuration system for MulaBoard.
//! TOML-based, resolved as: environment > config file > compiled defaults.

pub mod defaults;
pub mod eligibility_config;
pub mod mula_config;
pub mod observability_config;
pub mod retention_config;
pub mod storage_config;

pub use eligibility_config::EligibilityConfig;
pub use mula_config::MulaConfig;
pub use observability_config::ObservabilityConfig;
pub use retention_config::RetentionConfig;
pub use storage_config::StorageConfig;
