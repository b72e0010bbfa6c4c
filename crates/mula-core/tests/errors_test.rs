use mula_core::errors::*;

#[test]
fn storage_error_converts_to_mula_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: MulaError = storage_err.into();
    assert!(matches!(err, MulaError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn config_error_converts_to_mula_error() {
    let err: MulaError = ConfigError::FileNotFound {
        path: "mula.toml".into(),
    }
    .into();
    assert!(matches!(err, MulaError::ConfigError(_)));
}

#[test]
fn validation_error_names_field() {
    let err = MulaError::validation("ratings.overall", "score must be between 1 and 5");
    let msg = err.to_string();
    assert!(msg.contains("ratings.overall"));
    assert!(msg.contains("between 1 and 5"));
}

#[test]
fn migration_failure_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 3,
        reason: "table exists".into(),
    };
    assert!(err.to_string().contains('3'));
}
