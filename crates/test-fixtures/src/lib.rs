//! Golden case sets shared by MulaBoard test suites.
//!
//! Every file under `test-fixtures/golden/` has the shape
//! `{ "description": "...", "cases": [ { "id": "...", ... } ] }`.
//! Test crates declare their own case struct and load it through
//! [`load_golden`].

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A described list of golden cases.
#[derive(Debug, Deserialize)]
pub struct GoldenSet<C> {
    pub description: String,
    pub cases: Vec<C>,
}

impl<C> GoldenSet<C> {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<C> IntoIterator for GoldenSet<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

/// `test-fixtures/golden`, found by walking up from the calling crate.
pub fn golden_dir() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut dir = PathBuf::from(&start);
    loop {
        let candidate = dir.join("test-fixtures").join("golden");
        if candidate.is_dir() {
            return candidate;
        }
        if !dir.pop() {
            panic!("no test-fixtures/golden above {start}");
        }
    }
}

/// Load `golden/<name>.json`, e.g. `load_golden("rating/classification")`.
///
/// # Panics
/// Panics when the file is missing, malformed, or has no cases.
pub fn load_golden<C: DeserializeOwned>(name: &str) -> GoldenSet<C> {
    let path = golden_dir().join(format!("{name}.json"));
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    let set: GoldenSet<C> = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("parse {}: {e}", path.display()));
    assert!(!set.is_empty(), "{} has no cases", path.display());
    set
}
