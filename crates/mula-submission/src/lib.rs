//! # mula-submission
//!
//! Wires validation, the anti-bot guard, the eligibility gate, the
//! classifier, and storage into one submission pipeline.

pub mod form;
pub mod outcome;
pub mod pipeline;
pub mod validation;

pub use form::SubmissionForm;
pub use outcome::{ResultsView, SubmissionOutcome};
pub use pipeline::SubmissionPipeline;
