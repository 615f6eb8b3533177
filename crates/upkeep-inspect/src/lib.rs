//! # upkeep-inspect
//!
//! Turns a scheduled inspection run into a completed, scored one.
//!
//! - [`validation`]: response-domain checks and the submission gate
//! - [`scoring`]: the compliance score, shared by completion and preview
//! - [`progress`]: per-section answer progress
//! - [`lifecycle`]: `start`, overdue detection, response recording, `complete`
//!
//! Templates are looked up by the caller; a `None` template means the run's
//! template id no longer resolves.

mod error;
pub mod lifecycle;
pub mod progress;
pub mod scoring;
pub mod validation;

pub use error::{InspectionError, ValidationError};
pub use lifecycle::{StartOutcome, Submission, complete, start};
pub use scoring::{compliance_score, score_breakdown};
pub use validation::validate_for_submission;
