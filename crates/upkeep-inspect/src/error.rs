//! Inspection error types.

use thiserror::Error;
use upkeep_core::enums::{InspectionStatus, ResponseType};

/// The submission gate refused a run. Lists exactly what is missing so the
/// caller can highlight it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Submission blocked: unanswered mandatory items [{}], missing signature: {missing_signature}",
    .missing_mandatory.join(", ")
)]
pub struct ValidationError {
    pub missing_mandatory: Vec<String>,
    pub missing_signature: bool,
}

/// Errors from inspection lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectionError {
    /// Mandatory answers or the signature are missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `complete` was called on a run that is already completed.
    #[error("Inspection run {run_id} is already completed")]
    AlreadyCompleted { run_id: String },

    /// Responses were changed on a run that no longer accepts them.
    #[error("Inspection run {run_id} does not accept responses in status {status}")]
    ResponsesLocked {
        run_id: String,
        status: InspectionStatus,
    },

    /// A response names an item the template does not have.
    #[error("Unknown checklist item: {item_id}")]
    UnknownItem { item_id: String },

    /// A response value lies outside the item's response-type domain.
    #[error("Invalid {response_type} response for item {item_id}: '{value}'")]
    InvalidResponse {
        item_id: String,
        response_type: ResponseType,
        value: String,
    },

    /// The template passed in is not the one the run references.
    #[error("Inspection run {run_id} uses template {expected}, got {found}")]
    TemplateMismatch {
        run_id: String,
        expected: String,
        found: String,
    },
}
