//! Service error types for upkeep-service.

use thiserror::Error;
use upkeep_core::errors::CoreError;
use upkeep_inspect::InspectionError;

/// Errors from service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A core-level failure (lookup, transition, ID generation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The inspection lifecycle refused the operation.
    #[error(transparent)]
    Inspection(#[from] InspectionError),

    /// A run references a template that no longer exists and strict template
    /// resolution is enabled.
    #[error("Inspection run {run_id} references missing template {template_id}")]
    TemplateNotFound { run_id: String, template_id: String },

    /// A template cannot be edited once a run references it.
    #[error("Template {template_id} is referenced by inspection runs and cannot be replaced")]
    TemplateInUse { template_id: String },

    /// An entity with this id is already stored.
    #[error("Duplicate {entity_type} id: {id}")]
    Duplicate { entity_type: &'static str, id: String },

    /// Reading or writing the workbook file failed.
    #[error("Workbook I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The workbook file is not valid JSON for the expected shape.
    #[error("Workbook is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServiceError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }

    /// Whether this error is a failed lookup.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
