//! Cross-cutting error types for Upkeep.
//!
//! Domain-specific errors (`InspectionError`, `ServiceError`, `ConfigError`)
//! live in their respective crates. `upkeep-cli` converges everything into
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Upkeep crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A checklist template is malformed.
    #[error("Invalid template {template_id}: {reason}")]
    InvalidTemplate { template_id: String, reason: String },

    /// A string did not name a known enum variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// The OS random source failed while generating an ID.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),
}
