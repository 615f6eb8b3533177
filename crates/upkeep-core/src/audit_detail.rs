//! Typed audit detail payloads.
//!
//! Each audit action can carry a structured `detail` JSON blob. These types
//! provide the shapes for the actions that carry one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detail for `AuditAction::Started` and `AuditAction::MarkedOverdue`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: String,
    pub to: String,
}

/// Detail for `AuditAction::ResponseRecorded`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseRecordedDetail {
    pub item_id: String,
    pub value: Option<String>,
}

/// Detail for `AuditAction::Completed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletedDetail {
    pub score: u8,
    /// `false` when the template could not be found and the score fell back.
    pub template_resolved: bool,
    pub signed: bool,
}
