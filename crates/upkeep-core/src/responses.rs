//! Result shapes returned by the engines and rendered as JSON by `upk`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::InspectionRun;
use crate::enums::RecurrenceRule;

/// A request for the task collaborator to raise work for a due schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkRequest {
    pub planned_task_id: String,
    pub title: String,
    pub asset: Option<String>,
    /// The due day combined with the anchor's time of day.
    pub due_at: NaiveDateTime,
    pub template_id: Option<String>,
}

/// Response from `upk due`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DueResponse {
    pub date: NaiveDate,
    pub requests: Vec<WorkRequest>,
}

/// Response from `upk occurrences`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OccurrencesResponse {
    pub planned_task_id: String,
    pub rule: RecurrenceRule,
    pub enabled: bool,
    pub next: Vec<NaiveDateTime>,
    pub past: Vec<NaiveDateTime>,
}

/// How a compliance score was derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub score: u8,
    /// Answered items whose value is `pass` or `yes`.
    pub passed: u32,
    /// Answered items other than `na`; the denominator.
    pub scored: u32,
    pub not_applicable: u32,
    pub unanswered: u32,
    /// `false` when the template was missing and the score fell back to 100.
    pub template_resolved: bool,
}

/// Answer progress of one checklist section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionProgress {
    pub title: String,
    pub answered: u32,
    pub total: u32,
    pub missing_mandatory: Vec<String>,
}

/// Answer progress of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub sections: Vec<SectionProgress>,
    pub answered: u32,
    pub total: u32,
    /// Whole percent of items answered; 100 for an empty checklist.
    pub percent: u8,
}

/// Outcome of the submission gate, as shown before a run is completed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub run_id: String,
    pub ok: bool,
    pub missing_mandatory: Vec<String>,
    pub missing_signature: bool,
}

/// Response from `upk overdue`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverdueResponse {
    pub now: DateTime<Utc>,
    pub runs: Vec<InspectionRun>,
}
