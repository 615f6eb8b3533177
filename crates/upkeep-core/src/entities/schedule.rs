use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RecurrenceRule;

/// When a planned task falls due.
///
/// `anchor` is the first occurrence in facility-local wall time. No occurrence
/// exists before the anchor's calendar day, and a disabled schedule has none.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecurringSchedule {
    pub anchor: NaiveDateTime,
    pub rule: RecurrenceRule,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl RecurringSchedule {
    #[must_use]
    pub const fn new(anchor: NaiveDateTime, rule: RecurrenceRule) -> Self {
        Self {
            anchor,
            rule,
            enabled: true,
        }
    }
}

/// A planned maintenance task. Owns its schedule exclusively.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlannedTask {
    pub id: String,
    pub title: String,
    pub asset: Option<String>,
    pub schedule: RecurringSchedule,
    /// Checklist to run when the task falls due, if any.
    pub template_id: Option<String>,
}
