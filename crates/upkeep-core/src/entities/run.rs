use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::InspectionStatus;

/// Captured answer for one checklist item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemResponse {
    /// `None` means unanswered.
    pub value: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl ItemResponse {
    /// A response carrying only a value.
    #[must_use]
    pub fn answer(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.value.is_some()
    }
}

/// Responses of a run keyed by item id.
pub type Responses = BTreeMap<String, ItemResponse>;

/// One instantiation of a checklist template being filled out and scored.
///
/// `score` and `completed_at` are set exactly when `status` is `Completed`;
/// `signature` is never set before then. Only the inspection lifecycle
/// mutates a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InspectionRun {
    pub id: String,
    pub template_id: String,
    /// The planned task whose schedule raised this run; `None` for ad-hoc runs.
    #[serde(default)]
    pub planned_task_id: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: InspectionStatus,
    #[serde(default)]
    pub responses: Responses,
    pub signature: Option<String>,
    pub score: Option<u8>,
}

impl InspectionRun {
    /// A fresh run awaiting its due time.
    #[must_use]
    pub fn scheduled(
        id: impl Into<String>,
        template_id: impl Into<String>,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            template_id: template_id.into(),
            planned_task_id: None,
            scheduled_at,
            started_at: None,
            completed_at: None,
            status: InspectionStatus::Scheduled,
            responses: Responses::new(),
            signature: None,
            score: None,
        }
    }

    /// The recorded value for an item, if answered.
    #[must_use]
    pub fn value_of(&self, item_id: &str) -> Option<&str> {
        self.responses
            .get(item_id)
            .and_then(|response| response.value.as_deref())
    }
}
