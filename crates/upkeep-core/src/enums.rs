//! Recurrence rules, response types, statuses, and audit actions for Upkeep.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RecurrenceRule
// ---------------------------------------------------------------------------

/// Repeat cadence of a planned maintenance schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceRule {
    Never,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// One recurrence step, expressed in the calendar unit the rule advances by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Days(i64),
    Months(i32),
}

impl RecurrenceRule {
    pub const ALL: [Self; 7] = [
        Self::Never,
        Self::Daily,
        Self::Weekly,
        Self::Biweekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    /// The forward step between two consecutive occurrences. `None` for
    /// [`RecurrenceRule::Never`], which has exactly one occurrence.
    #[must_use]
    pub const fn step(self) -> Option<Step> {
        match self {
            Self::Never => None,
            Self::Daily => Some(Step::Days(1)),
            Self::Weekly => Some(Step::Days(7)),
            Self::Biweekly => Some(Step::Days(14)),
            Self::Monthly => Some(Step::Months(1)),
            Self::Quarterly => Some(Step::Months(3)),
            Self::Yearly => Some(Step::Months(12)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceRule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "recurrence rule",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// MonthOverflow
// ---------------------------------------------------------------------------

/// How month-based rules treat months that lack the anchor's day-of-month
/// (e.g. a schedule anchored on the 31st in a 30-day month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MonthOverflow {
    /// No occurrence in that month.
    #[default]
    Skip,
    /// The occurrence falls on the last day of that month.
    ClampToMonthEnd,
}

impl MonthOverflow {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::ClampToMonthEnd => "clamp_to_month_end",
        }
    }
}

impl fmt::Display for MonthOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResponseType
// ---------------------------------------------------------------------------

/// Answer format of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    YesNo,
    PassFlagFailNa,
    Text,
    Number,
}

pub const VALUE_YES: &str = "yes";
pub const VALUE_NO: &str = "no";
pub const VALUE_PASS: &str = "pass";
pub const VALUE_FLAG: &str = "flag";
pub const VALUE_FAIL: &str = "fail";
pub const VALUE_NA: &str = "na";

impl ResponseType {
    /// The closed set of accepted values, or `None` for free-form types.
    #[must_use]
    pub const fn allowed_values(self) -> Option<&'static [&'static str]> {
        match self {
            Self::YesNo => Some(&[VALUE_YES, VALUE_NO]),
            Self::PassFlagFailNa => Some(&[VALUE_PASS, VALUE_FLAG, VALUE_FAIL, VALUE_NA]),
            Self::Text | Self::Number => None,
        }
    }

    /// Whether `value` is inside this type's domain.
    ///
    /// Matching is exact: `"Yes"` is not a valid `YesNo` answer. Free-form
    /// types accept any non-empty string; numeric validity is not checked.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self.allowed_values() {
            Some(values) => values.contains(&value),
            None => !value.is_empty(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YesNo => "yes_no",
            Self::PassFlagFailNa => "pass_flag_fail_na",
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InspectionStatus
// ---------------------------------------------------------------------------

/// Status of an inspection run.
///
/// ```text
/// scheduled → in_progress → completed
///           → overdue → in_progress
///                     → completed
///           → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    Scheduled,
    InProgress,
    Overdue,
    Completed,
}

impl InspectionStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Scheduled => &[Self::InProgress, Self::Overdue, Self::Completed],
            Self::Overdue => &[Self::InProgress, Self::Completed],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether captured responses may still change.
    #[must_use]
    pub const fn accepts_responses(self) -> bool {
        !matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the run audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Started,
    ResponseRecorded,
    MarkedOverdue,
    Completed,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Started => "started",
            Self::ResponseRecorded => "response_recorded",
            Self::MarkedOverdue => "marked_overdue",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
