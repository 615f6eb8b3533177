//! Recurrence engine configuration.

use serde::{Deserialize, Serialize};
use upkeep_core::enums::MonthOverflow;

/// Default number of occurrences listed when no count is given.
const fn default_count() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecurrenceConfig {
    /// Policy for months that lack the anchor's day-of-month.
    #[serde(default)]
    pub month_overflow: MonthOverflow,

    /// Default number of next/past occurrences to list.
    #[serde(default = "default_count")]
    pub default_count: usize,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            month_overflow: MonthOverflow::default(),
            default_count: default_count(),
        }
    }
}
