use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RecurrenceRule, ResponseType};
use crate::errors::CoreError;

/// A single question on a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub response_type: ResponseType,
    #[serde(default)]
    pub mandatory: bool,
    pub help_text: Option<String>,
}

/// An ordered, titled group of items. Owned by exactly one template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistSection {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

/// Reusable definition of an inspection type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistTemplate {
    pub id: String,
    pub name: String,
    pub sections: Vec<ChecklistSection>,
    #[serde(default)]
    pub requires_signature: bool,
    pub frequency: RecurrenceRule,
}

impl ChecklistTemplate {
    /// Every item across every section, in section order.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ChecklistItem> {
        self.items().find(|item| item.id == id)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Item ids must be non-blank and unique across all sections, since
    /// responses are keyed by item id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTemplate` naming the first offending id.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for item in self.items() {
            if item.id.trim().is_empty() {
                return Err(self.invalid(format!("item '{}' has a blank id", item.label)));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(self.invalid(format!("item id '{}' appears more than once", item.id)));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> CoreError {
        CoreError::InvalidTemplate {
            template_id: self.id.clone(),
            reason,
        }
    }
}
