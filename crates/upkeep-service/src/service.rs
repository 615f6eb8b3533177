//! The service object that owns all planned tasks, templates, and runs.
//!
//! `UpkeepService` is the only writer of its collections. Repo methods live in
//! `impl UpkeepService` blocks under [`crate::repos`]. Every run mutation
//! appends an audit entry.
//!
//! Single writer: every mutation takes `&mut self`. Two processes editing the
//! same workbook file will lose writes; serialize them externally.

use std::collections::BTreeMap;

use upkeep_config::UpkeepConfig;
use upkeep_core::entities::{AuditEntry, ChecklistTemplate, InspectionRun, PlannedTask};
use upkeep_schedule::Recurrence;

use crate::error::ServiceError;
use crate::workbook::Workbook;

#[derive(Debug, Clone)]
pub struct UpkeepService {
    pub(crate) planned_tasks: BTreeMap<String, PlannedTask>,
    pub(crate) templates: BTreeMap<String, ChecklistTemplate>,
    pub(crate) runs: BTreeMap<String, InspectionRun>,
    pub(crate) audit: Vec<AuditEntry>,
    recurrence: Recurrence,
    strict_templates: bool,
    default_count: usize,
}

impl UpkeepService {
    /// An empty service configured from `config`.
    #[must_use]
    pub fn new(config: &UpkeepConfig) -> Self {
        Self {
            planned_tasks: BTreeMap::new(),
            templates: BTreeMap::new(),
            runs: BTreeMap::new(),
            audit: Vec::new(),
            recurrence: Recurrence::new(config.recurrence.month_overflow),
            strict_templates: config.inspection.strict_templates,
            default_count: config.recurrence.default_count,
        }
    }

    /// Populate a service from a loaded workbook.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Duplicate` if two entities of one kind share an
    /// id, or `ServiceError::Core` for a template with repeated item ids.
    pub fn from_workbook(workbook: Workbook, config: &UpkeepConfig) -> Result<Self, ServiceError> {
        let mut service = Self::new(config);
        for task in workbook.planned_tasks {
            insert_unique(&mut service.planned_tasks, "planned_task", task.id.clone(), task)?;
        }
        for template in workbook.templates {
            template.validate()?;
            insert_unique(&mut service.templates, "template", template.id.clone(), template)?;
        }
        for run in workbook.runs {
            insert_unique(&mut service.runs, "run", run.id.clone(), run)?;
        }
        service.audit = workbook.audit;
        Ok(service)
    }

    /// Snapshot the current state for saving.
    #[must_use]
    pub fn to_workbook(&self) -> Workbook {
        Workbook {
            planned_tasks: self.planned_tasks.values().cloned().collect(),
            templates: self.templates.values().cloned().collect(),
            runs: self.runs.values().cloned().collect(),
            audit: self.audit.clone(),
        }
    }

    /// The recurrence engine, carrying the configured month-overflow policy.
    #[must_use]
    pub const fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    /// Whether completing a run with an unresolvable template is an error.
    #[must_use]
    pub const fn strict_templates(&self) -> bool {
        self.strict_templates
    }

    /// Number of occurrences listed when the caller gives none.
    #[must_use]
    pub const fn default_count(&self) -> usize {
        self.default_count
    }
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, T>,
    entity_type: &'static str,
    id: String,
    value: T,
) -> Result<(), ServiceError> {
    check_unique(map, entity_type, &id)?;
    map.insert(id, value);
    Ok(())
}

pub(crate) fn check_unique<T>(
    map: &BTreeMap<String, T>,
    entity_type: &'static str,
    id: &str,
) -> Result<(), ServiceError> {
    if map.contains_key(id) {
        Err(ServiceError::Duplicate {
            entity_type,
            id: id.to_string(),
        })
    } else {
        Ok(())
    }
}
