//! On-disk snapshot of everything the service owns.
//!
//! A workbook is a single JSON document. Saves go through a sibling temp file
//! and a rename so a crash never leaves a half-written workbook behind.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use upkeep_core::entities::{AuditEntry, ChecklistTemplate, InspectionRun, PlannedTask};

use crate::error::ServiceError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workbook {
    #[serde(default)]
    pub planned_tasks: Vec<PlannedTask>,
    #[serde(default)]
    pub templates: Vec<ChecklistTemplate>,
    #[serde(default)]
    pub runs: Vec<InspectionRun>,
    #[serde(default)]
    pub audit: Vec<AuditEntry>,
}

impl Workbook {
    /// Read a workbook. A missing file yields an empty workbook.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Io` if the file exists but cannot be read, or
    /// `ServiceError::Json` if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ServiceError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "workbook: not found, starting empty");
                return Ok(Self::default());
            }
            Err(source) => return Err(io_error(path, source)),
        };
        let workbook: Self = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            planned_tasks = workbook.planned_tasks.len(),
            templates = workbook.templates.len(),
            runs = workbook.runs.len(),
            "workbook: loaded"
        );
        Ok(workbook)
    }

    /// Write the workbook as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Io` if the temp file cannot be written or
    /// renamed into place.
    pub fn save(&self, path: &Path) -> Result<(), ServiceError> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| io_error(&tmp, source))?;
        fs::rename(&tmp, path).map_err(|source| io_error(path, source))?;
        tracing::debug!(path = %path.display(), "workbook: saved");
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ServiceError {
    ServiceError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use upkeep_core::entities::RecurringSchedule;
    use upkeep_core::enums::RecurrenceRule;

    fn sample() -> Workbook {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Workbook {
            planned_tasks: vec![PlannedTask {
                id: "pln-00000001".into(),
                title: "Boiler service".into(),
                asset: Some("Boiler 2".into()),
                schedule: RecurringSchedule::new(anchor, RecurrenceRule::Yearly),
                template_id: None,
            }],
            ..Workbook::default()
        }
    }

    #[test]
    fn save_then_load_preserves_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upkeep.json");

        sample().save(&path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(Workbook::load(&path).unwrap(), sample());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = Workbook::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(workbook, Workbook::default());
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Workbook::load(&path), Err(ServiceError::Json(_))));
    }

    #[test]
    fn sections_may_be_omitted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"templates": []}"#).unwrap();
        assert_eq!(Workbook::load(&path).unwrap(), Workbook::default());
    }
}
