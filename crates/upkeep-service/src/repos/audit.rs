//! Audit trail repository.
//!
//! Append-only entries recording every run mutation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use upkeep_core::entities::AuditEntry;
use upkeep_core::enums::AuditAction;
use upkeep_core::ids::{PREFIX_AUDIT, generate_id};

use crate::error::ServiceError;
use crate::service::UpkeepService;

impl UpkeepService {
    /// Append an audit entry. Called by every run mutation.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if ID generation or detail serialization fails.
    pub(crate) fn append_audit<D: Serialize>(
        &mut self,
        run_id: &str,
        action: AuditAction,
        detail: Option<&D>,
        now: DateTime<Utc>,
    ) -> Result<(), ServiceError> {
        let detail = detail.map(serde_json::to_value).transpose()?;
        self.audit.push(AuditEntry {
            id: generate_id(PREFIX_AUDIT)?,
            run_id: run_id.to_string(),
            action,
            detail,
            created_at: now,
        });
        Ok(())
    }

    /// Entries for one run, oldest first.
    #[must_use]
    pub fn audit_for_run(&self, run_id: &str) -> Vec<&AuditEntry> {
        self.audit.iter().filter(|e| e.run_id == run_id).collect()
    }

    #[must_use]
    pub fn audit_entries(&self) -> &[AuditEntry] {
        &self.audit
    }
}
