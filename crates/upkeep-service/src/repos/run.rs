//! Inspection run repository: scheduling, lifecycle transitions, and queries.
//!
//! Every mutation works on a copy of the stored run and writes it back only
//! after the lifecycle call and its audit entry have both succeeded.

use chrono::{DateTime, NaiveDate, Utc};

use upkeep_core::audit_detail::{CompletedDetail, ResponseRecordedDetail, StatusChangedDetail};
use upkeep_core::entities::{ChecklistTemplate, InspectionRun, ItemResponse};
use upkeep_core::enums::{AuditAction, InspectionStatus};
use upkeep_core::ids::{PREFIX_RUN, generate_id};
use upkeep_core::responses::{ChecklistProgress, OverdueResponse, ScoreBreakdown, ValidationReport};
use upkeep_inspect::lifecycle::{self, StartOutcome, Submission};
use upkeep_inspect::progress::checklist_progress;
use upkeep_inspect::validation::validate_for_submission;

use crate::error::ServiceError;
use crate::service::UpkeepService;

impl UpkeepService {
    /// Create an ad-hoc scheduled run of `template_id` due at `scheduled_at`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) if the template does not exist.
    pub fn schedule_run(
        &mut self,
        template_id: &str,
        scheduled_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<InspectionRun, ServiceError> {
        self.insert_scheduled_run(template_id, None, scheduled_at, now)
    }

    /// Schedule a run for every templated planned task due on `today`.
    ///
    /// Due times are the anchor's wall time read as UTC. A planned task that
    /// already raised a run for that instant is skipped, so calling this twice
    /// for one day creates nothing new. Tasks sharing a template each get
    /// their own run.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if a referenced template is missing or ID
    /// generation fails; runs created before the failure are kept.
    pub fn raise_due_runs(
        &mut self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Vec<InspectionRun>, ServiceError> {
        let due = self.due_work(today);
        let mut created = Vec::new();
        for request in due.requests {
            let Some(template_id) = request.template_id else {
                continue;
            };
            let scheduled_at = request.due_at.and_utc();
            let exists = self.runs.values().any(|r| {
                r.planned_task_id.as_deref() == Some(request.planned_task_id.as_str())
                    && r.scheduled_at == scheduled_at
            });
            if !exists {
                created.push(self.insert_scheduled_run(
                    &template_id,
                    Some(&request.planned_task_id),
                    scheduled_at,
                    now,
                )?);
            }
        }
        Ok(created)
    }

    fn insert_scheduled_run(
        &mut self,
        template_id: &str,
        planned_task_id: Option<&str>,
        scheduled_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<InspectionRun, ServiceError> {
        self.get_template(template_id)?;
        let mut run = InspectionRun::scheduled(generate_id(PREFIX_RUN)?, template_id, scheduled_at);
        run.planned_task_id = planned_task_id.map(String::from);
        self.append_audit(&run.id, AuditAction::Created, None::<&()>, now)?;
        tracing::debug!(run_id = %run.id, template_id, ?planned_task_id, %scheduled_at, "run: scheduled");
        self.runs.insert(run.id.clone(), run.clone());
        Ok(run)
    }

    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn get_run(&self, id: &str) -> Result<&InspectionRun, ServiceError> {
        self.runs
            .get(id)
            .ok_or_else(|| ServiceError::not_found("run", id))
    }

    pub fn runs(&self) -> impl Iterator<Item = &InspectionRun> {
        self.runs.values()
    }

    /// Start a run. Starting an in-progress or completed run is a no-op and
    /// writes no audit entry.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn start_run(&mut self, id: &str, now: DateTime<Utc>) -> Result<StartOutcome, ServiceError> {
        let mut run = self.get_run(id)?.clone();
        let from = run.status;
        let outcome = lifecycle::start(&mut run, now);
        if outcome == StartOutcome::Started {
            let detail = StatusChangedDetail {
                from: from.as_str().into(),
                to: run.status.as_str().into(),
            };
            self.append_audit(id, AuditAction::Started, Some(&detail), now)?;
            self.runs.insert(run.id.clone(), run);
        }
        Ok(outcome)
    }

    /// Record one item's answer on an open run.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::TemplateNotFound` if the run's template is gone,
    /// or `ServiceError::Inspection` if the lifecycle rejects the response.
    pub fn record_response(
        &mut self,
        run_id: &str,
        item_id: &str,
        response: ItemResponse,
        now: DateTime<Utc>,
    ) -> Result<(), ServiceError> {
        let mut run = self.get_run(run_id)?.clone();
        let template = self.require_template(&run)?;
        let detail = ResponseRecordedDetail {
            item_id: item_id.to_string(),
            value: response.value.clone(),
        };
        lifecycle::record_response(&mut run, template, item_id, response)?;
        self.append_audit(run_id, AuditAction::ResponseRecorded, Some(&detail), now)?;
        self.runs.insert(run.id.clone(), run);
        Ok(())
    }

    /// Score the run's current responses without completing it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown run, or
    /// `TemplateNotFound` when strict template resolution is on.
    pub fn preview_score(&self, run_id: &str) -> Result<ScoreBreakdown, ServiceError> {
        let run = self.get_run(run_id)?;
        let template = self.resolve_template(run)?;
        Ok(lifecycle::preview_score(run, template))
    }

    /// Per-section answer progress.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::TemplateNotFound` if the run's template is gone.
    pub fn progress(&self, run_id: &str) -> Result<ChecklistProgress, ServiceError> {
        let run = self.get_run(run_id)?;
        let template = self.require_template(run)?;
        Ok(checklist_progress(template, &run.responses))
    }

    /// Run the submission gate over the stored responses without submitting.
    ///
    /// With an unresolved template in lenient mode the report is `ok`, since
    /// completion would go through.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown run, or
    /// `TemplateNotFound` when strict template resolution is on.
    pub fn validate_run(
        &self,
        run_id: &str,
        signature: Option<&str>,
    ) -> Result<ValidationReport, ServiceError> {
        let run = self.get_run(run_id)?;
        let outcome = match self.resolve_template(run)? {
            Some(template) => validate_for_submission(template, &run.responses, signature),
            None => Ok(()),
        };
        let (missing_mandatory, missing_signature) = match outcome {
            Ok(()) => (Vec::new(), false),
            Err(e) => (e.missing_mandatory, e.missing_signature),
        };
        Ok(ValidationReport {
            run_id: run.id.clone(),
            ok: missing_mandatory.is_empty() && !missing_signature,
            missing_mandatory,
            missing_signature,
        })
    }

    /// Submit a run with the given responses and signature.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Inspection` when the lifecycle refuses (already
    /// completed, validation failure, malformed responses) and
    /// `TemplateNotFound` for an unresolved template in strict mode. The
    /// stored run is unchanged on error.
    pub fn complete_run(
        &mut self,
        run_id: &str,
        submission: Submission,
        now: DateTime<Utc>,
    ) -> Result<ScoreBreakdown, ServiceError> {
        let mut run = self.get_run(run_id)?.clone();
        let template = self.resolve_template(&run)?;
        let breakdown = lifecycle::complete(&mut run, template, submission, now)?;
        let detail = CompletedDetail {
            score: breakdown.score,
            template_resolved: breakdown.template_resolved,
            signed: run.signature.is_some(),
        };
        self.append_audit(run_id, AuditAction::Completed, Some(&detail), now)?;
        tracing::info!(run_id, score = breakdown.score, "run: completed");
        self.runs.insert(run.id.clone(), run);
        Ok(breakdown)
    }

    /// Runs that are overdue at `now`, whether or not that was persisted.
    #[must_use]
    pub fn overdue_runs(&self, now: DateTime<Utc>) -> OverdueResponse {
        OverdueResponse {
            now,
            runs: self
                .runs
                .values()
                .filter(|run| lifecycle::is_overdue(run, now))
                .cloned()
                .collect(),
        }
    }

    /// Persist `Overdue` on every scheduled run past its due time. Returns the
    /// ids that changed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if an audit entry cannot be written; runs
    /// marked before the failure stay marked.
    pub fn mark_overdue_runs(&mut self, now: DateTime<Utc>) -> Result<Vec<String>, ServiceError> {
        let candidates: Vec<InspectionRun> = self
            .runs
            .values()
            .filter(|run| run.status == InspectionStatus::Scheduled)
            .cloned()
            .collect();

        let mut marked = Vec::new();
        for mut run in candidates {
            if lifecycle::mark_overdue(&mut run, now) {
                let detail = StatusChangedDetail {
                    from: InspectionStatus::Scheduled.as_str().into(),
                    to: InspectionStatus::Overdue.as_str().into(),
                };
                self.append_audit(&run.id, AuditAction::MarkedOverdue, Some(&detail), now)?;
                marked.push(run.id.clone());
                self.runs.insert(run.id.clone(), run);
            }
        }
        Ok(marked)
    }

    /// The run's template, or `None` when it no longer resolves and lenient
    /// mode allows the fallback.
    fn resolve_template(
        &self,
        run: &InspectionRun,
    ) -> Result<Option<&ChecklistTemplate>, ServiceError> {
        match self.templates.get(&run.template_id) {
            Some(template) => Ok(Some(template)),
            None if self.strict_templates() => Err(template_not_found(run)),
            None => Ok(None),
        }
    }

    fn require_template(&self, run: &InspectionRun) -> Result<&ChecklistTemplate, ServiceError> {
        self.templates
            .get(&run.template_id)
            .ok_or_else(|| template_not_found(run))
    }
}

fn template_not_found(run: &InspectionRun) -> ServiceError {
    ServiceError::TemplateNotFound {
        run_id: run.id.clone(),
        template_id: run.template_id.clone(),
    }
}
