//! Inspection run state machine.
//!
//! ```text
//! scheduled ──start──▶ in_progress ──complete──▶ completed
//!     │                    ▲
//!     └─(due time passes)─▶ overdue ──start──┘
//! ```
//!
//! Every function here mutates only the run it is given and assumes a single
//! writer per run; whoever stores runs must serialize concurrent `complete`
//! calls (optimistic versioning or one actor per run id).

use chrono::{DateTime, Utc};
use upkeep_core::entities::{ChecklistTemplate, InspectionRun, ItemResponse, Responses};
use upkeep_core::enums::InspectionStatus;
use upkeep_core::responses::ScoreBreakdown;

use crate::error::InspectionError;
use crate::scoring::score_breakdown;
use crate::validation::{validate_for_submission, validate_responses, validate_value};

/// What [`start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyInProgress,
    AlreadyCompleted,
}

/// Final answers handed in by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub responses: Responses,
    pub signature: Option<String>,
}

/// Begin work on a scheduled or overdue run. Idempotent: `started_at` keeps
/// the first value it was given.
pub fn start(run: &mut InspectionRun, now: DateTime<Utc>) -> StartOutcome {
    if run.status == InspectionStatus::InProgress {
        return StartOutcome::AlreadyInProgress;
    }
    if !run.status.can_transition_to(InspectionStatus::InProgress) {
        return StartOutcome::AlreadyCompleted;
    }
    run.status = InspectionStatus::InProgress;
    if run.started_at.is_none() {
        run.started_at = Some(now);
    }
    tracing::debug!(run_id = %run.id, "inspection: started");
    StartOutcome::Started
}

/// The status as observed at `now`: a scheduled run whose due time has
/// passed reads as `Overdue` whether or not that was persisted.
#[must_use]
pub fn effective_status(run: &InspectionRun, now: DateTime<Utc>) -> InspectionStatus {
    if now > run.scheduled_at && run.status.can_transition_to(InspectionStatus::Overdue) {
        InspectionStatus::Overdue
    } else {
        run.status
    }
}

#[must_use]
pub fn is_overdue(run: &InspectionRun, now: DateTime<Utc>) -> bool {
    effective_status(run, now) == InspectionStatus::Overdue
}

/// Persist the overdue view. Returns whether the status changed.
pub fn mark_overdue(run: &mut InspectionRun, now: DateTime<Utc>) -> bool {
    if now > run.scheduled_at && run.status.can_transition_to(InspectionStatus::Overdue) {
        run.status = InspectionStatus::Overdue;
        tracing::debug!(run_id = %run.id, "inspection: marked overdue");
        true
    } else {
        false
    }
}

/// Store one item's answer on an open run.
///
/// # Errors
///
/// `ResponsesLocked` once the run is completed, `TemplateMismatch` if the
/// template is not the run's, `UnknownItem` / `InvalidResponse` for a bad
/// item id or value. The run is untouched on error.
pub fn record_response(
    run: &mut InspectionRun,
    template: &ChecklistTemplate,
    item_id: &str,
    response: ItemResponse,
) -> Result<(), InspectionError> {
    ensure_open(run)?;
    ensure_template(run, template)?;
    let item = template
        .item(item_id)
        .ok_or_else(|| InspectionError::UnknownItem {
            item_id: item_id.to_string(),
        })?;
    validate_value(item, response.value.as_deref())?;
    run.responses.insert(item_id.to_string(), response);
    Ok(())
}

/// Score a run's current responses without changing it. Uses the same
/// computation as [`complete`].
#[must_use]
pub fn preview_score(run: &InspectionRun, template: Option<&ChecklistTemplate>) -> ScoreBreakdown {
    if template.is_none() {
        warn_unresolved(run);
    }
    score_breakdown(template, &run.responses)
}

/// Submit a run. On success the run is `Completed` with `completed_at`,
/// responses, signature and score all written together; on error nothing
/// changes.
///
/// `template` is `None` when the run's template no longer resolves: the run
/// then completes with a score of 100 and a data-integrity warning is logged.
///
/// # Errors
///
/// `AlreadyCompleted` for a completed run, `TemplateMismatch`,
/// `UnknownItem` / `InvalidResponse` for malformed responses, and
/// `Validation` when mandatory answers or a required signature are missing.
pub fn complete(
    run: &mut InspectionRun,
    template: Option<&ChecklistTemplate>,
    submission: Submission,
    now: DateTime<Utc>,
) -> Result<ScoreBreakdown, InspectionError> {
    if !run.status.can_transition_to(InspectionStatus::Completed) {
        return Err(InspectionError::AlreadyCompleted {
            run_id: run.id.clone(),
        });
    }

    match template {
        Some(template) => {
            ensure_template(run, template)?;
            validate_responses(template, &submission.responses)?;
            validate_for_submission(
                template,
                &submission.responses,
                submission.signature.as_deref(),
            )?;
        }
        None => warn_unresolved(run),
    }

    let breakdown = score_breakdown(template, &submission.responses);

    run.status = InspectionStatus::Completed;
    run.completed_at = Some(now);
    run.responses = submission.responses;
    run.signature = submission.signature.filter(|s| !s.trim().is_empty());
    run.score = Some(breakdown.score);

    tracing::debug!(run_id = %run.id, score = breakdown.score, "inspection: completed");
    Ok(breakdown)
}

fn ensure_open(run: &InspectionRun) -> Result<(), InspectionError> {
    if run.status.accepts_responses() {
        Ok(())
    } else {
        Err(InspectionError::ResponsesLocked {
            run_id: run.id.clone(),
            status: run.status,
        })
    }
}

fn ensure_template(run: &InspectionRun, template: &ChecklistTemplate) -> Result<(), InspectionError> {
    if template.id == run.template_id {
        Ok(())
    } else {
        Err(InspectionError::TemplateMismatch {
            run_id: run.id.clone(),
            expected: run.template_id.clone(),
            found: template.id.clone(),
        })
    }
}

fn warn_unresolved(run: &InspectionRun) {
    tracing::warn!(
        run_id = %run.id,
        template_id = %run.template_id,
        "inspection: template not found; compliance score falls back to 100"
    );
}
