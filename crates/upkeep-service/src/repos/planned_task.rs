//! Planned task repository: storage plus due-work and occurrence queries.

use chrono::{NaiveDate, NaiveDateTime};

use upkeep_core::entities::{PlannedTask, RecurringSchedule};
use upkeep_core::ids::{PREFIX_PLANNED_TASK, generate_id};
use upkeep_core::responses::{DueResponse, OccurrencesResponse, WorkRequest};

use crate::error::ServiceError;
use crate::service::{UpkeepService, check_unique};

impl UpkeepService {
    /// Create a planned task with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if ID generation fails.
    pub fn create_planned_task(
        &mut self,
        title: &str,
        asset: Option<&str>,
        schedule: RecurringSchedule,
        template_id: Option<&str>,
    ) -> Result<PlannedTask, ServiceError> {
        let task = PlannedTask {
            id: generate_id(PREFIX_PLANNED_TASK)?,
            title: title.to_string(),
            asset: asset.map(String::from),
            schedule,
            template_id: template_id.map(String::from),
        };
        self.insert_planned_task(task.clone())?;
        Ok(task)
    }

    /// Store a planned task under its own id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Duplicate` if the id is taken.
    pub fn insert_planned_task(&mut self, task: PlannedTask) -> Result<(), ServiceError> {
        check_unique(&self.planned_tasks, "planned_task", &task.id)?;
        tracing::debug!(planned_task_id = %task.id, rule = %task.schedule.rule, "planned_task: inserted");
        self.planned_tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn get_planned_task(&self, id: &str) -> Result<&PlannedTask, ServiceError> {
        self.planned_tasks
            .get(id)
            .ok_or_else(|| ServiceError::not_found("planned_task", id))
    }

    pub fn planned_tasks(&self) -> impl Iterator<Item = &PlannedTask> {
        self.planned_tasks.values()
    }

    /// Pause or resume a schedule. A disabled schedule never falls due.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn set_schedule_enabled(&mut self, id: &str, enabled: bool) -> Result<(), ServiceError> {
        let task = self
            .planned_tasks
            .get_mut(id)
            .ok_or_else(|| ServiceError::not_found("planned_task", id))?;
        task.schedule.enabled = enabled;
        Ok(())
    }

    /// Work requests for every planned task due on `today`, in id order.
    #[must_use]
    pub fn due_work(&self, today: NaiveDate) -> DueResponse {
        let recurrence = self.recurrence();
        let requests: Vec<WorkRequest> = self
            .planned_tasks
            .values()
            .filter(|task| recurrence.is_due(&task.schedule, today))
            .map(|task| WorkRequest {
                planned_task_id: task.id.clone(),
                title: task.title.clone(),
                asset: task.asset.clone(),
                due_at: today.and_time(task.schedule.anchor.time()),
                template_id: task.template_id.clone(),
            })
            .collect();

        tracing::debug!(date = %today, due = requests.len(), "planned_task: due work computed");
        DueResponse {
            date: today,
            requests,
        }
    }

    /// The next `next` occurrences at or after `now` and the `past` occurrences
    /// before the anchor. `None` counts use the configured default.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn occurrences(
        &self,
        id: &str,
        now: NaiveDateTime,
        next: Option<usize>,
        past: Option<usize>,
    ) -> Result<OccurrencesResponse, ServiceError> {
        let task = self.get_planned_task(id)?;
        let recurrence = self.recurrence();
        let schedule = &task.schedule;
        Ok(OccurrencesResponse {
            planned_task_id: task.id.clone(),
            rule: schedule.rule,
            enabled: schedule.enabled,
            next: recurrence.next_occurrences(schedule, now, next.unwrap_or(self.default_count())),
            past: recurrence.past_occurrences(schedule, past.unwrap_or(self.default_count())),
        })
    }
}
