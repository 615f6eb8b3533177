use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Subcommand};

use crate::cli::subcommands::{RunCommands, TaskCommands, TemplateCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Work requests for planned tasks due on a day.
    Due(DueArgs),
    /// Upcoming and past occurrences of a planned task's schedule.
    Occurrences(OccurrencesArgs),
    /// Inspection runs past their due time.
    Overdue(OverdueArgs),
    /// Planned tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Checklist templates.
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Inspection runs.
    Run {
        #[command(subcommand)]
        action: RunCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DueArgs {
    /// Day to check (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Also schedule an inspection run for each due task with a template
    #[arg(long)]
    pub raise: bool,
}

#[derive(Clone, Debug, Args)]
pub struct OccurrencesArgs {
    /// Planned task ID
    pub task_id: String,

    /// Number of upcoming occurrences (defaults to `recurrence.default_count`)
    #[arg(long)]
    pub next: Option<usize>,

    /// Number of occurrences before the anchor
    #[arg(long)]
    pub past: Option<usize>,

    /// Reference instant in local wall time (YYYY-MM-DDTHH:MM:SS, defaults to now)
    #[arg(long)]
    pub now: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Args)]
pub struct OverdueArgs {
    /// Reference instant (RFC 3339, defaults to now)
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Persist the overdue status on scheduled runs
    #[arg(long)]
    pub mark: bool,
}
