use chrono::NaiveDateTime;
use clap::Subcommand;
use upkeep_core::enums::RecurrenceRule;

/// Planned task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a planned task.
    Add {
        #[arg(long)]
        title: String,
        /// First occurrence in local wall time (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        anchor: NaiveDateTime,
        /// never, daily, weekly, biweekly, monthly, quarterly, yearly
        #[arg(long)]
        rule: RecurrenceRule,
        #[arg(long)]
        asset: Option<String>,
        /// Checklist template to inspect with when the task falls due
        #[arg(long)]
        template: Option<String>,
    },
    /// List planned tasks.
    List,
    /// Get a planned task by ID.
    Get { id: String },
    /// Resume a paused schedule.
    Enable { id: String },
    /// Pause a schedule.
    Disable { id: String },
}
