use chrono::{DateTime, Utc};
use clap::Subcommand;

/// Inspection run commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RunCommands {
    /// Schedule a run of a template.
    Schedule {
        template_id: String,
        /// Due instant (RFC 3339)
        #[arg(long)]
        at: DateTime<Utc>,
    },
    /// List runs.
    List,
    /// Get a run by ID.
    Get { id: String },
    /// Start a run.
    Start { id: String },
    /// Record one item's answer. Omit the value to clear it.
    Respond {
        id: String,
        item_id: String,
        value: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Preview the compliance score of the current responses.
    Score { id: String },
    /// Per-section answer progress.
    Progress { id: String },
    /// Check whether the run could be submitted.
    Validate {
        id: String,
        #[arg(long)]
        signature: Option<String>,
    },
    /// Submit the run with its recorded responses.
    Complete {
        id: String,
        #[arg(long)]
        signature: Option<String>,
    },
    /// Audit trail of a run.
    Audit { id: String },
}
