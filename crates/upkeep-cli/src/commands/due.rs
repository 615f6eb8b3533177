use chrono::{Local, Utc};
use serde::Serialize;
use upkeep_core::entities::InspectionRun;
use upkeep_core::responses::DueResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DueArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DueWithRuns {
    #[serde(flatten)]
    due: DueResponse,
    raised: Vec<InspectionRun>,
}

/// Handle `upk due`.
pub fn handle(args: &DueArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let due = ctx.service.due_work(today);

    if !args.raise {
        output(&due, flags.format)?;
        return Ok(false);
    }

    let raised = ctx.service.raise_due_runs(today, Utc::now())?;
    let changed = !raised.is_empty();
    output(&DueWithRuns { due, raised }, flags.format)?;
    Ok(changed)
}
