use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OverdueArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upk overdue`. The listing is taken before `--mark` persists.
pub fn handle(args: &OverdueArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let now = args.now.unwrap_or_else(Utc::now);
    let response = ctx.service.overdue_runs(now);
    let changed = if args.mark {
        let marked = ctx.service.mark_overdue_runs(now)?;
        tracing::info!(marked = marked.len(), "overdue runs marked");
        !marked.is_empty()
    } else {
        false
    };
    output(&response, flags.format)?;
    Ok(changed)
}
