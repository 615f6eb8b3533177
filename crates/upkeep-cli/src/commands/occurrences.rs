use chrono::Local;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OccurrencesArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upk occurrences`.
pub fn handle(args: &OccurrencesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = args.now.unwrap_or_else(|| Local::now().naive_local());
    let response = ctx
        .service
        .occurrences(&args.task_id, now, args.next, args.past)?;
    output(&response, flags.format)
}
