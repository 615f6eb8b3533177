use upkeep_core::entities::{PlannedTask, RecurringSchedule};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upk task`.
pub fn handle(action: TaskCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    match action {
        TaskCommands::Add {
            title,
            anchor,
            rule,
            asset,
            template,
        } => {
            if let Some(template_id) = template.as_deref() {
                ctx.service.get_template(template_id)?;
            }
            let task = ctx.service.create_planned_task(
                &title,
                asset.as_deref(),
                RecurringSchedule::new(anchor, rule),
                template.as_deref(),
            )?;
            output(&task, flags.format)?;
            Ok(true)
        }
        TaskCommands::List => {
            let tasks: Vec<&PlannedTask> = ctx.service.planned_tasks().collect();
            output(&tasks, flags.format)?;
            Ok(false)
        }
        TaskCommands::Get { id } => {
            output(ctx.service.get_planned_task(&id)?, flags.format)?;
            Ok(false)
        }
        TaskCommands::Enable { id } => set_enabled(ctx, flags, &id, true),
        TaskCommands::Disable { id } => set_enabled(ctx, flags, &id, false),
    }
}

fn set_enabled(ctx: &mut AppContext, flags: &GlobalFlags, id: &str, enabled: bool) -> anyhow::Result<bool> {
    ctx.service.set_schedule_enabled(id, enabled)?;
    output(ctx.service.get_planned_task(id)?, flags.format)?;
    Ok(true)
}
