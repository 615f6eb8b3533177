use chrono::Utc;
use serde::Serialize;
use upkeep_core::entities::InspectionRun;
use upkeep_inspect::{StartOutcome, Submission};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RunCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StartResponse<'a> {
    started: bool,
    run: &'a InspectionRun,
}

/// Handle `upk run`.
pub fn handle(action: RunCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let now = Utc::now();
    match action {
        RunCommands::Schedule { template_id, at } => {
            let run = ctx.service.schedule_run(&template_id, at, now)?;
            output(&run, flags.format)?;
            Ok(true)
        }
        RunCommands::List => {
            let runs: Vec<&InspectionRun> = ctx.service.runs().collect();
            output(&runs, flags.format)?;
            Ok(false)
        }
        RunCommands::Get { id } => {
            output(ctx.service.get_run(&id)?, flags.format)?;
            Ok(false)
        }
        RunCommands::Start { id } => {
            let started = ctx.service.start_run(&id, now)? == StartOutcome::Started;
            let run = ctx.service.get_run(&id)?;
            output(&StartResponse { started, run }, flags.format)?;
            Ok(started)
        }
        RunCommands::Respond {
            id,
            item_id,
            value,
            notes,
        } => {
            let mut response = ctx
                .service
                .get_run(&id)?
                .responses
                .get(&item_id)
                .cloned()
                .unwrap_or_default();
            response.value = value;
            if let Some(notes) = notes {
                response.notes = notes;
            }
            ctx.service.record_response(&id, &item_id, response, now)?;
            output(&ctx.service.progress(&id)?, flags.format)?;
            Ok(true)
        }
        RunCommands::Score { id } => {
            output(&ctx.service.preview_score(&id)?, flags.format)?;
            Ok(false)
        }
        RunCommands::Progress { id } => {
            output(&ctx.service.progress(&id)?, flags.format)?;
            Ok(false)
        }
        RunCommands::Validate { id, signature } => {
            output(&ctx.service.validate_run(&id, signature.as_deref())?, flags.format)?;
            Ok(false)
        }
        RunCommands::Complete { id, signature } => {
            let responses = ctx.service.get_run(&id)?.responses.clone();
            let breakdown = ctx
                .service
                .complete_run(&id, Submission { responses, signature }, now)?;
            output(&breakdown, flags.format)?;
            Ok(true)
        }
        RunCommands::Audit { id } => {
            ctx.service.get_run(&id)?;
            output(&ctx.service.audit_for_run(&id), flags.format)?;
            Ok(false)
        }
    }
}
