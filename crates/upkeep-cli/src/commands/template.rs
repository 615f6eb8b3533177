use anyhow::Context;
use upkeep_core::entities::ChecklistTemplate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TemplateCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upk template`.
pub fn handle(
    action: TemplateCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    match action {
        TemplateCommands::Import { path } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read template file {path}"))?;
            let template: ChecklistTemplate = serde_json::from_str(&raw)
                .with_context(|| format!("template file {path} is not a valid checklist template"))?;
            let id = template.id.clone();
            ctx.service.upsert_template(template)?;
            output(ctx.service.get_template(&id)?, flags.format)?;
            Ok(true)
        }
        TemplateCommands::List => {
            let templates: Vec<&ChecklistTemplate> = ctx.service.templates().collect();
            output(&templates, flags.format)?;
            Ok(false)
        }
        TemplateCommands::Get { id } => {
            output(ctx.service.get_template(&id)?, flags.format)?;
            Ok(false)
        }
    }
}
