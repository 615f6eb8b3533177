use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler. Returns whether the workbook
/// changed and must be saved.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    match command {
        Commands::Due(args) => commands::due::handle(&args, ctx, flags),
        Commands::Occurrences(args) => commands::occurrences::handle(&args, ctx, flags).map(|()| false),
        Commands::Overdue(args) => commands::overdue::handle(&args, ctx, flags),
        Commands::Task { action } => commands::task::handle(action, ctx, flags),
        Commands::Template { action } => commands::template::handle(action, ctx, flags),
        Commands::Run { action } => commands::run::handle(action, ctx, flags),
    }
}
