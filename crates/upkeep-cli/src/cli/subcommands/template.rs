use clap::Subcommand;

/// Checklist template commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TemplateCommands {
    /// Add or replace a template from a JSON file.
    Import { path: String },
    /// List templates.
    List,
    /// Get a template by ID.
    Get { id: String },
}
