mod run;
mod task;
mod template;

pub use run::RunCommands;
pub use task::TaskCommands;
pub use template::TemplateCommands;
