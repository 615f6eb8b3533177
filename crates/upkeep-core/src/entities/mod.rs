//! Entity structs for Upkeep domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Storage is an external collaborator; these
//! are the shapes it loads and saves.

mod audit;
mod checklist;
mod run;
mod schedule;

pub use audit::AuditEntry;
pub use checklist::{ChecklistItem, ChecklistSection, ChecklistTemplate};
pub use run::{InspectionRun, ItemResponse, Responses};
pub use schedule::{PlannedTask, RecurringSchedule};
