//! # upkeep-service
//!
//! The explicit service object that owns planned tasks, checklist templates,
//! inspection runs, and their audit trail, applying validated mutations
//! through the schedule and inspection engines.
//!
//! State is persisted as a JSON [`Workbook`]; the service itself does no I/O.

pub mod error;
pub mod repos;
pub mod service;
pub mod workbook;

pub use error::ServiceError;
pub use service::UpkeepService;
pub use workbook::Workbook;
