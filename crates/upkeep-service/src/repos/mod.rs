//! Repository modules implementing operations on `UpkeepService`.
//!
//! Each module adds methods to `UpkeepService` via `impl UpkeepService` blocks.

pub mod audit;
pub mod planned_task;
pub mod run;
pub mod template;
