pub mod dispatch;
pub mod due;
pub mod occurrences;
pub mod overdue;
pub mod run;
pub mod task;
pub mod template;
