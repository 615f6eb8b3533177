//! # upkeep-schedule
//!
//! Decides whether a planned maintenance schedule is due on a given day and
//! enumerates its past and future occurrences.
//!
//! - [`calendar`]: day/week/month/year arithmetic and day comparisons
//! - [`recurrence`]: the [`Recurrence`] engine, parameterized by the
//!   month-overflow policy, plus free functions using the default policy
//!
//! All functions are pure; "now" and "today" are always passed in.

pub mod calendar;
pub mod recurrence;

pub use recurrence::{Recurrence, next_occurrences, occurs_on, past_occurrences};
