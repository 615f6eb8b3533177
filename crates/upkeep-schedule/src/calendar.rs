//! Calendar arithmetic over facility-local wall time.
//!
//! Day and week arithmetic is exact. Month and year arithmetic needs a policy
//! for landing on a day the target month does not have (Jan 31 + 1 month);
//! [`shift_months`] takes that policy explicitly, [`add_months`] and
//! [`add_years`] clamp to the month end.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use upkeep_core::enums::MonthOverflow;

/// Result of moving an instant across months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    At(NaiveDateTime),
    /// The target month lacks the day-of-month and the policy is `Skip`.
    Skipped,
    /// The target falls outside the representable calendar.
    OutOfRange,
}

impl Shift {
    #[must_use]
    pub const fn instant(self) -> Option<NaiveDateTime> {
        match self {
            Self::At(instant) => Some(instant),
            Self::Skipped | Self::OutOfRange => None,
        }
    }
}

/// Truncate an instant to its calendar day.
#[must_use]
pub const fn day_of(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

#[must_use]
pub fn add_days(instant: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    instant.checked_add_signed(TimeDelta::try_days(days)?)
}

#[must_use]
pub fn add_weeks(instant: NaiveDateTime, weeks: i64) -> Option<NaiveDateTime> {
    add_days(instant, weeks.checked_mul(7)?)
}

/// Add (or subtract, for negative `months`) calendar months, clamping to the
/// last day of the target month.
#[must_use]
pub fn add_months(instant: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    shift_months(instant, months, MonthOverflow::ClampToMonthEnd).instant()
}

#[must_use]
pub fn add_years(instant: NaiveDateTime, years: i64) -> Option<NaiveDateTime> {
    add_months(instant, years.checked_mul(12)?)
}

/// Move `instant` by `months` calendar months, keeping day-of-month and time
/// of day, and resolving a missing day-of-month with `overflow`.
#[must_use]
pub fn shift_months(instant: NaiveDateTime, months: i64, overflow: MonthOverflow) -> Shift {
    let date = instant.date();
    let Some(total) = month_index(date).checked_add(months) else {
        return Shift::OutOfRange;
    };
    let Ok(year) = i32::try_from(total.div_euclid(12)) else {
        return Shift::OutOfRange;
    };
    // rem_euclid(12) is always in 0..12
    let month = u32::try_from(total.rem_euclid(12)).unwrap_or(0) + 1;
    let Some(last_day) = days_in_month(year, month) else {
        return Shift::OutOfRange;
    };

    let day = if date.day() <= last_day {
        date.day()
    } else {
        match overflow {
            MonthOverflow::Skip => return Shift::Skipped,
            MonthOverflow::ClampToMonthEnd => last_day,
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .map_or(Shift::OutOfRange, |d| Shift::At(d.and_time(instant.time())))
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

#[must_use]
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    days_in_month(date.year(), date.month()) == Some(date.day())
}

/// Signed number of month boundaries from `from` to `to`, ignoring days.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    month_index(to) - month_index(from)
}

/// Signed whole days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[must_use]
pub fn same_day_of_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.day() == b.day()
}

#[must_use]
pub fn same_month_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
