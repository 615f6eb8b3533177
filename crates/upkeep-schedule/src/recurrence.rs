//! Occurrence matching and enumeration for recurring schedules.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use upkeep_core::entities::RecurringSchedule;
use upkeep_core::enums::{MonthOverflow, RecurrenceRule, Step};

use crate::calendar::{self, Shift};

/// Recurrence engine bound to a month-overflow policy.
///
/// Every generated occurrence is `anchor + k * step`, computed from the anchor
/// rather than by repeatedly stepping a cursor, so a clamped short month never
/// drags later occurrences off the anchor's day-of-month. `occurs_on` and the
/// generators agree on which days are occurrences under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recurrence {
    overflow: MonthOverflow,
}

impl Recurrence {
    #[must_use]
    pub const fn new(overflow: MonthOverflow) -> Self {
        Self { overflow }
    }

    #[must_use]
    pub const fn overflow(self) -> MonthOverflow {
        self.overflow
    }

    /// Whether `schedule` has an occurrence on calendar day `day`.
    #[must_use]
    pub fn occurs_on(self, schedule: &RecurringSchedule, day: NaiveDate) -> bool {
        if !schedule.enabled {
            return false;
        }
        let anchor = calendar::day_of(schedule.anchor);
        if day < anchor {
            return false;
        }

        match schedule.rule {
            RecurrenceRule::Never => day == anchor,
            RecurrenceRule::Daily => true,
            RecurrenceRule::Weekly => calendar::days_between(anchor, day) % 7 == 0,
            RecurrenceRule::Biweekly => calendar::days_between(anchor, day) % 14 == 0,
            RecurrenceRule::Monthly => self.matches_day_of_month(anchor, day),
            RecurrenceRule::Quarterly => {
                calendar::months_between(anchor, day) % 3 == 0
                    && self.matches_day_of_month(anchor, day)
            }
            RecurrenceRule::Yearly => {
                day.month() == anchor.month() && self.matches_day_of_month(anchor, day)
            }
        }
    }

    /// `occurs_on` for the task collaborator deciding whether to raise work.
    #[must_use]
    pub fn is_due(self, schedule: &RecurringSchedule, today: NaiveDate) -> bool {
        let due = self.occurs_on(schedule, today);
        tracing::debug!(rule = %schedule.rule, %today, due, "recurrence: due check");
        due
    }

    /// The first `count` occurrences at or after `now`.
    ///
    /// Empty for disabled schedules and for [`RecurrenceRule::Never`]. When
    /// `now` precedes the anchor, the anchor is the first value.
    #[must_use]
    pub fn next_occurrences(
        self,
        schedule: &RecurringSchedule,
        now: NaiveDateTime,
        count: usize,
    ) -> Vec<NaiveDateTime> {
        let Some(step) = Self::active_step(schedule) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(count.min(1024));
        let mut index = first_index_lower_bound(schedule.anchor, step, now);
        while out.len() < count {
            match self.occurrence(schedule.anchor, step, index) {
                Shift::At(instant) if instant >= now => out.push(instant),
                Shift::At(_) | Shift::Skipped => {}
                Shift::OutOfRange => break,
            }
            index += 1;
        }
        out
    }

    /// The first occurrence at or after `now`, if any.
    #[must_use]
    pub fn next_occurrence(
        self,
        schedule: &RecurringSchedule,
        now: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        self.next_occurrences(schedule, now, 1).into_iter().next()
    }

    /// `count` occurrences walking backward from the anchor, most recent
    /// first. The anchor itself is not included and there is no lower bound.
    #[must_use]
    pub fn past_occurrences(self, schedule: &RecurringSchedule, count: usize) -> Vec<NaiveDateTime> {
        let Some(step) = Self::active_step(schedule) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(count.min(1024));
        let mut index = -1_i64;
        while out.len() < count {
            match self.occurrence(schedule.anchor, step, index) {
                Shift::At(instant) => out.push(instant),
                Shift::Skipped => {}
                Shift::OutOfRange => break,
            }
            index -= 1;
        }
        out
    }

    const fn active_step(schedule: &RecurringSchedule) -> Option<Step> {
        if schedule.enabled {
            schedule.rule.step()
        } else {
            None
        }
    }

    /// The `index`-th occurrence relative to the anchor (0 is the anchor).
    fn occurrence(self, anchor: NaiveDateTime, step: Step, index: i64) -> Shift {
        match step {
            Step::Days(days) => index
                .checked_mul(days)
                .and_then(|offset| calendar::add_days(anchor, offset))
                .map_or(Shift::OutOfRange, Shift::At),
            Step::Months(months) => match index.checked_mul(i64::from(months)) {
                Some(offset) => calendar::shift_months(anchor, offset, self.overflow),
                None => Shift::OutOfRange,
            },
        }
    }

    fn matches_day_of_month(self, anchor: NaiveDate, day: NaiveDate) -> bool {
        if calendar::same_day_of_month(anchor, day) {
            return true;
        }
        match self.overflow {
            MonthOverflow::Skip => false,
            MonthOverflow::ClampToMonthEnd => {
                calendar::is_last_day_of_month(day)
                    && calendar::days_in_month(day.year(), day.month())
                        .is_some_and(|last| anchor.day() > last)
            }
        }
    }
}

/// An index no greater than that of the first occurrence at or after `now`,
/// so enumeration can jump close to `now` instead of walking from the anchor.
fn first_index_lower_bound(anchor: NaiveDateTime, step: Step, now: NaiveDateTime) -> i64 {
    if now <= anchor {
        return 0;
    }
    let (elapsed, stride) = match step {
        Step::Days(days) => (calendar::days_between(anchor.date(), now.date()), days),
        Step::Months(months) => (
            calendar::months_between(anchor.date(), now.date()),
            i64::from(months),
        ),
    };
    (elapsed / stride - 1).max(0)
}

/// [`Recurrence::occurs_on`] under the default `Skip` policy.
#[must_use]
pub fn occurs_on(schedule: &RecurringSchedule, day: NaiveDate) -> bool {
    Recurrence::default().occurs_on(schedule, day)
}

/// [`Recurrence::next_occurrences`] under the default `Skip` policy.
#[must_use]
pub fn next_occurrences(
    schedule: &RecurringSchedule,
    now: NaiveDateTime,
    count: usize,
) -> Vec<NaiveDateTime> {
    Recurrence::default().next_occurrences(schedule, now, count)
}

/// [`Recurrence::past_occurrences`] under the default `Skip` policy.
#[must_use]
pub fn past_occurrences(schedule: &RecurringSchedule, count: usize) -> Vec<NaiveDateTime> {
    Recurrence::default().past_occurrences(schedule, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn lower_bound_never_overshoots() {
        let anchor = at(2024, 1, 1, 9);
        let now = at(2024, 3, 11, 8);
        let bound = first_index_lower_bound(anchor, Step::Days(7), now);
        // 2024-03-11 09:00 is index 10 and the first at or after now
        assert!(bound <= 10, "bound {bound}");

        let bound = first_index_lower_bound(anchor, Step::Months(3), at(2025, 1, 1, 0));
        // 2025-01-01 09:00 is index 4
        assert!(bound <= 4, "bound {bound}");
    }

    #[test]
    fn lower_bound_is_zero_before_anchor() {
        let anchor = at(2024, 6, 1, 9);
        assert_eq!(first_index_lower_bound(anchor, Step::Days(1), at(2020, 1, 1, 0)), 0);
    }

    #[test]
    fn monthly_next_and_past_use_time_of_day() {
        let schedule = RecurringSchedule::new(at(2024, 1, 10, 9), RecurrenceRule::Monthly);
        let engine = Recurrence::default();
        // same day but after 09:00 -> next month
        assert_eq!(
            engine.next_occurrence(&schedule, at(2024, 2, 10, 10)),
            Some(at(2024, 3, 10, 9))
        );
        assert_eq!(
            engine.next_occurrence(&schedule, at(2024, 2, 10, 9)),
            Some(at(2024, 2, 10, 9))
        );
        assert_eq!(
            engine.past_occurrences(&schedule, 2),
            vec![at(2023, 12, 10, 9), at(2023, 11, 10, 9)]
        );
    }

    #[test]
    fn zero_count_is_empty() {
        let schedule = RecurringSchedule::new(at(2024, 1, 10, 9), RecurrenceRule::Daily);
        assert!(next_occurrences(&schedule, at(2024, 1, 1, 0), 0).is_empty());
        assert!(past_occurrences(&schedule, 0).is_empty());
    }
}
