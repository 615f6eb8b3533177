//! Occurrence matching and enumeration across every recurrence rule.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use upkeep_core::entities::RecurringSchedule;
use upkeep_core::enums::{MonthOverflow, RecurrenceRule};
use upkeep_schedule::{Recurrence, next_occurrences, occurs_on, past_occurrences};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

fn schedule(anchor: NaiveDateTime, rule: RecurrenceRule) -> RecurringSchedule {
    RecurringSchedule::new(anchor, rule)
}

const CLAMP: Recurrence = Recurrence::new(MonthOverflow::ClampToMonthEnd);

// ---------------------------------------------------------------------------
// occurs_on
// ---------------------------------------------------------------------------

#[rstest]
#[case::never_on_anchor(RecurrenceRule::Never, date(2024, 1, 1), true)]
#[case::never_after_anchor(RecurrenceRule::Never, date(2024, 1, 2), false)]
#[case::daily_anchor(RecurrenceRule::Daily, date(2024, 1, 1), true)]
#[case::daily_later(RecurrenceRule::Daily, date(2031, 7, 19), true)]
#[case::weekly_plus_seven(RecurrenceRule::Weekly, date(2024, 1, 8), true)]
#[case::weekly_plus_eight(RecurrenceRule::Weekly, date(2024, 1, 9), false)]
#[case::biweekly_plus_seven(RecurrenceRule::Biweekly, date(2024, 1, 8), false)]
#[case::biweekly_plus_fourteen(RecurrenceRule::Biweekly, date(2024, 1, 15), true)]
#[case::monthly_same_day(RecurrenceRule::Monthly, date(2024, 5, 1), true)]
#[case::monthly_other_day(RecurrenceRule::Monthly, date(2024, 5, 2), false)]
#[case::quarterly_third_month(RecurrenceRule::Quarterly, date(2024, 4, 1), true)]
#[case::quarterly_second_month(RecurrenceRule::Quarterly, date(2024, 3, 1), false)]
#[case::quarterly_next_year(RecurrenceRule::Quarterly, date(2025, 1, 1), true)]
#[case::yearly_same_month_day(RecurrenceRule::Yearly, date(2027, 1, 1), true)]
#[case::yearly_other_month(RecurrenceRule::Yearly, date(2027, 2, 1), false)]
fn occurs_on_by_rule(#[case] rule: RecurrenceRule, #[case] day: NaiveDate, #[case] expected: bool) {
    let s = schedule(at(2024, 1, 1, 9), rule);
    assert_eq!(occurs_on(&s, day), expected);
}

#[rstest]
#[case(RecurrenceRule::Never)]
#[case(RecurrenceRule::Daily)]
#[case(RecurrenceRule::Weekly)]
#[case(RecurrenceRule::Yearly)]
fn nothing_occurs_before_anchor_day(#[case] rule: RecurrenceRule) {
    let s = schedule(at(2024, 1, 1, 9), rule);
    assert!(!occurs_on(&s, date(2023, 12, 31)));
    assert!(!occurs_on(&s, date(2023, 1, 1)));
}

#[test]
fn weekly_matches_whole_weeks_from_anchor() {
    let s = schedule(at(2024, 1, 1, 9), RecurrenceRule::Weekly);
    assert!(occurs_on(&s, date(2024, 1, 8)));
    assert!(!occurs_on(&s, date(2024, 1, 9)));
}

#[test]
fn monthly_on_31st_skips_february() {
    let s = schedule(at(2024, 1, 31, 9), RecurrenceRule::Monthly);
    assert!(!occurs_on(&s, date(2024, 2, 29)));
    assert!(occurs_on(&s, date(2024, 3, 31)));
    assert!(!occurs_on(&s, date(2024, 4, 30)));
}

#[test]
fn monthly_on_31st_clamps_under_clamp_policy() {
    let s = schedule(at(2024, 1, 31, 9), RecurrenceRule::Monthly);
    assert!(CLAMP.occurs_on(&s, date(2024, 2, 29)));
    assert!(!CLAMP.occurs_on(&s, date(2024, 2, 28)));
    assert!(CLAMP.occurs_on(&s, date(2024, 4, 30)));
    assert!(CLAMP.occurs_on(&s, date(2024, 5, 31)));
    assert!(!CLAMP.occurs_on(&s, date(2024, 5, 30)));
}

#[test]
fn yearly_leap_day_anchor() {
    let s = schedule(at(2024, 2, 29, 8), RecurrenceRule::Yearly);
    assert!(!occurs_on(&s, date(2025, 2, 28)));
    assert!(occurs_on(&s, date(2028, 2, 29)));
    assert!(CLAMP.occurs_on(&s, date(2025, 2, 28)));
    assert!(!CLAMP.occurs_on(&s, date(2025, 3, 1)));
}

#[test]
fn time_of_day_is_ignored_for_matching() {
    let s = schedule(at(2024, 1, 1, 23), RecurrenceRule::Never);
    assert!(occurs_on(&s, date(2024, 1, 1)));
}

#[test]
fn disabled_schedule_never_occurs() {
    let mut s = schedule(at(2024, 1, 1, 9), RecurrenceRule::Daily);
    s.enabled = false;
    assert!(!occurs_on(&s, date(2024, 1, 1)));
    assert!(!occurs_on(&s, date(2024, 1, 2)));
    assert!(next_occurrences(&s, at(2024, 1, 1, 0), 3).is_empty());
    assert!(past_occurrences(&s, 3).is_empty());
}

// ---------------------------------------------------------------------------
// next_occurrences / past_occurrences
// ---------------------------------------------------------------------------

#[test]
fn quarterly_next_after_mid_quarter() {
    let s = schedule(at(2024, 1, 15, 0), RecurrenceRule::Quarterly);
    assert_eq!(
        next_occurrences(&s, at(2024, 5, 1, 0), 2),
        vec![at(2024, 7, 15, 0), at(2024, 10, 15, 0)]
    );
}

#[test]
fn next_includes_value_equal_to_now() {
    let s = schedule(at(2024, 1, 1, 9), RecurrenceRule::Weekly);
    assert_eq!(
        next_occurrences(&s, at(2024, 1, 15, 9), 2),
        vec![at(2024, 1, 15, 9), at(2024, 1, 22, 9)]
    );
}

#[test]
fn next_before_anchor_starts_at_anchor() {
    let s = schedule(at(2024, 6, 3, 7), RecurrenceRule::Biweekly);
    assert_eq!(
        next_occurrences(&s, at(2020, 1, 1, 0), 3),
        vec![at(2024, 6, 3, 7), at(2024, 6, 17, 7), at(2024, 7, 1, 7)]
    );
}

#[test]
fn next_far_from_anchor() {
    let s = schedule(at(2000, 1, 1, 6), RecurrenceRule::Daily);
    assert_eq!(
        next_occurrences(&s, at(2024, 2, 28, 12), 3),
        vec![at(2024, 2, 29, 6), at(2024, 3, 1, 6), at(2024, 3, 2, 6)]
    );
}

#[test]
fn never_has_no_generated_occurrences() {
    let s = schedule(at(2024, 1, 1, 9), RecurrenceRule::Never);
    assert!(next_occurrences(&s, at(2023, 1, 1, 0), 5).is_empty());
    assert!(past_occurrences(&s, 5).is_empty());
}

#[test]
fn monthly_31st_skip_policy_generation() {
    let s = schedule(at(2024, 1, 31, 9), RecurrenceRule::Monthly);
    assert_eq!(
        next_occurrences(&s, at(2024, 2, 1, 0), 3),
        vec![at(2024, 3, 31, 9), at(2024, 5, 31, 9), at(2024, 7, 31, 9)]
    );
    assert_eq!(
        past_occurrences(&s, 2),
        vec![at(2023, 12, 31, 9), at(2023, 10, 31, 9)]
    );
}

#[test]
fn monthly_31st_clamp_policy_does_not_drift() {
    let s = schedule(at(2024, 1, 31, 9), RecurrenceRule::Monthly);
    assert_eq!(
        CLAMP.next_occurrences(&s, at(2024, 2, 1, 0), 3),
        vec![at(2024, 2, 29, 9), at(2024, 3, 31, 9), at(2024, 4, 30, 9)]
    );
}

#[test]
fn past_occurrences_walk_backward_without_clamp() {
    let s = schedule(at(2024, 1, 15, 9), RecurrenceRule::Yearly);
    assert_eq!(
        past_occurrences(&s, 3),
        vec![at(2023, 1, 15, 9), at(2022, 1, 15, 9), at(2021, 1, 15, 9)]
    );

    let s = schedule(at(2024, 1, 15, 9), RecurrenceRule::Quarterly);
    assert_eq!(
        past_occurrences(&s, 2),
        vec![at(2023, 10, 15, 9), at(2023, 7, 15, 9)]
    );
}

#[test]
fn generated_occurrences_match_occurs_on() {
    for overflow in [MonthOverflow::Skip, MonthOverflow::ClampToMonthEnd] {
        let engine = Recurrence::new(overflow);
        for rule in RecurrenceRule::ALL {
            let s = schedule(at(2024, 1, 31, 9), rule);
            for instant in engine.next_occurrences(&s, at(2024, 1, 1, 0), 24) {
                assert!(
                    engine.occurs_on(&s, instant.date()),
                    "{rule} / {overflow}: {instant} generated but not matched"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_rule() -> impl Strategy<Value = RecurrenceRule> {
    prop::sample::select(RecurrenceRule::ALL.to_vec())
}

fn arb_repeating_rule() -> impl Strategy<Value = RecurrenceRule> {
    arb_rule().prop_filter("rule must repeat", |r| *r != RecurrenceRule::Never)
}

fn arb_instant() -> impl Strategy<Value = NaiveDateTime> {
    (1990i32..2060, 1u32..=12, 1u32..=31, 0u32..24).prop_filter_map(
        "valid calendar date",
        |(y, m, d, h)| NaiveDate::from_ymd_opt(y, m, d).and_then(|day| day.and_hms_opt(h, 0, 0)),
    )
}

fn arb_overflow() -> impl Strategy<Value = MonthOverflow> {
    prop_oneof![Just(MonthOverflow::Skip), Just(MonthOverflow::ClampToMonthEnd)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Next occurrences rise strictly and never precede `now`; past
    /// occurrences fall strictly and stay before the anchor.
    #[test]
    fn prop_occurrences_are_monotonic(
        rule in arb_repeating_rule(),
        anchor in arb_instant(),
        now in arb_instant(),
        overflow in arb_overflow(),
        count in 1usize..20,
    ) {
        let engine = Recurrence::new(overflow);
        let s = RecurringSchedule::new(anchor, rule);

        let next = engine.next_occurrences(&s, now, count);
        prop_assert_eq!(next.len(), count);
        prop_assert!(next.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(next.iter().all(|t| *t >= now && *t >= anchor));

        let past = engine.past_occurrences(&s, count);
        prop_assert_eq!(past.len(), count);
        prop_assert!(past.windows(2).all(|w| w[0] > w[1]));
        prop_assert!(past.iter().all(|t| *t < anchor));
    }

    /// A disabled schedule has no occurrences on any day.
    #[test]
    fn prop_disabled_never_occurs(
        rule in arb_rule(),
        anchor in arb_instant(),
        day in arb_instant(),
        overflow in arb_overflow(),
    ) {
        let mut s = RecurringSchedule::new(anchor, rule);
        s.enabled = false;
        prop_assert!(!Recurrence::new(overflow).occurs_on(&s, day.date()));
    }

    /// The first generated occurrence is the earliest matching day at or after `now`.
    #[test]
    fn prop_first_next_is_first_matching_day(
        rule in arb_repeating_rule(),
        anchor in arb_instant(),
        now in arb_instant(),
        overflow in arb_overflow(),
    ) {
        let engine = Recurrence::new(overflow);
        let s = RecurringSchedule::new(anchor, rule);
        let first = engine.next_occurrence(&s, now).expect("repeating rule");
        prop_assert!(engine.occurs_on(&s, first.date()));

        let mut day = now.date().max(anchor.date());
        while day < first.date() {
            let candidate = day.and_time(anchor.time());
            prop_assert!(
                !(engine.occurs_on(&s, day) && candidate >= now),
                "{} matches before first generated {}", day, first
            );
            day = day.succ_opt().expect("in range");
        }
    }
}
