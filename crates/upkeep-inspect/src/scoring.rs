//! Compliance scoring.
//!
//! The score is the share of answered, applicable items that passed:
//! `na` answers leave both numerator and denominator, `pass` and `yes` count
//! as passed, every other answer (including free text) counts against. The
//! percentage rounds half up. With nothing to score, or without a template to
//! enumerate, the score is 100.
//!
//! Completion and preview both go through [`score_breakdown`].

use upkeep_core::entities::{ChecklistTemplate, Responses};
use upkeep_core::enums::{VALUE_NA, VALUE_PASS, VALUE_YES};
use upkeep_core::responses::ScoreBreakdown;

/// Score assigned when there is nothing to score.
pub const FULL_SCORE: u8 = 100;

/// Score `responses` against `template`. `None` means the template could not
/// be resolved; the caller is responsible for reporting that.
#[must_use]
pub fn score_breakdown(template: Option<&ChecklistTemplate>, responses: &Responses) -> ScoreBreakdown {
    let Some(template) = template else {
        return ScoreBreakdown {
            score: FULL_SCORE,
            passed: 0,
            scored: 0,
            not_applicable: 0,
            unanswered: 0,
            template_resolved: false,
        };
    };

    let mut passed = 0_u32;
    let mut scored = 0_u32;
    let mut not_applicable = 0_u32;
    let mut unanswered = 0_u32;

    for item in template.items() {
        match responses.get(&item.id).and_then(|r| r.value.as_deref()) {
            None => unanswered += 1,
            Some(VALUE_NA) => not_applicable += 1,
            Some(value) => {
                scored += 1;
                if value == VALUE_PASS || value == VALUE_YES {
                    passed += 1;
                }
            }
        }
    }

    ScoreBreakdown {
        score: percent(passed, scored),
        passed,
        scored,
        not_applicable,
        unanswered,
        template_resolved: true,
    }
}

/// Shorthand for `score_breakdown(..).score`.
#[must_use]
pub fn compliance_score(template: Option<&ChecklistTemplate>, responses: &Responses) -> u8 {
    score_breakdown(template, responses).score
}

/// `round_half_up(100 * part / whole)`, or 100 when `whole` is zero.
pub(crate) fn percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return FULL_SCORE;
    }
    let part = u64::from(part.min(whole));
    let whole = u64::from(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(FULL_SCORE)
}
