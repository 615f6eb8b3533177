//! Per-section answer progress for rendering a run before submission.

use upkeep_core::entities::{ChecklistTemplate, Responses};
use upkeep_core::responses::{ChecklistProgress, SectionProgress};

use crate::scoring::percent;
use crate::validation::is_answered;

#[must_use]
pub fn checklist_progress(template: &ChecklistTemplate, responses: &Responses) -> ChecklistProgress {
    let sections: Vec<SectionProgress> = template
        .sections
        .iter()
        .map(|section| {
            let mut answered = 0_u32;
            let mut missing_mandatory = Vec::new();
            for item in &section.items {
                if is_answered(responses, &item.id) {
                    answered += 1;
                } else if item.mandatory {
                    missing_mandatory.push(item.id.clone());
                }
            }
            SectionProgress {
                title: section.title.clone(),
                answered,
                total: u32::try_from(section.items.len()).unwrap_or(u32::MAX),
                missing_mandatory,
            }
        })
        .collect();

    let answered = sections.iter().map(|s| s.answered).sum();
    let total = sections.iter().map(|s| s.total).sum();

    ChecklistProgress {
        sections,
        answered,
        total,
        percent: percent(answered, total),
    }
}
