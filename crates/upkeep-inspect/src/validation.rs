//! Response-domain checks and the submission gate.

use upkeep_core::entities::{ChecklistItem, ChecklistTemplate, Responses};

use crate::error::{InspectionError, ValidationError};

/// Check one value against its item's response type. `None` (unanswered) is
/// always acceptable.
///
/// # Errors
///
/// Returns `InspectionError::InvalidResponse` for a value outside the domain.
pub fn validate_value(item: &ChecklistItem, value: Option<&str>) -> Result<(), InspectionError> {
    match value {
        Some(value) if !item.response_type.accepts(value) => Err(InspectionError::InvalidResponse {
            item_id: item.id.clone(),
            response_type: item.response_type,
            value: value.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Check that every response names a template item and carries a value in
/// that item's domain.
///
/// # Errors
///
/// Returns `UnknownItem` or `InvalidResponse` for the first offending entry.
pub fn validate_responses(
    template: &ChecklistTemplate,
    responses: &Responses,
) -> Result<(), InspectionError> {
    for (item_id, response) in responses {
        let item = template
            .item(item_id)
            .ok_or_else(|| InspectionError::UnknownItem {
                item_id: item_id.clone(),
            })?;
        validate_value(item, response.value.as_deref())?;
    }
    Ok(())
}

/// Ids of mandatory items without a value, in template order.
#[must_use]
pub fn missing_mandatory(template: &ChecklistTemplate, responses: &Responses) -> Vec<String> {
    template
        .items()
        .filter(|item| item.mandatory && !is_answered(responses, &item.id))
        .map(|item| item.id.clone())
        .collect()
}

/// Whether a run with these responses and signature may be submitted.
///
/// Every mandatory item must be answered, and when the template requires a
/// signature it must be non-blank after trimming.
///
/// # Errors
///
/// Returns `ValidationError` listing the unanswered mandatory items and
/// whether the signature is missing.
pub fn validate_for_submission(
    template: &ChecklistTemplate,
    responses: &Responses,
    signature: Option<&str>,
) -> Result<(), ValidationError> {
    let missing_mandatory = missing_mandatory(template, responses);
    let missing_signature =
        template.requires_signature && signature.is_none_or(|s| s.trim().is_empty());

    if missing_mandatory.is_empty() && !missing_signature {
        Ok(())
    } else {
        Err(ValidationError {
            missing_mandatory,
            missing_signature,
        })
    }
}

pub(crate) fn is_answered(responses: &Responses, item_id: &str) -> bool {
    responses
        .get(item_id)
        .is_some_and(upkeep_core::entities::ItemResponse::is_answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use upkeep_core::entities::{ChecklistSection, ItemResponse};
    use upkeep_core::enums::{RecurrenceRule, ResponseType};

    fn item(id: &str, response_type: ResponseType, mandatory: bool) -> ChecklistItem {
        ChecklistItem {
            id: id.into(),
            label: id.into(),
            response_type,
            mandatory,
            help_text: None,
        }
    }

    fn template(requires_signature: bool) -> ChecklistTemplate {
        ChecklistTemplate {
            id: "tpl-1".into(),
            name: "Plant room".into(),
            sections: vec![
                ChecklistSection {
                    title: "Pumps".into(),
                    items: vec![
                        item("p1", ResponseType::PassFlagFailNa, true),
                        item("p2", ResponseType::YesNo, false),
                    ],
                },
                ChecklistSection {
                    title: "Readings".into(),
                    items: vec![item("r1", ResponseType::Number, true)],
                },
            ],
            requires_signature,
            frequency: RecurrenceRule::Weekly,
        }
    }

    fn responses(pairs: &[(&str, Option<&str>)]) -> Responses {
        pairs
            .iter()
            .map(|(id, value)| {
                (
                    (*id).to_string(),
                    ItemResponse {
                        value: value.map(String::from),
                        ..ItemResponse::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn all_mandatory_answered_passes() {
        let r = responses(&[("p1", Some("fail")), ("r1", Some("4.2"))]);
        assert_eq!(validate_for_submission(&template(false), &r, None), Ok(()));
    }

    #[test]
    fn null_value_counts_as_unanswered() {
        let r = responses(&[("p1", None), ("r1", Some("4.2"))]);
        let err = validate_for_submission(&template(false), &r, None).unwrap_err();
        assert_eq!(err.missing_mandatory, vec!["p1".to_string()]);
        assert!(!err.missing_signature);
    }

    #[test]
    fn missing_items_listed_in_template_order() {
        let err = validate_for_submission(&template(false), &Responses::new(), None).unwrap_err();
        assert_eq!(err.missing_mandatory, vec!["p1".to_string(), "r1".to_string()]);
    }

    #[test]
    fn blank_signature_is_missing() {
        let r = responses(&[("p1", Some("pass")), ("r1", Some("1"))]);
        for signature in [None, Some(""), Some("   \t")] {
            let err = validate_for_submission(&template(true), &r, signature).unwrap_err();
            assert!(err.missing_signature);
            assert!(err.missing_mandatory.is_empty());
        }
        assert_eq!(
            validate_for_submission(&template(true), &r, Some(" A. Inspector ")),
            Ok(())
        );
    }

    #[test]
    fn signature_ignored_when_not_required() {
        let r = responses(&[("p1", Some("pass")), ("r1", Some("1"))]);
        assert_eq!(validate_for_submission(&template(false), &r, Some("")), Ok(()));
    }

    #[test]
    fn out_of_domain_value_is_rejected() {
        let r = responses(&[("p2", Some("maybe"))]);
        let err = validate_responses(&template(false), &r).unwrap_err();
        assert_eq!(
            err,
            InspectionError::InvalidResponse {
                item_id: "p2".into(),
                response_type: ResponseType::YesNo,
                value: "maybe".into(),
            }
        );
    }

    #[test]
    fn unknown_item_is_rejected() {
        let r = responses(&[("ghost", Some("yes"))]);
        let err = validate_responses(&template(false), &r).unwrap_err();
        assert_eq!(err, InspectionError::UnknownItem { item_id: "ghost".into() });
    }

    #[test]
    fn cleared_values_are_valid() {
        let r = responses(&[("p1", None), ("p2", None)]);
        assert_eq!(validate_responses(&template(false), &r), Ok(()));
    }
}
