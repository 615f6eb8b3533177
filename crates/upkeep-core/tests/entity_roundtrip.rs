//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use upkeep_core::audit_detail::{CompletedDetail, ResponseRecordedDetail, StatusChangedDetail};
use upkeep_core::entities::*;
use upkeep_core::enums::*;
use upkeep_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn anchor() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn fire_template() -> ChecklistTemplate {
    ChecklistTemplate {
        id: "tpl-5e1c0a77".into(),
        name: "Monthly fire safety".into(),
        sections: vec![ChecklistSection {
            title: "Extinguishers".into(),
            items: vec![
                ChecklistItem {
                    id: "ext-pressure".into(),
                    label: "Pressure gauge in green zone".into(),
                    response_type: ResponseType::PassFlagFailNa,
                    mandatory: true,
                    help_text: Some("Needle must sit inside the green arc".into()),
                },
                ChecklistItem {
                    id: "ext-count".into(),
                    label: "Units on floor".into(),
                    response_type: ResponseType::Number,
                    mandatory: false,
                    help_text: None,
                },
            ],
        }],
        requires_signature: true,
        frequency: RecurrenceRule::Monthly,
    }
}

roundtrip_and_validate!(
    planned_task_roundtrip,
    PlannedTask,
    PlannedTask {
        id: "pln-0badf00d".into(),
        title: "Boiler service".into(),
        asset: Some("boiler-2".into()),
        schedule: RecurringSchedule::new(anchor(), RecurrenceRule::Quarterly),
        template_id: None,
    }
);

roundtrip_and_validate!(template_roundtrip, ChecklistTemplate, fire_template());

roundtrip_and_validate!(
    scheduled_run_roundtrip,
    InspectionRun,
    InspectionRun::scheduled(
        "run-a3f8b2c1",
        "tpl-5e1c0a77",
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    )
);

roundtrip_and_validate!(
    completed_run_roundtrip,
    InspectionRun,
    InspectionRun {
        id: "run-a3f8b2c1".into(),
        template_id: "tpl-5e1c0a77".into(),
        planned_task_id: Some("pln-0c41d9e2".into()),
        scheduled_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        started_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 5, 0).unwrap()),
        completed_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 40, 0).unwrap()),
        status: InspectionStatus::Completed,
        responses: [
            ("ext-pressure".to_string(), ItemResponse::answer("pass")),
            (
                "ext-count".to_string(),
                ItemResponse {
                    value: Some("4".into()),
                    notes: "one unit moved to stairwell".into(),
                    photos: vec!["photos/ext-1.jpg".into()],
                },
            ),
        ]
        .into_iter()
        .collect(),
        signature: Some("J. Ortega".into()),
        score: Some(100),
    }
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: "aud-11111111".into(),
        run_id: "run-a3f8b2c1".into(),
        action: AuditAction::Completed,
        detail: Some(
            serde_json::to_value(CompletedDetail {
                score: 50,
                template_resolved: true,
                signed: false,
            })
            .unwrap()
        ),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    status_changed_detail_roundtrip,
    StatusChangedDetail,
    StatusChangedDetail {
        from: "scheduled".into(),
        to: "in_progress".into(),
    }
);

roundtrip_and_validate!(
    response_recorded_detail_roundtrip,
    ResponseRecordedDetail,
    ResponseRecordedDetail {
        item_id: "ext-pressure".into(),
        value: None,
    }
);

roundtrip_and_validate!(
    due_response_roundtrip,
    DueResponse,
    DueResponse {
        date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        requests: vec![WorkRequest {
            planned_task_id: "pln-0badf00d".into(),
            title: "Gutter check".into(),
            asset: None,
            due_at: anchor(),
            template_id: Some("tpl-5e1c0a77".into()),
        }],
    }
);

roundtrip_and_validate!(
    score_breakdown_roundtrip,
    ScoreBreakdown,
    ScoreBreakdown {
        score: 50,
        passed: 1,
        scored: 2,
        not_applicable: 1,
        unanswered: 0,
        template_resolved: true,
    }
);

roundtrip_and_validate!(
    progress_roundtrip,
    ChecklistProgress,
    ChecklistProgress {
        sections: vec![SectionProgress {
            title: "Extinguishers".into(),
            answered: 1,
            total: 2,
            missing_mandatory: vec![],
        }],
        answered: 1,
        total: 2,
        percent: 50,
    }
);

#[test]
fn schedule_enabled_defaults_to_true() {
    let json = r#"{"anchor":"2024-01-01T09:00:00","rule":"weekly"}"#;
    let schedule: RecurringSchedule = serde_json::from_str(json).unwrap();
    assert!(schedule.enabled);
    assert_eq!(schedule.rule, RecurrenceRule::Weekly);
}

#[test]
fn item_response_defaults_notes_and_photos() {
    let json = r#"{"value":"na"}"#;
    let response: ItemResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response, ItemResponse::answer("na"));
    assert!(response.is_answered());
}

#[test]
fn unanswered_value_serializes_as_null() {
    let json = serde_json::to_value(ItemResponse::default()).unwrap();
    assert_eq!(json["value"], serde_json::Value::Null);
}
