use serde_json::{Map, Value, json};
use wellness_instruments::validation::{Rule, validate_submission};

fn submission(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn valid_submission_becomes_sub_scores() {
    let input = submission(json!({
        "work_pressure_score": 3,
        "sleep_quality_score": 2,
        "emotional_state_score": 4,
        "physical_symptoms_score": 3,
    }));

    let sub_scores = validate_submission(&input).unwrap();
    assert_eq!(sub_scores.as_array(), [3, 2, 4, 3]);
}

#[test]
fn numeric_strings_are_accepted() {
    let input = submission(json!({
        "work_pressure_score": "5",
        "sleep_quality_score": " 1 ",
        "emotional_state_score": "2",
        "physical_symptoms_score": 4,
    }));

    let sub_scores = validate_submission(&input).unwrap();
    assert_eq!(sub_scores.as_array(), [5, 1, 2, 4]);
}

#[test]
fn every_invalid_field_is_reported() {
    let input = submission(json!({
        "work_pressure_score": 6,
        "sleep_quality_score": 0,
        "emotional_state_score": null,
    }));

    let err = validate_submission(&input).unwrap_err();
    assert_eq!(err.errors.len(), 4);

    let rules: Vec<(&str, Rule)> = err
        .errors
        .iter()
        .map(|e| (e.field.as_str(), e.rule))
        .collect();
    assert_eq!(
        rules,
        vec![
            ("work_pressure_score", Rule::Max),
            ("sleep_quality_score", Rule::Min),
            ("emotional_state_score", Rule::Required),
            ("physical_symptoms_score", Rule::Required),
        ]
    );
}

#[test]
fn non_integer_values_are_rejected() {
    let input = submission(json!({
        "work_pressure_score": 2.5,
        "sleep_quality_score": "often",
        "emotional_state_score": true,
        "physical_symptoms_score": [3],
    }));

    let err = validate_submission(&input).unwrap_err();
    assert_eq!(err.errors.len(), 4);
    assert!(err.errors.iter().all(|e| e.rule == Rule::Integer));
}

#[test]
fn blank_strings_count_as_missing() {
    let input = submission(json!({
        "work_pressure_score": "",
        "sleep_quality_score": 3,
        "emotional_state_score": 3,
        "physical_symptoms_score": 3,
    }));

    let err = validate_submission(&input).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].rule, Rule::Required);
    assert!(err.has_field("work_pressure_score"));
}

#[test]
fn messages_are_grouped_by_field() {
    let input = submission(json!({
        "work_pressure_score": 9,
        "sleep_quality_score": 3,
        "emotional_state_score": 3,
        "physical_symptoms_score": 3,
    }));

    let err = validate_submission(&input).unwrap_err();
    let fields = err.by_field();
    assert_eq!(fields.len(), 1);
    assert_eq!(
        fields["work_pressure_score"],
        vec!["Work pressure may not be greater than 5.".to_string()]
    );
    assert_eq!(err.to_string(), "validation failed: work_pressure_score");
}

#[test]
fn whole_valued_floats_are_integers() {
    let input = submission(json!({
        "work_pressure_score": 3.0,
        "sleep_quality_score": 2,
        "emotional_state_score": 4.0,
        "physical_symptoms_score": "3",
    }));

    let sub_scores = validate_submission(&input).unwrap();
    assert_eq!(sub_scores.as_array(), [3, 2, 4, 3]);

    let input = submission(json!({
        "work_pressure_score": 6.0,
        "sleep_quality_score": 2,
        "emotional_state_score": 4,
        "physical_symptoms_score": 3,
    }));
    let err = validate_submission(&input).unwrap_err();
    assert_eq!(err.errors[0].rule, Rule::Max);
}
