use std::collections::HashSet;

use wellness_content::Section;
use wellness_content::exercises::{
    breathing_exercises, find_breathing_exercise, find_relaxation_technique,
    relaxation_techniques,
};
use wellness_content::resources::{ContactType, mental_health_resources};

#[test]
fn paths_resolve_to_their_section() {
    assert_eq!(
        Section::from_path("/breathing-exercises"),
        Section::BreathingExercises
    );
    assert_eq!(
        Section::from_path("/relaxation-techniques"),
        Section::RelaxationTechniques
    );
    assert_eq!(
        Section::from_path("/mental-health-resources"),
        Section::MentalHealthResources
    );
    assert_eq!(
        Section::from_path("/relaxation-techniques/guided-imagery"),
        Section::RelaxationTechniques
    );
}

#[test]
fn unknown_paths_default_to_breathing_exercises() {
    assert_eq!(Section::from_path("/"), Section::BreathingExercises);
    assert_eq!(Section::from_path("/yoga"), Section::BreathingExercises);
    assert_eq!(Section::from_path(""), Section::BreathingExercises);
}

#[test]
fn section_serializes_as_slug() {
    for section in Section::ALL {
        let json = serde_json::to_value(section).unwrap();
        assert_eq!(json, serde_json::json!(section.slug()));
    }
}

#[test]
fn exercise_ids_are_unique() {
    let ids: HashSet<&str> = breathing_exercises()
        .iter()
        .chain(relaxation_techniques())
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids.len(), 6);
}

#[test]
fn exercises_have_steps_and_benefits() {
    for exercise in breathing_exercises().iter().chain(relaxation_techniques()) {
        assert!(!exercise.steps.is_empty(), "{}", exercise.id);
        assert!(!exercise.benefits.is_empty(), "{}", exercise.id);
    }
}

#[test]
fn exercises_are_found_by_id() {
    assert_eq!(
        find_breathing_exercise("box-breathing").map(|e| e.name.as_str()),
        Some("Box Breathing")
    );
    assert!(find_breathing_exercise("guided-imagery").is_none());
    assert_eq!(
        find_relaxation_technique("guided-imagery").map(|e| e.duration.as_str()),
        Some("10-15 minutes")
    );
}

#[test]
fn resource_directory_has_all_parts() {
    let resources = mental_health_resources();
    assert_eq!(resources.emergency_contacts.len(), 3);
    assert_eq!(resources.articles.len(), 3);
    assert_eq!(resources.self_help_tools.len(), 3);
    assert_eq!(resources.professional_help.len(), 3);
    assert_eq!(
        resources.emergency_contacts[0].contact_type,
        ContactType::Hotline
    );

    let json = serde_json::to_value(resources).unwrap();
    assert_eq!(json["emergency_contacts"][1]["type"], "hospital");
    assert_eq!(json["self_help_tools"][2]["type"], "technique");
}
