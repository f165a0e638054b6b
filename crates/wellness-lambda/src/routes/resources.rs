use axum::Json;
use axum::extract::Path;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wellness_content::Section;
use wellness_content::exercises::{
    self, Exercise, breathing_exercises, relaxation_techniques,
};
use wellness_content::resources::{ResourceDirectory, mental_health_resources};

use crate::error::ApiError;
use crate::view::View;

#[derive(Serialize)]
pub struct ExercisesProps {
    exercises: &'static [Exercise],
}

#[derive(Serialize)]
pub struct TechniquesProps {
    techniques: &'static [Exercise],
}

#[derive(Serialize)]
pub struct ResourcesProps {
    resources: &'static ResourceDirectory,
}

#[derive(Serialize)]
pub struct ExerciseProps {
    exercise: &'static Exercise,
}

/// Serves every informational page. The section is picked from the request
/// path, falling back to breathing exercises.
pub async fn show_section(uri: Uri) -> Response {
    let section = Section::from_path(uri.path());
    let component = section.slug();

    match section {
        Section::BreathingExercises => Json(View::new(
            component,
            ExercisesProps {
                exercises: breathing_exercises(),
            },
        ))
        .into_response(),
        Section::RelaxationTechniques => Json(View::new(
            component,
            TechniquesProps {
                techniques: relaxation_techniques(),
            },
        ))
        .into_response(),
        Section::MentalHealthResources => Json(View::new(
            component,
            ResourcesProps {
                resources: mental_health_resources(),
            },
        ))
        .into_response(),
    }
}

pub async fn show_breathing_exercise(
    Path(id): Path<String>,
) -> Result<Json<View<ExerciseProps>>, ApiError> {
    let exercise = exercises::find_breathing_exercise(&id)
        .ok_or_else(|| ApiError::NotFound(format!("breathing exercise not found: {id}")))?;
    Ok(Json(View::new("breathing-exercise", ExerciseProps { exercise })))
}

pub async fn show_relaxation_technique(
    Path(id): Path<String>,
) -> Result<Json<View<ExerciseProps>>, ApiError> {
    let exercise = exercises::find_relaxation_technique(&id)
        .ok_or_else(|| ApiError::NotFound(format!("relaxation technique not found: {id}")))?;
    Ok(Json(View::new("relaxation-technique", ExerciseProps { exercise })))
}
