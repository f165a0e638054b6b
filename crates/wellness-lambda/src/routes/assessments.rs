use std::collections::BTreeMap;

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Extension, Form, Json};
use serde::Serialize;
use serde_json::{Map, Value};

use wellness_core::models::{Assessment, Identity};
use wellness_instruments::questions::{Question, questions};
use wellness_instruments::recommendations::{self, Recommendation};
use wellness_instruments::validation::validate_submission;
use wellness_storage::assessments;

use crate::error::ApiError;
use crate::state::AppState;
use crate::view::View;

#[derive(Serialize)]
pub struct QuizProps {
    questions: &'static [Question],
}

#[derive(Serialize)]
pub struct ResultProps {
    assessment: Assessment,
    recommendations: &'static Recommendation,
}

/// Raw quiz fields from either a JSON object or a form-encoded post.
///
/// Rejections become [`ApiError::BadRequest`] so they share the JSON error body.
pub struct Ratings(pub Map<String, Value>);

impl<S> FromRequest<S> for Ratings
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(fields) = Form::<BTreeMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Ok(Ratings(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            ));
        }

        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        match payload {
            Value::Object(fields) => Ok(Ratings(fields)),
            _ => Err(ApiError::BadRequest(
                "expected a JSON object of ratings".to_string(),
            )),
        }
    }
}

pub async fn show_quiz() -> Json<View<QuizProps>> {
    Json(View::new(
        "stress-assessment",
        QuizProps {
            questions: questions(),
        },
    ))
}

pub async fn submit_assessment(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Ratings(fields): Ratings,
) -> Result<Json<View<ResultProps>>, ApiError> {
    let sub_scores = validate_submission(&fields)?;
    let assessment = assessments::create(state.store.as_ref(), sub_scores, &identity).await?;
    let recommendations = recommendations::lookup(assessment.stress_level.as_str());

    Ok(Json(View::new(
        "assessment-result",
        ResultProps {
            assessment,
            recommendations,
        },
    )))
}
