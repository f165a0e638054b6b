//! Field-level validation of a raw quiz submission.
//!
//! Every question is checked, so a submission with several bad fields reports
//! all of them at once. Nothing downstream sees the input until it has become
//! a [`SubScores`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use ts_rs::TS;

use wellness_core::models::SubScores;

use crate::questions::{Question, questions};

/// The rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rule {
    Required,
    Integer,
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "validation failed: {}",
    .errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>().join(", ")
)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Messages grouped by field name.
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            fields
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        fields
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Validate a raw submission and turn it into ratings.
///
/// Each question's field must be present, an integer (numeric strings are
/// accepted, as form posts deliver them), and within the question's range.
pub fn validate_submission(input: &Map<String, Value>) -> Result<SubScores, ValidationErrors> {
    let mut ratings = [0i64; 4];
    let mut errors = Vec::new();

    for (slot, question) in ratings.iter_mut().zip(questions()) {
        match check_rating(question, input.get(&question.field)) {
            Ok(rating) => *slot = rating,
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    // SubScores re-checks its own bounds; this only fails if a question's
    // range drifts from MIN_RATING..=MAX_RATING.
    let [work_pressure, sleep_quality, emotional_state, physical_symptoms] = ratings;
    SubScores::new(work_pressure, sleep_quality, emotional_state, physical_symptoms).map_err(|e| {
        ValidationErrors {
            errors: vec![FieldError {
                field: "ratings".to_string(),
                rule: Rule::Max,
                message: e.to_string(),
            }],
        }
    })
}

fn check_rating(question: &Question, value: Option<&Value>) -> Result<i64, FieldError> {
    let fail = |rule: Rule, message: String| FieldError {
        field: question.field.clone(),
        rule,
        message,
    };

    let value = match value {
        None | Some(Value::Null) => {
            return Err(fail(Rule::Required, format!("{} is required.", question.label)));
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(fail(Rule::Required, format!("{} is required.", question.label)));
        }
        Some(v) => v,
    };

    let Some(rating) = as_integer(value) else {
        return Err(fail(
            Rule::Integer,
            format!("{} must be an integer.", question.label),
        ));
    };

    if rating < question.range.min {
        return Err(fail(
            Rule::Min,
            format!("{} must be at least {}.", question.label, question.range.min),
        ));
    }
    if rating > question.range.max {
        return Err(fail(
            Rule::Max,
            format!(
                "{} may not be greater than {}.",
                question.label, question.range.max
            ),
        ));
    }

    Ok(rating)
}

/// Whole numbers only. A JSON float with no fractional part (`3.0`) counts.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
