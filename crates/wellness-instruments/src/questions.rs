use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::{RATING_RANGE, ScoreRange};

/// One quiz question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Stable identifier, e.g. `work_pressure`.
    pub id: String,
    /// Name of the submission field carrying this question's rating.
    pub field: String,
    /// Human-readable name used in validation messages.
    pub label: String,
    pub question: String,
    pub range: ScoreRange,
    /// Choice value to display label, ordered by value.
    pub options: BTreeMap<u8, String>,
}

const FREQUENCY: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];
const SLEEP: [&str; 5] = ["Very good", "Good", "Fair", "Poor", "Very poor"];

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        question(
            "work_pressure",
            "Work pressure",
            "How often do you feel weighed down by your workload?",
            FREQUENCY,
        ),
        question(
            "sleep_quality",
            "Sleep quality",
            "How would you rate the quality of your sleep over the last two weeks?",
            SLEEP,
        ),
        question(
            "emotional_state",
            "Emotional state",
            "How often do you feel anxious, irritable, or sad without a clear reason?",
            FREQUENCY,
        ),
        question(
            "physical_symptoms",
            "Physical symptoms",
            "How often do you experience physical symptoms such as headaches, muscle pain, or digestive problems?",
            FREQUENCY,
        ),
    ]
});

/// The four quiz questions, in the order they are asked.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Look up a question by id.
pub fn get_question(id: &str) -> Option<&'static Question> {
    questions().iter().find(|q| q.id == id)
}

fn question(id: &str, label: &str, text: &str, labels: [&str; 5]) -> Question {
    let options = (1u8..)
        .zip(labels)
        .map(|(value, label)| (value, label.to_string()))
        .collect();

    Question {
        id: id.to_string(),
        field: format!("{id}_score"),
        label: label.to_string(),
        question: text.to_string(),
        range: RATING_RANGE,
        options,
    }
}
