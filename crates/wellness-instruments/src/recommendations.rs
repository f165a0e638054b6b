use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wellness_core::models::StressLevel;

/// Display hint for the result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Advice shown alongside an assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub suggestions: Vec<String>,
    pub color: Color,
    /// Only set for severe stress.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub urgent: bool,
}

struct Recommendations {
    low: Recommendation,
    moderate: Recommendation,
    high: Recommendation,
    severe: Recommendation,
}

static RECOMMENDATIONS: LazyLock<Recommendations> = LazyLock::new(|| Recommendations {
    low: recommendation(
        "Low Stress Level",
        "Your psychological wellbeing is in good shape. Keep up your healthy habits.",
        &[
            "Keep up regular physical activity",
            "Maintain a good sleep routine",
            "Practise relaxation techniques as prevention",
            "Keep a healthy balance between work and personal life",
        ],
        Color::Green,
        false,
    ),
    moderate: recommendation(
        "Moderate Stress Level",
        "You are experiencing a noticeable level of stress. Start applying stress-management techniques.",
        &[
            "Practise breathing exercises every day",
            "Set aside time for relaxation and hobbies",
            "Talk to colleagues or your manager about your workload",
            "Consider re-prioritising your tasks",
        ],
        Color::Yellow,
        false,
    ),
    high: recommendation(
        "High Stress Level",
        "You are experiencing a high level of stress. It is important to act soon.",
        &[
            "Practise relaxation techniques intensively",
            "Consider talking to a counsellor or psychologist",
            "Review your workload and ask for help where needed",
            "Make sure you get enough rest",
            "Avoid excessive caffeine and alcohol",
        ],
        Color::Orange,
        false,
    ),
    severe: recommendation(
        "Very High Stress Level",
        "You are experiencing a very high level of stress. Seek professional help as soon as possible.",
        &[
            "Consult a psychologist or psychiatrist right away",
            "Consider taking temporary leave",
            "Use every relaxation technique available to you",
            "Ask family and friends for support",
            "Contact an emergency mental health service if needed",
        ],
        Color::Red,
        true,
    ),
});

/// The bundle for a stress level.
pub fn for_level(level: StressLevel) -> &'static Recommendation {
    let all = &*RECOMMENDATIONS;
    match level {
        StressLevel::Low => &all.low,
        StressLevel::Moderate => &all.moderate,
        StressLevel::High => &all.high,
        StressLevel::Severe => &all.severe,
    }
}

/// The bundle for a level name. Unrecognized names get the moderate bundle.
pub fn lookup(level: &str) -> &'static Recommendation {
    match level.parse::<StressLevel>() {
        Ok(level) => for_level(level),
        Err(_) => &RECOMMENDATIONS.moderate,
    }
}

fn recommendation(
    title: &str,
    description: &str,
    suggestions: &[&str],
    color: Color,
    urgent: bool,
) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        color,
        urgent,
    }
}
