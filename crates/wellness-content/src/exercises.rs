use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A guided exercise: breathing pattern or relaxation technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub description: String,
    pub steps: Vec<String>,
    pub benefits: Vec<String>,
}

static BREATHING_EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        exercise(
            "box-breathing",
            "Box Breathing",
            "5-10 minutes",
            "A breathing pattern that calms the nervous system and reduces stress.",
            &[
                "Sit comfortably and relax",
                "Breathe in through your nose for a count of 4",
                "Hold your breath for a count of 4",
                "Breathe out through your mouth for a count of 4",
                "Hold with empty lungs for a count of 4",
                "Repeat the cycle 8-10 times",
            ],
            &[
                "Lowers heart rate",
                "Reduces anxiety",
                "Improves focus and concentration",
            ],
        ),
        exercise(
            "478-breathing",
            "4-7-8 Breathing",
            "3-5 minutes",
            "An effective breathing pattern for easing stress and falling asleep.",
            &[
                "Rest the tip of your tongue behind your upper front teeth",
                "Exhale completely through your mouth",
                "Close your mouth and inhale through your nose for a count of 4",
                "Hold your breath for a count of 7",
                "Exhale through your mouth for a count of 8",
                "Repeat the cycle 3-4 times",
            ],
            &[
                "Calms the nervous system",
                "Helps with insomnia",
                "Reduces stress and anxiety",
            ],
        ),
        exercise(
            "diaphragmatic-breathing",
            "Diaphragmatic Breathing",
            "10-15 minutes",
            "Deep breathing that engages the diaphragm for full relaxation.",
            &[
                "Lie down or sit comfortably",
                "Place one hand on your chest and the other on your belly",
                "Breathe in slowly through your nose",
                "Make sure the hand on your belly moves more than the one on your chest",
                "Breathe out slowly through your mouth",
                "Focus on the rise and fall of your belly",
            ],
            &[
                "Improves oxygenation",
                "Lowers blood pressure",
                "Reduces muscle tension",
            ],
        ),
    ]
});

static RELAXATION_TECHNIQUES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        exercise(
            "progressive-muscle-relaxation",
            "Progressive Muscle Relaxation",
            "15-20 minutes",
            "Tense and release muscle groups one after another.",
            &[
                "Lie down or sit comfortably",
                "Starting with your feet, tense the muscles for 5 seconds",
                "Release the tension and notice the relaxation for 10 seconds",
                "Move on to calves, thighs, stomach, hands, arms, shoulders, and face",
                "Focus on the difference between tension and relaxation",
                "Finish by noticing your whole body at rest",
            ],
            &[
                "Reduces physical tension",
                "Improves sleep quality",
                "Lowers stress levels",
            ],
        ),
        exercise(
            "guided-imagery",
            "Guided Imagery",
            "10-15 minutes",
            "Use your imagination to create a calming experience.",
            &[
                "Sit or lie down comfortably",
                "Close your eyes and breathe deeply",
                "Picture a calm and peaceful place",
                "Use all of your senses to imagine its details",
                "Feel the peace and quiet of that place",
                "Enjoy the feeling of relaxation for a few minutes",
            ],
            &[
                "Reduces anxiety",
                "Lifts your mood",
                "Helps focus and concentration",
            ],
        ),
        exercise(
            "mindfulness-meditation",
            "Mindfulness Meditation",
            "5-20 minutes",
            "Train non-judgemental awareness of the present moment.",
            &[
                "Sit upright in a comfortable position",
                "Bring your attention to your breath",
                "When your mind wanders, return your focus to the breath",
                "Accept thoughts and feelings without judging them",
                "Stay aware of the present moment",
                "Start with 5 minutes and build up gradually",
            ],
            &[
                "Improves emotional regulation",
                "Reduces stress and anxiety",
                "Sharpens focus and mental clarity",
            ],
        ),
    ]
});

pub fn breathing_exercises() -> &'static [Exercise] {
    &BREATHING_EXERCISES
}

pub fn relaxation_techniques() -> &'static [Exercise] {
    &RELAXATION_TECHNIQUES
}

pub fn find_breathing_exercise(id: &str) -> Option<&'static Exercise> {
    breathing_exercises().iter().find(|e| e.id == id)
}

pub fn find_relaxation_technique(id: &str) -> Option<&'static Exercise> {
    relaxation_techniques().iter().find(|e| e.id == id)
}

fn exercise(
    id: &str,
    name: &str,
    duration: &str,
    description: &str,
    steps: &[&str],
    benefits: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        benefits: benefits.iter().map(|s| s.to_string()).collect(),
    }
}
