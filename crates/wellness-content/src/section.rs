use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the informational pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Section {
    BreathingExercises,
    RelaxationTechniques,
    MentalHealthResources,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::BreathingExercises,
        Section::RelaxationTechniques,
        Section::MentalHealthResources,
    ];

    /// URL slug, also used as the page component name.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::BreathingExercises => "breathing-exercises",
            Section::RelaxationTechniques => "relaxation-techniques",
            Section::MentalHealthResources => "mental-health-resources",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::BreathingExercises => "Breathing Exercises",
            Section::RelaxationTechniques => "Relaxation Techniques",
            Section::MentalHealthResources => "Mental Health Resources",
        }
    }

    /// Resolve the section a request path belongs to.
    ///
    /// The first section whose slug appears in the path wins; anything
    /// unrecognized resolves to breathing exercises.
    pub fn from_path(path: &str) -> Section {
        Section::ALL
            .into_iter()
            .find(|section| path.contains(section.slug()))
            .unwrap_or(Section::BreathingExercises)
    }
}
