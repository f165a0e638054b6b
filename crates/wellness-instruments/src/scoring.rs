use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use wellness_core::models::assessment::{MAX_RATING, MIN_RATING};
use wellness_core::models::{Assessment, Identity, StressLevel, SubScores};

/// Highest total still classified as [`StressLevel::Low`].
pub const LOW_MAX: i64 = 8;
/// Highest total still classified as [`StressLevel::Moderate`].
pub const MODERATE_MAX: i64 = 12;
/// Highest total still classified as [`StressLevel::High`].
pub const HIGH_MAX: i64 = 16;

/// Defines the valid range for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl ScoreRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The 1–5 Likert range shared by every question.
pub const RATING_RANGE: ScoreRange = ScoreRange {
    min: MIN_RATING as i64,
    max: MAX_RATING as i64,
};

/// Sum of the four ratings.
pub fn score(sub_scores: &SubScores) -> u8 {
    sub_scores.as_array().iter().sum()
}

/// Map a total score to its stress level.
///
/// Each band is inclusive on its upper bound: `..=8` low, `9..=12` moderate,
/// `13..=16` high, `17..` severe. Totals outside `[4, 20]` still classify into
/// the nearest band.
pub fn classify(total: i64) -> StressLevel {
    if total <= LOW_MAX {
        StressLevel::Low
    } else if total <= MODERATE_MAX {
        StressLevel::Moderate
    } else if total <= HIGH_MAX {
        StressLevel::High
    } else {
        StressLevel::Severe
    }
}

/// Build a new, immutable assessment record for `identity`.
///
/// This is the only place a record's derived fields are computed.
pub fn assess(sub_scores: SubScores, identity: &Identity) -> Assessment {
    let total_score = score(&sub_scores);
    Assessment {
        id: Uuid::new_v4(),
        user_id: identity.user_id().map(str::to_string),
        session_id: identity.session_id().map(str::to_string),
        work_pressure_score: sub_scores.work_pressure(),
        sleep_quality_score: sub_scores.sleep_quality(),
        emotional_state_score: sub_scores.emotional_state(),
        physical_symptoms_score: sub_scores.physical_symptoms(),
        total_score,
        stress_level: classify(i64::from(total_score)),
        created_at: jiff::Timestamp::now(),
    }
}

/// Whether a record's ratings are in range and its derived fields match the
/// scoring formula.
pub fn is_consistent(assessment: &Assessment) -> bool {
    let ratings = assessment.ratings();
    if !ratings
        .iter()
        .all(|&r| RATING_RANGE.contains(i64::from(r)))
    {
        return false;
    }

    let total: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    total == i64::from(assessment.total_score) && classify(total) == assessment.stress_level
}
