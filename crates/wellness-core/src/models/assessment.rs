use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::stress_level::StressLevel;
use crate::error::CoreError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A stored stress-assessment result.
///
/// `total_score` and `stress_level` are derived from the four ratings when the
/// record is built and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub work_pressure_score: u8,
    pub sleep_quality_score: u8,
    pub emotional_state_score: u8,
    pub physical_symptoms_score: u8,
    pub total_score: u8,
    pub stress_level: StressLevel,
    pub created_at: jiff::Timestamp,
}

impl Assessment {
    /// The four ratings of this record, in question order.
    pub fn ratings(&self) -> [u8; 4] {
        [
            self.work_pressure_score,
            self.sleep_quality_score,
            self.emotional_state_score,
            self.physical_symptoms_score,
        ]
    }
}

/// Validated quiz ratings. Every value is within `[MIN_RATING, MAX_RATING]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    work_pressure: u8,
    sleep_quality: u8,
    emotional_state: u8,
    physical_symptoms: u8,
}

impl SubScores {
    pub fn new(
        work_pressure: i64,
        sleep_quality: i64,
        emotional_state: i64,
        physical_symptoms: i64,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            work_pressure: rating("work_pressure", work_pressure)?,
            sleep_quality: rating("sleep_quality", sleep_quality)?,
            emotional_state: rating("emotional_state", emotional_state)?,
            physical_symptoms: rating("physical_symptoms", physical_symptoms)?,
        })
    }

    pub fn work_pressure(&self) -> u8 {
        self.work_pressure
    }

    pub fn sleep_quality(&self) -> u8 {
        self.sleep_quality
    }

    pub fn emotional_state(&self) -> u8 {
        self.emotional_state
    }

    pub fn physical_symptoms(&self) -> u8 {
        self.physical_symptoms
    }

    pub fn as_array(&self) -> [u8; 4] {
        [
            self.work_pressure,
            self.sleep_quality,
            self.emotional_state,
            self.physical_symptoms,
        ]
    }
}

fn rating(field: &'static str, value: i64) -> Result<u8, CoreError> {
    if value < i64::from(MIN_RATING) || value > i64::from(MAX_RATING) {
        return Err(CoreError::RatingOutOfRange {
            field,
            value,
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    // In range, so the narrowing cast is lossless.
    Ok(value as u8)
}
