use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Categorical stress classification derived from a total score.
///
/// Variants are declared from least to most severe, so the derived `Ord`
/// follows severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl StressLevel {
    pub const ALL: [StressLevel; 4] = [
        StressLevel::Low,
        StressLevel::Moderate,
        StressLevel::High,
        StressLevel::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StressLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStressLevel(s.to_string()))
    }
}
