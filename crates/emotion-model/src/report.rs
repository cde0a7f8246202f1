//! Stress levels and the per-frame scoring result.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionLabel;

/// Discrete stress level derived from the smoothed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// Classify a smoothed score with the canonical thresholds:
    /// above 70 is High, above 40 is Moderate, otherwise Low.
    ///
    /// Boundaries are exact: 70 is Moderate, 40 is Low.
    pub fn from_score(smoothed: u8) -> Self {
        Self::from_thresholds(smoothed, 70, 40)
    }

    /// Classify with explicit thresholds: strictly above `high` is High,
    /// strictly above `moderate` is Moderate, otherwise Low.
    ///
    /// The single ladder behind both the canonical classification and
    /// scorers running with tuned thresholds.
    pub fn from_thresholds(smoothed: u8, high: u8, moderate: u8) -> Self {
        if smoothed > high {
            StressLevel::High
        } else if smoothed > moderate {
            StressLevel::Moderate
        } else {
            StressLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scorer's output for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressReading {
    /// Single-frame stress estimate before smoothing, in [0, 100].
    pub instantaneous: u8,

    /// Rolling average over the history buffer, in [0, 100].
    pub smoothed: u8,

    /// Discrete level derived from the smoothed score.
    pub level: StressLevel,

    /// Dominant emotion for the frame; Neutral when no face was observed.
    pub dominant: EmotionLabel,

    /// How many faces the frame contained.
    pub face_count: usize,
}
