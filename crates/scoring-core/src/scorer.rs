//! The stress scorer: weighted emotion sum, normalization, and level
//! classification.
//!
//! # Algorithm
//!
//! 1. **Per-face score:** `0.4*angry + 0.35*fear + 0.25*sad`, with absent
//!    labels contributing 0.0.
//! 2. **Frame score:** arithmetic mean across all faces (order-independent).
//! 3. **Normalize:** `min(round(raw * 100), 100)`, an integer in [0, 100].
//! 4. **Append** to the session history (policy-gated for faceless frames).
//! 5. **Smooth:** rounded mean over the history buffer.
//! 6. **Classify:** High above 70, Moderate above 40, Low otherwise.

use serde::{Deserialize, Serialize};

use stresscam_common::config::ScoringDefaults;
use stresscam_emotion_model::{
    EmotionLabel, EmotionVector, FaceObservation, StressLevel, StressReading,
};

use crate::history::StressHistory;

/// What to do with the history when a frame contains no face.
///
/// The reference variants disagree here; skipping the append keeps the
/// rolling average a measure of actual observations instead of decaying
/// toward zero across face-absence gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoFacePolicy {
    /// Leave the history untouched on faceless frames.
    #[default]
    SkipAppend,
    /// Append a zero on faceless frames.
    AppendZero,
}

/// How the frame-level dominant emotion is chosen when several faces are
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantFacePolicy {
    /// The face with the highest single emotion probability wins
    /// (order-independent; earlier face on exact ties).
    #[default]
    HighestPeak,
    /// The last face in detector order wins.
    LastFace,
}

/// Configuration for the stress scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight applied to the "angry" probability.
    pub angry_weight: f64,

    /// Weight applied to the "fear" probability.
    pub fear_weight: f64,

    /// Weight applied to the "sad" probability.
    pub sad_weight: f64,

    /// Smoothed scores strictly above this are High stress.
    pub high_threshold: u8,

    /// Smoothed scores strictly above this (and at or below the high
    /// threshold) are Moderate stress.
    pub moderate_threshold: u8,

    /// History behavior for faceless frames.
    pub no_face_policy: NoFacePolicy,

    /// Frame-level dominant-emotion selection.
    pub dominant_policy: DominantFacePolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            angry_weight: 0.4,
            fear_weight: 0.35,
            sad_weight: 0.25,
            high_threshold: 70,
            moderate_threshold: 40,
            no_face_policy: NoFacePolicy::default(),
            dominant_policy: DominantFacePolicy::default(),
        }
    }
}

impl ScoringConfig {
    /// Build a config from the application-level defaults.
    pub fn from_defaults(defaults: &ScoringDefaults) -> Self {
        Self {
            angry_weight: defaults.angry_weight,
            fear_weight: defaults.fear_weight,
            sad_weight: defaults.sad_weight,
            high_threshold: defaults.high_threshold,
            moderate_threshold: defaults.moderate_threshold,
            no_face_policy: if defaults.append_zero_on_no_face {
                NoFacePolicy::AppendZero
            } else {
                NoFacePolicy::SkipAppend
            },
            dominant_policy: DominantFacePolicy::default(),
        }
    }
}

/// The stress scorer.
///
/// Deterministic given the observations and the prior history contents.
/// Never fails: empty frames and absent emotion labels are ordinary inputs,
/// not errors. The only side effect is the policy-gated history append.
#[derive(Debug, Clone, Default)]
pub struct StressScorer {
    config: ScoringConfig,
}

impl StressScorer {
    /// Create a scorer with the given configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Create a scorer with the canonical configuration.
    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one frame's observations against the session history.
    pub fn score(
        &self,
        observations: &[FaceObservation],
        history: &mut StressHistory,
    ) -> StressReading {
        let (instantaneous, dominant) = if observations.is_empty() {
            (0u8, EmotionLabel::Neutral)
        } else {
            let raw: f64 = observations
                .iter()
                .map(|face| self.face_stress(&face.emotions))
                .sum::<f64>()
                / observations.len() as f64;

            // min(round(raw * 100), 100); negative inputs saturate to 0.
            let instantaneous = ((raw * 100.0).round() as u32).min(100) as u8;
            (instantaneous, self.frame_dominant(observations))
        };

        if !observations.is_empty() || self.config.no_face_policy == NoFacePolicy::AppendZero {
            history.push(instantaneous);
        }

        let smoothed = history.smoothed();

        StressReading {
            instantaneous,
            smoothed,
            level: self.classify(smoothed),
            dominant,
            face_count: observations.len(),
        }
    }

    /// Weighted stress contribution of one face.
    fn face_stress(&self, emotions: &EmotionVector) -> f64 {
        self.config.angry_weight * emotions.angry
            + self.config.fear_weight * emotions.fear
            + self.config.sad_weight * emotions.sad
    }

    /// Dominant emotion for the frame per the configured policy.
    fn frame_dominant(&self, observations: &[FaceObservation]) -> EmotionLabel {
        match self.config.dominant_policy {
            DominantFacePolicy::LastFace => observations
                .last()
                .map(|face| face.emotions.dominant().0)
                .unwrap_or(EmotionLabel::Neutral),
            DominantFacePolicy::HighestPeak => {
                let mut best: Option<(EmotionLabel, f64)> = None;
                for face in observations {
                    let (label, peak) = face.emotions.dominant();
                    match best {
                        Some((_, best_peak)) if peak <= best_peak => {}
                        _ => best = Some((label, peak)),
                    }
                }
                best.map(|(label, _)| label).unwrap_or(EmotionLabel::Neutral)
            }
        }
    }

    /// Level from the smoothed score using the configured thresholds.
    fn classify(&self, smoothed: u8) -> StressLevel {
        StressLevel::from_thresholds(
            smoothed,
            self.config.high_threshold,
            self.config.moderate_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(angry: f64, fear: f64, sad: f64) -> FaceObservation {
        FaceObservation::from_emotions(EmotionVector {
            angry,
            fear,
            sad,
            ..Default::default()
        })
    }

    #[test]
    fn test_single_face_worked_example() {
        // raw = 0.4*0.8 + 0.35*0.5 + 0.25*0.2 = 0.545 -> instantaneous 55;
        // against 49 remaining zeros the smoothed mean is 1.1 -> 1 -> Low.
        let scorer = StressScorer::with_defaults();
        let mut history = StressHistory::with_capacity(50);

        let reading = scorer.score(&[face(0.8, 0.5, 0.2)], &mut history);
        assert_eq!(reading.instantaneous, 55);
        assert_eq!(reading.smoothed, 1);
        assert_eq!(reading.level, StressLevel::Low);
        assert_eq!(reading.dominant, EmotionLabel::Angry);
        assert_eq!(reading.face_count, 1);
    }

    #[test]
    fn test_convergence_to_high() {
        // 50 frames at instantaneous 80 fill the buffer -> smoothed 80 -> High.
        let scorer = StressScorer::with_defaults();
        let mut history = StressHistory::with_capacity(50);

        let mut last = None;
        for _ in 0..50 {
            last = Some(scorer.score(&[face(0.8, 0.8, 0.8)], &mut history));
        }
        let reading = last.unwrap();
        assert_eq!(reading.instantaneous, 80);
        assert_eq!(reading.smoothed, 80);
        assert_eq!(reading.level, StressLevel::High);
    }

    #[test]
    fn test_empty_frame_skips_append_by_default() {
        let scorer = StressScorer::with_defaults();
        let mut history = StressHistory::with_capacity(5);
        history.push(60);
        let before = history.scores();

        let reading = scorer.score(&[], &mut history);
        assert_eq!(reading.instantaneous, 0);
        assert_eq!(reading.dominant, EmotionLabel::Neutral);
        assert_eq!(reading.face_count, 0);
        assert_eq!(history.scores(), before);
        // Smoothed still reflects the prior history.
        assert_eq!(reading.smoothed, history.smoothed());
    }

    #[test]
    fn test_empty_frame_appends_zero_under_variant_policy() {
        let scorer = StressScorer::new(ScoringConfig {
            no_face_policy: NoFacePolicy::AppendZero,
            ..Default::default()
        });
        let mut history = StressHistory::with_capacity(3);
        history.push(30);
        history.push(30);
        history.push(30);

        let reading = scorer.score(&[], &mut history);
        assert_eq!(history.scores(), vec![30, 30, 0]);
        assert_eq!(reading.smoothed, 20);
    }

    #[test]
    fn test_multi_face_mean_is_order_independent() {
        let scorer = StressScorer::with_defaults();
        let faces = vec![face(0.9, 0.1, 0.3), face(0.2, 0.7, 0.5), face(0.0, 0.0, 1.0)];
        let mut reversed = faces.clone();
        reversed.reverse();

        let mut history_a = StressHistory::with_capacity(10);
        let mut history_b = StressHistory::with_capacity(10);
        let reading_a = scorer.score(&faces, &mut history_a);
        let reading_b = scorer.score(&reversed, &mut history_b);

        assert_eq!(reading_a.instantaneous, reading_b.instantaneous);
        assert_eq!(reading_a.dominant, reading_b.dominant);
    }

    #[test]
    fn test_highest_peak_dominant_across_faces() {
        let scorer = StressScorer::with_defaults();
        let happy_face = EmotionVector {
            happy: 0.95,
            ..Default::default()
        };
        let sad_face = EmotionVector {
            sad: 0.6,
            ..Default::default()
        };

        let faces = vec![
            FaceObservation::from_emotions(sad_face),
            FaceObservation::from_emotions(happy_face),
        ];
        let mut history = StressHistory::with_capacity(10);
        let reading = scorer.score(&faces, &mut history);
        assert_eq!(reading.dominant, EmotionLabel::Happy);
    }

    #[test]
    fn test_last_face_dominant_policy() {
        let scorer = StressScorer::new(ScoringConfig {
            dominant_policy: DominantFacePolicy::LastFace,
            ..Default::default()
        });
        let happy_face = EmotionVector {
            happy: 0.95,
            ..Default::default()
        };
        let sad_face = EmotionVector {
            sad: 0.6,
            ..Default::default()
        };

        let faces = vec![
            FaceObservation::from_emotions(happy_face),
            FaceObservation::from_emotions(sad_face),
        ];
        let mut history = StressHistory::with_capacity(10);
        let reading = scorer.score(&faces, &mut history);
        assert_eq!(reading.dominant, EmotionLabel::Sad);
    }

    #[test]
    fn test_saturated_emotions_cap_at_100() {
        // Weights sum to 1.0, so all-ones tops out at exactly 100.
        let scorer = StressScorer::with_defaults();
        let mut history = StressHistory::with_capacity(5);
        let reading = scorer.score(&[face(1.0, 1.0, 1.0)], &mut history);
        assert_eq!(reading.instantaneous, 100);
    }

    #[test]
    fn test_threshold_boundaries_with_filled_history() {
        let scorer = StressScorer::with_defaults();

        for (value, expected) in [
            (40u8, StressLevel::Low),
            (41, StressLevel::Moderate),
            (70, StressLevel::Moderate),
            (71, StressLevel::High),
        ] {
            let mut history = StressHistory::with_capacity(4);
            for _ in 0..4 {
                history.push(value);
            }
            // A faceless frame leaves the history as-is and classifies the
            // existing smoothed score.
            let reading = scorer.score(&[], &mut history);
            assert_eq!(reading.smoothed, value);
            assert_eq!(reading.level, expected, "smoothed={value}");
        }
    }

    #[test]
    fn test_tuned_thresholds_flow_through_classification() {
        let scorer = StressScorer::new(ScoringConfig {
            high_threshold: 50,
            moderate_threshold: 20,
            ..Default::default()
        });
        let mut history = StressHistory::with_capacity(2);
        history.push(60);
        history.push(60);

        let reading = scorer.score(&[], &mut history);
        assert_eq!(reading.smoothed, 60);
        assert_eq!(reading.level, StressLevel::High);
    }

    #[test]
    fn test_from_defaults_maps_policy() {
        let defaults = ScoringDefaults {
            append_zero_on_no_face: true,
            ..Default::default()
        };
        let config = ScoringConfig::from_defaults(&defaults);
        assert_eq!(config.no_face_policy, NoFacePolicy::AppendZero);
        assert_eq!(config.high_threshold, 70);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.no_face_policy, NoFacePolicy::SkipAppend);
        assert_eq!(parsed.dominant_policy, DominantFacePolicy::HighestPeak);
    }
}
