//! Emotion labels and per-face probability vectors.
//!
//! The label set is closed: these are the seven classes emitted by the
//! external facial-emotion-recognition model. Upstream detectors key their
//! output by lowercase label name, and not every label is guaranteed to be
//! present; an absent label always means probability zero.

use serde::{Deserialize, Serialize};

/// The closed set of emotion labels produced by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// All labels in their fixed declaration order.
    ///
    /// This order doubles as the tie-break order when two labels carry the
    /// same probability: the earlier label wins, matching the iteration
    /// order of the upstream detector's output.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    /// Lowercase detector-side name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Angry => "angry",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Capitalized display name (e.g. "Neutral").
    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A per-face probability distribution over the emotion label set.
///
/// Fixed-shape replacement for the detector's dynamic-keyed emotion
/// dictionary: every label is a concrete field, and any field absent from
/// the serialized form deserializes to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionVector {
    pub angry: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happy: f64,
    pub sad: f64,
    pub surprise: f64,
    pub neutral: f64,
}

impl EmotionVector {
    /// Probability for one label.
    pub fn get(&self, label: EmotionLabel) -> f64 {
        match label {
            EmotionLabel::Angry => self.angry,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Happy => self.happy,
            EmotionLabel::Sad => self.sad,
            EmotionLabel::Surprise => self.surprise,
            EmotionLabel::Neutral => self.neutral,
        }
    }

    /// Set the probability for one label.
    pub fn set(&mut self, label: EmotionLabel, probability: f64) {
        match label {
            EmotionLabel::Angry => self.angry = probability,
            EmotionLabel::Disgust => self.disgust = probability,
            EmotionLabel::Fear => self.fear = probability,
            EmotionLabel::Happy => self.happy = probability,
            EmotionLabel::Sad => self.sad = probability,
            EmotionLabel::Surprise => self.surprise = probability,
            EmotionLabel::Neutral => self.neutral = probability,
        }
    }

    /// The label with the highest probability, and that probability.
    ///
    /// Ties resolve to the earliest label in [`EmotionLabel::ALL`] order,
    /// so the result is deterministic for any input.
    pub fn dominant(&self) -> (EmotionLabel, f64) {
        let mut best = EmotionLabel::ALL[0];
        let mut best_p = self.get(best);
        for &label in &EmotionLabel::ALL[1..] {
            let p = self.get(label);
            if p > best_p {
                best = label;
                best_p = p;
            }
        }
        (best, best_p)
    }

    /// The highest single probability in the vector.
    pub fn peak(&self) -> f64 {
        self.dominant().1
    }

    /// Copy with every probability clamped into `[0.0, 1.0]`.
    ///
    /// Detectors are trusted to emit valid probabilities; this exists for
    /// callers validating streams from unknown producers.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for label in EmotionLabel::ALL {
            out.set(label, self.get(label).clamp(0.0, 1.0));
        }
        out
    }

    /// True if any probability falls outside `[0.0, 1.0]` or is not finite.
    pub fn has_out_of_range(&self) -> bool {
        EmotionLabel::ALL.iter().any(|&label| {
            let p = self.get(label);
            !p.is_finite() || !(0.0..=1.0).contains(&p)
        })
    }
}
