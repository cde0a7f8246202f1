//! Deterministic demo scenarios.
//!
//! Stand-ins for the preloaded demo images: each scenario yields a fixed,
//! reproducible observation sequence so demo runs and end-to-end checks
//! behave identically everywhere.

use stresscam_emotion_model::{
    EmotionVector, FaceObservation, FrameObservations, FrameSource,
};

/// Built-in demo scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoScenario {
    /// Relaxed subject: happy/neutral dominant, stress stays Low.
    Calm,
    /// Agitated subject: angry/fear dominant, stress climbs toward High.
    Stressed,
    /// Stressed first half, calm second half, with detection gaps.
    Recovery,
}

impl DemoScenario {
    pub const ALL: [DemoScenario; 3] = [
        DemoScenario::Calm,
        DemoScenario::Stressed,
        DemoScenario::Recovery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoScenario::Calm => "calm",
            DemoScenario::Stressed => "stressed",
            DemoScenario::Recovery => "recovery",
        }
    }
}

impl std::str::FromStr for DemoScenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calm" => Ok(DemoScenario::Calm),
            "stressed" => Ok(DemoScenario::Stressed),
            "recovery" => Ok(DemoScenario::Recovery),
            other => Err(format!(
                "Unknown scenario '{other}' (expected calm, stressed, or recovery)"
            )),
        }
    }
}

impl std::fmt::Display for DemoScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the observation sequence for a scenario.
pub fn generate_scenario(scenario: DemoScenario, frames: usize) -> Vec<FrameObservations> {
    (0..frames)
        .map(|index| match scenario {
            DemoScenario::Calm => calm_frame(index),
            DemoScenario::Stressed => stressed_frame(index),
            DemoScenario::Recovery => {
                // Every seventh frame the detector loses the face.
                if index % 7 == 6 {
                    FrameObservations::faceless(index as u64, FrameSource::Demo)
                } else if index < frames / 2 {
                    stressed_frame(index)
                } else {
                    calm_frame(index)
                }
            }
        })
        .collect()
}

fn calm_frame(index: usize) -> FrameObservations {
    let wobble = (index % 5) as f64 * 0.01;
    let emotions = EmotionVector {
        happy: 0.55 - wobble,
        neutral: 0.30,
        sad: 0.05 + wobble,
        surprise: 0.05,
        angry: 0.03,
        fear: 0.02,
        disgust: 0.0,
    };
    FrameObservations::new(
        index as u64,
        FrameSource::Demo,
        vec![FaceObservation::from_emotions(emotions)],
    )
}

fn stressed_frame(index: usize) -> FrameObservations {
    let wobble = (index % 4) as f64 * 0.02;
    let emotions = EmotionVector {
        angry: 0.50 + wobble,
        fear: 0.25,
        sad: 0.12,
        neutral: 0.08 - wobble,
        disgust: 0.03,
        surprise: 0.02,
        happy: 0.0,
    };
    FrameObservations::new(
        index as u64,
        FrameSource::Demo,
        vec![FaceObservation::from_emotions(emotions)],
    )
}
