//! The boundary to the external emotion-recognition collaborator.
//!
//! Face detection and emotion classification happen outside this system.
//! This module defines the narrow contract a detector backend must satisfy
//! and a scripted implementation used for demo and replay runs.

use std::collections::VecDeque;

use stresscam_common::error::{StresscamError, StresscamResult};
use stresscam_emotion_model::FaceObservation;

/// A decoded image handed to the detector.
///
/// Pixels are interleaved row-major; the scorer itself never inspects them,
/// they exist solely to pass through to a detector backend.
#[derive(Debug, Clone)]
pub struct ImageFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Number of channels (3 for the supported color form).
    pub channels: u8,
    /// Raw pixel data, `width * height * channels` bytes.
    pub data: Vec<u8>,
}

impl ImageFrame {
    /// Build a frame, validating that the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> StresscamResult<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(StresscamError::detection(format!(
                "Image buffer is {} bytes, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                channels
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A black color frame of the given size. Useful as a carrier when the
    /// detector ignores pixel content (scripted/replay runs).
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            channels: 3,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    /// True for the supported 3-channel color form.
    pub fn is_color(&self) -> bool {
        self.channels == 3
    }
}

/// Trait for an emotion-detection backend.
///
/// Implementations wrap a pretrained facial-emotion-recognition model.
/// The contract: given a well-formed decoded image, return zero or more
/// per-face observations. An empty result means no face was found and is
/// not an error.
pub trait EmotionDetector: Send {
    /// Detect faces and their emotion distributions in one image.
    fn detect(&mut self, image: &ImageFrame) -> StresscamResult<Vec<FaceObservation>>;

    /// Human-readable backend name for logging.
    fn name(&self) -> &str;
}

/// Detector that replays a pre-scripted observation sequence.
///
/// Stands in for a real model backend in demo mode and in tests: each
/// `detect` call yields the next scripted frame regardless of pixel
/// content, and an exhausted script reports no faces.
pub struct ScriptedDetector {
    script: VecDeque<Vec<FaceObservation>>,
}

impl ScriptedDetector {
    pub fn new(script: Vec<Vec<FaceObservation>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Frames remaining in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EmotionDetector for ScriptedDetector {
    fn detect(&mut self, _image: &ImageFrame) -> StresscamResult<Vec<FaceObservation>> {
        Ok(self.script.pop_front().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
