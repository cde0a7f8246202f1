//! Per-frame detector output and JSONL observation streams.
//!
//! Observation streams are recorded in append-only JSONL format, one frame
//! per line, with an optional `# {json}` header line carrying stream
//! metadata. Face-region coordinates are normalized to `[0.0, 1.0]`
//! relative to the source image dimensions.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionVector;

/// Where a frame came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrameSource {
    /// Live camera stream.
    #[default]
    Camera,
    /// A single uploaded image.
    Upload,
    /// One of the preloaded demo images.
    Demo,
}

/// Normalized bounding box of a detected face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRegion {
    /// Left edge, normalized [0.0, 1.0].
    pub x: f64,
    /// Top edge, normalized [0.0, 1.0].
    pub y: f64,
    /// Width, normalized (0.0, 1.0].
    pub w: f64,
    /// Height, normalized (0.0, 1.0].
    pub h: f64,
}

/// One detected face in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceObservation {
    /// Where the face sits in the frame, when the detector reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<FaceRegion>,

    /// Emotion probability distribution for this face.
    pub emotions: EmotionVector,
}

impl FaceObservation {
    /// Observation with emotions only (no region).
    pub fn from_emotions(emotions: EmotionVector) -> Self {
        Self {
            region: None,
            emotions,
        }
    }
}

/// The detector's output for a single frame: zero or more faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameObservations {
    /// Zero-based frame index within the stream.
    #[serde(rename = "frame")]
    pub frame_index: u64,

    /// Milliseconds since stream start, when the source provides timing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,

    /// Which input mode produced the frame.
    #[serde(default)]
    pub source: FrameSource,

    /// Detected faces; empty means no face was found (not an error).
    pub faces: Vec<FaceObservation>,
}

impl FrameObservations {
    /// A frame with the given faces and no timing information.
    pub fn new(frame_index: u64, source: FrameSource, faces: Vec<FaceObservation>) -> Self {
        Self {
            frame_index,
            timestamp_ms: None,
            source,
            faces,
        }
    }

    /// A frame in which the detector found no face.
    pub fn faceless(frame_index: u64, source: FrameSource) -> Self {
        Self::new(frame_index, source, vec![])
    }

    pub fn has_faces(&self) -> bool {
        !self.faces.is_empty()
    }
}

/// Stream metadata carried in the `# {json}` header line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Input mode the stream was recorded from.
    pub source: FrameSource,

    /// Wall-clock time at stream start (ISO 8601).
    pub started_wall: String,

    /// Nominal frame rate of the source, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate_hint: Option<f64>,
}

/// Errors from parsing an observation stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Malformed header line: {source}")]
    Header { source: serde_json::Error },

    #[error("Parse error on line {line}: {source}")]
    Frame {
        line: usize,
        source: serde_json::Error,
    },
}

/// A fully parsed observation stream.
#[derive(Debug, Clone)]
pub struct ObservationStream {
    /// Header, when the stream carried one.
    pub header: Option<ObservationStreamHeader>,

    /// Frames in recorded order.
    pub frames: Vec<FrameObservations>,
}

impl ObservationStream {
    /// Parse JSONL content: optional `# {json}` header, one frame per line.
    ///
    /// Blank lines are skipped. `#` lines after the first are treated as
    /// comments and ignored.
    pub fn parse(content: &str) -> Result<Self, StreamError> {
        let mut header = None;
        let mut frames = Vec::new();
        let mut seen_content = false;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix('#') {
                if !seen_content {
                    header = Some(
                        serde_json::from_str(rest.trim())
                            .map_err(|source| StreamError::Header { source })?,
                    );
                    seen_content = true;
                }
                continue;
            }
            seen_content = true;
            frames.push(serde_json::from_str(line).map_err(|source| StreamError::Frame {
                line: index + 1,
                source,
            })?);
        }

        Ok(Self { header, frames })
    }

    /// Serialize back to JSONL format.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut output = String::new();
        if let Some(ref header) = self.header {
            output.push_str("# ");
            output.push_str(&serde_json::to_string(header)?);
            output.push('\n');
        }
        for frame in &self.frames {
            output.push_str(&serde_json::to_string(frame)?);
            output.push('\n');
        }
        Ok(output)
    }
}

/// Parse frames from JSONL content, skipping headers and comments.
pub fn parse_observations(jsonl: &str) -> Result<Vec<FrameObservations>, StreamError> {
    Ok(ObservationStream::parse(jsonl)?.frames)
}

/// Serialize frames to JSONL format (no header).
pub fn serialize_observations(frames: &[FrameObservations]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
