//! StressCam Emotion Model
//!
//! Defines the core data contracts for StressCam:
//! - **Emotions:** The closed emotion label set and per-face probability vectors
//! - **Observations:** Per-frame detector output and JSONL observation streams
//! - **Readings:** Stress levels and the per-frame scoring result
//!
//! Face-region coordinates are normalized to `[0.0, 1.0]` relative to the
//! source image so observations survive resolution changes across sessions.

pub mod emotion;
pub mod observation;
pub mod report;

pub use emotion::*;
pub use observation::*;
pub use report::*;
