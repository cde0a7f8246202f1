//! StressCam Scoring Core
//!
//! Turns per-frame face observations into stress readings:
//! - **Scoring:** Weighted sum over angry/fear/sad probabilities, averaged
//!   across faces and normalized into a 0-100 integer
//! - **Smoothing:** Fixed-capacity rolling history with a fresh moving
//!   average per frame
//! - **Classification:** Low / Moderate / High from fixed thresholds
//!
//! This crate is pure computation: no I/O, no platform dependencies.
//! All inputs are data; all outputs are data. The only state it touches is
//! the history buffer handed in by the caller, which assumes single-writer
//! access per session.

pub mod history;
pub mod scorer;

pub use history::StressHistory;
pub use scorer::{DominantFacePolicy, NoFacePolicy, ScoringConfig, StressScorer};
