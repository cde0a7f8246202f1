//! StressCam Session Layer
//!
//! Orchestrates per-user scoring state and the boundary to the external
//! emotion detector.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              SessionManager                  │
//! │   ┌───────────────┐   ┌───────────────┐     │
//! │   │ StressSession │   │ StressSession │ ... │
//! │   │  history +    │   │  history +    │     │
//! │   │  scorer       │   │  scorer       │     │
//! │   └───────▲───────┘   └───────▲───────┘     │
//! └───────────┼───────────────────┼─────────────┘
//!             │ FrameObservations │
//!     ┌───────┴───────────────────┴───────┐
//!     │    EmotionDetector (external)      │
//!     └───────────────────────────────────┘
//! ```
//!
//! Each session owns its own history buffer; nothing is shared across
//! sessions. Access to one session is single-writer: whatever pipeline
//! drives frames for a session must serialize its calls.

pub mod demo;
pub mod detector;
pub mod session;

pub use demo::{generate_scenario, DemoScenario};
pub use detector::{EmotionDetector, ImageFrame, ScriptedDetector};
pub use session::{SessionManager, SessionStats, StressSession};
