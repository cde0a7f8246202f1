//! Per-user scoring sessions.
//!
//! The history buffer is explicit, owned state: one buffer per session,
//! created at session start, discarded at session end, never shared.
//! Access to a single session is single-writer by contract; there is no
//! internal locking.

use std::collections::HashMap;

use stresscam_emotion_model::{FrameObservations, StressReading};
use stresscam_scoring_core::{ScoringConfig, StressHistory, StressScorer};

/// One user's scoring state for the duration of a session.
pub struct StressSession {
    id: String,
    created_at: String,
    scorer: StressScorer,
    history: StressHistory,
    frames_seen: u64,
    frames_scored: u64,
    last_reading: Option<StressReading>,
}

impl StressSession {
    /// Create a session with the given scoring configuration and history
    /// capacity.
    pub fn new(config: ScoringConfig, history_capacity: usize) -> Self {
        let id = session_id();
        tracing::debug!(session = %id, history_capacity, "Session created");
        Self {
            id,
            created_at: chrono::Utc::now().to_rfc3339(),
            scorer: StressScorer::new(config),
            history: StressHistory::with_capacity(history_capacity),
            frames_seen: 0,
            frames_scored: 0,
            last_reading: None,
        }
    }

    /// Session with the canonical configuration and default capacity.
    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default(), StressHistory::DEFAULT_CAPACITY)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp (ISO 8601).
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Score one frame's observations and fold them into this session.
    pub fn observe(&mut self, frame: &FrameObservations) -> StressReading {
        let reading = self.scorer.score(&frame.faces, &mut self.history);
        self.frames_seen += 1;
        if frame.has_faces() {
            self.frames_scored += 1;
        }
        tracing::trace!(
            session = %self.id,
            frame = frame.frame_index,
            faces = frame.faces.len(),
            instantaneous = reading.instantaneous,
            smoothed = reading.smoothed,
            "Frame scored"
        );
        self.last_reading = Some(reading);
        reading
    }

    /// History contents, oldest first, for the trend chart.
    pub fn trend(&self) -> Vec<u8> {
        self.history.scores()
    }

    /// The most recent reading, if any frame has been observed.
    pub fn last_reading(&self) -> Option<StressReading> {
        self.last_reading
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            frames_seen: self.frames_seen,
            frames_scored: self.frames_scored,
        }
    }

    /// Reseed the history with zeros and clear the last reading.
    ///
    /// Nothing calls this implicitly; the rolling average otherwise spans
    /// the whole session.
    pub fn reset(&mut self) {
        self.history.reset();
        self.last_reading = None;
        tracing::debug!(session = %self.id, "Session history reset");
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct SessionStats {
    /// Frames handed to the session, including faceless ones.
    pub frames_seen: u64,

    /// Frames that contained at least one face.
    pub frames_scored: u64,
}

impl SessionStats {
    /// Share of frames in which a face was found, as a percentage.
    pub fn detection_rate(&self) -> f64 {
        if self.frames_seen == 0 {
            return 0.0;
        }
        self.frames_scored as f64 / self.frames_seen as f64 * 100.0
    }
}

/// Owns all active sessions, keyed by session id.
///
/// Sessions are fully independent; ending one never touches another.
pub struct SessionManager {
    defaults: ScoringConfig,
    history_capacity: usize,
    sessions: HashMap<String, StressSession>,
}

impl SessionManager {
    pub fn new(defaults: ScoringConfig, history_capacity: usize) -> Self {
        Self {
            defaults,
            history_capacity,
            sessions: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default(), StressHistory::DEFAULT_CAPACITY)
    }

    /// Create a session and return its id.
    pub fn create(&mut self) -> String {
        let session = StressSession::new(self.defaults.clone(), self.history_capacity);
        let id = session.id().to_string();
        self.sessions.insert(id.clone(), session);
        id
    }

    pub fn get(&self, id: &str) -> Option<&StressSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut StressSession> {
        self.sessions.get_mut(id)
    }

    /// End a session, discarding its history. Returns false for unknown ids.
    pub fn end(&mut self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::debug!(session = %id, "Session ended");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }
}

/// Generate a UUID-v4-shaped session id without an external dependency.
fn session_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        ^ (COUNTER.fetch_add(1, Ordering::Relaxed) as u128)
            .rotate_left(64);
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (seed & 0xFFFFFFFF) as u32,
        ((seed >> 32) & 0xFFFF) as u16,
        ((seed >> 48) & 0x0FFF) as u16,
        (((seed >> 60) & 0x3F) | 0x80) as u16 | (((seed >> 66) & 0x3FF) as u16) << 6,
        (seed >> 76) & 0xFFFFFFFFFFFF,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stresscam_emotion_model::{
        EmotionVector, FaceObservation, FrameObservations, FrameSource, StressLevel,
    };

    fn stressed_frame(index: u64) -> FrameObservations {
        FrameObservations::new(
            index,
            FrameSource::Demo,
            vec![FaceObservation::from_emotions(EmotionVector {
                angry: 0.8,
                fear: 0.8,
                sad: 0.8,
                ..Default::default()
            })],
        )
    }

    #[test]
    fn test_session_accumulates_readings() {
        let mut session = StressSession::with_defaults();
        assert!(session.last_reading().is_none());

        for index in 0..50 {
            session.observe(&stressed_frame(index));
        }

        let reading = session.last_reading().unwrap();
        assert_eq!(reading.smoothed, 80);
        assert_eq!(reading.level, StressLevel::High);
        assert_eq!(session.stats().frames_seen, 50);
        assert_eq!(session.stats().frames_scored, 50);
        assert_eq!(session.trend().len(), 50);
    }

    #[test]
    fn test_faceless_frames_counted_but_not_scored() {
        let mut session = StressSession::with_defaults();
        session.observe(&stressed_frame(0));
        session.observe(&FrameObservations::faceless(1, FrameSource::Camera));

        let stats = session.stats();
        assert_eq!(stats.frames_seen, 2);
        assert_eq!(stats.frames_scored, 1);
        assert!((stats.detection_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_clears_history_and_reading() {
        let mut session = StressSession::with_defaults();
        for index in 0..10 {
            session.observe(&stressed_frame(index));
        }
        session.reset();
        assert!(session.last_reading().is_none());
        assert!(session.trend().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut manager = SessionManager::with_defaults();
        let first = manager.create();
        let second = manager.create();
        assert_ne!(first, second);
        assert_eq!(manager.len(), 2);

        for index in 0..50 {
            manager
                .get_mut(&first)
                .unwrap()
                .observe(&stressed_frame(index));
        }

        let untouched = manager.get(&second).unwrap();
        assert!(untouched.last_reading().is_none());
        assert_eq!(untouched.trend(), vec![0; 50]);

        assert!(manager.end(&first));
        assert!(!manager.end(&first));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_stats_serialize_for_machine_output() {
        let mut session = StressSession::with_defaults();
        session.observe(&stressed_frame(0));
        let json = serde_json::to_string(&session.stats()).unwrap();
        assert_eq!(json, r#"{"frames_seen":1,"frames_scored":1}"#);
    }

    #[test]
    fn test_session_ids_look_like_uuids() {
        let session = StressSession::with_defaults();
        let id = session.id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }
}
