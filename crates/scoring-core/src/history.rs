//! Rolling history of instantaneous stress scores.

use std::collections::VecDeque;

/// Fixed-capacity FIFO buffer of past instantaneous scores.
///
/// The buffer is seeded with zeros at construction, so its length always
/// equals its capacity and every push evicts the oldest entry. One buffer
/// exists per session; the session layer owns it and serializes access.
#[derive(Debug, Clone)]
pub struct StressHistory {
    scores: VecDeque<u8>,
    capacity: usize,
}

impl StressHistory {
    /// Default number of scores retained, matching the trend chart width.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// History with the default capacity, seeded with zeros.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// History with the given capacity, seeded with zeros.
    ///
    /// A capacity of zero is treated as one so the mean stays defined.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            scores: std::iter::repeat(0u8).take(capacity).collect(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Append a score, evicting the oldest entry.
    pub fn push(&mut self, score: u8) {
        if self.scores.len() >= self.capacity {
            self.scores.pop_front();
        }
        self.scores.push_back(score);
    }

    /// Scores in order, oldest first. Suitable for charting.
    pub fn scores(&self) -> Vec<u8> {
        self.scores.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.scores.iter().copied()
    }

    /// Most recently appended score.
    pub fn latest(&self) -> Option<u8> {
        self.scores.back().copied()
    }

    /// Arithmetic mean over the buffer contents.
    pub fn mean(&self) -> f64 {
        let sum: u32 = self.scores.iter().map(|&s| s as u32).sum();
        sum as f64 / self.scores.len() as f64
    }

    /// Rounded mean, recomputed fresh on every call.
    pub fn smoothed(&self) -> u8 {
        self.mean().round() as u8
    }

    /// Reseed the buffer with zeros.
    pub fn reset(&mut self) {
        self.scores.clear();
        self.scores.extend(std::iter::repeat(0u8).take(self.capacity));
    }
}

impl Default for StressHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_zeros_at_capacity() {
        let history = StressHistory::new();
        assert_eq!(history.len(), StressHistory::DEFAULT_CAPACITY);
        assert_eq!(history.capacity(), 50);
        assert!(history.iter().all(|s| s == 0));
        assert_eq!(history.smoothed(), 0);
    }

    #[test]
    fn test_push_evicts_oldest_fifo() {
        let mut history = StressHistory::with_capacity(3);
        history.push(10);
        history.push(20);
        assert_eq!(history.scores(), vec![0, 10, 20]);

        history.push(30);
        assert_eq!(history.scores(), vec![10, 20, 30]);

        history.push(40);
        assert_eq!(history.scores(), vec![20, 30, 40]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest(), Some(40));
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut history = StressHistory::with_capacity(5);
        for score in 0..200u16 {
            history.push((score % 100) as u8);
            assert_eq!(history.len(), 5);
        }
    }

    #[test]
    fn test_smoothed_is_rounded_mean() {
        let mut history = StressHistory::with_capacity(50);
        history.push(55);
        // 49 zeros + 55 -> mean 1.1 -> rounds to 1
        assert!((history.mean() - 1.1).abs() < 1e-9);
        assert_eq!(history.smoothed(), 1);
    }

    #[test]
    fn test_smoothed_is_idempotent_without_append() {
        let mut history = StressHistory::with_capacity(10);
        history.push(80);
        history.push(60);
        let first = history.smoothed();
        let second = history.smoothed();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_reseeds_zeros() {
        let mut history = StressHistory::with_capacity(4);
        history.push(90);
        history.push(90);
        history.reset();
        assert_eq!(history.scores(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = StressHistory::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.push(42);
        assert_eq!(history.scores(), vec![42]);
        assert_eq!(history.smoothed(), 42);
    }
}
