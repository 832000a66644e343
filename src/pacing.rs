//! Fixed-rate frame pacing
//!
//! The simulation advances one step per frame, so game speed is tied to the
//! frame rate. The pacer hands out deadlines at a fixed period and drops
//! missed frames instead of bursting to catch up.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next: Instant,
}

impl FramePacer {
    /// First frame is due immediately
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Mark a frame as run at `now` and schedule the next one
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if now > self.next + self.period {
            log::trace!("Frame overran by {:?}, re-anchoring", now - self.next);
            self.next = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_due_immediately() {
        let now = Instant::now();
        let pacer = FramePacer::new(59, now);
        assert!(pacer.is_due(now));
        assert_eq!(pacer.deadline(), now);
    }

    #[test]
    fn test_steady_period() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(59, start);
        let period = pacer.period();
        assert_eq!(period, Duration::from_secs(1) / 59);

        pacer.advance(start);
        assert_eq!(pacer.deadline(), start + period);
        assert!(!pacer.is_due(start + period / 2));
        assert!(pacer.is_due(start + period));

        // Slightly late frames keep the same cadence
        pacer.advance(start + period + Duration::from_millis(3));
        assert_eq!(pacer.deadline(), start + period * 2);
    }

    #[test]
    fn test_reanchor_after_stall() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(59, start);
        let period = pacer.period();
        pacer.advance(start);

        let late = start + Duration::from_secs(1);
        pacer.advance(late);
        assert_eq!(pacer.deadline(), late + period);
        assert!(!pacer.is_due(late));
    }
}
