use std::time::Instant;

/// Match clock based on wall-clock deltas rather than an accumulating
/// counter, so a throttled or delayed tick cannot drift the displayed time.
///
/// While running, elapsed seconds are `offset + floor(now - started_at)`;
/// the offset is one half-length when the second half is running. Stopping
/// freezes the last computed value so a paused scoreboard still shows time.
#[derive(Debug, Clone, Default)]
pub struct MatchClock {
    started_at: Option<Instant>,
    offset_secs: u32,
    frozen_secs: u32,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting from `now`, with `offset_secs` already on the clock.
    pub fn start(&mut self, now: Instant, offset_secs: u32) {
        self.started_at = Some(now);
        self.offset_secs = offset_secs;
    }

    /// Freeze the display at the elapsed value computed from `now`.
    pub fn stop(&mut self, now: Instant) {
        self.frozen_secs = self.elapsed_at(now);
        self.started_at = None;
    }

    /// Back to zero, not running.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.offset_secs = 0;
        self.frozen_secs = 0;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whole elapsed match seconds as of `now`.
    pub fn elapsed_at(&self, now: Instant) -> u32 {
        match self.started_at {
            Some(started_at) => {
                let delta = now.saturating_duration_since(started_at).as_secs();
                self.offset_secs.saturating_add(delta as u32)
            }
            None => self.frozen_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_is_wall_clock_delta() {
        let t0 = Instant::now();
        let mut clock = MatchClock::new();
        clock.start(t0, 0);
        assert_eq!(clock.elapsed_at(t0), 0);
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(90)), 90);
        // Sub-second remainder is floored.
        assert_eq!(clock.elapsed_at(t0 + Duration::from_millis(90_900)), 90);
    }

    #[test]
    fn test_second_half_offset() {
        let t0 = Instant::now();
        let mut clock = MatchClock::new();
        clock.start(t0, 1500);
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(30)), 1530);
    }

    #[test]
    fn test_stop_freezes_display() {
        let t0 = Instant::now();
        let mut clock = MatchClock::new();
        clock.start(t0, 0);
        clock.stop(t0 + Duration::from_secs(42));
        assert!(!clock.is_running());
        // Time keeps passing, the display does not.
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(100)), 42);
    }

    #[test]
    fn test_reset_clears_everything() {
        let t0 = Instant::now();
        let mut clock = MatchClock::new();
        clock.start(t0, 1500);
        clock.stop(t0 + Duration::from_secs(10));
        clock.reset();
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(999)), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_now_before_start_saturates_to_offset() {
        let t0 = Instant::now();
        let mut clock = MatchClock::new();
        clock.start(t0 + Duration::from_secs(5), 0);
        assert_eq!(clock.elapsed_at(t0), 0);
    }
}
