//! Frame clock
//!
//! Hosts that drive a button from a real event loop sample the wall clock once
//! per frame; [`FrameClock`] turns those samples into the millisecond deltas
//! the scheduler expects.

use std::time::Instant;

/// Converts wall-clock instants into frame deltas in milliseconds
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    max_delta_ms: Option<f32>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp each delta, so a stalled host does not skip whole animations
    pub fn with_max_delta(mut self, max_delta_ms: f32) -> Self {
        self.max_delta_ms = Some(max_delta_ms);
        self
    }

    /// Milliseconds since the previous call. The first call returns 0.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt_ms = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32() * 1000.0,
            None => 0.0,
        };
        self.last_frame = Some(now);

        match self.max_delta_ms {
            Some(max) => dt_ms.min(max),
            None => dt_ms,
        }
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Forget the previous frame; the next tick returns 0
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(Instant::now()), 0.0);
    }

    #[test]
    fn test_tick_measures_delta() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 16.0).abs() < 0.01);
    }

    #[test]
    fn test_max_delta_and_reset() {
        let mut clock = FrameClock::new().with_max_delta(50.0);
        let start = Instant::now();
        clock.tick_at(start);
        assert_eq!(clock.tick_at(start + Duration::from_secs(2)), 50.0);

        clock.reset();
        assert_eq!(clock.tick_at(start + Duration::from_secs(3)), 0.0);
    }
}
