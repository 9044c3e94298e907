#![forbid(unsafe_code)]

//! Wall-clock frame deltas.

use std::time::Duration;

use web_time::Instant;

/// Measures the time between successive frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous call. The first call returns zero.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        delta
    }

    /// Forget the previous frame; the next `tick` returns zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), Duration::ZERO);
    }

    #[test]
    fn reset_restarts() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        assert_eq!(clock.tick(), Duration::ZERO);
    }
}
