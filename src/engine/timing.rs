//! Keeping the game loop on a steady beat.

use std::time::Duration;

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

/// Keeps track of time between relatively steady pulses.
///
/// Ticks try to stay lined up with the first one, but if [`Self::tick_ready`] is checked more than half a period late
/// the schedule restarts from now instead of trying to catch up.
pub struct Timer {
    next: Instant,
    period: Duration,
}

impl Timer {
    /// Create a timer ticking every `period` seconds. The first tick is right now.
    pub fn new(period: f32) -> Self {
        Self {
            next: Instant::now(),
            period: Duration::from_secs_f32(period),
        }
    }

    /// How long until the next tick, or zero if it's already due.
    pub fn remaining(&self) -> Duration {
        self.next
            .checked_duration_since(Instant::now())
            .unwrap_or(Duration::ZERO)
    }

    fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next + self.period / 2 {
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }

    /// If a tick is due, consume it and return `true`.
    pub fn tick_ready(&mut self) -> bool {
        if Instant::now() >= self.next {
            self.tick();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use mock_instant::MockClock;

    use super::*;

    #[test]
    fn first_tick_is_immediate() {
        let mut t = Timer::new(1.0);
        assert!(t.tick_ready());
        assert!(!t.tick_ready());
    }

    #[test]
    fn ticks_after_period() {
        let mut t = Timer::new(0.1);
        assert!(t.tick_ready());
        MockClock::advance(Duration::from_millis(60));
        assert!(!t.tick_ready());
        assert!(t.remaining() <= Duration::from_millis(40));
        MockClock::advance(Duration::from_millis(60));
        assert!(t.tick_ready());
    }

    #[test]
    fn long_lag_resets_schedule() {
        let mut t = Timer::new(0.1);
        assert!(t.tick_ready());
        MockClock::advance(Duration::from_millis(1000));
        assert!(t.tick_ready());
        // rescheduled relative to now, so there's no backlog of ticks to burn through
        assert!(!t.tick_ready());
        assert!(t.remaining() > Duration::from_millis(99));
    }
}
