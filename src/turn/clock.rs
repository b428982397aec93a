//! Turn clock.
//!
//! Cooperative: the owner calls `advance` with the time since its previous
//! tick. Time only accumulates while the clock runs, so pausing never lets the
//! clock "catch up" afterwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Remaining time split for display: whole seconds plus tenths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeft {
    pub seconds: u64,
    pub tenths: u8,
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}s", self.seconds, self.tenths)
    }
}

/// Countdown for a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    budget: Duration,
    elapsed: Duration,
    running: bool,
}

impl TurnClock {
    /// A stopped clock with a full budget.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Refill the budget and start counting.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stop counting; elapsed time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Continue counting from where `stop` left off.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Whether elapsed time is accumulating.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add `delta` if running. Returns `true` when the budget is used up.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
        self.is_expired()
    }

    /// Whether the whole budget has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.budget
    }

    /// Full time allowed per turn.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Budget left, zero once expired.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed)
    }

    /// Remaining time for display.
    #[must_use]
    pub fn time_left(&self) -> TimeLeft {
        let remaining = self.remaining();
        TimeLeft {
            seconds: remaining.as_secs(),
            tenths: (remaining.subsec_millis() / 100) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_clock_is_stopped() {
        let mut clock = TurnClock::new(Duration::from_secs(30));
        assert!(!clock.is_running());
        assert!(!clock.advance(Duration::from_secs(60)));
        assert_eq!(clock.remaining(), Duration::from_secs(30));
    }

    #[test]
    fn test_countdown_and_expiry() {
        let mut clock = TurnClock::new(Duration::from_secs(2));
        clock.restart();
        assert!(!clock.advance(ms(1500)));
        assert_eq!(clock.time_left(), TimeLeft { seconds: 0, tenths: 5 });
        assert!(clock.advance(ms(500)));
        assert_eq!(clock.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_paused_time_is_excluded() {
        let mut clock = TurnClock::new(Duration::from_secs(10));
        clock.restart();
        clock.advance(ms(4000));
        clock.stop();
        clock.advance(ms(60_000));
        clock.resume();
        clock.advance(ms(1000));
        assert_eq!(clock.remaining(), Duration::from_secs(5));
    }

    #[test]
    fn test_restart_refills() {
        let mut clock = TurnClock::new(Duration::from_secs(5));
        clock.restart();
        clock.advance(Duration::from_secs(5));
        clock.restart();
        assert!(!clock.is_expired());
        assert_eq!(clock.time_left().to_string(), "5.0s");
    }
}
