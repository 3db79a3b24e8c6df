// src/spin.rs

use std::time::{Duration, Instant};

/// Clock seam so the draw sequencing is testable without waiting.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// How long the reel spins before the result is shown.
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);
/// How long a revealed result settles before the trigger re-enables.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpinPhase {
    Idle,
    Spinning { reveal_at: Instant },
    Revealed { settle_at: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    Reveal,
    Settle,
}

/// Sequencing of one draw: Idle -> Spinning -> Revealed -> Idle. The
/// trigger stays disabled for the whole spinning-and-settle window, so at
/// most one draw is ever in flight, and a started draw always runs to
/// completion; there is no cancellation.
#[derive(Debug)]
pub struct SpinCycle {
    phase: SpinPhase,
}

impl SpinCycle {
    pub fn new() -> Self {
        SpinCycle {
            phase: SpinPhase::Idle,
        }
    }

    pub fn trigger_enabled(&self) -> bool {
        matches!(self.phase, SpinPhase::Idle)
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Starts a draw. Returns false, and changes nothing, unless idle.
    pub fn start(&mut self, now: Instant) -> bool {
        if !self.trigger_enabled() {
            return false;
        }
        self.phase = SpinPhase::Spinning {
            reveal_at: now + REVEAL_DELAY,
        };
        true
    }

    /// Performs at most one due transition per call; tick-driven callers
    /// drain any follow-up transition on a later tick.
    pub fn advance(&mut self, now: Instant) -> Option<SpinEvent> {
        match self.phase {
            SpinPhase::Spinning { reveal_at } if now >= reveal_at => {
                self.phase = SpinPhase::Revealed {
                    settle_at: reveal_at + SETTLE_DELAY,
                };
                Some(SpinEvent::Reveal)
            }
            SpinPhase::Revealed { settle_at } if now >= settle_at => {
                self.phase = SpinPhase::Idle;
                Some(SpinEvent::Settle)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_with_a_manual_clock() {
        let t0 = Instant::now();
        let mut cycle = SpinCycle::new();
        assert!(cycle.trigger_enabled());

        assert!(cycle.start(t0));
        assert!(cycle.is_spinning());
        assert!(!cycle.trigger_enabled());

        // nothing is due before the reveal delay elapses
        assert_eq!(cycle.advance(t0 + Duration::from_millis(499)), None);
        assert!(cycle.is_spinning());

        assert_eq!(
            cycle.advance(t0 + REVEAL_DELAY),
            Some(SpinEvent::Reveal)
        );
        assert!(!cycle.is_spinning());
        assert!(!cycle.trigger_enabled());

        assert_eq!(cycle.advance(t0 + Duration::from_millis(799)), None);
        assert_eq!(
            cycle.advance(t0 + REVEAL_DELAY + SETTLE_DELAY),
            Some(SpinEvent::Settle)
        );
        assert!(cycle.trigger_enabled());
    }

    #[test]
    fn test_start_is_refused_while_a_draw_is_in_flight() {
        let t0 = Instant::now();
        let mut cycle = SpinCycle::new();
        assert!(cycle.start(t0));
        assert!(!cycle.start(t0 + Duration::from_millis(100)));

        cycle.advance(t0 + REVEAL_DELAY);
        assert!(!cycle.start(t0 + Duration::from_millis(600)));

        cycle.advance(t0 + REVEAL_DELAY + SETTLE_DELAY);
        assert!(cycle.start(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_late_ticks_drain_one_transition_at_a_time() {
        let t0 = Instant::now();
        let late = t0 + Duration::from_secs(5);
        let mut cycle = SpinCycle::new();
        cycle.start(t0);

        assert_eq!(cycle.advance(late), Some(SpinEvent::Reveal));
        assert_eq!(cycle.advance(late), Some(SpinEvent::Settle));
        assert_eq!(cycle.advance(late), None);
        assert!(cycle.trigger_enabled());
    }
}
