//! Round countdown
//!
//! A once-per-second decrement that interrupts the round with a trivia
//! question when it hits zero. Drivers only tick it while unfrozen, so a
//! paused countdown simply resumes from its frozen value (no catch-up).

use crate::consts::TICKS_PER_SECOND;

/// What a countdown tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Between second boundaries
    Running,
    /// A whole second elapsed (survival trickle hook)
    SecondElapsed,
    /// The counter reached zero and was reset; time to show the quiz
    Expired,
}

/// Per-driver seconds-remaining counter.
///
/// The first round may be shorter than the rest (the avoider opens with a
/// 5 s round, then 20 s ones); `reset_secs` is the post-quiz value.
#[derive(Debug, Clone)]
pub struct RoundCountdown {
    remaining_secs: u32,
    reset_secs: u32,
    subtick: u32,
}

impl RoundCountdown {
    pub fn new(first_round_secs: u32, reset_secs: u32) -> Self {
        debug_assert!(first_round_secs > 0 && reset_secs > 0);
        Self {
            remaining_secs: first_round_secs,
            reset_secs,
            subtick: 0,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.remaining_secs
    }

    /// Advance one sim tick. Only call while unfrozen.
    pub fn tick(&mut self) -> CountdownStep {
        self.subtick += 1;
        if self.subtick < TICKS_PER_SECOND {
            return CountdownStep::Running;
        }
        self.subtick = 0;
        self.remaining_secs -= 1;

        if self.remaining_secs == 0 {
            self.remaining_secs = self.reset_secs;
            CountdownStep::Expired
        } else {
            CountdownStep::SecondElapsed
        }
    }

    /// Restart the round at the post-quiz length (after answers and restarts)
    pub fn reset(&mut self) {
        self.remaining_secs = self.reset_secs;
        self.subtick = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_seconds(countdown: &mut RoundCountdown, secs: u32) -> Vec<CountdownStep> {
        let mut boundaries = Vec::new();
        for _ in 0..secs * TICKS_PER_SECOND {
            let step = countdown.tick();
            if step != CountdownStep::Running {
                boundaries.push(step);
            }
        }
        boundaries
    }

    #[test]
    fn expires_exactly_once_per_round() {
        let mut countdown = RoundCountdown::new(20, 20);
        let boundaries = run_seconds(&mut countdown, 20);

        let expiries = boundaries
            .iter()
            .filter(|s| **s == CountdownStep::Expired)
            .count();
        assert_eq!(expiries, 1);
        assert_eq!(*boundaries.last().unwrap(), CountdownStep::Expired);
        // Reset to the post-quiz value, ready for the next round.
        assert_eq!(countdown.seconds_remaining(), 20);
    }

    #[test]
    fn short_first_round_then_full_rounds() {
        let mut countdown = RoundCountdown::new(5, 20);
        let boundaries = run_seconds(&mut countdown, 5);
        assert_eq!(*boundaries.last().unwrap(), CountdownStep::Expired);
        assert_eq!(countdown.seconds_remaining(), 20);
    }

    #[test]
    fn second_boundaries_carry_trickle_hook() {
        let mut countdown = RoundCountdown::new(3, 3);
        let boundaries = run_seconds(&mut countdown, 3);
        // Every decrement reports a boundary: 2 elapsed + 1 expiry.
        assert_eq!(
            boundaries,
            vec![
                CountdownStep::SecondElapsed,
                CountdownStep::SecondElapsed,
                CountdownStep::Expired
            ]
        );
    }

    #[test]
    fn reset_discards_partial_seconds() {
        let mut countdown = RoundCountdown::new(5, 20);
        for _ in 0..TICKS_PER_SECOND + 3 {
            countdown.tick();
        }
        assert_eq!(countdown.seconds_remaining(), 4);

        countdown.reset();
        assert_eq!(countdown.seconds_remaining(), 20);
        // A fresh full second must elapse before the next decrement.
        for _ in 0..TICKS_PER_SECOND - 1 {
            assert_eq!(countdown.tick(), CountdownStep::Running);
        }
        assert_eq!(countdown.tick(), CountdownStep::SecondElapsed);
    }
}
