//! Timer for keeping track of a player's turn clock.
use std::time::Instant;

/// A per-turn countdown in milliseconds.
///
/// The search only ever reads the clock through a `Fn() -> f64` provider; [`provider`] hands
/// out exactly that.
///
/// ```
/// use isolation_agent::tools::timer::Timer;
///
/// let timer = Timer::new(150);
/// let time_left = timer.provider();
/// assert!(time_left() <= 150.0);
/// ```
///
/// [`provider`]: #method.provider
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant, // when the current turn started
    budget_msec: i64,
}

impl Timer {
    /// Creates a new `Timer` with `budget_msec` milliseconds for the turn, starting now.
    pub fn new(budget_msec: i64) -> Self {
        Timer {
            start: Instant::now(),
            budget_msec,
        }
    }

    /// Returns the number of milliseconds elapsed since the turn started.
    pub fn msec_elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Returns the number of milliseconds remaining in the turn. Negative once overrun.
    pub fn msec_remaining(&self) -> f64 {
        self.budget_msec as f64 - self.msec_elapsed()
    }

    /// Returns if the turn is out of time.
    pub fn out_of_time(&self) -> bool {
        self.msec_remaining() <= 0.0
    }

    /// Returns a remaining-time provider reading this clock.
    pub fn provider(&self) -> impl Fn() -> f64 {
        let timer = *self;
        move || timer.msec_remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down() {
        let timer = Timer::new(10_000);
        let first = timer.msec_remaining();
        assert!(first <= 10_000.0);
        assert!(!timer.out_of_time());
        assert!(timer.provider()() <= first);
    }

    #[test]
    fn zero_budget_is_out_of_time() {
        let timer = Timer::new(0);
        assert!(timer.out_of_time());
        assert!(timer.msec_remaining() <= 0.0);
    }
}
