//! Clock capability for the run-time display.
//!
//! Elapsed time is always read through a [`Clock`] handed to the caller, so
//! tests can drive the HUD with a [`ManualClock`] instead of wall time.

#[cfg(test)]
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::utils::format_run_time;

/// Source of the current time in milliseconds
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Monotonic clock measured from its own creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX)
    }
}

/// Hand-driven clock for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Elapsed time since the HUD booted
pub struct RunClock<C: Clock> {
    clock: C,
    boot: i64,
}

impl<C: Clock> RunClock<C> {
    /// Capture the boot instant from `clock`
    pub fn new(clock: C) -> Self {
        let boot = clock.now_millis();
        Self { clock, boot }
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.clock.now_millis().saturating_sub(self.boot)
    }

    /// Current elapsed time as HH:MM:SS:CC
    pub fn display(&self) -> String {
        format_run_time(self.elapsed_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_clock_starts_at_zero() {
        let clock = ManualClock::new(5_000);
        let run = RunClock::new(&clock);
        assert_eq!(run.elapsed_ms(), 0);
        assert_eq!(run.display(), "00:00:00:00");
    }

    #[test]
    fn test_run_clock_follows_manual_clock() {
        let clock = ManualClock::new(1_000);
        let run = RunClock::new(&clock);
        clock.advance(61_250);
        assert_eq!(run.elapsed_ms(), 61_250);
        assert_eq!(run.display(), "00:01:01:25");
    }

    #[test]
    fn test_run_clock_clamps_backwards_clock() {
        let clock = ManualClock::new(10_000);
        let run = RunClock::new(&clock);
        clock.set(9_000);
        assert_eq!(run.elapsed_ms(), -1_000);
        assert_eq!(run.display(), "00:00:00:00");
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
        assert!(a >= 0);
    }

    #[test]
    fn test_boxed_clock() {
        let run = RunClock::new(Box::new(ManualClock::new(0)) as Box<dyn Clock>);
        assert_eq!(run.elapsed_ms(), 0);
    }
}
