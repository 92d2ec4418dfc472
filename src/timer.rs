//! Wall-clock stopwatch that can be paused and resumed.
//!
//! Time spent paused does not count toward the elapsed total. The timer is
//! meant for a single owner; mutation goes through `&mut self`.

use std::time::{Duration, Instant};

/// Stopwatch that starts running on construction.
#[derive(Debug, Clone)]
pub struct PausableTimer {
    /// Time accumulated before the current running segment
    total: Duration,
    /// Start of the current running segment
    started: Instant,
    paused: bool,
}

impl PausableTimer {
    pub fn new() -> Self {
        Self {
            total: Duration::ZERO,
            started: Instant::now(),
            paused: false,
        }
    }

    /// Running time, excluding paused intervals.
    pub fn elapsed_duration(&self) -> Duration {
        if self.paused {
            self.total
        } else {
            self.total + self.started.elapsed()
        }
    }

    /// Running time in seconds, excluding paused intervals.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_duration().as_secs_f64()
    }

    /// Freeze the elapsed total. No effect when already paused.
    pub fn pause(&mut self) {
        if !self.paused {
            self.total += self.started.elapsed();
            self.paused = true;
        }
    }

    /// Continue accumulating. No effect when already running.
    pub fn resume(&mut self) {
        if self.paused {
            self.started = Instant::now();
            self.paused = false;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for PausableTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const STEP: Duration = Duration::from_millis(50);

    #[test]
    fn test_starts_near_zero_and_running() {
        let timer = PausableTimer::new();
        assert!(!timer.is_paused());
        assert!(timer.elapsed() < 0.5);
    }

    #[test]
    fn test_paused_timer_is_frozen() {
        let mut timer = PausableTimer::new();
        thread::sleep(STEP);
        timer.pause();

        let frozen = timer.elapsed();
        thread::sleep(STEP);
        assert_eq!(timer.elapsed(), frozen);
        assert!(frozen >= STEP.as_secs_f64());
    }

    #[test]
    fn test_resume_continues_accumulating() {
        let mut timer = PausableTimer::new();
        timer.pause();
        let frozen = timer.elapsed();

        timer.resume();
        assert!(!timer.is_paused());
        thread::sleep(STEP);
        assert!(timer.elapsed() >= frozen + STEP.as_secs_f64());
    }

    #[test]
    fn test_paused_interval_is_excluded() {
        let wall = Instant::now();
        let mut timer = PausableTimer::new();

        thread::sleep(STEP);
        timer.pause();
        let pause_started = Instant::now();
        thread::sleep(STEP * 2);
        let paused_for = pause_started.elapsed();
        timer.resume();
        thread::sleep(STEP);

        let expected = wall.elapsed().saturating_sub(paused_for);
        let measured = timer.elapsed_duration();
        let diff = if measured > expected {
            measured - expected
        } else {
            expected - measured
        };
        assert!(diff < Duration::from_millis(50), "off by {:?}", diff);
        assert!(measured >= STEP * 2);
    }

    #[test]
    fn test_repeated_pause_and_resume_are_idempotent() {
        let mut timer = PausableTimer::new();
        timer.pause();
        let frozen = timer.elapsed();
        thread::sleep(STEP);
        timer.pause();
        assert_eq!(timer.elapsed(), frozen);

        timer.resume();
        timer.resume();
        assert!(!timer.is_paused());
    }
}
