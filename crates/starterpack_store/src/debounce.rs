//! Cancellable trailing-edge debounce
//!
//! There is no background timer. The owner polls with the current time and
//! receives the value once the quiet period has elapsed, so dropping or
//! cancelling the debouncer guarantees the value is never delivered.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

/// Holds at most one pending value and its deadline
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Arm with `value`, due at `now + quiet`.
    ///
    /// Returns the superseded value if one was pending.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        let deadline = now + self.quiet;
        self.pending
            .replace(Pending { deadline, value })
            .map(|old| old.value)
    }

    /// Take the value if its deadline is at or before `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the value regardless of its deadline
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value. Returns whether one was discarded.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);

        assert_eq!(debouncer.schedule("a", t0), None);
        assert_eq!(debouncer.deadline(), Some(t0 + QUIET));

        assert_eq!(debouncer.poll(t0 + ms(499)), None);
        assert_eq!(debouncer.poll(t0 + ms(500)), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(t0 + ms(10_000)), None);
    }

    #[test]
    fn test_reschedule_supersedes() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.schedule(0, t0);
        assert_eq!(debouncer.schedule(1, t0 + ms(100)), Some(0));
        assert_eq!(debouncer.schedule(2, t0 + ms(200)), Some(1));

        assert_eq!(debouncer.poll(t0 + ms(600)), None);
        assert_eq!(debouncer.poll(t0 + ms(699)), None);
        assert_eq!(debouncer.poll(t0 + ms(700)), Some(2));
    }

    #[test]
    fn test_cancel_and_take() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);

        assert!(!debouncer.cancel());
        debouncer.schedule("x", t0);
        assert!(debouncer.cancel());
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(t0 + QUIET), None);

        debouncer.schedule("y", t0);
        assert_eq!(debouncer.take(), Some("y"));
        assert_eq!(debouncer.take(), None);
    }
}
