use crate::core::constants::{DEFAULT_DEBOUNCE_MAX_WAIT, DEFAULT_DEBOUNCE_WAIT};
use instant::Instant;
use std::time::Duration;

/// Trailing debounce with an upper bound on total delay.
///
/// Each call stores the latest arguments and re-arms a quiet deadline of
/// `wait`; the wrapped function runs once the stream goes quiet for that
/// long. The hard deadline of `max_wait` is armed on the first call of a
/// burst and is never pushed back, so under continuous input the function
/// still runs at least once every `max_wait`. After either deadline fires,
/// both reset and the next call starts a fresh burst.
///
/// A `max_wait` shorter than `wait` would make the hard deadline meaningless,
/// so it is clamped up to `wait` at construction.
///
/// `cancel()` drops the stored arguments and both deadlines.
pub struct Debounce<A, F: FnMut(A)> {
    f: F,
    wait: Duration,
    max_wait: Duration,
    pending: Option<A>,
    quiet_deadline: Option<Instant>,
    hard_deadline: Option<Instant>,
}

impl<A, F: FnMut(A)> Debounce<A, F> {
    pub fn new(wait: Duration, max_wait: Duration, f: F) -> Self {
        Self {
            f,
            wait,
            max_wait: max_wait.max(wait),
            pending: None,
            quiet_deadline: None,
            hard_deadline: None,
        }
    }

    /// Debounce with the default 300ms quiet period and 1000ms hard bound
    pub fn with_defaults(f: F) -> Self {
        Self::new(DEFAULT_DEBOUNCE_WAIT, DEFAULT_DEBOUNCE_MAX_WAIT, f)
    }

    /// Record a call, re-arming the quiet deadline. Any deadline that
    /// already expired fires first, which is what keeps the hard bound
    /// honest under a continuous call stream.
    pub fn call(&mut self, args: A) {
        let now = Instant::now();
        self.settle(now);

        self.pending = Some(args);
        self.quiet_deadline = Some(now + self.wait);
        if self.hard_deadline.is_none() {
            self.hard_deadline = Some(now + self.max_wait);
        }
    }

    /// Fire the stored call if a deadline has passed. The host loop pumps
    /// this so a burst that simply stops still flushes.
    pub fn poll(&mut self) {
        self.settle(Instant::now());
    }

    /// Drop the stored call and both deadlines
    pub fn cancel(&mut self) {
        self.pending = None;
        self.quiet_deadline = None;
        self.hard_deadline = None;
    }

    /// True while a call is stored and waiting
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn settle(&mut self, now: Instant) {
        if self.pending.is_none() {
            return;
        }

        let quiet_due = self.quiet_deadline.is_some_and(|deadline| now >= deadline);
        let hard_due = self.hard_deadline.is_some_and(|deadline| now >= deadline);
        if !quiet_due && !hard_due {
            return;
        }

        self.quiet_deadline = None;
        self.hard_deadline = None;
        if let Some(args) = self.pending.take() {
            (self.f)(args);
        }
    }
}
