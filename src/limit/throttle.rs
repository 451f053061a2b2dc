use crate::core::constants::DEFAULT_THROTTLE_INTERVAL;
use instant::Instant;
use std::time::Duration;

/// Leading-edge throttle that honors the trailing call.
///
/// The first call in a window runs the wrapped function immediately and
/// opens a window of `interval`. Calls landing inside the window are not run
/// but the latest call's arguments are retained; when the window closes they
/// run once more, and a new window opens from that (logical) instant. A zero
/// interval disables throttling: every call runs synchronously.
///
/// `cancel()` drops the retained arguments so nothing fires after the owner
/// is torn down.
pub struct Throttle<A, F: FnMut(A)> {
    f: F,
    interval: Duration,
    window_start: Option<Instant>,
    pending: Option<A>,
}

impl<A, F: FnMut(A)> Throttle<A, F> {
    pub fn new(interval: Duration, f: F) -> Self {
        Self {
            f,
            interval,
            window_start: None,
            pending: None,
        }
    }

    /// Throttle with the default 500ms window
    pub fn with_default_interval(f: F) -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL, f)
    }

    /// Hand a call to the wrapped function, subject to the window.
    pub fn call(&mut self, args: A) {
        if self.interval.is_zero() {
            (self.f)(args);
            return;
        }

        let now = Instant::now();
        self.settle(now);

        match self.window_start {
            None => {
                (self.f)(args);
                self.window_start = Some(now);
            }
            Some(_) => {
                // Only the latest intra-window arguments survive
                self.pending = Some(args);
            }
        }
    }

    /// Fire the trailing call if its window has closed. The host loop pumps
    /// this; a steady call stream settles itself through [`call`](Self::call).
    pub fn poll(&mut self) {
        self.settle(Instant::now());
    }

    /// Drop any retained trailing call and close the window
    pub fn cancel(&mut self) {
        self.pending = None;
        self.window_start = None;
    }

    /// True while a trailing call is waiting for the window to close
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn settle(&mut self, now: Instant) {
        let Some(start) = self.window_start else {
            return;
        };
        if now.duration_since(start) < self.interval {
            return;
        }

        if let Some(args) = self.pending.take() {
            (self.f)(args);
            // The trailing call logically ran when the window closed; the
            // next window starts there, not at the observation instant
            let closed_at = start + self.interval;
            if now.duration_since(closed_at) >= self.interval {
                self.window_start = None;
            } else {
                self.window_start = Some(closed_at);
            }
        } else {
            self.window_start = None;
        }
    }
}
