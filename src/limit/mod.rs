//! Rate limiters for high-frequency interaction events
//!
//! Continuous drag/mousemove/pan streams would otherwise trigger a
//! re-cluster or an emit on every event. Both limiters are single-threaded
//! and poll-driven: the host loop that already pumps per-frame updates calls
//! `poll()`, and `call()` settles any expired deadline before it handles new
//! arguments, so a busy event stream needs no external pump at all.
//!
//! The wrappers never fail themselves; a panic inside the wrapped function
//! surfaces on whichever `call()`/`poll()` actually ran it.

pub mod debounce;
pub mod throttle;

// Re-export the essential types
pub use debounce::Debounce;
pub use throttle::Throttle;
