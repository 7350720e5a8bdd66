//! Single-slot, cancellable delayed callback.
//!
//! Scheduling while a callback is pending replaces it: the old browser timer
//! is cancelled (dropping a `gloo_timers` `Timeout` clears it). Outside the
//! browser nothing is scheduled.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

/// Single-slot delayed callback.
pub trait Scheduler {
    /// Run `callback` once after `delay`. A callback already pending is
    /// dropped without running.
    fn schedule(&mut self, delay: Duration, callback: impl FnOnce() + 'static);

    /// Drop the pending callback, if any.
    fn cancel(&mut self);
}

/// Browser timer slot backed by `gloo_timers`.
#[derive(Default)]
pub struct PendingTask {
    #[cfg(feature = "hydrate")]
    handle: Option<gloo_timers::callback::Timeout>,
}

impl PendingTask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a callback was scheduled and not cancelled since.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.handle.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl Scheduler for PendingTask {
    fn schedule(&mut self, delay: Duration, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            self.handle = Some(gloo_timers::callback::Timeout::new(millis, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
        }
    }

    fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.handle = None;
        }
    }
}
