// src/timer.rs

//! Auto-hide scheduling.
//!
//! At most one dismissal is pending at a time. Scheduling a new one
//! cancels the previous one first, so a stale timer can never hide an
//! overlay shown after it. Cancellation goes through the handle the host
//! returned; the engine never scans or disturbs the host's other timers.

use log::debug;

use crate::host::{TimerHandle, TimerHost};

/// Tracks the single pending dismissal for a tooltip session.
#[derive(Debug, Default)]
pub struct AutoHideTimer {
    pending: Option<TimerHandle>,
}

impl AutoHideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a dismissal after `timeout_s`. A non-positive timeout
    /// schedules nothing and cancels any pending dismissal instead.
    pub fn schedule<T: TimerHost + ?Sized>(&mut self, host: &mut T, timeout_s: f64) {
        self.cancel_pending(host);
        if timeout_s <= 0.0 {
            return;
        }
        let handle = host.schedule_dismiss(timeout_s);
        debug!("dismissal scheduled in {}s ({:?})", timeout_s, handle);
        self.pending = Some(handle);
    }

    /// Cancels the pending dismissal, if any. Safe to call when the timer
    /// already fired; hosts treat cancelling a dead handle as a no-op.
    pub fn cancel_pending<T: TimerHost + ?Sized>(&mut self, host: &mut T) {
        if let Some(handle) = self.pending.take() {
            debug!("cancelling pending dismissal {:?}", handle);
            host.cancel(handle);
        }
    }

    /// Marks the pending dismissal as fired. Called by the host's callback
    /// so a later `cancel_pending` does not cancel a dead handle.
    pub fn mark_fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
