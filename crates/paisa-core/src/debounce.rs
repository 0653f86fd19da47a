//! Cancellable-timer debounce helper
//!
//! The web client re-categorizes as the user types, waiting for a
//! pause in input before dispatching the call. This is that pattern as
//! an explicit abstraction: start a delay; if re-triggered before it
//! elapses, cancel and restart; on elapse, dispatch the task.
//!
//! Once the delay has elapsed the task is detached - a later trigger
//! does not abort an in-flight dispatch, so a slow remote call may
//! complete after a fresher one. That race is part of the contract,
//! matching the timer-only cancellation of the original client.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay used for as-you-type categorization
pub const TYPING_DELAY: Duration = Duration::from_millis(800);

/// Debounced task trigger
///
/// Holds at most one pending (not yet dispatched) task. Dropping the
/// debouncer cancels the pending timer but not dispatched tasks.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Debouncer with the standard typing delay (800 ms)
    pub fn for_typing() -> Self {
        Self::new(TYPING_DELAY)
    }

    /// Schedule `task` to run after the delay, superseding any pending
    /// task that has not yet been dispatched
    pub fn trigger<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detach: from here on the task is dispatched and a later
            // trigger no longer cancels it
            tokio::spawn(task);
        }));
    }

    /// Cancel the pending task, if any has not yet been dispatched
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
