//! Debounced scheduling of validation and autosave work.
//!
//! Rapid successive edits coalesce into a single action: scheduling under a
//! logical key cancels any pending action for that key before arming a new
//! timer, so only the state after the quiet period is processed.

use ahash::AHashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Quiet period for real-time re-validation of email/phone fields.
pub const VALIDATION_DEBOUNCE: Duration = Duration::from_millis(500);
/// Quiet period for draft autosave.
pub const AUTOSAVE_DEBOUNCE: Duration = Duration::from_millis(2000);

/// A cancellable scheduled-task slot per logical key.
///
/// Requires a running tokio runtime; actions fire on it after the quiet
/// period. Timers only decide *when* an action runs, never what it
/// computes.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<AHashMap<String, JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(AHashMap::new()),
        }
    }

    /// Arms `action` to run after the quiet period. A pending action under
    /// the same key is superseded; its timer never fires.
    pub fn schedule<F, Fut>(&self, key: &str, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // Anchor the deadline at schedule time, not at the task's first
        // poll, so the quiet period starts when the edit happens.
        let timer = sleep(self.delay);
        let handle = tokio::spawn(async move {
            timer.await;
            action().await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(prev) = pending.insert(key.to_string(), handle) {
            prev.abort();
        }
    }

    /// Drops any pending action under `key` without running it.
    pub fn cancel(&self, key: &str) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.remove(key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        for (_, handle) in pending.drain() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
