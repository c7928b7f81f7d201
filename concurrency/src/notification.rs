//! A one-shot gate in the style of `absl::Notification`.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Condvar, Mutex,
};

/// A one-shot gate that any number of threads can block on until some thread
/// opens it.
///
/// The forest engines use this to release a batch of workers at once, so
/// contention tests actually contend instead of running threads that finish
/// before their siblings start. Once notified, a `Notification` stays
/// notified for the rest of its life; further calls to [`notify`] are no-ops.
///
/// [`notify`]: Notification::notify
#[derive(Default)]
pub struct Notification {
    notified: AtomicBool,
    mutex: Mutex<()>,
    cond: Condvar,
}

impl Notification {
    /// Create a gate in the closed state.
    pub fn new() -> Notification {
        Notification::default()
    }

    /// Open the gate, waking every current waiter and letting future waiters
    /// pass immediately.
    pub fn notify(&self) {
        let _guard = self.mutex.lock().unwrap();
        self.notified.store(true, Ordering::SeqCst);
        self.cond.notify_all();
    }

    /// Whether [`notify`] has been called, without blocking.
    ///
    /// [`notify`]: Notification::notify
    pub fn has_been_notified(&self) -> bool {
        self.notified.load(Ordering::SeqCst)
    }

    /// Block until the gate opens; returns immediately if it already has.
    pub fn wait(&self) {
        if self.has_been_notified() {
            return;
        }
        let mut guard = self.mutex.lock().unwrap();
        while !self.has_been_notified() {
            guard = self.cond.wait(guard).unwrap();
        }
    }
}

impl Drop for Notification {
    fn drop(&mut self) {
        // A notifying thread may still hold the mutex after waiters have been
        // released; taking it here keeps the drop from finishing under it.
        let _guard = self.mutex.lock();
    }
}
