//! Latest-value cells with a private writer and read-only observers.
//!
//! [`channel`] returns a [`Publisher`] (the only handle that can write) and an
//! [`Observable`] (a cloneable, read-only view).  Both are thin wrappers over
//! [`tokio::sync::watch`]: there is no buffering, observers only ever see the
//! most recent value, and any number of them may read concurrently.

use tokio::sync::watch;

/// Create a cell holding `initial`.
pub fn channel<T>(initial: T) -> (Publisher<T>, Observable<T>) {
    let (tx, rx) = watch::channel(initial);
    (Publisher { tx }, Observable { rx })
}

/// Write half of a cell.  Not `Clone`: there is exactly one writer.
#[derive(Debug)]
pub struct Publisher<T> {
    tx: watch::Sender<T>,
}

impl<T> Publisher<T> {
    /// Replace the current value and wake every observer.
    ///
    /// Succeeds even when nobody is observing.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }
}

/// Read-only view of a cell.
///
/// Each clone tracks change notifications independently, so one observer
/// awaiting [`changed`](Observable::changed) never steals a wake-up from
/// another.
#[derive(Debug, Clone)]
pub struct Observable<T> {
    rx: watch::Receiver<T>,
}

impl<T> Observable<T> {
    /// Run `f` against the current value without cloning it.
    ///
    /// Keep `f` short: the writer is blocked while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.rx.borrow())
    }

    /// Wait until a value newer than the last one seen by this view is
    /// published.
    ///
    /// Returns `false` once the publisher is gone and no further values can
    /// arrive; the last value stays readable.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl<T: Clone> Observable<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
