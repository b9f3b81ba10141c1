//! Debounce timer with scoped ownership.
//!
//! At most one timer is pending. Scheduling aborts the previous one and
//! dropping the [`Debouncer`] aborts whatever is still pending, so no timer
//! outlives the view that armed it.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `message` on `tx` after `delay`, cancelling any pending timer.
    pub fn schedule<T>(&mut self, delay: Duration, tx: UnboundedSender<T>, message: T)
    where
        T: Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the view was torn down.
            let _ = tx.send(message);
        }));
    }

    /// Abort the pending timer. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// A timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
