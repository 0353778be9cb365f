//! Cancellation signal for blocking waits.

use std::sync::Arc;

use tokio::sync::watch;

/// A cloneable, one-way cancellation flag.
///
/// All clones observe the same state. Once [`cancel`](Self::cancel) is
/// called the signal stays fired; there is no way to reset it.
///
/// # Examples
///
/// ```rust
/// use pullwise::iterator::CancellationSignal;
///
/// let signal = CancellationSignal::new();
/// let observer = signal.clone();
/// assert!(!observer.is_cancelled());
///
/// signal.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    state: Arc<watch::Sender<bool>>,
}

impl CancellationSignal {
    /// Creates a signal that has not fired.
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    /// Creates a signal that has already fired.
    pub fn pre_cancelled() -> Self {
        let signal = Self::new();
        signal.cancel();
        signal
    }

    /// Fires the signal, waking every pending [`cancelled`](Self::cancelled).
    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    /// Returns `true` once the signal has fired.
    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Completes once the signal has fired.
    pub async fn cancelled(&self) {
        let mut receiver = self.state.subscribe();
        // The sender lives as long as `self`, so this only ends on a fired signal.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}
