//! Cancellable waits for sources without native support.
//!
//! A source that implements [`BlockingPull`] is waited on directly. Any other
//! source is pulled on a background thread whose single result is published
//! through a one-slot channel and raced against the cancellation signal.
//!
//! A cancelled wait cannot take the background thread back: if the wrapped
//! [`Pull::next`] never returns, the thread is never reclaimed. While it runs
//! it also holds the source's lock, so later pulls on the same source queue
//! up behind it.

use std::sync::Arc;
use std::thread;

use futures::executor::block_on;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use super::{BlockingPull, CancellationSignal, Pull};
use crate::optional::Optional;

/// Waits for the next element of a shared source.
///
/// Returns an absent value when the source is exhausted or `signal` fires.
/// A signal that has already fired returns immediately without pulling.
///
/// Sources with native [`BlockingPull`] support are waited on in place.
/// Everything else is pulled on a background thread that outlives a
/// cancelled wait until its pull returns.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use parking_lot::Mutex;
/// use pullwise::iterator::{CancellationSignal, FnPull, wait_for_next};
/// use pullwise::optional::Optional;
///
/// let source = Arc::new(Mutex::new(FnPull::new(|| Optional::some(42))));
/// let signal = CancellationSignal::new();
///
/// assert_eq!(wait_for_next(&source, &signal), Optional::some(42));
/// ```
pub fn wait_for_next<T, P>(source: &Arc<Mutex<P>>, signal: &CancellationSignal) -> Optional<T>
where
    P: Pull<T> + Send + 'static,
    T: Send + 'static,
{
    if signal.is_cancelled() {
        return Optional::None;
    }

    if let Some(mut guard) = source.try_lock() {
        if let Some(blocking) = guard.as_blocking() {
            return blocking.wait_for_next(signal);
        }
    }

    wait_in_background(Arc::clone(source), signal)
}

fn wait_in_background<T, P>(source: Arc<Mutex<P>>, signal: &CancellationSignal) -> Optional<T>
where
    P: Pull<T> + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let spawned = thread::Builder::new()
        .name("pullwise-wait".to_owned())
        .spawn(move || {
            let value = source.lock().next();
            // The waiter is gone if it was cancelled first.
            let _ = sender.send(value);
        });

    if let Err(error) = spawned {
        tracing::warn!(%error, "failed to spawn background pull");
        return Optional::None;
    }

    block_on(async {
        tokio::select! {
            biased;
            () = signal.cancelled() => {
                tracing::debug!("wait cancelled; background pull left running");
                Optional::None
            }
            received = receiver => received.unwrap_or_default(),
        }
    })
}

/// Gives any [`Pull`] source a cancellable wait.
///
/// The source is kept behind an `Arc<Mutex<_>>` so a background thread can
/// pull from it while the caller waits on the signal.
///
/// # Examples
///
/// ```rust
/// use pullwise::iterator::{BlockingPull, CancellationSignal, FnPull, Pull, Waitable};
/// use pullwise::optional::Optional;
///
/// let mut source = Waitable::new(FnPull::new(|| Optional::some("tick")));
/// assert!(source.as_blocking().is_some());
///
/// let cancelled = CancellationSignal::pre_cancelled();
/// assert_eq!(source.wait_for_next(&cancelled), Optional::none());
/// assert_eq!(source.next(), Optional::some("tick"));
/// ```
#[derive(Debug)]
pub struct Waitable<P> {
    source: Arc<Mutex<P>>,
}

impl<P> Waitable<P> {
    /// Wraps `source`.
    pub fn new(source: P) -> Self {
        Self::from_shared(Arc::new(Mutex::new(source)))
    }

    /// Wraps a source that is already shared.
    pub const fn from_shared(source: Arc<Mutex<P>>) -> Self {
        Self { source }
    }

    /// Returns a handle to the shared source.
    pub fn shared(&self) -> Arc<Mutex<P>> {
        Arc::clone(&self.source)
    }
}

impl<T, P> Pull<T> for Waitable<P>
where
    P: Pull<T> + Send + 'static,
    T: Send + 'static,
{
    fn next(&mut self) -> Optional<T> {
        self.source.lock().next()
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        Some(self)
    }
}

impl<T, P> BlockingPull<T> for Waitable<P>
where
    P: Pull<T> + Send + 'static,
    T: Send + 'static,
{
    fn wait_for_next(&mut self, signal: &CancellationSignal) -> Optional<T> {
        wait_for_next(&self.source, signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{FnPull, Slice, channel};
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    fn native_wait_is_used_for_slices() {
        let source = Arc::new(Mutex::new(Slice::from(vec![1, 2])));
        let signal = CancellationSignal::new();

        assert_eq!(wait_for_next(&source, &signal), Optional::some(1));
        assert_eq!(source.lock().position(), 1);
    }

    #[rstest]
    fn background_wait_returns_value() {
        let source = Arc::new(Mutex::new(FnPull::new(|| Optional::some(9))));
        assert_eq!(
            wait_for_next(&source, &CancellationSignal::new()),
            Optional::some(9)
        );
    }

    #[rstest]
    fn cancellation_ends_wait_on_blocked_source() {
        // A queue whose sender stays alive never yields and never closes.
        let (sender, mut queue) = channel::<i32>(1);
        let source = Arc::new(Mutex::new(FnPull::new(move || queue.next())));
        let signal = CancellationSignal::new();
        let remote = signal.clone();

        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            remote.cancel();
        });

        assert!(wait_for_next(&source, &signal).is_none());
        canceller.join().unwrap();
        drop(sender);
    }
}
