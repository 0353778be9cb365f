//! Queue-backed iterator.

use futures::executor::block_on;
use tokio::sync::mpsc;

use super::{BlockingPull, CancellationSignal, Pull};
use crate::optional::Optional;

/// An iterator over the receiving half of a first-in-first-out channel.
///
/// [`Pull::next`] blocks until a value arrives or every sender has been
/// dropped, which closes the queue for good. The queue cannot tell how many
/// elements remain, so it is not [`Enumerable`](super::Enumerable).
///
/// Both `next` and `wait_for_next` block the calling thread; do not call them
/// from inside an async task.
///
/// # Examples
///
/// ```rust
/// use pullwise::iterator::{Pull, send};
/// use pullwise::optional::Optional;
///
/// let (sender, mut queue) = send(vec![4, 9]);
/// drop(sender);
///
/// assert_eq!(queue.next(), Optional::some(4));
/// assert_eq!(queue.next(), Optional::some(9));
/// assert_eq!(queue.next(), Optional::none());
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    receiver: mpsc::Receiver<T>,
}

impl<T> Queue<T> {
    /// Wraps an existing receiver.
    pub const fn new(receiver: mpsc::Receiver<T>) -> Self {
        Self { receiver }
    }

    /// Returns the wrapped receiver.
    pub fn into_inner(self) -> mpsc::Receiver<T> {
        self.receiver
    }
}

impl<T> From<mpsc::Receiver<T>> for Queue<T> {
    fn from(receiver: mpsc::Receiver<T>) -> Self {
        Self::new(receiver)
    }
}

impl<T> Pull<T> for Queue<T> {
    fn next(&mut self) -> Optional<T> {
        block_on(self.receiver.recv()).into()
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        Some(self)
    }
}

impl<T> BlockingPull<T> for Queue<T> {
    fn wait_for_next(&mut self, signal: &CancellationSignal) -> Optional<T> {
        let receiver = &mut self.receiver;
        block_on(async {
            tokio::select! {
                biased;
                () = signal.cancelled() => None,
                received = receiver.recv() => received,
            }
        })
        .into()
    }
}

/// Creates a bounded channel and wraps its receiving half as a [`Queue`].
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn channel<T>(capacity: usize) -> (mpsc::Sender<T>, Queue<T>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (sender, Queue::new(receiver))
}

/// Creates a channel buffered to hold `values`, sends all of them, and
/// returns both halves.
///
/// The queue closes once the returned sender (and any clone of it) is
/// dropped.
pub fn send<T>(values: Vec<T>) -> (mpsc::Sender<T>, Queue<T>) {
    let (sender, queue) = channel(values.len().max(1));
    for value in values {
        // Capacity covers every value and the receiver is alive.
        let _ = sender.try_send(value);
    }
    (sender, queue)
}
