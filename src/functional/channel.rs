//! Draining a pull iterator onto a channel from a background thread.

use std::thread;

use futures::executor::block_on;
use tokio::sync::mpsc;

use super::for_each;
use crate::iterator::{CancellationSignal, Pull, Queue, exact_count};

/// Drains `source` on a background thread, sending every element to the
/// returned [`Queue`], which closes once the source is exhausted.
///
/// The channel holds as many elements as the source reports through
/// [`Enumerable`](crate::iterator::Enumerable). Sources without a count get a
/// single slot, so the producer runs at most one element ahead of the
/// consumer.
///
/// The thread is fire-and-forget. Dropping the queue stops it at its next
/// send, but a source whose [`Pull::next`] never returns keeps it alive for
/// good. Use [`collect_to_channel_until`] to also stop it on demand.
///
/// # Examples
///
/// ```rust
/// use pullwise::functional::{collect, collect_to_channel};
/// use pullwise::iterator::Slice;
///
/// let queue = collect_to_channel(Slice::from(vec![1, 2, 3]));
/// assert_eq!(collect(queue), vec![1, 2, 3]);
/// ```
pub fn collect_to_channel<T, P>(source: P) -> Queue<T>
where
    P: Pull<T> + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = mpsc::channel(channel_capacity(&source));
    spawn_producer(move || {
        let mut sent = 0_usize;
        for_each(source, |value, control| {
            if sender.blocking_send(value).is_err() {
                tracing::debug!(sent, "queue dropped; stopping producer");
                control.stop();
            } else {
                sent += 1;
            }
        });
        tracing::debug!(sent, "producer finished");
    });
    Queue::new(receiver)
}

/// Like [`collect_to_channel`], but the producer also stops once `signal`
/// fires.
///
/// The signal is checked before every pull and raced against every send, so
/// a consumer that stops reading does not pin the thread. A pull that is
/// already in progress still runs to completion.
///
/// # Examples
///
/// ```rust
/// use pullwise::functional::{collect, collect_to_channel_until};
/// use pullwise::iterator::{CancellationSignal, FnPull};
/// use pullwise::optional::Optional;
///
/// let signal = CancellationSignal::new();
/// let endless = FnPull::new(|| Optional::some(1));
/// let queue = collect_to_channel_until(endless, signal.clone());
///
/// signal.cancel();
/// // The queue closes once the producer notices the signal.
/// let drained = collect(queue);
/// assert!(drained.iter().all(|value| *value == 1));
/// ```
pub fn collect_to_channel_until<T, P>(source: P, signal: CancellationSignal) -> Queue<T>
where
    P: Pull<T> + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = mpsc::channel(channel_capacity(&source));
    spawn_producer(move || {
        let mut sent = 0_usize;
        let mut source = source;
        while !signal.is_cancelled() {
            let Some(value) = source.next().into_option() else {
                break;
            };
            let delivered = block_on(async {
                tokio::select! {
                    biased;
                    () = signal.cancelled() => false,
                    result = sender.send(value) => result.is_ok(),
                }
            });
            if !delivered {
                break;
            }
            sent += 1;
        }
        tracing::debug!(sent, cancelled = signal.is_cancelled(), "producer finished");
    });
    Queue::new(receiver)
}

fn channel_capacity<T, P>(source: &P) -> usize
where
    P: Pull<T>,
{
    exact_count(source).filter(|count| *count > 0).unwrap_or(1)
}

fn spawn_producer<F>(producer: F)
where
    F: FnOnce() + Send + 'static,
{
    let spawned = thread::Builder::new()
        .name("pullwise-producer".to_owned())
        .spawn(producer);
    if let Err(error) = spawned {
        // The producer (and with it the sender) is dropped, closing the queue.
        tracing::warn!(%error, "failed to spawn channel producer");
    }
}
