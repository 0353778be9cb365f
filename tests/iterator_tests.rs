#![cfg(feature = "iterator")]
//! Integration tests for the pull protocol and its variants.

use pullwise::iterator::{
    BlockingPull, CancellationSignal, DEFAULT_SIZE_HINT, Enumerable, FnPull, Pull, Slice,
    Waitable, channel, exact_count, into_std, send, size_hint, wait_for_next,
};
use pullwise::optional::Optional;
use rstest::rstest;
use std::sync::Arc;
use std::sync::mpsc as std_mpsc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

// =============================================================================
// Slice
// =============================================================================

#[rstest]
fn test_slice_yields_in_order_then_stays_exhausted() {
    let mut source = Slice::from(vec!["a", "b"]);

    assert_eq!(source.next(), Optional::some("a"));
    assert_eq!(source.next(), Optional::some("b"));
    assert!(source.next().is_none());
    assert!(source.next().is_none());
}

#[rstest]
fn test_slice_count_tracks_remaining() {
    let mut source: Slice<u32> = (1..=5).collect();

    assert_eq!(source.count(), 5);
    let _ = source.next();
    let _ = source.next();
    assert_eq!(source.count(), 3);
    assert_eq!(source.position(), 2);
    assert_eq!(source.as_slice(), &[3, 4, 5]);
}

#[rstest]
fn test_slice_wait_with_fired_signal_consumes_nothing() {
    let mut source = Slice::from(vec![1, 2]);
    let signal = CancellationSignal::pre_cancelled();

    assert!(source.wait_for_next(&signal).is_none());
    assert_eq!(source.count(), 2);
}

// =============================================================================
// Capability probing
// =============================================================================

#[rstest]
#[case(Slice::from(vec![1, 2, 3]), 3)]
#[case(Slice::default(), DEFAULT_SIZE_HINT)]
fn test_size_hint_for_slices(#[case] source: Slice<i32>, #[case] expected: usize) {
    assert_eq!(size_hint(&source), expected);
}

#[rstest]
fn test_function_source_has_no_capabilities() {
    let mut source = FnPull::new(|| Optional::some(0));

    assert!(exact_count(&source).is_none());
    assert!(source.as_blocking().is_none());
    assert_eq!(size_hint(&source), DEFAULT_SIZE_HINT);
}

#[rstest]
fn test_mutable_reference_forwards_count() {
    let mut source = Slice::from(vec![1, 2, 3]);
    let borrowed = &mut source;

    assert_eq!(Enumerable::count(&borrowed), 3);
}

// =============================================================================
// FnPull
// =============================================================================

#[rstest]
fn test_function_source_defers_exhaustion_to_function() {
    let mut calls = 0;
    let mut source = FnPull::new(|| {
        calls += 1;
        if calls == 2 {
            Optional::none()
        } else {
            Optional::some(calls)
        }
    });

    assert_eq!(source.next(), Optional::some(1));
    assert!(source.next().is_none());
    // A function may resume after reporting exhaustion.
    assert_eq!(source.next(), Optional::some(3));
}

#[rstest]
fn test_empty_function_source_is_exhausted() {
    let mut source = FnPull::<fn() -> Optional<i32>>::empty();
    assert!(source.next().is_none());
}

// =============================================================================
// Queue
// =============================================================================

#[rstest]
fn test_queue_drains_after_sender_dropped() {
    let (sender, queue) = send(vec![1, 2, 3]);
    drop(sender);

    assert_eq!(into_std(queue).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn test_queue_receives_from_other_thread() {
    let (sender, mut queue) = channel(1);
    let producer = thread::spawn(move || {
        for value in 0..4 {
            sender.blocking_send(value).expect("queue is alive");
        }
    });

    let received: Vec<i32> = (0..4).map(|_| queue.next().expect()).collect();
    producer.join().expect("producer panicked");

    assert_eq!(received, vec![0, 1, 2, 3]);
    assert!(queue.next().is_none());
}

#[rstest]
fn test_queue_wait_is_cancelled_while_blocked() {
    let (sender, mut queue) = channel::<i32>(1);
    let signal = CancellationSignal::new();
    let trigger = signal.clone();

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        trigger.cancel();
    });

    assert!(queue.wait_for_next(&signal).is_none());
    canceller.join().expect("canceller panicked");
    drop(sender);
}

#[rstest]
fn test_queue_wait_prefers_fired_signal_over_ready_value() {
    let (_sender, mut queue) = send(vec![7]);
    let signal = CancellationSignal::pre_cancelled();

    assert!(queue.wait_for_next(&signal).is_none());
    assert_eq!(queue.next(), Optional::some(7));
}

// =============================================================================
// Generic wait adapter
// =============================================================================

#[rstest]
fn test_waitable_function_source_returns_value() {
    let mut source = Waitable::new(FnPull::new(|| Optional::some("ready")));
    let signal = CancellationSignal::new();

    assert_eq!(source.wait_for_next(&signal), Optional::some("ready"));
}

#[rstest]
fn test_wait_adapter_cancels_blocked_pull() {
    let (release, gate) = std_mpsc::channel::<()>();
    let source = Arc::new(Mutex::new(FnPull::new(move || {
        let _ = gate.recv();
        Optional::some(1)
    })));
    let signal = CancellationSignal::new();
    let trigger = signal.clone();

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        trigger.cancel();
    });

    assert!(wait_for_next(&source, &signal).is_none());
    canceller.join().expect("canceller panicked");

    // Unblock the abandoned background pull so the thread can finish.
    let _ = release.send(());
}

#[rstest]
fn test_wait_adapter_skips_pull_on_fired_signal() {
    let mut pulls = 0;
    let source = Arc::new(Mutex::new(FnPull::new(move || {
        pulls += 1;
        Optional::some(pulls)
    })));

    assert!(wait_for_next(&source, &CancellationSignal::pre_cancelled()).is_none());
    assert_eq!(source.lock().next(), Optional::some(1));
}

// =============================================================================
// Missing sources
// =============================================================================

#[rstest]
fn test_missing_source_behaves_as_empty() {
    let mut source: Option<FnPull<fn() -> Optional<u8>>> = None;

    assert!(source.next().is_none());
    assert!(exact_count(&source).is_none());
    assert!(source.as_blocking().is_none());
}
