//! Ordered broadcast registry.
//!
//! [`BroadcastRegistry`] maintains a de-duplicated, ordered set of
//! listeners and delivers each event to all of them.
//!
//! # Delivery contract
//!
//! - **Snapshot rule**: the recipient set for one `broadcast` call is
//!   captured when the call starts. A `subscribe` or `unsubscribe` issued
//!   while delivery is in flight — including from inside a listener —
//!   takes effect only for subsequent broadcasts.
//! - **Isolate-and-continue**: a failing (or panicking) listener never
//!   denies delivery to the rest. Failures are collected per listener and
//!   surfaced in the returned [`BroadcastReport`].
//! - **Cooperative order**: listeners run one at a time, in subscription
//!   order; delivery to listener N+1 begins only after listener N returns.
//!
//! The internal mutex is held only while the listener sequence is mutated
//! or snapshotted, never during a listener's `update`, so listeners may
//! call back into the registry freely.

use herald_core::{BoxError, BroadcastReport, Event, Listener, ListenerFailure, Payload};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Error recorded when a listener panics during delivery.
///
/// The panic is contained so the remaining listeners still receive the
/// event; the panic message is preserved for the aggregate report.
#[derive(Error, Debug)]
#[error("listener panicked: {0}")]
pub struct ListenerPanic(String);

/// An ordered, de-duplicated set of listeners with snapshot broadcast.
///
/// Listener identity is the shared allocation: subscribing the same `Arc`
/// twice is a no-op, and `unsubscribe` removes by [`Arc::ptr_eq`]. The
/// registry never owns a listener; it holds one shared handle per
/// subscription.
pub struct BroadcastRegistry<P: Payload> {
    listeners: Mutex<Vec<Arc<dyn Listener<P>>>>,
}

impl<P: Payload> BroadcastRegistry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn Listener<P>>>> {
        // A poisoned sequence is still structurally valid: every mutation
        // is a single push or retain completed under the lock.
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `listener` unless it is already subscribed.
    ///
    /// Subscription is idempotent by identity ([`Arc::ptr_eq`]); the order
    /// of first subscription is preserved. Returns whether the listener
    /// was added.
    pub fn subscribe(&self, listener: Arc<dyn Listener<P>>) -> bool {
        let mut listeners = self.lock();
        if listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Removes every subscription identical to `listener`.
    ///
    /// Returns whether anything was removed; an absent listener is a
    /// no-op. A broadcast already in flight still delivers to the removed
    /// listener (snapshot rule).
    pub fn unsubscribe(&self, listener: &Arc<dyn Listener<P>>) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|l| !Arc::ptr_eq(l, listener));
        listeners.len() != before
    }

    /// Delivers `event` to every currently subscribed listener, in
    /// subscription order.
    ///
    /// The event is shared read-only across all recipients of this call.
    /// Failures and contained panics are reported per listener in the
    /// returned [`BroadcastReport`]; delivery always continues to the end
    /// of the snapshot.
    pub fn broadcast(&self, event: &Event<P>) -> BroadcastReport {
        let snapshot = self.lock().clone();
        let mut report = BroadcastReport::default();
        for (index, listener) in snapshot.iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| listener.update(event))) {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(error)) => {
                    tracing::warn!(
                        listener = listener.name(),
                        %error,
                        "listener failed during broadcast"
                    );
                    report.failures.push(ListenerFailure {
                        index,
                        listener: listener.name().to_string(),
                        error,
                    });
                }
                Err(panic) => {
                    let error: BoxError = Box::new(ListenerPanic(panic_message(panic)));
                    tracing::warn!(
                        listener = listener.name(),
                        %error,
                        "listener panicked during broadcast"
                    );
                    report.failures.push(ListenerFailure {
                        index,
                        listener: listener.name().to_string(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<P: Payload> Default for BroadcastRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
