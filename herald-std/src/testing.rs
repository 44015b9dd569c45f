//! Testing utilities for Herald.
//!
//! Test doubles for both registry kinds:
//!
//! - [`RecordingListener`]: records every delivery it receives
//! - [`FailingListener`]: always fails, for isolation tests
//! - [`PanickingListener`]: always panics, for containment tests
//! - [`CountingHandler`]: counts invocations
//! - [`RecordingHandler`]: records invocation arguments
//! - [`FailingHandler`]: always fails, for propagation tests

use herald_core::{BoxError, Event, Handler, Listener, Payload};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records each delivery as `(event name, payload)`.
///
/// Clones share the same recording, so a test can keep one handle while
/// the registry holds another.
pub struct RecordingListener<P> {
    name: String,
    deliveries: Arc<Mutex<Vec<(String, P)>>>,
}

impl<P: Clone> RecordingListener<P> {
    /// Creates a recording listener with the given report name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The recorded deliveries, in delivery order.
    pub fn deliveries(&self) -> Vec<(String, P)> {
        self.deliveries.lock().unwrap().clone()
    }

    /// Number of recorded deliveries.
    pub fn count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }

    /// Clears the recording.
    pub fn clear(&self) {
        self.deliveries.lock().unwrap().clear();
    }
}

impl<P: Clone> Clone for RecordingListener<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            deliveries: self.deliveries.clone(),
        }
    }
}

impl<P: Payload + Clone> Listener<P> for RecordingListener<P> {
    fn update(&self, event: &Event<P>) -> Result<(), BoxError> {
        self.deliveries
            .lock()
            .unwrap()
            .push((event.name().to_string(), event.payload().clone()));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener whose `update` always returns an error.
pub struct FailingListener {
    name: String,
    message: String,
}

impl FailingListener {
    /// Creates a failing listener with the given name and error message.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl<P: Payload> Listener<P> for FailingListener {
    fn update(&self, _event: &Event<P>) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Panicking Listener
// ============================================================================

/// A listener whose `update` always panics.
pub struct PanickingListener {
    name: String,
}

impl PanickingListener {
    /// Creates a panicking listener with the given report name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<P: Payload> Listener<P> for PanickingListener {
    fn update(&self, _event: &Event<P>) -> Result<(), BoxError> {
        panic!("{} panicked", self.name);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and produces `()`.
///
/// Clones share the same counter.
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Creates a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The current invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Resets the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<A: Payload> Handler<A> for CountingHandler {
    type Output = ();

    async fn invoke(&self, _args: A) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every argument value it is invoked with.
///
/// Clones share the same recording.
pub struct RecordingHandler<A> {
    received: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone> RecordingHandler<A> {
    /// Creates a new recording handler.
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The recorded arguments, in invocation order.
    pub fn received(&self) -> Vec<A> {
        self.received.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<A: Clone> Default for RecordingHandler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Clone for RecordingHandler<A> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
        }
    }
}

impl<A: Payload + Clone> Handler<A> for RecordingHandler<A> {
    type Output = ();

    async fn invoke(&self, args: A) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(args);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler whose `invoke` always returns an error.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Creates a failing handler with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<A: Payload> Handler<A> for FailingHandler {
    type Output = ();

    async fn invoke(&self, _args: A) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
