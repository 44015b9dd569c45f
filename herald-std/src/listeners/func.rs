//! Closure-backed listener adapter.

use herald_core::{BoxError, Event, Listener, Payload};

/// A named listener backed by a closure.
///
/// Saves defining a struct for ad-hoc subscribers; the name shows up in
/// failure reports the same way a hand-written listener's would.
pub struct FnListener<F> {
    name: String,
    func: F,
}

impl<F> FnListener<F> {
    /// Creates a listener with the given report name and update closure.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<P, F> Listener<P> for FnListener<F>
where
    P: Payload,
    F: Fn(&Event<P>) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn update(&self, event: &Event<P>) -> Result<(), BoxError> {
        (self.func)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
