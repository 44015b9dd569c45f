//! Logging listener for event observation.

use herald_core::{BoxError, Event, Listener, Payload};

/// A listener that logs every event it receives.
pub struct LoggingListener;

impl<P: Payload + std::fmt::Debug> Listener<P> for LoggingListener {
    fn update(&self, event: &Event<P>) -> Result<(), BoxError> {
        tracing::info!(event = event.name(), payload = ?event.payload(), "event received");
        Ok(())
    }

    fn name(&self) -> &str {
        "logging"
    }
}
