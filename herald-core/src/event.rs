//! Broadcast event type.

use crate::payload::Payload;

/// A named tag paired with an immutable payload record.
///
/// One `Event` value is shared by reference across every listener of a
/// single broadcast call; listeners must treat the payload as read-only.
/// Events are transient: the registry does not retain them after the
/// delivery loop completes.
#[derive(Debug, Clone)]
pub struct Event<P> {
    name: String,
    payload: P,
}

impl<P: Payload> Event<P> {
    /// Creates an event with the given name and payload.
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// The event's name tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared payload record.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the event, returning the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}
