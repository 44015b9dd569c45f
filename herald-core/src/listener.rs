//! Broadcast listener capability.
//!
//! A [`Listener`] is the receiving end of the broadcast registry. Unlike a
//! [`Handler`], which is awaited, listeners are invoked synchronously: the
//! broadcaster calls `update` for each subscriber in subscription order,
//! and delivery to listener N+1 begins only after listener N returns.
//!
//! [`Handler`]: crate::Handler

use crate::{error::BoxError, event::Event, payload::Payload};

/// A capability subscribed to receive broadcast events.
///
/// One listener appears at most once in a registry's subscriber sequence
/// (subscription is idempotent by identity). The registry never owns the
/// listener; it holds a shared handle and the application controls the
/// listener's lifecycle.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive events with payload `{P}`",
    label = "missing `Listener<{P}>` implementation",
    note = "Listeners must implement the `update` method for the payload type `{P}`."
)]
pub trait Listener<P: Payload>: Send + Sync + 'static {
    /// Called once per broadcast with the shared event.
    ///
    /// The event is shared across all listeners of the call; treat the
    /// payload as read-only. Returning `Err` marks this listener failed
    /// for the current broadcast without affecting delivery to the rest.
    fn update(&self, event: &Event<P>) -> Result<(), BoxError>;

    /// A short name identifying this listener in failure reports and logs.
    ///
    /// Defaults to the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
