//! Payload trait for event payloads and invocation arguments.

/// A marker trait for values carried through the registries: broadcast
/// payloads and handler invocation arguments.
///
/// Payloads must be `Send + Sync + 'static` so they can cross into async
/// handler futures and be shared by reference across a broadcast snapshot.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// struct Notification { content: String }
///
/// impl Payload for Notification {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Send + Sync + 'static`",
    note = "Payloads cross into handler futures and broadcast snapshots, so they must be thread-safe and static."
)]
pub trait Payload: Send + Sync + 'static {}

// Common Payload implementations
impl Payload for () {}
impl Payload for bool {}
impl Payload for u64 {}
impl Payload for i64 {}
impl Payload for String {}
impl Payload for &'static str {}
impl<T: Payload> Payload for Box<T> {}
impl<T: Payload> Payload for std::sync::Arc<T> {}
impl<T: Payload> Payload for Vec<T> {}
impl<T: Payload> Payload for Option<T> {}
impl<T: Payload, E: Payload> Payload for Result<T, E> {}
