//! Keyed handler capability.
//!
//! A [`Handler`] is the invocable end of the keyed registry: an opaque
//! capability bound to a unique string key, executed on demand with a
//! caller-supplied argument value. Invocation is asynchronous; the caller
//! awaits completion.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|args| async move { ... }`
//! 2. **Struct implementation**: `impl Handler<MyArgs> for MyHandler`
//!
//! The registry stores handlers behind [`DynHandler`], the object-safe
//! mirror of this trait; any `Handler` converts automatically.

use crate::{error::BoxError, payload::Payload};
use std::{future::Future, pin::Pin};

/// An invocable capability dispatched by key.
///
/// Handlers receive a fully owned argument value and perform async work.
/// Failure is reported through the `Result`; the registry propagates it
/// unchanged to the `invoke` caller and performs no recovery of its own.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For storage in a registry, use [`DynHandler`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked with arguments of type `{A}`",
    label = "missing `Handler<{A}>` implementation",
    note = "Handlers must implement the `invoke` method for the argument type `{A}`."
)]
pub trait Handler<A: Payload>: Send + Sync + 'static {
    /// The value produced by a successful invocation.
    type Output: Send + 'static;

    /// Executes the handler with the given arguments.
    fn invoke(&self, args: A) -> impl Future<Output = Result<Self::Output, BoxError>> + Send;
}

// Blanket impl for closures
impl<F, A, Out, Fut> Handler<A> for F
where
    A: Payload,
    Out: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Out, BoxError>> + Send,
{
    type Output = Out;

    fn invoke(&self, args: A) -> impl Future<Output = Result<Self::Output, BoxError>> + Send {
        (self)(args)
    }
}

/// Dynamic object-safe version of [`Handler`].
///
/// Use this trait when you need runtime polymorphism (e.g., the values of
/// a keyed registry).
pub trait DynHandler<A: Payload>: Send + Sync + 'static {
    /// The value produced by a successful invocation.
    type Output: Send + 'static;

    /// Executes the handler (dynamic dispatch version).
    fn invoke_dyn<'a>(
        &'a self,
        args: A,
    ) -> Pin<Box<dyn Future<Output = Result<Self::Output, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any type implementing Handler implements DynHandler automatically.
impl<A: Payload, T: Handler<A>> DynHandler<A> for T {
    type Output = T::Output;

    fn invoke_dyn<'a>(
        &'a self,
        args: A,
    ) -> Pin<Box<dyn Future<Output = Result<Self::Output, BoxError>> + Send + 'a>> {
        Box::pin(self.invoke(args))
    }
}
