//! Keyed handler registry.
//!
//! [`KeyedRegistry`] associates unique string keys with handler
//! capabilities and dispatches invocations by key.
//!
//! # Registration policy
//!
//! [`register`](KeyedRegistry::register) is permissive: a second
//! registration under the same key silently replaces the first.
//! [`try_register`](KeyedRegistry::try_register) is the strict variant,
//! rejecting duplicates with [`RegisterError::AlreadyExists`] and leaving
//! the prior mapping unchanged. An embedding application should pick one
//! call and use it consistently.
//!
//! # Lock discipline
//!
//! One mutex guards the key-to-handler map. It is held only while the map
//! is mutated or a handler is looked up, never across a handler's `await`,
//! so a handler may call back into the registry without deadlocking.

use herald_core::{DynHandler, Handler, InvokeError, Payload, RegisterError};
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedHandler<A, R> = Arc<dyn DynHandler<A, Output = R>>;

/// A registry mapping unique string keys to handler capabilities.
///
/// `A` is the argument type passed to [`invoke`](Self::invoke); `R` is the
/// value every registered handler produces. The registry holds a shared
/// handle to each handler; the application retains ownership and the
/// handler's own lifecycle.
pub struct KeyedRegistry<A: Payload, R: Send + 'static = ()> {
    handlers: Mutex<IndexMap<String, SharedHandler<A, R>>>,
}

impl<A: Payload, R: Send + 'static> KeyedRegistry<A, R> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(IndexMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, SharedHandler<A, R>>> {
        // A poisoned map is still structurally valid: every mutation is a
        // single insert or remove completed under the lock.
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `handler` under `key`, replacing any existing mapping.
    ///
    /// A replaced key keeps its original position in [`keys`](Self::keys)
    /// order. For duplicate rejection use
    /// [`try_register`](Self::try_register).
    pub fn register<H>(&self, key: impl Into<String>, handler: H)
    where
        H: Handler<A, Output = R>,
    {
        self.lock().insert(key.into(), Arc::new(handler));
    }

    /// Registers `handler` under `key`, rejecting duplicates.
    ///
    /// On [`RegisterError::AlreadyExists`] the prior mapping is unchanged.
    pub fn try_register<H>(&self, key: impl Into<String>, handler: H) -> Result<(), RegisterError>
    where
        H: Handler<A, Output = R>,
    {
        let key = key.into();
        let mut map = self.lock();
        if map.contains_key(&key) {
            return Err(RegisterError::AlreadyExists(key));
        }
        map.insert(key, Arc::new(handler));
        Ok(())
    }

    /// Removes the mapping for `key` if present.
    ///
    /// Returns whether a mapping was removed; an absent key is a no-op,
    /// not an error, so removal is idempotent.
    pub fn unregister(&self, key: &str) -> bool {
        self.lock().shift_remove(key).is_some()
    }

    /// Looks up `key` and invokes its handler with `args`.
    ///
    /// An unknown key yields [`InvokeError::NotFound`] — an expected,
    /// non-exceptional outcome that is also logged as a diagnostic. The
    /// handler's result or failure is propagated unchanged; a failure is
    /// carried as the source of [`InvokeError::Handler`].
    pub async fn invoke(&self, key: &str, args: A) -> Result<R, InvokeError> {
        let handler = self.lock().get(key).cloned();
        let Some(handler) = handler else {
            tracing::debug!(key, "no handler registered");
            return Err(InvokeError::NotFound(key.to_string()));
        };
        handler
            .invoke_dyn(args)
            .await
            .map_err(|source| InvokeError::Handler {
                key: key.to_string(),
                source,
            })
    }

    /// Returns the registered keys, in first-registration order.
    ///
    /// The sequence is a snapshot taken at call time; call `keys` again to
    /// observe later mutations.
    pub fn keys(&self) -> std::vec::IntoIter<String> {
        self.lock().keys().cloned().collect::<Vec<_>>().into_iter()
    }

    /// True if a handler is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<A: Payload, R: Send + 'static> Default for KeyedRegistry<A, R> {
    fn default() -> Self {
        Self::new()
    }
}
