//! # herald - In-Process Dispatch Registries
//!
//! `herald` is a small dispatch library built from two independent leaf
//! components. An application composes them separately; neither depends on
//! the other.
//!
//! ## Invoke-by-key ([`KeyedRegistry`])
//!
//! Maps a unique string key to a handler capability and dispatches
//! invocations by key. Invocation is async; an unknown key is an expected,
//! typed outcome ([`InvokeError::NotFound`]), never a crash.
//!
//! ```rust,ignore
//! use herald::{KeyedRegistry, Handler};
//!
//! let registry = KeyedRegistry::<(), ()>::new();
//! registry.register("dog", BarkHandler);
//! registry.invoke("dog", ()).await?;
//! match registry.invoke("bird", ()).await {
//!     Err(e) if e.is_not_found() => println!("unsupported operation"),
//!     other => other?,
//! }
//! ```
//!
//! ## Broadcast ([`BroadcastRegistry`])
//!
//! Maintains an ordered, de-duplicated set of listeners and delivers each
//! event to all of them, synchronously, in subscription order. The
//! recipient set for one broadcast is a snapshot taken at call entry, and
//! one failing listener never denies delivery to the rest — failures come
//! back in an aggregate [`BroadcastReport`].
//!
//! ```rust,ignore
//! use herald::{BroadcastRegistry, Event};
//! use std::sync::Arc;
//!
//! let registry = BroadcastRegistry::new();
//! registry.subscribe(Arc::new(MyListener));
//! let report = registry.broadcast(&Event::new("new_noti", note));
//! assert!(report.is_clean());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use herald_core::{
    // Errors
    BoxError,
    // Broadcast reporting
    BroadcastReport,
    // Handler (keyed side)
    DynHandler,
    // Event
    Event,
    Handler,
    InvokeError,
    // Listener (broadcast side)
    Listener,
    ListenerFailure,
    // Payload marker
    Payload,
    RegisterError,
};

pub use herald_std::broadcast::{BroadcastRegistry, ListenerPanic};
pub use herald_std::keyed::KeyedRegistry;

/// Standard listener implementations.
pub mod listeners {
    pub use herald_std::listeners::{FnListener, LoggingListener};
}

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{
        CountingHandler, FailingHandler, FailingListener, PanickingListener, RecordingHandler,
        RecordingListener,
    };
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Registries
        BroadcastRegistry,
        BroadcastReport,
        // Errors
        BoxError,
        Event,
        // Core traits
        Handler,
        InvokeError,
        KeyedRegistry,
        Listener,
        Payload,
    };
}
