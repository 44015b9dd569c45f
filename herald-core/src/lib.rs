//! # herald-core
//!
//! Core traits and data model for the Herald dispatch-registry library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines handlers and listeners without needing the full
//! `herald-std` registry implementations.
//!
//! # Two Capabilities
//!
//! Herald dispatches through exactly two capability shapes, each a trait
//! with a single operation:
//!
//! ## Invoke-by-key ([`Handler`])
//!
//! An opaque capability bound to a unique string key in a keyed registry.
//! Invocation is asynchronous: the caller awaits completion, and the
//! handler's result or failure is propagated unchanged.
//!
//! - **Registered**: at most one handler per key
//! - **Non-owned**: the registry holds a shared handle; the application
//!   retains ownership and the handler's lifecycle
//! - **Terminal**: whatever side effects occur belong to the handler; the
//!   registry adds none
//!
//! ## Broadcast ([`Listener`])
//!
//! A capability subscribed to an ordered, de-duplicated listener set.
//! Delivery is synchronous and cooperative: listeners run one at a time,
//! in subscription order, against a shared read-only [`Event`].
//!
//! - **Idempotent**: subscribing the same listener twice is a no-op
//! - **Isolated**: one listener's failure never denies delivery to the
//!   rest; failures surface in a [`BroadcastReport`]
//!
//! # Error Types
//!
//! - [`InvokeError`] - Unknown key or handler failure on invoke
//! - [`RegisterError`] - Strict registration rejection
//! - [`BroadcastReport`] - Aggregate per-listener failure report

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod handler;
mod listener;
mod payload;
mod report;

// Re-exports
pub use error::{BoxError, InvokeError, RegisterError};
pub use event::Event;
pub use handler::{DynHandler, Handler};
pub use listener::Listener;
pub use payload::Payload;
pub use report::{BroadcastReport, ListenerFailure};
