//! # herald-std
//!
//! Standard implementations for the Herald dispatch-registry library.
//!
//! This crate provides:
//! - **Invoke-by-key**: [`KeyedRegistry`](keyed::KeyedRegistry)
//! - **Broadcast**: [`BroadcastRegistry`](broadcast::BroadcastRegistry)
//! - **Standard listeners**: Logging, closure adapter
//! - **Testing utilities**: recording/failing/counting doubles

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
pub mod broadcast;
pub mod keyed;
pub mod listeners;
pub mod testing;
