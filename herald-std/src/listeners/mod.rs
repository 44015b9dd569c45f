//! Standard listener implementations.

mod func;
mod logging;

pub use func::FnListener;
pub use logging::LoggingListener;
