//! displayname-logging - tracing setup for displayname tools
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr `fmt` subscriber
//! - [`ReloadHandle`] to change the active level at runtime
//! - [`LoggingError`] for setup failures

mod layer;
mod reload;

pub use displayname_core::LogLevel;
pub use layer::{LoggingError, init_logging};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, LoggingError, ReloadHandle, init_logging};
}
