//! Subscriber installation

use crate::reload::{ReloadHandle, convert_level_to_filter};
use displayname_core::LogLevel;
use thiserror::Error;
use tracing_subscriber::reload;

/// Error raised while installing or reconfiguring the subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber was already installed by someone else
    #[error("global subscriber already set: {0}")]
    AlreadyInitialized(String),

    /// The level filter could not be swapped
    #[error("failed to reload filter: {0}")]
    ReloadFailed(String),

    /// [`init_logging`] has not been called yet
    #[error("reload handle not initialized")]
    NotInitialized,
}

/// Initialize logging at `level`, writing formatted events to stderr
///
/// The level can later be changed through [`ReloadHandle::global`].
/// Calling this again after a successful initialization only reloads the level.
pub fn init_logging(level: LogLevel) -> Result<(), LoggingError> {
    use tracing_subscriber::prelude::*;

    let handle = ReloadHandle::global();
    if handle.is_initialized() {
        return handle.reload_level(level);
    }

    let (filter, reload_handle) = reload::Layer::new(convert_level_to_filter(level));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
    handle.set_handle(reload_handle);

    tracing::debug!(%level, "logging initialized");
    Ok(())
}
