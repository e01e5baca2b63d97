//! Runtime control of the stderr log level
//!
//! `init_logging` stores the filter handle here so that the level chosen by
//! `displayname render --log-level` can be raised or lowered later without
//! reinstalling the subscriber.

use crate::layer::LoggingError;
use displayname_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Process-wide slot for the level filter installed by [`init_logging`](crate::init_logging)
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>>,
}

impl ReloadHandle {
    /// Create an empty slot; [`reload_level`](Self::reload_level) fails until a handle is set
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// The slot filled by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Store the filter handle of a freshly installed subscriber
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, tracing_subscriber::Registry>) {
        *self.handle.lock() = Some(handle);
    }

    /// Whether a subscriber has been installed through this handle
    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Swap the active filter for `level`
    pub fn reload_level(&self, level: LogLevel) -> Result<(), LoggingError> {
        let guard = self.handle.lock();
        let handle = guard.as_ref().ok_or(LoggingError::NotInitialized)?;
        handle
            .reload(convert_level_to_filter(level))
            .map_err(|e| LoggingError::ReloadFailed(e.to_string()))
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// `LogLevel::Off` maps to a filter that drops every event
pub(crate) fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
