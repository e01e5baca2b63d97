//! displayname-core - Display name generation for test classes and methods
//!
//! This crate turns pre-resolved structural identifiers into human-readable labels:
//! - [`DisplayNameGenerator`] capability implemented by every naming strategy
//! - [`Style`] built-in strategies (`Default`, `Underscore`)
//! - [`ClassDescriptor`], [`MethodDescriptor`], [`TypeDescriptor`] caller-supplied metadata
//! - [`DisplayNameGeneration`] per-class strategy selection
//! - [`GeneratorRegistry`] for custom generators and inherited configuration
//! - [`NamingError`] for error handling

mod config;
mod descriptor;
mod error;
mod generator;
mod registry;
mod style;

pub use config::DisplayNameGeneration;
pub use descriptor::{ClassDescriptor, MethodDescriptor, TypeDescriptor};
pub use error::{NamingError, NamingResult};
pub use generator::{DisplayNameGenerator, parameter_types_as_string};
pub use registry::{DisplayNames, GeneratorRegistry};
pub use style::Style;

/// Log levels understood by the logging setup
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[default]
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl std::str::FromStr for LogLevel {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(NamingError::ConfigError(format!(
                "unknown log level: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescriptor, DisplayNameGeneration, DisplayNameGenerator, DisplayNames,
        GeneratorRegistry, LogLevel, MethodDescriptor, NamingError, NamingResult, Style,
        TypeDescriptor, parameter_types_as_string,
    };
}
