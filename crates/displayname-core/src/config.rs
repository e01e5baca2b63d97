//! Per-class display name generation configuration

use crate::error::NamingResult;
use crate::style::Style;
use serde::{Deserialize, Serialize};

/// Selects the display name generator for a test class
///
/// A custom `generator`, when named, takes precedence over `style`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNameGeneration {
    /// The pre-defined style to use
    #[serde(default)]
    pub style: Style,

    /// Name of a custom generator registered in a
    /// [`GeneratorRegistry`](crate::GeneratorRegistry)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

impl DisplayNameGeneration {
    /// Configuration selecting a built-in style
    pub fn style(style: Style) -> Self {
        Self {
            style,
            generator: None,
        }
    }

    /// Configuration selecting a registered custom generator
    pub fn custom(generator: impl Into<String>) -> Self {
        Self {
            style: Style::Default,
            generator: Some(generator.into()),
        }
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> NamingResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Whether a custom generator overrides the style
    pub fn is_custom(&self) -> bool {
        self.generator.is_some()
    }
}
