//! Built-in display name generation styles

use crate::descriptor::{ClassDescriptor, MethodDescriptor};
use crate::error::{NamingError, NamingResult};
use crate::generator::{DisplayNameGenerator, parameter_types_as_string};
use serde::{Deserialize, Deserializer, Serialize};

/// Pre-defined [`DisplayNameGenerator`] implementations.
///
/// | Style | Class | Nested class | Method |
/// |-------|-------|--------------|--------|
/// | `Default` | `Calculator_Tests` | `Inner_Fixture` | `add_two(int, int)` |
/// | `Underscore` | `Calculator Tests` | `Inner Fixture` | `add two(int, int)` |
///
/// Deserializes through [`FromStr`](std::str::FromStr), so `"underscore"`,
/// `"Underscore"` and `"UNDERSCORE"` are all accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Name after the last package separator, simple nested class name,
    /// and method name followed by its parameter types.
    #[default]
    Default,
    /// Like `Default`, with every `_` in class and method names replaced by a
    /// space. Parameter type names are left untouched.
    Underscore,
}

impl Style {
    /// All built-in styles
    pub const ALL: [Style; 2] = [Style::Default, Style::Underscore];
}

impl DisplayNameGenerator for Style {
    fn generate_display_name_for_class(
        &self,
        test_class: &ClassDescriptor,
    ) -> NamingResult<String> {
        match self {
            Style::Default => {
                let name = &test_class.require_class()?.name;
                let start = name.rfind('.').map_or(0, |last_dot| last_dot + 1);
                Ok(name[start..].to_string())
            }
            Style::Underscore => Style::Default
                .generate_display_name_for_class(test_class)
                .map(|name| replace_underscores(&name)),
        }
    }

    fn generate_display_name_for_nested_class(
        &self,
        nested_class: &ClassDescriptor,
    ) -> NamingResult<String> {
        match self {
            Style::Default => Ok(nested_class.require_nested()?.simple_name.clone()),
            Style::Underscore => Style::Default
                .generate_display_name_for_nested_class(nested_class)
                .map(|name| replace_underscores(&name)),
        }
    }

    fn generate_display_name_for_method(
        &self,
        test_class: &ClassDescriptor,
        test_method: &MethodDescriptor,
    ) -> NamingResult<String> {
        test_class.require_class()?;
        let test_method = test_method.require_method()?;
        let name = match self {
            Style::Default => test_method.name.clone(),
            // don't replace underscores in parameter type names
            Style::Underscore => replace_underscores(&test_method.name),
        };
        Ok(name + &parameter_types_as_string(test_method))
    }
}

fn replace_underscores(name: &str) -> String {
    name.replace('_', " ")
}

impl std::str::FromStr for Style {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Style::Default),
            "underscore" => Ok(Style::Underscore),
            other => Err(NamingError::ConfigError(format!(
                "unknown display name style: {other}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Default => write!(f, "DEFAULT"),
            Style::Underscore => write!(f, "UNDERSCORE"),
        }
    }
}
