//! # displayname
//!
//! Pluggable display name generation for test classes, nested test classes
//! and test methods.
//!
//! A discovering test framework describes each class and method with plain
//! descriptors and asks a [`DisplayNameGenerator`] for a human-readable label:
//! - [`Style::Default`] - `Calculator`, `Inner_Fixture`, `add_two(int, int)`
//! - [`Style::Underscore`] - `Calculator`, `Inner Fixture`, `add two(int, int)`
//! - any custom implementation registered in a [`GeneratorRegistry`]
//!
//! ## Naming a Method
//!
//! ```
//! use displayname::prelude::*;
//!
//! let class = ClassDescriptor::from_qualified("com.example.Calculator");
//! let method = MethodDescriptor::new("add_two_numbers").with_parameters(["int", "int"]);
//!
//! let name = Style::Underscore
//!     .generate_display_name_for_method(&class, &method)
//!     .unwrap();
//! assert_eq!(name, "add two numbers(int, int)");
//! ```
//!
//! ## Custom Generators
//!
//! ```
//! use displayname::prelude::*;
//!
//! #[derive(Debug)]
//! struct Shouting;
//!
//! impl DisplayNameGenerator for Shouting {
//!     fn generate_display_name_for_class(&self, c: &ClassDescriptor) -> NamingResult<String> {
//!         Style::Default
//!             .generate_display_name_for_class(c)
//!             .map(|n| n.to_uppercase())
//!     }
//!
//!     fn generate_display_name_for_nested_class(
//!         &self,
//!         c: &ClassDescriptor,
//!     ) -> NamingResult<String> {
//!         Style::Default
//!             .generate_display_name_for_nested_class(c)
//!             .map(|n| n.to_uppercase())
//!     }
//!
//!     fn generate_display_name_for_method(
//!         &self,
//!         c: &ClassDescriptor,
//!         m: &MethodDescriptor,
//!     ) -> NamingResult<String> {
//!         Style::Default.generate_display_name_for_method(c, m)
//!     }
//! }
//!
//! let mut registry = GeneratorRegistry::new();
//! registry.register("shouting", Shouting);
//!
//! let class = ClassDescriptor::from_qualified("com.example.Calculator")
//!     .with_generation(DisplayNameGeneration::custom("shouting"));
//! let name = registry.display_names().class_name(&class).unwrap();
//! assert_eq!(name, "CALCULATOR");
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`displayname_core`] - Descriptors, generators, styles and configuration
//! - [`displayname_logging`] - `tracing` subscriber setup

// Re-export core types
pub use displayname_core::{
    ClassDescriptor, DisplayNameGeneration, DisplayNameGenerator, DisplayNames,
    GeneratorRegistry, LogLevel, MethodDescriptor, NamingError, NamingResult, Style,
    TypeDescriptor, parameter_types_as_string,
};

// Re-export logging setup
pub use displayname_logging::{LoggingError, ReloadHandle, init_logging};

// Re-export common dependencies that generator authors need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use displayname::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        ClassDescriptor, DisplayNameGeneration, DisplayNameGenerator, GeneratorRegistry,
        MethodDescriptor, NamingError, NamingResult, Style, TypeDescriptor,
        parameter_types_as_string,
    };
}
