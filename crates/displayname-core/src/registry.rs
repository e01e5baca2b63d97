//! Custom generator registry and per-class generator resolution

use crate::config::DisplayNameGeneration;
use crate::descriptor::{ClassDescriptor, MethodDescriptor};
use crate::error::{NamingError, NamingResult};
use crate::generator::DisplayNameGenerator;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of named custom [`DisplayNameGenerator`] implementations
///
/// The registry is populated before any naming call and only read afterwards,
/// so a shared reference can be used from any number of threads.
#[derive(Debug, Default, Clone)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Arc<dyn DisplayNameGenerator>>,
    default_generation: DisplayNameGeneration,
}

impl GeneratorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `generation` for classes that neither declare nor inherit a configuration
    pub fn with_default_generation(mut self, generation: DisplayNameGeneration) -> Self {
        self.default_generation = generation;
        self
    }

    /// Configuration applied to classes without a declared or inherited one
    pub fn default_generation(&self) -> &DisplayNameGeneration {
        &self.default_generation
    }

    /// Register a custom generator under `name`
    ///
    /// Returns the generator previously registered under the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        generator: impl DisplayNameGenerator + 'static,
    ) -> Option<Arc<dyn DisplayNameGenerator>> {
        self.register_shared(name, Arc::new(generator))
    }

    /// Register an already shared generator under `name`
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        generator: Arc<dyn DisplayNameGenerator>,
    ) -> Option<Arc<dyn DisplayNameGenerator>> {
        let name = name.into();
        tracing::debug!(generator = %name, "registering custom display name generator");
        self.generators.insert(name, generator)
    }

    /// Check whether a custom generator is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Names of all registered custom generators, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Resolve a configuration to the generator it selects
    ///
    /// A named custom generator wins over the configured style.
    pub fn resolve(
        &self,
        generation: &DisplayNameGeneration,
    ) -> NamingResult<Arc<dyn DisplayNameGenerator>> {
        match &generation.generator {
            Some(name) => self
                .generators
                .get(name)
                .cloned()
                .ok_or_else(|| NamingError::UnknownGenerator(name.clone())),
            None => Ok(Arc::new(generation.style)),
        }
    }

    /// Determine the configuration in effect for `class`
    ///
    /// Looks at the class itself, then its superclass chain, then its
    /// enclosing classes. Falls back to the registry's default configuration.
    pub fn effective_generation(&self, class: &ClassDescriptor) -> DisplayNameGeneration {
        match find_generation(class) {
            Some((generation, source)) => {
                if !std::ptr::eq(source, class) {
                    tracing::debug!(
                        class = %class.name,
                        inherited_from = %source.name,
                        "using inherited display name generation"
                    );
                }
                generation.clone()
            }
            None => self.default_generation.clone(),
        }
    }

    /// Resolve the generator in effect for `class`
    pub fn generator_for(
        &self,
        class: &ClassDescriptor,
    ) -> NamingResult<Arc<dyn DisplayNameGenerator>> {
        let generation = self.effective_generation(class);
        tracing::debug!(
            class = %class.name,
            style = %generation.style,
            generator = generation.generator.as_deref().unwrap_or("-"),
            "resolving display name generator"
        );
        self.resolve(&generation)
    }

    /// Naming operations that pick the effective generator per class
    pub fn display_names(&self) -> DisplayNames<'_> {
        DisplayNames { registry: self }
    }
}

fn find_generation(class: &ClassDescriptor) -> Option<(&DisplayNameGeneration, &ClassDescriptor)> {
    if let Some(generation) = &class.generation {
        return Some((generation, class));
    }

    let mut current = class.superclass.as_deref();
    while let Some(superclass) = current {
        if let Some(generation) = &superclass.generation {
            return Some((generation, superclass));
        }
        current = superclass.superclass.as_deref();
    }

    class.enclosing.as_deref().and_then(find_generation)
}

/// Display name operations bound to a [`GeneratorRegistry`]
///
/// Each call resolves the generator configured for the class being named.
#[derive(Debug, Clone, Copy)]
pub struct DisplayNames<'a> {
    registry: &'a GeneratorRegistry,
}

impl DisplayNames<'_> {
    /// Display name of a top-level test class
    pub fn class_name(&self, test_class: &ClassDescriptor) -> NamingResult<String> {
        self.registry
            .generator_for(test_class)?
            .generate_display_name_for_class(test_class)
    }

    /// Display name of a nested test class
    pub fn nested_class_name(&self, nested_class: &ClassDescriptor) -> NamingResult<String> {
        self.registry
            .generator_for(nested_class)?
            .generate_display_name_for_nested_class(nested_class)
    }

    /// Display name of a test method invoked on `test_class`
    pub fn method_name(
        &self,
        test_class: &ClassDescriptor,
        test_method: &MethodDescriptor,
    ) -> NamingResult<String> {
        self.registry
            .generator_for(test_class)?
            .generate_display_name_for_method(test_class, test_method)
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
