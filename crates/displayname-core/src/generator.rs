//! The display name generator capability

use crate::descriptor::{ClassDescriptor, MethodDescriptor};
use crate::error::NamingResult;

/// Generates display names for test classes, nested test classes and test methods.
///
/// Implementations must be pure: the same descriptors always yield the same
/// name, and no state is shared between calls. Every operation rejects an
/// absent descriptor with [`NamingError::InvalidArgument`] before producing
/// any output.
///
/// [`NamingError::InvalidArgument`]: crate::NamingError::InvalidArgument
pub trait DisplayNameGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a display name for a top-level or static nested test class.
    fn generate_display_name_for_class(&self, test_class: &ClassDescriptor)
    -> NamingResult<String>;

    /// Generate a display name for an inner (nested) test class.
    fn generate_display_name_for_nested_class(
        &self,
        nested_class: &ClassDescriptor,
    ) -> NamingResult<String>;

    /// Generate a display name for a test method.
    ///
    /// `test_class` is the class the method is invoked on. It may differ from
    /// the class that declares `test_method`, e.g. for inherited methods.
    fn generate_display_name_for_method(
        &self,
        test_class: &ClassDescriptor,
        test_method: &MethodDescriptor,
    ) -> NamingResult<String>;
}

/// Render the simple names of a method's parameter types, e.g. `(int, String)`.
///
/// Returns `()` for a method without parameters.
pub fn parameter_types_as_string(method: &MethodDescriptor) -> String {
    let names: Vec<&str> = method
        .parameter_types
        .iter()
        .map(|ty| ty.simple_name.as_str())
        .collect();
    format!("({})", names.join(", "))
}
