//! Caller-supplied descriptors for test classes, methods and parameter types
//!
//! Descriptors are plain values populated once by the discovering framework.
//! A descriptor whose identifying name is empty stands for an absent argument
//! and is rejected by every generator before any name is produced.

use crate::config::DisplayNameGeneration;
use crate::error::{NamingError, NamingResult};
use serde::{Deserialize, Serialize};

/// Metadata for a top-level or nested test class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully-qualified name (e.g. `com.example.Calculator`)
    pub name: String,

    /// Unqualified name (e.g. `Calculator`)
    pub simple_name: String,

    /// Locally declared generator configuration
    #[serde(default)]
    pub generation: Option<DisplayNameGeneration>,

    /// Superclass, consulted when no local configuration is declared
    #[serde(default)]
    pub superclass: Option<Box<ClassDescriptor>>,

    /// Enclosing class of a nested test class
    #[serde(default)]
    pub enclosing: Option<Box<ClassDescriptor>>,
}

impl ClassDescriptor {
    /// Create a descriptor from its fully-qualified and simple names
    pub fn new(name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            simple_name: simple_name.into(),
            generation: None,
            superclass: None,
            enclosing: None,
        }
    }

    /// Create a descriptor from a fully-qualified name, deriving the simple name
    ///
    /// The simple name is the part after the last `.` or `$`.
    pub fn from_qualified(name: impl Into<String>) -> Self {
        let name = name.into();
        let simple_name = name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or_default()
            .to_string();
        Self::new(name, simple_name)
    }

    /// Attach a local generator configuration
    pub fn with_generation(mut self, generation: DisplayNameGeneration) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Attach a superclass
    pub fn with_superclass(mut self, superclass: ClassDescriptor) -> Self {
        self.superclass = Some(Box::new(superclass));
        self
    }

    /// Attach an enclosing class
    pub fn with_enclosing(mut self, enclosing: ClassDescriptor) -> Self {
        self.enclosing = Some(Box::new(enclosing));
        self
    }

    pub(crate) fn require_class(&self) -> NamingResult<&Self> {
        if self.name.is_empty() {
            return Err(NamingError::InvalidArgument(
                "Test class must not be null".to_string(),
            ));
        }
        Ok(self)
    }

    pub(crate) fn require_nested(&self) -> NamingResult<&Self> {
        if self.simple_name.is_empty() {
            return Err(NamingError::InvalidArgument(
                "Nested test class must not be null".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Metadata for a test method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Simple method name
    pub name: String,

    /// Parameter types in declaration order
    #[serde(default)]
    pub parameter_types: Vec<TypeDescriptor>,

    /// Fully-qualified name of the declaring class, if known
    ///
    /// May differ from the class the method is invoked on when the method is
    /// inherited.
    #[serde(default)]
    pub declaring_class: Option<String>,
}

impl MethodDescriptor {
    /// Create a descriptor for a method without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types: Vec::new(),
            declaring_class: None,
        }
    }

    /// Append a parameter type
    pub fn with_parameter(mut self, simple_name: impl Into<String>) -> Self {
        self.parameter_types.push(TypeDescriptor::new(simple_name));
        self
    }

    /// Replace all parameter types
    pub fn with_parameters<I, S>(mut self, simple_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types = simple_names.into_iter().map(TypeDescriptor::new).collect();
        self
    }

    /// Record the declaring class
    pub fn declared_in(mut self, class_name: impl Into<String>) -> Self {
        self.declaring_class = Some(class_name.into());
        self
    }

    pub(crate) fn require_method(&self) -> NamingResult<&Self> {
        if self.name.is_empty() {
            return Err(NamingError::InvalidArgument(
                "Test method must not be null".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Declared type of a single parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor {
    /// Simple type name (e.g. `int`, `String`, `List`)
    pub simple_name: String,
}

impl TypeDescriptor {
    pub fn new(simple_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
        }
    }
}

impl From<&str> for TypeDescriptor {
    fn from(simple_name: &str) -> Self {
        Self::new(simple_name)
    }
}
