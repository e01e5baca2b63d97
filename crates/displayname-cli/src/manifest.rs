//! Test plan manifest parsing and validation

use anyhow::{Context, Result};
use displayname_core::{
    ClassDescriptor, DisplayNameGeneration, MethodDescriptor, Style, TypeDescriptor,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// displayname.toml manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub plan: PlanSection,

    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSection {
    pub name: String,

    /// Style for classes that neither declare nor inherit one
    #[serde(default)]
    pub style: Style,
}

/// A test class, top-level or nested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Fully-qualified name
    pub name: String,

    /// Unqualified name; derived from `name` when omitted
    #[serde(default)]
    pub simple_name: Option<String>,

    #[serde(default)]
    pub style: Option<Style>,

    /// Fully-qualified name of a top-level class in the same manifest
    #[serde(default)]
    pub superclass: Option<String>,

    #[serde(default)]
    pub methods: Vec<MethodEntry>,

    #[serde(default)]
    pub nested: Vec<ClassEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,

    #[serde(default)]
    pub parameter_types: Vec<String>,

    #[serde(default)]
    pub declaring_class: Option<String>,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.plan.name.is_empty() {
            anyhow::bail!("Plan name cannot be empty");
        }

        let mut seen = HashSet::new();
        for class in &self.classes {
            class.validate()?;
            if !seen.insert(class.name.as_str()) {
                anyhow::bail!("Duplicate class '{}'", class.name);
            }
        }

        let top_level: HashMap<&str, &ClassEntry> = self
            .classes
            .iter()
            .map(|c| (c.name.as_str(), c))
            .collect();

        for class in self.all_classes() {
            if let Some(superclass) = &class.superclass {
                if !top_level.contains_key(superclass.as_str()) {
                    anyhow::bail!(
                        "Superclass '{}' of '{}' is not declared in the manifest",
                        superclass,
                        class.name
                    );
                }
            }
        }

        // Superclass chains must terminate
        for class in &self.classes {
            let mut seen = HashSet::new();
            let mut current = Some(class);
            while let Some(entry) = current {
                if !seen.insert(entry.name.as_str()) {
                    anyhow::bail!("Superclass cycle involving '{}'", class.name);
                }
                current = entry
                    .superclass
                    .as_deref()
                    .and_then(|name| top_level.get(name).copied());
            }
        }

        Ok(())
    }

    /// Every class in the manifest, nested ones included, depth first
    pub fn all_classes(&self) -> Vec<&ClassEntry> {
        let mut out = Vec::new();
        let mut stack: Vec<&ClassEntry> = self.classes.iter().rev().collect();
        while let Some(class) = stack.pop() {
            out.push(class);
            stack.extend(class.nested.iter().rev());
        }
        out
    }

    /// Number of methods across all classes
    pub fn method_count(&self) -> usize {
        self.all_classes().iter().map(|c| c.methods.len()).sum()
    }

    /// Build the descriptor for a top-level class, with its superclass chain resolved
    ///
    /// Assumes the manifest has been validated.
    pub fn class_descriptor(&self, class: &ClassEntry) -> ClassDescriptor {
        let mut descriptor = class.descriptor();
        if let Some(superclass) = class
            .superclass
            .as_deref()
            .and_then(|name| self.classes.iter().find(|c| c.name == name))
        {
            descriptor = descriptor.with_superclass(self.class_descriptor(superclass));
        }
        descriptor
    }

    /// Build the descriptor for a class nested in `enclosing`
    pub fn nested_descriptor(&self, class: &ClassEntry, enclosing: &ClassDescriptor) -> ClassDescriptor {
        self.class_descriptor(class).with_enclosing(enclosing.clone())
    }
}

impl ClassEntry {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("Class name cannot be empty");
        }

        if self.simple_name.as_deref() == Some("") {
            anyhow::bail!("Simple name of class '{}' cannot be empty", self.name);
        }

        for method in &self.methods {
            if method.name.is_empty() {
                anyhow::bail!("Method name cannot be empty in class '{}'", self.name);
            }
        }

        for nested in &self.nested {
            nested.validate()?;
        }

        Ok(())
    }

    /// Descriptor for this class alone, without hierarchy
    fn descriptor(&self) -> ClassDescriptor {
        let mut descriptor = match &self.simple_name {
            Some(simple_name) => ClassDescriptor::new(&self.name, simple_name),
            None => ClassDescriptor::from_qualified(&self.name),
        };
        if let Some(style) = self.style {
            descriptor = descriptor.with_generation(DisplayNameGeneration::style(style));
        }
        descriptor
    }
}

impl MethodEntry {
    pub fn descriptor(&self) -> MethodDescriptor {
        MethodDescriptor {
            name: self.name.clone(),
            parameter_types: self
                .parameter_types
                .iter()
                .map(|t| TypeDescriptor::new(t.as_str()))
                .collect(),
            declaring_class: self.declaring_class.clone(),
        }
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "displayname.toml".to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    println!("✓ Plan: {} (style {})", manifest.plan.name, manifest.plan.style);
    println!("✓ Classes: {}", manifest.all_classes().len());
    println!("✓ Methods: {}", manifest.method_count());
    println!("\nManifest is valid!");

    Ok(())
}
