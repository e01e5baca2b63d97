//! Render display names for every class and method in a manifest

use crate::manifest::{ClassEntry, Manifest};
use anyhow::{Context, Result};
use displayname_core::{
    ClassDescriptor, DisplayNameGeneration, DisplayNames, GeneratorRegistry, LogLevel, Style,
};
use serde::Serialize;

/// A rendered class with its methods and nested classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedClass {
    pub class: String,
    pub display_name: String,
    pub methods: Vec<RenderedMethod>,
    pub nested: Vec<RenderedClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMethod {
    pub method: String,
    pub display_name: String,
}

/// Compute display names for the whole manifest
///
/// `style_override` replaces the plan-wide default style.
pub fn render_manifest(
    manifest: &Manifest,
    style_override: Option<Style>,
) -> Result<Vec<RenderedClass>> {
    let default_style = style_override.unwrap_or(manifest.plan.style);
    let registry =
        GeneratorRegistry::new().with_default_generation(DisplayNameGeneration::style(default_style));
    let names = registry.display_names();

    manifest
        .classes
        .iter()
        .map(|class| {
            let descriptor = manifest.class_descriptor(class);
            let display_name = names
                .class_name(&descriptor)
                .with_context(|| format!("Failed to name class '{}'", class.name))?;
            render_members(manifest, &names, class, descriptor, display_name)
        })
        .collect()
}

fn render_members(
    manifest: &Manifest,
    names: &DisplayNames<'_>,
    class: &ClassEntry,
    descriptor: ClassDescriptor,
    display_name: String,
) -> Result<RenderedClass> {
    let methods = class
        .methods
        .iter()
        .map(|method| {
            let display_name = names
                .method_name(&descriptor, &method.descriptor())
                .with_context(|| {
                    format!("Failed to name method '{}' of '{}'", method.name, class.name)
                })?;
            Ok(RenderedMethod {
                method: method.name.clone(),
                display_name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let nested = class
        .nested
        .iter()
        .map(|nested| {
            let nested_descriptor = manifest.nested_descriptor(nested, &descriptor);
            let display_name = names
                .nested_class_name(&nested_descriptor)
                .with_context(|| format!("Failed to name nested class '{}'", nested.name))?;
            render_members(manifest, names, nested, nested_descriptor, display_name)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedClass {
        class: class.name.clone(),
        display_name,
        methods,
        nested,
    })
}

/// Format rendered classes as an indented tree
pub fn format_tree(classes: &[RenderedClass]) -> String {
    let mut out = String::new();
    for class in classes {
        write_class(&mut out, class, 0);
    }
    out
}

fn write_class(out: &mut String, class: &RenderedClass, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{}\n", class.display_name));
    for method in &class.methods {
        out.push_str(&format!("{indent}  {}\n", method.display_name));
    }
    for nested in &class.nested {
        write_class(out, nested, depth + 1);
    }
}

/// Render command implementation
pub fn run(
    manifest_path: Option<String>,
    style: Option<String>,
    log_level: String,
    json: bool,
) -> Result<()> {
    let level: LogLevel = log_level.parse()?;
    displayname_logging::init_logging(level)?;

    let path = manifest_path.unwrap_or_else(|| "displayname.toml".to_string());
    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    let style_override = style.as_deref().map(str::parse::<Style>).transpose()?;
    tracing::info!(plan = %manifest.plan.name, "rendering display names");

    let rendered = render_manifest(&manifest, style_override)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print!("{}", format_tree(&rendered));
    }

    Ok(())
}
