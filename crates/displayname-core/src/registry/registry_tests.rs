#![allow(non_snake_case)]

use super::*;
use crate::Style;
use crate::generator::parameter_types_as_string;

/// Generator that renders `Outer -> method` style sentences
#[derive(Debug)]
struct Sentences;

impl DisplayNameGenerator for Sentences {
    fn generate_display_name_for_class(
        &self,
        test_class: &ClassDescriptor,
    ) -> NamingResult<String> {
        Ok(format!("Tests for {}", test_class.require_class()?.simple_name))
    }

    fn generate_display_name_for_nested_class(
        &self,
        nested_class: &ClassDescriptor,
    ) -> NamingResult<String> {
        Ok(format!("when {}", nested_class.require_nested()?.simple_name))
    }

    fn generate_display_name_for_method(
        &self,
        test_class: &ClassDescriptor,
        test_method: &MethodDescriptor,
    ) -> NamingResult<String> {
        let test_class = test_class.require_class()?;
        let test_method = test_method.require_method()?;
        Ok(format!(
            "{} -> {}{}",
            test_class.simple_name,
            test_method.name,
            parameter_types_as_string(test_method)
        ))
    }
}

fn registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register("sentences", Sentences);
    registry
}

// Registration

#[test]
fn GeneratorRegistry___register___makes_generator_available() {
    let registry = registry();

    assert!(registry.contains("sentences"));
    assert!(!registry.contains("missing"));
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["sentences"]);
}

#[test]
fn GeneratorRegistry___register_same_name___returns_previous() {
    let mut registry = registry();

    let previous = registry.register("sentences", Sentences);

    assert!(previous.is_some());
    assert_eq!(registry.names().count(), 1);
}

// Resolution

#[test]
fn GeneratorRegistry___resolve_style___returns_builtin() {
    let registry = GeneratorRegistry::new();
    let class = ClassDescriptor::from_qualified("com.example.Calculator_Tests");

    let generator = registry
        .resolve(&DisplayNameGeneration::style(Style::Underscore))
        .unwrap();

    assert_eq!(
        generator.generate_display_name_for_class(&class).unwrap(),
        "Calculator Tests"
    );
}

#[test]
fn GeneratorRegistry___resolve_custom___overrides_style() {
    let registry = registry();
    let class = ClassDescriptor::from_qualified("com.example.Calculator_Tests");
    let generation = DisplayNameGeneration {
        style: Style::Underscore,
        generator: Some("sentences".into()),
    };

    let generator = registry.resolve(&generation).unwrap();

    assert_eq!(
        generator.generate_display_name_for_class(&class).unwrap(),
        "Tests for Calculator_Tests"
    );
}

#[test]
fn GeneratorRegistry___resolve_unknown_generator___returns_error() {
    let registry = GeneratorRegistry::new();

    let result = registry.resolve(&DisplayNameGeneration::custom("sentences"));

    assert_eq!(
        result.unwrap_err(),
        NamingError::UnknownGenerator("sentences".into())
    );
}

// Inheritance

#[test]
fn GeneratorRegistry___effective_generation_unconfigured___returns_default() {
    let registry = GeneratorRegistry::new();
    let class = ClassDescriptor::from_qualified("com.example.Calculator");

    assert_eq!(
        registry.effective_generation(&class),
        DisplayNameGeneration::default()
    );
}

#[test]
fn GeneratorRegistry___effective_generation___inherits_from_superclass_chain() {
    let registry = GeneratorRegistry::new();
    let root = ClassDescriptor::from_qualified("com.example.RootTests")
        .with_generation(DisplayNameGeneration::style(Style::Underscore));
    let base = ClassDescriptor::from_qualified("com.example.BaseTests").with_superclass(root);
    let class = ClassDescriptor::from_qualified("com.example.Calculator").with_superclass(base);

    assert_eq!(
        registry.effective_generation(&class),
        DisplayNameGeneration::style(Style::Underscore)
    );
}

#[test]
fn GeneratorRegistry___effective_generation___local_overrides_inherited() {
    let registry = GeneratorRegistry::new();
    let base = ClassDescriptor::from_qualified("com.example.BaseTests")
        .with_generation(DisplayNameGeneration::style(Style::Underscore));
    let class = ClassDescriptor::from_qualified("com.example.Calculator")
        .with_generation(DisplayNameGeneration::custom("sentences"))
        .with_superclass(base);

    assert_eq!(
        registry.effective_generation(&class),
        DisplayNameGeneration::custom("sentences")
    );
}

#[test]
fn GeneratorRegistry___effective_generation___inherits_from_enclosing_class() {
    let registry = GeneratorRegistry::new();
    let outer = ClassDescriptor::from_qualified("com.example.Outer")
        .with_generation(DisplayNameGeneration::style(Style::Underscore));
    let nested = ClassDescriptor::new("com.example.Outer$Inner_Fixture", "Inner_Fixture")
        .with_enclosing(outer);

    assert_eq!(
        registry.effective_generation(&nested),
        DisplayNameGeneration::style(Style::Underscore)
    );
}

#[test]
fn GeneratorRegistry___effective_generation___superclass_before_enclosing() {
    let registry = GeneratorRegistry::new();
    let outer = ClassDescriptor::from_qualified("com.example.Outer")
        .with_generation(DisplayNameGeneration::style(Style::Underscore));
    let base = ClassDescriptor::from_qualified("com.example.BaseFixture")
        .with_generation(DisplayNameGeneration::custom("sentences"));
    let nested = ClassDescriptor::new("com.example.Outer$Inner", "Inner")
        .with_superclass(base)
        .with_enclosing(outer);

    assert_eq!(
        registry.effective_generation(&nested),
        DisplayNameGeneration::custom("sentences")
    );
}

#[test]
fn GeneratorRegistry___effective_generation___walks_multiple_enclosing_levels() {
    let registry = GeneratorRegistry::new();
    let outer = ClassDescriptor::from_qualified("com.example.Outer")
        .with_generation(DisplayNameGeneration::style(Style::Underscore));
    let middle = ClassDescriptor::new("com.example.Outer$Middle", "Middle").with_enclosing(outer);
    let inner =
        ClassDescriptor::new("com.example.Outer$Middle$Inner", "Inner").with_enclosing(middle);

    assert_eq!(
        registry.effective_generation(&inner),
        DisplayNameGeneration::style(Style::Underscore)
    );
}

#[test]
fn GeneratorRegistry___default_generation___applies_to_unconfigured_classes() {
    let registry = GeneratorRegistry::new()
        .with_default_generation(DisplayNameGeneration::style(Style::Underscore));
    let class = ClassDescriptor::from_qualified("com.example.Calculator_Tests");

    assert_eq!(
        registry.effective_generation(&class),
        DisplayNameGeneration::style(Style::Underscore)
    );
    assert_eq!(
        registry.display_names().class_name(&class).unwrap(),
        "Calculator Tests"
    );
}

#[test]
fn GeneratorRegistry___default_generation___does_not_override_declared() {
    let registry = GeneratorRegistry::new()
        .with_default_generation(DisplayNameGeneration::style(Style::Underscore));
    let class = ClassDescriptor::from_qualified("com.example.Calculator_Tests")
        .with_generation(DisplayNameGeneration::style(Style::Default));

    assert_eq!(
        registry.display_names().class_name(&class).unwrap(),
        "Calculator_Tests"
    );
}

// DisplayNames view

#[test]
fn DisplayNames___unconfigured_class___uses_default_style() {
    let registry = GeneratorRegistry::new();
    let names = registry.display_names();
    let class = ClassDescriptor::from_qualified("com.example.Calculator_Tests");
    let method = MethodDescriptor::new("add_two_numbers").with_parameters(["int", "int"]);

    assert_eq!(names.class_name(&class).unwrap(), "Calculator_Tests");
    assert_eq!(
        names.method_name(&class, &method).unwrap(),
        "add_two_numbers(int, int)"
    );
}

#[test]
fn DisplayNames___nested_class___inherits_enclosing_style() {
    let registry = GeneratorRegistry::new();
    let names = registry.display_names();
    let outer = ClassDescriptor::from_qualified("com.example.Calculator")
        .with_generation(DisplayNameGeneration::style(Style::Underscore));
    let nested = ClassDescriptor::new("com.example.Calculator$Inner_Fixture", "Inner_Fixture")
        .with_enclosing(outer);

    assert_eq!(names.nested_class_name(&nested).unwrap(), "Inner Fixture");
}

#[test]
fn DisplayNames___custom_generator___used_for_method() {
    let registry = registry();
    let names = registry.display_names();
    let class = ClassDescriptor::from_qualified("com.example.Calculator")
        .with_generation(DisplayNameGeneration::custom("sentences"));
    let method = MethodDescriptor::new("adds").with_parameter("int");

    assert_eq!(
        names.method_name(&class, &method).unwrap(),
        "Calculator -> adds(int)"
    );
}

#[test]
fn DisplayNames___unknown_generator___propagates_error() {
    let registry = GeneratorRegistry::new();
    let class = ClassDescriptor::from_qualified("com.example.Calculator")
        .with_generation(DisplayNameGeneration::custom("missing"));

    let result = registry.display_names().class_name(&class);

    assert!(matches!(result, Err(NamingError::UnknownGenerator(_))));
}

#[test]
fn DisplayNames___absent_class___returns_invalid_argument() {
    let registry = GeneratorRegistry::new();

    let result = registry.display_names().class_name(&ClassDescriptor::default());

    assert!(matches!(result, Err(NamingError::InvalidArgument(_))));
}

#[test]
fn GeneratorRegistry___shared_across_threads___produces_same_names() {
    let registry = Arc::new(registry());
    let class = ClassDescriptor::from_qualified("com.example.Calculator")
        .with_generation(DisplayNameGeneration::custom("sentences"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let class = class.clone();
            std::thread::spawn(move || registry.display_names().class_name(&class).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Tests for Calculator");
    }
}
