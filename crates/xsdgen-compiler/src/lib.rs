//! xsdgen Compiler
//!
//! Resolves a populated [`SchemaRegistry`] and produces the flattened view
//! code generation works from.
//!
//! ## Architecture
//!
//! - **Resolution**: compile every registered type, binding base and element
//!   type references to registry ids
//! - **Query**: read each complex type's effective elements, attributes, and
//!   text flag, now that the derivation chains are resolved
//!
//! ## Modules
//!
//! - [`passes`]: the resolution pass

pub mod passes;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::info;

use xsdgen_core::{Attribute, Element, QualifiedName, ResolverConfig, TypeId, XsdType};
use xsdgen_registry::SchemaRegistry;

pub use passes::{ResolutionOutput, ResolutionPass};

// Re-export CompilationError from core for convenience
pub use xsdgen_core::CompilationError;

/// A resolved complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledType {
    /// Registry id.
    pub id: TypeId,
    /// Qualified name the type was registered under.
    pub name: QualifiedName,
    /// Effective elements, inherited ones first.
    pub elements: Vec<Element>,
    /// Effective attributes with duplicate counts applied.
    pub attributes: Vec<Attribute>,
    /// Whether instances carry character content.
    pub contains_text: bool,
    /// Resolved base types, from immediate base to root.
    pub base_chain: Vec<TypeId>,
}

/// Complex types of a compiled schema, in registration order.
#[derive(Debug, Default)]
pub struct CompiledSchema {
    types: Vec<CompiledType>,
    by_local: FxHashMap<String, usize>,
}

impl CompiledSchema {
    /// Look up a compiled type by local name.
    ///
    /// With several namespaces defining the same local name, the first
    /// registered wins.
    pub fn get(&self, local: &str) -> Option<&CompiledType> {
        self.by_local.get(local).map(|&i| &self.types[i])
    }

    /// Look up a compiled type by registry id.
    pub fn get_by_id(&self, id: TypeId) -> Option<&CompiledType> {
        self.types.iter().find(|ty| ty.id == id)
    }

    /// Iterate over compiled types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledType> {
        self.types.iter()
    }

    /// Number of compiled types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no complex types were compiled.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn push(&mut self, ty: CompiledType) {
        self.by_local
            .entry(ty.name.local.clone())
            .or_insert(self.types.len());
        self.types.push(ty);
    }
}

/// Compilation failed; no output is produced.
#[derive(Debug, Error)]
#[error("schema compilation failed with {} error(s)", .errors.len())]
pub struct CompileFailure {
    /// Errors in the order they were found.
    pub errors: Vec<CompilationError>,
}

/// The main compiler entry point.
#[derive(Debug, Default)]
pub struct Compiler {
    config: ResolverConfig,
}

impl Compiler {
    /// Create a compiler with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the registry and collect every named complex type.
    pub fn compile(&self, registry: &SchemaRegistry) -> Result<CompiledSchema, CompileFailure> {
        let output = ResolutionPass::new(registry, &self.config).run();
        if !output.is_success() {
            return Err(CompileFailure {
                errors: output.errors,
            });
        }

        let mut schema = CompiledSchema::default();
        for (id, qname, entry) in registry.types() {
            let Some(complex) = entry.as_complex() else {
                continue;
            };
            schema.push(CompiledType {
                id,
                name: qname.clone(),
                elements: complex.elements(registry),
                attributes: complex.attributes(registry),
                contains_text: complex.contains_text(registry),
                base_chain: registry.base_chain(id),
            });
        }

        info!(
            types = output.types_compiled,
            complex = schema.len(),
            "schema compiled"
        );
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdgen_core::{CompilationErrorKind, ComplexType, Extension, Sequence, SimpleType};

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::with_builtins().with_target_namespace("urn:test");
        registry.bind_prefix("tns", "urn:test").unwrap();
        registry
    }

    #[test]
    fn empty_registry_compiles() {
        let schema = Compiler::default()
            .compile(&SchemaRegistry::with_builtins())
            .unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn only_complex_types_are_listed() {
        let mut registry = registry();
        registry.register_type(SimpleType::new("Sku")).unwrap();
        let item = registry
            .register_type(ComplexType::new("Item").with_sequence(Sequence::new(vec![
                Element::new("sku").with_type("tns:Sku"),
            ])))
            .unwrap();

        let schema = Compiler::default().compile(&registry).unwrap();
        assert_eq!(schema.len(), 1);

        let compiled = schema.get("Item").unwrap();
        assert_eq!(compiled.id, item);
        assert_eq!(compiled.name, QualifiedName::new("urn:test", "Item"));
        assert_eq!(schema.get_by_id(item), Some(compiled));
        assert!(schema.get("Sku").is_none());
    }

    #[test]
    fn extension_of_string_contains_text() {
        let mut registry = registry();
        registry
            .register_type(
                ComplexType::new("Label")
                    .with_content(Extension::new("xsd:string").with_attribute(Attribute::new("lang"))),
            )
            .unwrap();

        let schema = Compiler::default().compile(&registry).unwrap();
        let label = schema.get("Label").unwrap();
        assert!(label.contains_text);
        assert_eq!(label.attributes.len(), 1);
        assert_eq!(label.base_chain.len(), 1);
    }

    #[test]
    fn failure_carries_all_errors() {
        let mut registry = registry();
        registry
            .register_type(ComplexType::new("A").with_content(Extension::new("tns:Nope")))
            .unwrap();
        registry
            .register_type(ComplexType::new("B").with_content(Extension::new(" ")))
            .unwrap();

        let compiler = Compiler::new(ResolverConfig::default().with_fail_fast(false));
        let failure = compiler.compile(&registry).unwrap_err();
        assert_eq!(failure.errors.len(), 2);
        assert_eq!(failure.errors[1].kind(), CompilationErrorKind::EmptyBaseReference);
        assert_eq!(failure.to_string(), "schema compilation failed with 2 error(s)");
    }

    #[test]
    fn cycle_fails_on_every_compile() {
        let mut registry = registry();
        registry
            .register_type(ComplexType::new("A").with_content(Extension::new("tns:B")))
            .unwrap();
        registry
            .register_type(ComplexType::new("B").with_content(Extension::new("tns:A")))
            .unwrap();

        let compiler = Compiler::default();
        for _ in 0..2 {
            let failure = compiler.compile(&registry).unwrap_err();
            assert_eq!(
                failure.errors,
                [CompilationError::CircularExtension { name: "A".into() }]
            );
        }
    }

    #[test]
    fn fail_fast_is_the_default() {
        let mut registry = registry();
        registry
            .register_type(ComplexType::new("A").with_content(Extension::new("tns:Nope")))
            .unwrap();
        registry
            .register_type(ComplexType::new("B").with_content(Extension::new("tns:Gone")))
            .unwrap();

        assert!(Compiler::default().config().fail_fast);
        let failure = Compiler::default().compile(&registry).unwrap_err();
        assert_eq!(failure.errors.len(), 1);
    }
}
