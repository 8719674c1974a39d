//! xsdgen - XML Schema type resolution for code generation.
//!
//! Populate a [`SchemaRegistry`] with the types of a schema, then hand it to
//! a [`Compiler`] to resolve every derivation and element type reference.
//! The resulting [`CompiledSchema`] lists each complex type's effective
//! elements and attributes, inherited ones first.
//!
//! ```
//! use xsdgen::prelude::*;
//!
//! let mut registry = SchemaRegistry::with_builtins().with_target_namespace("urn:shop");
//! registry.bind_prefix("tns", "urn:shop").unwrap();
//! registry
//!     .register_type(ComplexType::new("Party").with_sequence(Sequence::new(vec![Element::new("name")])))
//!     .unwrap();
//! registry
//!     .register_type(ComplexType::new("Customer").with_content(
//!         Extension::new("tns:Party").with_sequence(Sequence::new(vec![Element::new("email")])),
//!     ))
//!     .unwrap();
//!
//! let schema = Compiler::default().compile(&registry).unwrap();
//! let names: Vec<_> = schema.get("Customer").unwrap().elements.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["name", "email"]);
//! ```

pub use xsdgen_compiler as compiler;
pub use xsdgen_core as core;
pub use xsdgen_registry as registry;

pub use xsdgen_compiler::{CompileFailure, CompiledSchema, CompiledType, Compiler};
pub use xsdgen_core::{
    Attribute, AttributeUse, CompilationError, CompilationErrorKind, ComplexType, ConfigError,
    Content, Element, Extension, MaxOccurs, QualifiedName, RegistrationError, ResolverConfig,
    Restriction, Sequence, SimpleType, Span, TypeEntry, TypeId, XsdType, XsdgenError,
};
pub use xsdgen_registry::SchemaRegistry;

// Re-export main types
pub mod prelude {
    pub use xsdgen_compiler::{CompileFailure, CompiledSchema, CompiledType, Compiler};
    pub use xsdgen_core::{
        Attribute, AttributeUse, BuiltinType, ComplexType, Element, Extension, MaxOccurs,
        Restriction, ResolverConfig, SchemaLookup, Sequence, SimpleType, Span, XsdType,
    };
    pub use xsdgen_registry::SchemaRegistry;
}
