//! xsdgen Registry crate.
//!
//! Owns the named types of a schema and resolves textual type references
//! against them. See [`SchemaRegistry`].

mod registry;

pub use registry::SchemaRegistry;

// Re-export from core so callers building a registry need one import
pub use xsdgen_core::{QualifiedName, RegistrationError, SchemaLookup, TypeEntry, TypeId};
