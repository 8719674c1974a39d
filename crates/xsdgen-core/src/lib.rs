//! Core types for the xsdgen schema compiler.
//!
//! ## Modules
//!
//! - [`entries`]: elements, attributes, sequences, and the registry's type entry
//! - [`types`]: the [`XsdType`] capability and its variants
//! - [`compile`]: per-run compile state with derivation cycle detection
//! - [`lookup`]: the [`SchemaLookup`] seam implemented by the registry
//! - [`error`]: registration, compilation, and configuration errors
//! - [`config`]: resolver configuration

pub mod compile;
pub mod config;
pub mod entries;
pub mod error;
pub mod ident;
pub mod ids;
pub mod lookup;
pub mod qualified_name;
pub mod span;
pub mod types;

pub use compile::CompileContext;
pub use config::ResolverConfig;
pub use entries::{Attribute, AttributeUse, Element, MaxOccurs, Sequence, TypeEntry};
pub use error::{
    CompilationError, CompilationErrorKind, ConfigError, RegistrationError, XsdgenError,
};
pub use ident::generated_identifier;
pub use ids::TypeId;
pub use lookup::SchemaLookup;
pub use qualified_name::{QualifiedName, XSD_NAMESPACE, XSD_STRING_REFERENCE, split_reference};
pub use span::Span;
pub use types::{BuiltinType, ComplexType, Content, Extension, Restriction, SimpleType, XsdType};
