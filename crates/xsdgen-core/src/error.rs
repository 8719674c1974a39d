//! Error types for schema registration and compilation.
//!
//! ## Error Hierarchy
//!
//! ```text
//! XsdgenError (top-level wrapper)
//! ├── ConfigError       - Resolver configuration could not be loaded
//! ├── RegistrationError - Building the type registry failed
//! └── CompilationError  - Resolving references during compile failed
//! ```
//!
//! Compilation errors are fatal for the run: the driver reports them and
//! produces no output.

use thiserror::Error;

use crate::Span;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while loading a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for the config shape.
    #[error("invalid resolver configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while populating the schema registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type with this qualified name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A prefix was bound to two different namespaces.
    #[error("prefix '{prefix}' is bound to '{existing}', cannot rebind to '{new}'")]
    ConflictingPrefix {
        /// The prefix being bound.
        prefix: String,
        /// Namespace the prefix already maps to.
        existing: String,
        /// Namespace the caller tried to bind.
        new: String,
    },
}

// ============================================================================
// Compilation Errors
// ============================================================================

/// Discriminant of a [`CompilationError`], for matching without fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilationErrorKind {
    /// See [`CompilationError::EmptyBaseReference`].
    EmptyBaseReference,
    /// See [`CompilationError::UnknownBaseType`].
    UnknownBaseType,
    /// See [`CompilationError::CircularExtension`].
    CircularExtension,
    /// See [`CompilationError::UnknownElementType`].
    UnknownElementType,
}

/// Errors that abort compilation of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// An `extension` or `restriction` was declared without a `base`.
    #[error("at {span}: derivation without base type{}", in_element(.element))]
    EmptyBaseReference {
        /// Enclosing element, when the type is declared inline in one.
        element: Option<String>,
        /// Where the derivation was declared.
        span: Span,
    },

    /// The `base` reference does not name any registered type.
    #[error("at {span}: unknown base type '{reference}'")]
    UnknownBaseType {
        /// The reference text as written in the schema.
        reference: String,
        /// Where the derivation was declared.
        span: Span,
    },

    /// Following base references leads back to a type still being compiled.
    #[error("circular type derivation through '{name}'")]
    CircularExtension {
        /// The type that closes the cycle.
        name: String,
    },

    /// An element's `type` reference does not name any registered type.
    #[error("at {span}: element '{element}' has unknown type '{reference}'")]
    UnknownElementType {
        /// The reference text as written in the schema.
        reference: String,
        /// The element carrying the reference.
        element: String,
        /// Where the element was declared.
        span: Span,
    },
}

fn in_element(element: &Option<String>) -> String {
    match element {
        Some(name) => format!(" in element '{name}'"),
        None => String::new(),
    }
}

impl CompilationError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::EmptyBaseReference { span, .. } => *span,
            CompilationError::UnknownBaseType { span, .. } => *span,
            CompilationError::CircularExtension { .. } => Span::default(),
            CompilationError::UnknownElementType { span, .. } => *span,
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> CompilationErrorKind {
        match self {
            CompilationError::EmptyBaseReference { .. } => CompilationErrorKind::EmptyBaseReference,
            CompilationError::UnknownBaseType { .. } => CompilationErrorKind::UnknownBaseType,
            CompilationError::CircularExtension { .. } => CompilationErrorKind::CircularExtension,
            CompilationError::UnknownElementType { .. } => CompilationErrorKind::UnknownElementType,
        }
    }

    /// The offending reference text, if the error is about a reference.
    pub fn reference(&self) -> Option<&str> {
        match self {
            CompilationError::EmptyBaseReference { .. } => Some(""),
            CompilationError::UnknownBaseType { reference, .. } => Some(reference),
            CompilationError::CircularExtension { .. } => None,
            CompilationError::UnknownElementType { reference, .. } => Some(reference),
        }
    }
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Unified error for callers that drive a whole run.
#[derive(Debug, Error)]
pub enum XsdgenError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registration error.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Compilation error.
    #[error(transparent)]
    Compilation(#[from] CompilationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_display() {
        let err = CompilationError::EmptyBaseReference {
            element: Some("order".into()),
            span: Span::new(4, 9),
        };
        assert_eq!(
            err.to_string(),
            "at 4:9: derivation without base type in element 'order'"
        );

        let err = CompilationError::EmptyBaseReference {
            element: None,
            span: Span::unknown(),
        };
        assert_eq!(err.to_string(), "at <unknown>: derivation without base type");
    }

    #[test]
    fn unknown_base_display() {
        let err = CompilationError::UnknownBaseType {
            reference: "tns:Missing".into(),
            span: Span::new(10, 3),
        };
        assert_eq!(err.to_string(), "at 10:3: unknown base type 'tns:Missing'");
        assert_eq!(err.span(), Span::new(10, 3));
        assert_eq!(err.kind(), CompilationErrorKind::UnknownBaseType);
        assert_eq!(err.reference(), Some("tns:Missing"));
    }

    #[test]
    fn circular_has_no_span() {
        let err = CompilationError::CircularExtension { name: "A".into() };
        assert!(!err.span().is_known());
        assert_eq!(err.reference(), None);
    }

    #[test]
    fn registration_display() {
        let err = RegistrationError::ConflictingPrefix {
            prefix: "tns".into(),
            existing: "urn:a".into(),
            new: "urn:b".into(),
        };
        assert_eq!(
            err.to_string(),
            "prefix 'tns' is bound to 'urn:a', cannot rebind to 'urn:b'"
        );
    }

    #[test]
    fn top_level_wraps_transparently() {
        let err: XsdgenError = RegistrationError::DuplicateType("Item".into()).into();
        assert_eq!(err.to_string(), "duplicate type: Item");
    }
}
