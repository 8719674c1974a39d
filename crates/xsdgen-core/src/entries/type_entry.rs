//! TypeEntry enum for unified type storage.
//!
//! This module provides `TypeEntry`, a single enum that wraps every named
//! type kind for storage and iteration in the registry.

use crate::{
    Attribute, BuiltinType, CompilationError, CompileContext, ComplexType, Element, SchemaLookup,
    SimpleType, XsdType,
};

/// Unified type entry for registry storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    /// XML Schema built-in.
    Builtin(BuiltinType),
    /// Named simple type.
    Simple(SimpleType),
    /// Named complex type.
    Complex(ComplexType),
}

impl TypeEntry {
    /// Get the local name.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Builtin(b) => b.local,
            TypeEntry::Simple(s) => &s.name,
            TypeEntry::Complex(c) => &c.name,
        }
    }

    // === Type Checks ===

    /// Check if this is a built-in type.
    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeEntry::Builtin(_))
    }

    /// Check if this is a simple type.
    pub fn is_simple(&self) -> bool {
        matches!(self, TypeEntry::Simple(_))
    }

    /// Check if this is a complex type.
    pub fn is_complex(&self) -> bool {
        matches!(self, TypeEntry::Complex(_))
    }

    // === Downcasts ===

    /// Get as a complex type.
    pub fn as_complex(&self) -> Option<&ComplexType> {
        match self {
            TypeEntry::Complex(c) => Some(c),
            _ => None,
        }
    }

    /// Get as a simple type.
    pub fn as_simple(&self) -> Option<&SimpleType> {
        match self {
            TypeEntry::Simple(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a built-in.
    pub fn as_builtin(&self) -> Option<BuiltinType> {
        match self {
            TypeEntry::Builtin(b) => Some(*b),
            _ => None,
        }
    }

    fn as_type(&self) -> &dyn XsdType {
        match self {
            TypeEntry::Builtin(b) => b,
            TypeEntry::Simple(s) => s,
            TypeEntry::Complex(c) => c,
        }
    }
}

impl XsdType for TypeEntry {
    fn elements(&self, schema: &dyn SchemaLookup) -> Vec<Element> {
        self.as_type().elements(schema)
    }

    fn attributes(&self, schema: &dyn SchemaLookup) -> Vec<Attribute> {
        self.as_type().attributes(schema)
    }

    fn contains_text(&self, schema: &dyn SchemaLookup) -> bool {
        self.as_type().contains_text(schema)
    }

    fn compile(
        &self,
        ctx: &mut CompileContext<'_>,
        parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        self.as_type().compile(ctx, parent)
    }
}

impl From<BuiltinType> for TypeEntry {
    fn from(entry: BuiltinType) -> Self {
        TypeEntry::Builtin(entry)
    }
}

impl From<SimpleType> for TypeEntry {
    fn from(entry: SimpleType) -> Self {
        TypeEntry::Simple(entry)
    }
}

impl From<ComplexType> for TypeEntry {
    fn from(entry: ComplexType) -> Self {
        TypeEntry::Complex(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_checks() {
        let builtin: TypeEntry = BuiltinType::STRING.into();
        assert_eq!(builtin.name(), "string");
        assert!(builtin.is_builtin());
        assert_eq!(builtin.as_builtin(), Some(BuiltinType::STRING));

        let simple: TypeEntry = SimpleType::new("Code").into();
        assert!(simple.is_simple());
        assert!(simple.as_complex().is_none());

        let complex: TypeEntry = ComplexType::new("Order").into();
        assert!(complex.is_complex());
        assert_eq!(complex.as_complex().map(|c| c.name.as_str()), Some("Order"));
        assert!(complex.as_simple().is_none());
    }
}
