//! Handles into the schema type table.
//!
//! A [`TypeId`] is how a type refers to another type it does not own, such as
//! the base of an extension. The registry owns the entries; everything else
//! holds ids.

use std::fmt;

/// Index of a named type in the schema registry.
///
/// # Example
///
/// ```
/// use xsdgen_core::TypeId;
///
/// let id = TypeId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a new type ID with the given index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the underlying index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// The index as a `usize`, for slot lookups.
    #[inline]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type_{}", self.0)
    }
}

impl From<u32> for TypeId {
    fn from(index: u32) -> Self {
        Self::new(index)
    }
}

impl From<TypeId> for u32 {
    fn from(id: TypeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_id_creation() {
        let id = TypeId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id.slot(), 42);
    }

    #[test]
    fn type_id_display() {
        assert_eq!(format!("{}", TypeId::new(5)), "type_5");
    }

    #[test]
    fn type_id_conversions() {
        let id: TypeId = 10.into();
        let raw: u32 = id.into();
        assert_eq!(raw, 10);
    }
}
