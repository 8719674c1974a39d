//! The registry seam used by type resolution.

use crate::{TypeEntry, TypeId};

/// Read access to a populated schema type table.
///
/// Implemented by the schema registry. Types hold [`TypeId`]s into it rather
/// than copies of the types they reference.
pub trait SchemaLookup {
    /// Resolve a textual reference (`prefix:local` or `local`) to a type.
    fn find_referenced_type(&self, reference: &str) -> Option<TypeId>;

    /// Get the entry stored under an id.
    fn type_entry(&self, id: TypeId) -> Option<&TypeEntry>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Minimal lookup keyed by the literal reference text.
    #[derive(Default)]
    pub(crate) struct TestSchema {
        entries: Vec<(String, TypeEntry)>,
    }

    impl TestSchema {
        pub(crate) fn add(&mut self, reference: &str, entry: impl Into<TypeEntry>) -> TypeId {
            let id = TypeId::new(self.entries.len() as u32);
            self.entries.push((reference.to_string(), entry.into()));
            id
        }
    }

    impl SchemaLookup for TestSchema {
        fn find_referenced_type(&self, reference: &str) -> Option<TypeId> {
            self.entries
                .iter()
                .position(|(r, _)| r == reference)
                .map(|i| TypeId::new(i as u32))
        }

        fn type_entry(&self, id: TypeId) -> Option<&TypeEntry> {
            self.entries.get(id.slot()).map(|(_, entry)| entry)
        }
    }
}
