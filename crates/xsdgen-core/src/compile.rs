//! Compile-phase state shared by every type in one run.
//!
//! Compiling a type resolves its references and then compiles the types it
//! derives from. [`CompileContext::compile_type`] is the single entry point
//! for compiling a named type, so each one is compiled at most once and a
//! derivation chain that loops back on itself is reported instead of
//! recursing forever.
//!
//! A type whose compile failed is not retried: its error has already been
//! returned once, and types depending on it skip over it.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{CompilationError, Element, SchemaLookup, TypeId, XsdType};

/// State for a single compile run over a registry.
pub struct CompileContext<'s> {
    schema: &'s dyn SchemaLookup,
    /// Types whose compile has started but not finished.
    in_progress: FxHashSet<TypeId>,
    /// Types compiled successfully.
    completed: FxHashSet<TypeId>,
    /// Types whose compile returned an error.
    failed: FxHashSet<TypeId>,
}

impl<'s> CompileContext<'s> {
    /// Create a context over a populated registry.
    pub fn new(schema: &'s dyn SchemaLookup) -> Self {
        Self {
            schema,
            in_progress: FxHashSet::default(),
            completed: FxHashSet::default(),
            failed: FxHashSet::default(),
        }
    }

    /// The registry being compiled.
    pub fn schema(&self) -> &'s dyn SchemaLookup {
        self.schema
    }

    /// Resolve a reference through the registry.
    pub fn find_referenced_type(&self, reference: &str) -> Option<TypeId> {
        self.schema.find_referenced_type(reference)
    }

    /// Whether a type has been compiled in this run.
    pub fn is_completed(&self, id: TypeId) -> bool {
        self.completed.contains(&id)
    }

    /// Whether a type's compile failed in this run.
    pub fn has_failed(&self, id: TypeId) -> bool {
        self.failed.contains(&id)
    }

    /// Number of named types compiled so far.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Compile a named type unless it already has been, or already failed.
    ///
    /// Returns [`CompilationError::CircularExtension`] when `id` is reached
    /// again while its own compile is still running.
    pub fn compile_type(
        &mut self,
        id: TypeId,
        parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        if self.completed.contains(&id) || self.failed.contains(&id) {
            return Ok(());
        }
        let schema = self.schema;
        let Some(entry) = schema.type_entry(id) else {
            return Ok(());
        };

        if !self.in_progress.insert(id) {
            return Err(CompilationError::CircularExtension {
                name: entry.name().to_string(),
            });
        }

        trace!(%id, name = entry.name(), "compiling type");
        let result = entry.compile(self, parent);
        self.in_progress.remove(&id);
        match result {
            Ok(()) => {
                self.completed.insert(id);
                Ok(())
            }
            Err(e) => {
                self.failed.insert(id);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::test_support::TestSchema;
    use crate::{BuiltinType, ComplexType, CompilationErrorKind, Content, Extension};

    #[test]
    fn compiles_each_type_once() {
        let mut schema = TestSchema::default();
        let string = schema.add("xsd:string", BuiltinType::STRING);
        let base = schema.add("Base", ComplexType::new("Base"));

        let mut ctx = CompileContext::new(&schema);
        ctx.compile_type(base, None).unwrap();
        ctx.compile_type(base, None).unwrap();
        assert!(ctx.is_completed(base));
        assert!(!ctx.is_completed(string));
        assert_eq!(ctx.completed_count(), 1);
    }

    #[test]
    fn detects_cycle() {
        let mut schema = TestSchema::default();
        let a = schema.add(
            "A",
            ComplexType::new("A").with_content(Content::Extension(Extension::new("B"))),
        );
        schema.add(
            "B",
            ComplexType::new("B").with_content(Content::Extension(Extension::new("A"))),
        );

        let mut ctx = CompileContext::new(&schema);
        let err = ctx.compile_type(a, None).unwrap_err();
        assert_eq!(err.kind(), CompilationErrorKind::CircularExtension);
        assert_eq!(err, CompilationError::CircularExtension { name: "A".into() });
        assert!(ctx.has_failed(a));
        // Already reported; not compiled again.
        ctx.compile_type(a, None).unwrap();
        assert!(!ctx.is_completed(a));
    }

    #[test]
    fn self_extension_is_a_cycle() {
        let mut schema = TestSchema::default();
        let a = schema.add(
            "A",
            ComplexType::new("A").with_content(Content::Extension(Extension::new("A"))),
        );

        let mut ctx = CompileContext::new(&schema);
        let err = ctx.compile_type(a, None).unwrap_err();
        assert_eq!(err.kind(), CompilationErrorKind::CircularExtension);
        assert!(!ctx.is_completed(a));
    }
}
