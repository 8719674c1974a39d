//! Element declarations.

use std::cell::OnceCell;

use tracing::trace;

use crate::{CompilationError, CompileContext, Span, TypeId, generated_identifier};

/// Upper bound of an element's occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxOccurs {
    /// At most this many occurrences.
    Bounded(u32),
    /// `maxOccurs="unbounded"`.
    #[default]
    Unbounded,
}

/// A locally declared element inside a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Name as written in the schema.
    pub name: String,
    /// Generated identifier, the key for deduplication and collisions.
    pub ident: String,
    /// `type` reference, if the element names its type.
    pub type_ref: Option<String>,
    /// `minOccurs`.
    pub min_occurs: u32,
    /// `maxOccurs`.
    pub max_occurs: MaxOccurs,
    /// Declaration site.
    pub span: Span,
    resolved_type: OnceCell<TypeId>,
}

impl Element {
    /// Create an element occurring exactly once, with a derived identifier.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let ident = generated_identifier(&name);
        Self {
            name,
            ident,
            type_ref: None,
            min_occurs: 1,
            max_occurs: MaxOccurs::Bounded(1),
            span: Span::unknown(),
            resolved_type: OnceCell::new(),
        }
    }

    // === Builder Methods ===

    /// Set the `type` reference.
    pub fn with_type(mut self, reference: impl Into<String>) -> Self {
        self.type_ref = Some(reference.into());
        self
    }

    /// Override the generated identifier.
    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = ident.into();
        self
    }

    /// Set the occurrence bounds.
    pub fn with_occurs(mut self, min: u32, max: MaxOccurs) -> Self {
        self.min_occurs = min;
        self.max_occurs = max;
        self
    }

    /// Set the declaration site.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    // === Queries ===

    /// Whether the element may occur more than once.
    pub fn is_repeated(&self) -> bool {
        match self.max_occurs {
            MaxOccurs::Bounded(n) => n > 1,
            MaxOccurs::Unbounded => true,
        }
    }

    /// Whether the element may be absent.
    pub fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }

    /// The registry type the `type` reference resolved to, once compiled.
    pub fn resolved_type(&self) -> Option<TypeId> {
        self.resolved_type.get().copied()
    }

    /// Resolve the `type` reference against the registry.
    ///
    /// The referenced type itself is not compiled here; named types are
    /// compiled by the resolution pass, which keeps self-referencing element
    /// definitions legal.
    pub fn compile(&self, ctx: &mut CompileContext<'_>) -> Result<(), CompilationError> {
        let Some(reference) = self.type_ref.as_deref() else {
            return Ok(());
        };
        if self.resolved_type.get().is_some() {
            return Ok(());
        }

        let id = ctx.find_referenced_type(reference).ok_or_else(|| {
            CompilationError::UnknownElementType {
                reference: reference.to_string(),
                element: self.name.clone(),
                span: self.span,
            }
        })?;
        trace!(element = %self.name, reference, %id, "resolved element type");
        // Unset was checked above and compile is single-threaded.
        let _ = self.resolved_type.set(id);
        Ok(())
    }
}
