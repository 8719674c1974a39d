//! Complex type extension: a base type plus additions.
//!
//! ## Merge Rules
//!
//! Elements are the base type's elements followed by the extension's own
//! sequence. When both are present the result is deduplicated by generated
//! identifier, keeping the first occurrence, so an inherited element wins
//! over a local one with the same identifier.
//!
//! Attributes are the extension's own attributes, never removed. An
//! attribute whose identifier is already taken by an element or an earlier
//! attribute gets a non-zero `duplicate_count`.
//!
//! ```text
//! base:      [A, B]        own sequence: [B', C]
//! elements:  [A, B, C]     (B' dropped)
//! ```

use std::cell::OnceCell;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::{XsdType, base_entry, resolve_base};
use crate::{
    Attribute, CompilationError, CompileContext, Element, SchemaLookup, Sequence, Span, TypeId,
    XSD_STRING_REFERENCE,
};

/// An `xsd:extension` of a base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Reference to the base type, as written in the schema.
    pub base: String,
    /// Attributes declared directly on the extension.
    pub attributes: Vec<Attribute>,
    /// Locally declared elements.
    pub sequence: Option<Sequence>,
    /// Declaration site.
    pub span: Span,
    /// Set once by `compile`. Not owned: the registry owns the base type.
    resolved_base: OnceCell<TypeId>,
}

impl Extension {
    /// Create an extension of `base` with no additions.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            attributes: Vec::new(),
            sequence: None,
            span: Span::unknown(),
            resolved_base: OnceCell::new(),
        }
    }

    // === Builder Methods ===

    /// Add a directly declared attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the own sequence.
    pub fn with_sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Set the declaration site.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The base type, once compiled.
    pub fn resolved_base(&self) -> Option<TypeId> {
        self.resolved_base.get().copied()
    }
}

/// Keep the first element for each generated identifier.
fn dedup_by_ident(elements: &mut Vec<Element>) {
    let mut seen = FxHashSet::default();
    elements.retain(|el| seen.insert(el.ident.clone()));
}

impl XsdType for Extension {
    fn elements(&self, schema: &dyn SchemaLookup) -> Vec<Element> {
        let base = base_entry(&self.resolved_base, schema);
        let mut elements = match base {
            Some(base) => base.elements(schema),
            None => Vec::new(),
        };

        if let Some(sequence) = &self.sequence {
            elements.extend(sequence.elements().iter().cloned());
            // Without a base the own sequence is returned as declared.
            if base.is_some() {
                dedup_by_ident(&mut elements);
            }
        }
        elements
    }

    fn attributes(&self, schema: &dyn SchemaLookup) -> Vec<Attribute> {
        let mut idents: FxHashSet<String> = self
            .elements(schema)
            .into_iter()
            .map(|el| el.ident)
            .collect();

        self.attributes
            .iter()
            .map(|attr| {
                let mut attr = attr.clone();
                if idents.contains(&attr.ident) {
                    if attr.duplicate_count == 0 {
                        attr.duplicate_count += 1;
                    }
                    attr.duplicate_count += 1;
                    trace!(ident = %attr.ident, count = attr.duplicate_count, "attribute collides");
                }
                idents.insert(attr.ident.clone());
                attr
            })
            .collect()
    }

    fn contains_text(&self, schema: &dyn SchemaLookup) -> bool {
        self.base == XSD_STRING_REFERENCE
            || base_entry(&self.resolved_base, schema).is_some_and(|base| base.contains_text(schema))
    }

    fn compile(
        &self,
        ctx: &mut CompileContext<'_>,
        parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        if let Some(id) = self.resolved_base() {
            debug!(base = %self.base, %id, "extension already compiled");
            return Ok(());
        }

        if let Some(sequence) = &self.sequence {
            sequence.compile(ctx, parent)?;
        }
        resolve_base(&self.base, self.span, &self.resolved_base, ctx, parent)
    }
}
