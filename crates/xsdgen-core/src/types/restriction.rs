//! Complex type restriction.

use std::cell::OnceCell;

use super::{XsdType, base_entry, resolve_base};
use crate::{
    Attribute, CompilationError, CompileContext, Element, SchemaLookup, Sequence, Span, TypeId,
    XSD_STRING_REFERENCE,
};

/// An `xsd:restriction` of a base type.
///
/// A restriction redeclares the content it keeps, so its elements and
/// attributes are its own. The base only matters for text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    /// Reference to the base type, as written in the schema.
    pub base: String,
    /// Attributes declared on the restriction.
    pub attributes: Vec<Attribute>,
    /// Redeclared elements.
    pub sequence: Option<Sequence>,
    /// Declaration site.
    pub span: Span,
    resolved_base: OnceCell<TypeId>,
}

impl Restriction {
    /// Create a restriction of `base` with no content.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            attributes: Vec::new(),
            sequence: None,
            span: Span::unknown(),
            resolved_base: OnceCell::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the redeclared sequence.
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

impl XsdType for Restriction {
    fn elements(&self, _schema: &dyn SchemaLookup) -> Vec<Element> {
        self.sequence
            .as_ref()
            .map(|seq| seq.elements().to_vec())
            .unwrap_or_default()
    }

    fn attributes(&self, _schema: &dyn SchemaLookup) -> Vec<Attribute> {
        self.attributes.clone()
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
        if self.resolved_base().is_some() {
            return Ok(());
        }
        if let Some(sequence) = &self.sequence {
            sequence.compile(ctx, parent)?;
        }
        resolve_base(&self.base, self.span, &self.resolved_base, ctx, parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::test_support::TestSchema;
    use crate::{CompilationErrorKind, ComplexType};

    #[test]
    fn elements_are_own_only() {
        let mut schema = TestSchema::default();
        schema.add(
            "Base",
            ComplexType::new("Base").with_sequence(Sequence::new(vec![
                Element::new("a"),
                Element::new("b"),
            ])),
        );
        let restriction =
            Restriction::new("Base").with_sequence(Sequence::new(vec![Element::new("a")]));
        let mut ctx = CompileContext::new(&schema);
        restriction.compile(&mut ctx, None).unwrap();

        let elements = restriction.elements(&schema);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "a");
    }

    #[test]
    fn attributes_are_returned_unchanged() {
        let schema = TestSchema::default();
        let restriction = Restriction::new("Base")
            .with_sequence(Sequence::new(vec![Element::new("id")]))
            .with_attribute(Attribute::new("id"));
        assert_eq!(restriction.attributes(&schema)[0].duplicate_count, 0);
    }

    #[test]
    fn string_base_contains_text() {
        let schema = TestSchema::default();
        assert!(Restriction::new("xsd:string").contains_text(&schema));
    }

    #[test]
    fn base_errors_match_extension() {
        let schema = TestSchema::default();
        let mut ctx = CompileContext::new(&schema);

        let err = Restriction::new("").compile(&mut ctx, None).unwrap_err();
        assert_eq!(err.kind(), CompilationErrorKind::EmptyBaseReference);

        let err = Restriction::new("Nope").compile(&mut ctx, None).unwrap_err();
        assert_eq!(err.kind(), CompilationErrorKind::UnknownBaseType);
    }
}
