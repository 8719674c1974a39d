use crate::{Attribute, CompilationError, CompileContext, Element, SchemaLookup, Span, XsdType};

/// A named `xsd:simpleType`.
///
/// Simple types describe character data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleType {
    /// Type name.
    pub name: String,
    /// Declaration site.
    pub span: Span,
}

impl SimpleType {
    /// Create a simple type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: Span::unknown(),
        }
    }

    /// Set the declaration site.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl XsdType for SimpleType {
    fn elements(&self, _schema: &dyn SchemaLookup) -> Vec<Element> {
        Vec::new()
    }

    fn attributes(&self, _schema: &dyn SchemaLookup) -> Vec<Attribute> {
        Vec::new()
    }

    fn contains_text(&self, _schema: &dyn SchemaLookup) -> bool {
        true
    }

    fn compile(
        &self,
        _ctx: &mut CompileContext<'_>,
        _parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        Ok(())
    }
}
