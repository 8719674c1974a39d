//! Complex types and their derived content.

use crate::{
    Attribute, CompilationError, CompileContext, Element, Extension, Restriction, SchemaLookup,
    Sequence, Span, TypeId, XsdType,
};

/// Derived content of a complex type (`complexContent` or `simpleContent`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Derivation by extension.
    Extension(Extension),
    /// Derivation by restriction.
    Restriction(Restriction),
}

impl Content {
    /// The `base` reference of the derivation.
    pub fn base(&self) -> &str {
        match self {
            Content::Extension(e) => &e.base,
            Content::Restriction(r) => &r.base,
        }
    }

    /// The resolved base type, once compiled.
    pub fn resolved_base(&self) -> Option<TypeId> {
        match self {
            Content::Extension(e) => e.resolved_base(),
            Content::Restriction(r) => r.resolved_base(),
        }
    }

    /// The extension, if this is one.
    pub fn as_extension(&self) -> Option<&Extension> {
        match self {
            Content::Extension(e) => Some(e),
            Content::Restriction(_) => None,
        }
    }

    /// The restriction, if this is one.
    pub fn as_restriction(&self) -> Option<&Restriction> {
        match self {
            Content::Restriction(r) => Some(r),
            Content::Extension(_) => None,
        }
    }

    fn as_type(&self) -> &dyn XsdType {
        match self {
            Content::Extension(e) => e,
            Content::Restriction(r) => r,
        }
    }
}

impl XsdType for Content {
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

impl From<Extension> for Content {
    fn from(extension: Extension) -> Self {
        Content::Extension(extension)
    }
}

impl From<Restriction> for Content {
    fn from(restriction: Restriction) -> Self {
        Content::Restriction(restriction)
    }
}

/// An `xsd:complexType`.
///
/// Either declares its own sequence directly or derives its content from
/// another type through [`Content`]. Attributes declared on the complex type
/// itself come before those of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    /// Type name. Empty for an anonymous type.
    pub name: String,
    /// `mixed="true"`: text may appear between elements.
    pub mixed: bool,
    /// Directly declared elements.
    pub sequence: Option<Sequence>,
    /// Directly declared attributes.
    pub attributes: Vec<Attribute>,
    /// Derived content.
    pub content: Option<Content>,
    /// Declaration site.
    pub span: Span,
}

impl ComplexType {
    /// Create an empty complex type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mixed: false,
            sequence: None,
            attributes: Vec::new(),
            content: None,
            span: Span::unknown(),
        }
    }

    // === Builder Methods ===

    /// Set the `mixed` flag.
    pub fn with_mixed(mut self, mixed: bool) -> Self {
        self.mixed = mixed;
        self
    }

    /// Set the directly declared sequence.
    pub fn with_sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Add a directly declared attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the derived content.
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the declaration site.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Whether this type has no name.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl XsdType for ComplexType {
    fn elements(&self, schema: &dyn SchemaLookup) -> Vec<Element> {
        match (&self.content, &self.sequence) {
            (Some(content), _) => content.elements(schema),
            (None, Some(sequence)) => sequence.elements().to_vec(),
            (None, None) => Vec::new(),
        }
    }

    fn attributes(&self, schema: &dyn SchemaLookup) -> Vec<Attribute> {
        let mut attributes = self.attributes.clone();
        if let Some(content) = &self.content {
            attributes.extend(content.attributes(schema));
        }
        attributes
    }

    fn contains_text(&self, schema: &dyn SchemaLookup) -> bool {
        self.mixed
            || self
                .content
                .as_ref()
                .is_some_and(|content| content.contains_text(schema))
    }

    fn compile(
        &self,
        ctx: &mut CompileContext<'_>,
        parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        if let Some(sequence) = &self.sequence {
            sequence.compile(ctx, parent)?;
        }
        match &self.content {
            Some(content) => content.compile(ctx, parent),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::test_support::TestSchema;
    use crate::BuiltinType;

    #[test]
    fn plain_type_uses_own_sequence() {
        let schema = TestSchema::default();
        let ty = ComplexType::new("Item")
            .with_sequence(Sequence::new(vec![Element::new("sku"), Element::new("qty")]))
            .with_attribute(Attribute::new("id"));

        let names: Vec<_> = ty.elements(&schema).into_iter().map(|el| el.name).collect();
        assert_eq!(names, ["sku", "qty"]);
        assert_eq!(ty.attributes(&schema).len(), 1);
        assert!(!ty.contains_text(&schema));
    }

    #[test]
    fn derived_type_delegates_to_content() {
        let mut schema = TestSchema::default();
        schema.add("xsd:string", BuiltinType::STRING);
        let ty = ComplexType::new("Note")
            .with_attribute(Attribute::new("outer"))
            .with_content(Extension::new("xsd:string").with_attribute(Attribute::new("lang")));

        let mut ctx = CompileContext::new(&schema);
        ty.compile(&mut ctx, None).unwrap();

        let attrs: Vec<_> = ty.attributes(&schema).into_iter().map(|a| a.name).collect();
        assert_eq!(attrs, ["outer", "lang"]);
        assert!(ty.elements(&schema).is_empty());
        assert!(ty.contains_text(&schema));
    }

    #[test]
    fn mixed_contains_text() {
        let schema = TestSchema::default();
        assert!(ComplexType::new("Para").with_mixed(true).contains_text(&schema));
    }

    #[test]
    fn content_accessors() {
        let content = Content::from(Restriction::new("Base"));
        assert_eq!(content.base(), "Base");
        assert!(content.as_restriction().is_some());
        assert!(content.as_extension().is_none());
        assert!(ComplexType::new("").is_anonymous());
    }
}
