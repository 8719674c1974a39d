//! Attribute declarations.

use crate::{Span, generated_identifier};

/// The `use` of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeUse {
    /// `use="optional"`, the XSD default.
    #[default]
    Optional,
    /// `use="required"`.
    Required,
    /// `use="prohibited"`.
    Prohibited,
}

/// An attribute declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Name as written in the schema.
    pub name: String,
    /// Generated identifier, the key for collision detection.
    pub ident: String,
    /// `type` reference, if any.
    pub type_ref: Option<String>,
    /// `use`.
    pub usage: AttributeUse,
    /// `default` value.
    pub default: Option<String>,
    /// `fixed` value.
    pub fixed: Option<String>,
    /// How many earlier members share this attribute's identifier.
    ///
    /// Zero means no collision. Set on the copies returned by a type's
    /// attribute query so code generation can disambiguate the name.
    pub duplicate_count: u32,
    /// Declaration site.
    pub span: Span,
}

impl Attribute {
    /// Create an optional attribute with a derived identifier.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let ident = generated_identifier(&name);
        Self {
            name,
            ident,
            type_ref: None,
            usage: AttributeUse::Optional,
            default: None,
            fixed: None,
            duplicate_count: 0,
            span: Span::unknown(),
        }
    }

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

    /// Set the `use`.
    pub fn with_usage(mut self, usage: AttributeUse) -> Self {
        self.usage = usage;
        self
    }

    /// Set the `default` value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the `fixed` value.
    pub fn with_fixed(mut self, value: impl Into<String>) -> Self {
        self.fixed = Some(value.into());
        self
    }

    /// Set the declaration site.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Whether the attribute must be present.
    pub fn is_required(&self) -> bool {
        self.usage == AttributeUse::Required
    }

    /// Whether this attribute collides with an earlier member.
    pub fn is_duplicate(&self) -> bool {
        self.duplicate_count > 0
    }
}
