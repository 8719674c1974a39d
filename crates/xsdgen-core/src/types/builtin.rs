//! XML Schema built-in types.

use std::fmt;

use crate::{Attribute, CompilationError, CompileContext, Element, SchemaLookup, XsdType};

/// A type predefined in the XML Schema namespace.
///
/// Built-ins have no elements or attributes. String-family built-ins carry
/// text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinType {
    /// Local name in the XSD namespace (e.g., "string").
    pub local: &'static str,
    /// Whether values of this type are character data.
    pub text: bool,
}

impl BuiltinType {
    const fn text(local: &'static str) -> Self {
        Self { local, text: true }
    }

    const fn value(local: &'static str) -> Self {
        Self { local, text: false }
    }

    // === Text Built-ins ===

    /// `xsd:string`.
    pub const STRING: Self = Self::text("string");
    /// `xsd:normalizedString`.
    pub const NORMALIZED_STRING: Self = Self::text("normalizedString");
    /// `xsd:token`.
    pub const TOKEN: Self = Self::text("token");
    /// `xsd:anyURI`.
    pub const ANY_URI: Self = Self::text("anyURI");
    /// `xsd:language`.
    pub const LANGUAGE: Self = Self::text("language");
    /// `xsd:Name`.
    pub const NAME: Self = Self::text("Name");
    /// `xsd:NCName`.
    pub const NCNAME: Self = Self::text("NCName");
    /// `xsd:NMTOKEN`.
    pub const NMTOKEN: Self = Self::text("NMTOKEN");
    /// `xsd:ID`.
    pub const ID: Self = Self::text("ID");
    /// `xsd:IDREF`.
    pub const IDREF: Self = Self::text("IDREF");

    // === Value Built-ins ===

    /// `xsd:boolean`.
    pub const BOOLEAN: Self = Self::value("boolean");
    /// `xsd:decimal`.
    pub const DECIMAL: Self = Self::value("decimal");
    /// `xsd:integer`.
    pub const INTEGER: Self = Self::value("integer");
    /// `xsd:int`.
    pub const INT: Self = Self::value("int");
    /// `xsd:long`.
    pub const LONG: Self = Self::value("long");
    /// `xsd:short`.
    pub const SHORT: Self = Self::value("short");
    /// `xsd:byte`.
    pub const BYTE: Self = Self::value("byte");
    /// `xsd:nonNegativeInteger`.
    pub const NON_NEGATIVE_INTEGER: Self = Self::value("nonNegativeInteger");
    /// `xsd:positiveInteger`.
    pub const POSITIVE_INTEGER: Self = Self::value("positiveInteger");
    /// `xsd:unsignedInt`.
    pub const UNSIGNED_INT: Self = Self::value("unsignedInt");
    /// `xsd:unsignedLong`.
    pub const UNSIGNED_LONG: Self = Self::value("unsignedLong");
    /// `xsd:float`.
    pub const FLOAT: Self = Self::value("float");
    /// `xsd:double`.
    pub const DOUBLE: Self = Self::value("double");
    /// `xsd:date`.
    pub const DATE: Self = Self::value("date");
    /// `xsd:dateTime`.
    pub const DATE_TIME: Self = Self::value("dateTime");
    /// `xsd:time`.
    pub const TIME: Self = Self::value("time");
    /// `xsd:duration`.
    pub const DURATION: Self = Self::value("duration");
    /// `xsd:base64Binary`.
    pub const BASE64_BINARY: Self = Self::value("base64Binary");
    /// `xsd:hexBinary`.
    pub const HEX_BINARY: Self = Self::value("hexBinary");
    /// `xsd:QName`.
    pub const QNAME: Self = Self::value("QName");
    /// `xsd:anyType`.
    pub const ANY_TYPE: Self = Self::value("anyType");

    /// Every built-in, in registration order.
    pub const ALL: &'static [BuiltinType] = &[
        Self::STRING,
        Self::NORMALIZED_STRING,
        Self::TOKEN,
        Self::ANY_URI,
        Self::LANGUAGE,
        Self::NAME,
        Self::NCNAME,
        Self::NMTOKEN,
        Self::ID,
        Self::IDREF,
        Self::BOOLEAN,
        Self::DECIMAL,
        Self::INTEGER,
        Self::INT,
        Self::LONG,
        Self::SHORT,
        Self::BYTE,
        Self::NON_NEGATIVE_INTEGER,
        Self::POSITIVE_INTEGER,
        Self::UNSIGNED_INT,
        Self::UNSIGNED_LONG,
        Self::FLOAT,
        Self::DOUBLE,
        Self::DATE,
        Self::DATE_TIME,
        Self::TIME,
        Self::DURATION,
        Self::BASE64_BINARY,
        Self::HEX_BINARY,
        Self::QNAME,
        Self::ANY_TYPE,
    ];

    /// Look up a built-in by local name.
    pub fn from_local(local: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.local == local)
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xsd:{}", self.local)
    }
}

impl XsdType for BuiltinType {
    fn elements(&self, _schema: &dyn SchemaLookup) -> Vec<Element> {
        Vec::new()
    }

    fn attributes(&self, _schema: &dyn SchemaLookup) -> Vec<Attribute> {
        Vec::new()
    }

    fn contains_text(&self, _schema: &dyn SchemaLookup) -> bool {
        self.text
    }

    fn compile(
        &self,
        _ctx: &mut CompileContext<'_>,
        _parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        Ok(())
    }
}
