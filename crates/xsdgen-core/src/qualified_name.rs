use std::fmt;

/// Namespace URI of XML Schema itself. Built-in types live here.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// The literal base reference that marks a type as carrying string content.
///
/// Compared textually; other prefixes bound to the XSD namespace do not match.
pub const XSD_STRING_REFERENCE: &str = "xsd:string";

/// Qualified name of a schema type, used as the registry key.
///
/// The namespace is a URI, not a prefix: `xs:string` and `xsd:string` name the
/// same type once their prefixes are resolved.
///
/// # Examples
///
/// ```
/// use xsdgen_core::{QualifiedName, XSD_NAMESPACE};
///
/// let local = QualifiedName::local("Address");
/// assert_eq!(local.to_string(), "Address");
///
/// let string = QualifiedName::new(XSD_NAMESPACE, "string");
/// assert_eq!(string.to_string(), "{http://www.w3.org/2001/XMLSchema}string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Namespace URI. Empty when the name is in no namespace.
    pub namespace: String,
    /// Local part (e.g., "Address", "string").
    pub local: String,
}

impl QualifiedName {
    /// Create a qualified name in a namespace.
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Create a qualified name in no namespace.
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            local: local.into(),
        }
    }

    /// Check if this name has no namespace.
    pub fn is_unqualified(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Check if this name belongs to the XML Schema namespace.
    pub fn is_xsd(&self) -> bool {
        self.namespace == XSD_NAMESPACE
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

/// Split a textual reference (`prefix:local`) into its prefix and local part.
///
/// Splits at the first colon. Surrounding whitespace is ignored.
///
/// ```
/// use xsdgen_core::split_reference;
///
/// assert_eq!(split_reference("tns:Address"), (Some("tns"), "Address"));
/// assert_eq!(split_reference("Address"), (None, "Address"));
/// ```
pub fn split_reference(reference: &str) -> (Option<&str>, &str) {
    let reference = reference.trim();
    match reference.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, reference),
    }
}
