//! Default generated identifiers for elements and attributes.
//!
//! The resolver only compares identifiers for equality. This is the naming
//! rule used when a caller does not supply its own.

use heck::ToUpperCamelCase;

/// Derive the generated identifier for a schema name.
///
/// Drops any namespace prefix, converts to UpperCamelCase, and prefixes `X`
/// when the result would be empty or start with a digit.
///
/// ```
/// use xsdgen_core::generated_identifier;
///
/// assert_eq!(generated_identifier("first-name"), "FirstName");
/// assert_eq!(generated_identifier("xml:lang"), "Lang");
/// ```
pub fn generated_identifier(name: &str) -> String {
    let local = name.rsplit(':').next().unwrap_or(name);
    let ident = local.to_upper_camel_case();
    match ident.chars().next() {
        Some(c) if !c.is_ascii_digit() => ident,
        _ => format!("X{ident}"),
    }
}
