//! Resolver configuration.

use serde::Deserialize;

use crate::ConfigError;

/// Settings for building a registry and running the resolution pass.
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// ```
/// use xsdgen_core::ResolverConfig;
///
/// let config = ResolverConfig::from_toml_str("fail_fast = false").unwrap();
/// assert!(!config.fail_fast);
/// assert_eq!(config.xsd_prefixes, vec!["xsd", "xs"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Prefixes bound to the XML Schema namespace in a fresh registry.
    pub xsd_prefixes: Vec<String>,
    /// Stop the resolution pass at the first error.
    pub fail_fast: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            xsd_prefixes: vec!["xsd".to_string(), "xs".to_string()],
            fail_fast: true,
        }
    }
}

impl ResolverConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Set whether the pass stops at the first error.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
