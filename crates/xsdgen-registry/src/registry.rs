//! SchemaRegistry - the schema-wide type table.
//!
//! This module provides [`SchemaRegistry`], the owner of every named type in
//! a schema. Types are stored in registration order and addressed by
//! [`TypeId`]; a name index maps qualified names to ids.
//!
//! # Storage Model
//!
//! - **Types**: `(QualifiedName, TypeEntry)` slots in a `Vec`, indexed by `TypeId`
//! - **Names**: `QualifiedName -> TypeId`, the primary lookup
//! - **Prefixes**: `prefix -> namespace URI`, used to resolve textual references
//!
//! # Thread Safety
//!
//! `SchemaRegistry` is **not thread-safe**. It is populated single-threaded,
//! then compiled and queried from the same thread. Compiling records resolved
//! references inside the stored entries.
//!
//! # Example
//!
//! ```
//! use xsdgen_core::{ComplexType, SchemaLookup};
//! use xsdgen_registry::SchemaRegistry;
//!
//! let mut registry = SchemaRegistry::with_builtins().with_target_namespace("urn:shop");
//! registry.bind_prefix("tns", "urn:shop").unwrap();
//! let order = registry.register_type(ComplexType::new("Order")).unwrap();
//!
//! assert_eq!(registry.find_referenced_type("tns:Order"), Some(order));
//! assert!(registry.find_referenced_type("xs:string").is_some());
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use xsdgen_core::{
    BuiltinType, QualifiedName, RegistrationError, ResolverConfig, SchemaLookup, TypeEntry, TypeId,
    XSD_NAMESPACE, split_reference,
};

/// Schema-wide type registry.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    /// Types in registration order (PRIMARY storage).
    types: Vec<(QualifiedName, TypeEntry)>,

    /// Name index: qualified name -> slot.
    by_name: FxHashMap<QualifiedName, TypeId>,

    /// Namespace prefix bindings: prefix -> URI.
    prefixes: FxHashMap<String, String>,

    /// Namespace that `register_type` places types in and that unprefixed
    /// references resolve against.
    target_namespace: String,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with XSD built-ins and the default XSD prefixes.
    pub fn with_builtins() -> Self {
        Self::with_config(&ResolverConfig::default())
    }

    /// Create a registry with XSD built-ins, binding the configured prefixes
    /// to the XSD namespace.
    pub fn with_config(config: &ResolverConfig) -> Self {
        let mut registry = Self::new();
        registry.register_all_builtins();
        for prefix in &config.xsd_prefixes {
            registry
                .prefixes
                .insert(prefix.clone(), XSD_NAMESPACE.to_string());
        }
        registry
    }

    /// Set the target namespace.
    pub fn with_target_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.target_namespace = namespace.into();
        self
    }

    /// The target namespace (empty if none).
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    // ==========================================================================
    // Prefix Bindings
    // ==========================================================================

    /// Bind a namespace prefix.
    ///
    /// Rebinding a prefix to the URI it already has is a no-op; rebinding it
    /// to a different URI is an error.
    pub fn bind_prefix(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<(), RegistrationError> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.prefixes.get(&prefix) {
            Some(existing) if *existing == namespace => Ok(()),
            Some(existing) => Err(RegistrationError::ConflictingPrefix {
                prefix,
                existing: existing.clone(),
                new: namespace,
            }),
            None => {
                self.prefixes.insert(prefix, namespace);
                Ok(())
            }
        }
    }

    /// Get the namespace a prefix is bound to.
    pub fn prefix_namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type in the target namespace.
    pub fn register_type(
        &mut self,
        entry: impl Into<TypeEntry>,
    ) -> Result<TypeId, RegistrationError> {
        let entry = entry.into();
        let qname = QualifiedName::new(self.target_namespace.clone(), entry.name());
        self.register_qualified(qname, entry)
    }

    /// Register a type under an explicit qualified name.
    pub fn register_qualified(
        &mut self,
        qname: QualifiedName,
        entry: impl Into<TypeEntry>,
    ) -> Result<TypeId, RegistrationError> {
        if self.by_name.contains_key(&qname) {
            return Err(RegistrationError::DuplicateType(qname.to_string()));
        }

        let id = TypeId::new(self.types.len() as u32);
        debug!(%qname, %id, "registered type");
        self.by_name.insert(qname.clone(), id);
        self.types.push((qname, entry.into()));
        Ok(id)
    }

    /// Register every XSD built-in in the XSD namespace.
    ///
    /// Built-ins already present are left alone.
    pub fn register_all_builtins(&mut self) {
        for builtin in BuiltinType::ALL {
            let qname = QualifiedName::new(XSD_NAMESPACE, builtin.local);
            if !self.by_name.contains_key(&qname) {
                let id = TypeId::new(self.types.len() as u32);
                self.by_name.insert(qname.clone(), id);
                self.types.push((qname, (*builtin).into()));
            }
        }
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a type by id.
    pub fn get(&self, id: TypeId) -> Option<&TypeEntry> {
        self.types.get(id.slot()).map(|(_, entry)| entry)
    }

    /// Get the qualified name a type was registered under.
    pub fn name_of(&self, id: TypeId) -> Option<&QualifiedName> {
        self.types.get(id.slot()).map(|(qname, _)| qname)
    }

    /// Get a type's id by qualified name.
    pub fn type_id(&self, qname: &QualifiedName) -> Option<TypeId> {
        self.by_name.get(qname).copied()
    }

    /// Get a type by qualified name.
    pub fn get_type(&self, qname: &QualifiedName) -> Option<&TypeEntry> {
        self.type_id(qname).and_then(|id| self.get(id))
    }

    /// Check if a type exists by qualified name.
    pub fn contains_type(&self, qname: &QualifiedName) -> bool {
        self.by_name.contains_key(qname)
    }

    /// Resolve a textual reference to a qualified name.
    ///
    /// A prefixed reference uses the prefix binding and fails if the prefix
    /// is unbound. An unprefixed reference resolves in the target namespace.
    pub fn resolve_reference(&self, reference: &str) -> Option<QualifiedName> {
        match split_reference(reference) {
            (Some(prefix), local) => {
                let namespace = self.prefixes.get(prefix)?;
                Some(QualifiedName::new(namespace.clone(), local))
            }
            (None, local) => Some(QualifiedName::new(self.target_namespace.clone(), local)),
        }
    }

    // ==========================================================================
    // Iteration
    // ==========================================================================

    /// Iterate over all types in registration order.
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &QualifiedName, &TypeEntry)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, (qname, entry))| (TypeId::new(i as u32), qname, entry))
    }

    /// Iterate over type ids in registration order.
    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> {
        (0..self.types.len() as u32).map(TypeId::new)
    }

    /// Number of registered types, built-ins included.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // ==========================================================================
    // Derivation Helpers
    // ==========================================================================

    /// The chain of resolved base types, from immediate base to root.
    ///
    /// Only meaningful after compile. Stops at the first type without a
    /// resolved base, or if the chain revisits a type.
    pub fn base_chain(&self, id: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(id);
        let mut current = id;

        while let Some(entry) = self.get(current)
            && let Some(complex) = entry.as_complex()
            && let Some(content) = &complex.content
            && let Some(base) = content.resolved_base()
            && seen.insert(base)
        {
            chain.push(base);
            current = base;
        }

        chain
    }
}

impl SchemaLookup for SchemaRegistry {
    fn find_referenced_type(&self, reference: &str) -> Option<TypeId> {
        let qname = self.resolve_reference(reference)?;
        self.type_id(&qname)
    }

    fn type_entry(&self, id: TypeId) -> Option<&TypeEntry> {
        self.get(id)
    }
}
