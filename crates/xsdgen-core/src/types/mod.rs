//! Schema type variants and the capability they share.
//!
//! - [`XsdType`]: what code generation asks of any type
//! - [`BuiltinType`]: XML Schema built-ins (`xsd:string`, `xsd:int`, ...)
//! - [`SimpleType`]: named simple types
//! - [`ComplexType`]: complex types, optionally derived through [`Content`]
//! - [`Extension`]: base type plus additions
//! - [`Restriction`]: base type with redeclared content

mod builtin;
mod complex;
mod extension;
mod restriction;
mod simple;

pub use builtin::BuiltinType;
pub use complex::{ComplexType, Content};
pub use extension::Extension;
pub use restriction::Restriction;
pub use simple::SimpleType;

use std::cell::OnceCell;

use tracing::{debug, trace};

use crate::{
    Attribute, CompilationError, CompileContext, Element, SchemaLookup, Span, TypeEntry, TypeId,
};

/// The capability set shared by every schema type.
///
/// Queries take the registry because types refer to the types they derive
/// from by [`TypeId`]. Call [`compile`](XsdType::compile) once before
/// querying; queries on an uncompiled type see no inherited members.
pub trait XsdType {
    /// Elements visible on this type, in order.
    fn elements(&self, schema: &dyn SchemaLookup) -> Vec<Element>;

    /// Attributes of this type, in order.
    fn attributes(&self, schema: &dyn SchemaLookup) -> Vec<Attribute>;

    /// Whether instances of this type carry character data.
    fn contains_text(&self, schema: &dyn SchemaLookup) -> bool;

    /// Resolve references and compile the types this one depends on.
    fn compile(
        &self,
        ctx: &mut CompileContext<'_>,
        parent: Option<&Element>,
    ) -> Result<(), CompilationError>;
}

/// Resolve a derivation's `base`, compile the base type, and record it once
/// the base compiled cleanly.
///
/// Shared by [`Extension`] and [`Restriction`].
fn resolve_base(
    base: &str,
    span: Span,
    resolved: &OnceCell<TypeId>,
    ctx: &mut CompileContext<'_>,
    parent: Option<&Element>,
) -> Result<(), CompilationError> {
    if base.trim().is_empty() {
        return Err(CompilationError::EmptyBaseReference {
            element: parent.map(|el| el.name.clone()),
            span,
        });
    }

    let id = ctx
        .find_referenced_type(base)
        .ok_or_else(|| CompilationError::UnknownBaseType {
            reference: base.to_string(),
            span,
        })?;
    ctx.compile_type(id, parent)?;

    // A base that failed earlier in this run stays unrecorded, so the next
    // run reports it again instead of walking a broken chain.
    if ctx.has_failed(id) {
        trace!(base, %id, "base type failed, derivation left unresolved");
        return Ok(());
    }
    debug!(base, %id, "resolved base type");

    // Callers return early when the cell is already set.
    let _ = resolved.set(id);
    Ok(())
}

/// Look up the entry behind a resolved base.
fn base_entry<'s>(resolved: &OnceCell<TypeId>, schema: &'s dyn SchemaLookup) -> Option<&'s TypeEntry> {
    resolved.get().and_then(|&id| schema.type_entry(id))
}
