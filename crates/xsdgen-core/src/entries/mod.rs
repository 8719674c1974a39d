//! Schema entities.
//!
//! - [`Element`], [`Attribute`] - leaf declarations keyed by generated identifier
//! - [`Sequence`] - ordered group of elements
//! - [`TypeEntry`] - unified enum of the named types the registry stores

mod attribute;
mod element;
mod sequence;
mod type_entry;

pub use attribute::{Attribute, AttributeUse};
pub use element::{Element, MaxOccurs};
pub use sequence::Sequence;
pub use type_entry::TypeEntry;
