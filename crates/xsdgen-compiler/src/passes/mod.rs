//! Compiler passes.
//!
//! - [`resolution`]: compile every registered type, resolving base and element type references

pub mod resolution;

pub use resolution::{ResolutionOutput, ResolutionPass};
