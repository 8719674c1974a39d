//! Resolution Pass - compile every registered type once.
//!
//! This pass runs after the registry is fully populated. It walks the types
//! in registration order and compiles each through one shared
//! [`CompileContext`], so base types are compiled before the types that
//! derive from them and no type is compiled twice.
//!
//! ## Example
//!
//! ```text
//! <complexType name="Party"> ... </complexType>
//! <complexType name="Person">
//!   <complexContent><extension base="tns:Party"> ... </extension></complexContent>
//! </complexType>
//!
//! After resolution:
//! - Person's extension holds Party's TypeId
//! - Party was compiled once, when Person's extension reached it
//! ```

use tracing::{debug, trace};

use xsdgen_core::{CompilationError, CompileContext, ResolverConfig};
use xsdgen_registry::SchemaRegistry;

/// Output of the resolution pass.
#[derive(Debug, Default)]
pub struct ResolutionOutput {
    /// Number of named types compiled successfully.
    pub types_compiled: usize,
    /// Collected errors.
    pub errors: Vec<CompilationError>,
}

impl ResolutionOutput {
    /// Check if the pass succeeded (no errors).
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Resolution Pass - resolves every reference in the registry.
pub struct ResolutionPass<'reg> {
    registry: &'reg SchemaRegistry,
    fail_fast: bool,
}

impl<'reg> ResolutionPass<'reg> {
    /// Create a new resolution pass.
    pub fn new(registry: &'reg SchemaRegistry, config: &ResolverConfig) -> Self {
        Self {
            registry,
            fail_fast: config.fail_fast,
        }
    }

    /// Run the resolution pass.
    pub fn run(self) -> ResolutionOutput {
        let mut output = ResolutionOutput::default();
        let mut ctx = CompileContext::new(self.registry);

        for id in self.registry.type_ids() {
            if let Err(e) = ctx.compile_type(id, None) {
                trace!(%id, error = %e, "type failed to compile");
                output.errors.push(e);
                if self.fail_fast {
                    break;
                }
            }
        }

        output.types_compiled = ctx.completed_count();
        debug!(
            compiled = output.types_compiled,
            errors = output.errors.len(),
            "resolution pass finished"
        );
        output
    }
}
