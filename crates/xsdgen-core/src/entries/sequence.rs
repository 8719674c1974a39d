//! Ordered element groups.

use tracing::trace;

use crate::{CompilationError, CompileContext, Element};

/// An `xsd:sequence`: elements in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    /// The declared elements.
    pub elements: Vec<Element>,
}

impl Sequence {
    /// Create a sequence from its elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// The elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Compile every element in order, stopping at the first error.
    pub fn compile(
        &self,
        ctx: &mut CompileContext<'_>,
        parent: Option<&Element>,
    ) -> Result<(), CompilationError> {
        trace!(
            parent = parent.map(|el| el.name.as_str()),
            count = self.elements.len(),
            "compiling sequence"
        );
        self.elements.iter().try_for_each(|el| el.compile(ctx))
    }
}

impl FromIterator<Element> for Sequence {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
