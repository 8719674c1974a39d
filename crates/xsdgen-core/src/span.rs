//! Source location tracking for error reporting.
//!
//! Provides [`Span`] to record where a schema declaration starts in its
//! source document. Locations are filled in by the loader that builds the
//! entities; entities built in code usually carry [`Span::unknown`].

use std::fmt;

/// Position of a declaration in a schema document.
///
/// Line and column are 1-indexed. A zero line means the location is unknown.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed, 0 if unknown).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
}

impl Span {
    /// Create a span at a line and column.
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// A span with no location information.
    #[inline]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Whether this span points at a real location.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.col)
        } else {
            f.write_str("<unknown>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(12, 5);
        assert!(span.is_known());
        assert!(!Span::unknown().is_known());
    }

    #[test]
    fn span_display() {
        assert_eq!(format!("{}", Span::new(3, 15)), "3:15");
        assert_eq!(format!("{}", Span::unknown()), "<unknown>");
        assert_eq!(format!("{:?}", Span::new(1, 2)), "1:2");
    }
}
