//! Expression identities.
//!
//! Every node of a parsed tree, and every map or struct entry, carries an
//! `ExprId` assigned once by the producer. Ids are unique within a tree and
//! are the keys of every `SourceInfo` side-table.

use std::fmt;

/// Identity of an expression or entry node.
///
/// The wire form is a signed 64-bit integer, so the raw value is kept as
/// `i64` rather than narrowed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct ExprId(i64);

impl ExprId {
    /// Id of a node the producer never numbered (the wire default).
    pub const NONE: ExprId = ExprId(0);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        ExprId(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for ExprId {
    fn from(raw: i64) -> Self {
        ExprId(raw)
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
