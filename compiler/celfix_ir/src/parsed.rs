//! A completed parse: the expanded tree plus its side-tables.

use rustc_hash::FxHashSet;

use crate::visitor::collect_ids;
use crate::{Expr, ExprId, SourceInfo};

/// Parse result handed to consumers. Both parts are read-only from here on.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedExpr {
    pub expr: Expr,
    pub source_info: SourceInfo,
}

impl ParsedExpr {
    pub fn new(expr: Expr, source_info: SourceInfo) -> Self {
        ParsedExpr { expr, source_info }
    }

    /// First id (in pre-order) that appears on more than one node or entry.
    pub fn duplicate_id(&self) -> Option<ExprId> {
        let mut seen = FxHashSet::default();
        collect_ids(&self.expr)
            .into_iter()
            .find(|&id| !seen.insert(id))
    }
}
