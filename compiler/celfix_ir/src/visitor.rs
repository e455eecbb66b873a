//! Read-only tree traversal.
//!
//! A single `Visitor` trait walks expressions and entries in pre-order, in
//! the tree's own child order. Default implementations call the `walk_*`
//! functions; override `visit_*` to observe nodes and call `walk_*` to keep
//! descending.
//!
//! # Example
//!
//! ```text
//! struct CountIdents {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountIdents {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if let ExprKind::Ident { .. } = expr.kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::{EntryExpr, EntryKey, Expr, ExprId, ExprKind};

/// Tree visitor. The tree itself is never mutated.
pub trait Visitor<'ast> {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    fn visit_entry(&mut self, entry: &'ast EntryExpr) {
        walk_entry(self, entry);
    }
}

/// Visit the children of `expr`.
///
/// Calls visit receivers before arguments, and comprehension parts in the
/// order range, init, condition, step, result.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match &expr.kind {
        ExprKind::Unspecified | ExprKind::Literal(_) | ExprKind::Ident { .. } => {}
        ExprKind::Select { operand, .. } => visitor.visit_expr(operand),
        ExprKind::Call { target, args, .. } => {
            if let Some(target) = target {
                visitor.visit_expr(target);
            }
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        ExprKind::List { elements } => {
            for element in elements {
                visitor.visit_expr(element);
            }
        }
        ExprKind::Map { entries } | ExprKind::Struct { fields: entries, .. } => {
            for entry in entries {
                visitor.visit_entry(entry);
            }
        }
        ExprKind::Comprehension(comprehension) => {
            visitor.visit_expr(&comprehension.iter_range);
            visitor.visit_expr(&comprehension.accu_init);
            visitor.visit_expr(&comprehension.loop_condition);
            visitor.visit_expr(&comprehension.loop_step);
            visitor.visit_expr(&comprehension.result);
        }
    }
}

/// Visit the key (for map entries) and then the value of `entry`.
pub fn walk_entry<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, entry: &'ast EntryExpr) {
    if let EntryKey::MapKey(key) = &entry.key {
        visitor.visit_expr(key);
    }
    visitor.visit_expr(&entry.value);
}

/// Collects node and entry ids in pre-order.
struct IdCollector {
    ids: Vec<ExprId>,
}

impl<'ast> Visitor<'ast> for IdCollector {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        self.ids.push(expr.id);
        walk_expr(self, expr);
    }

    fn visit_entry(&mut self, entry: &'ast EntryExpr) {
        self.ids.push(entry.id);
        walk_entry(self, entry);
    }
}

/// Ids of every node and entry reachable from `root`, in pre-order.
pub fn collect_ids(root: &Expr) -> Vec<ExprId> {
    let mut collector = IdCollector { ids: Vec::new() };
    collector.visit_expr(root);
    collector.ids
}

#[cfg(test)]
mod tests;
