//! Id-assigning tree construction.
//!
//! `ExprBuilder` numbers nodes the way a parser does: ids increase by one
//! per node or entry in construction order, starting at 1, and every id is
//! recorded with the source offset it was built at. Children are built
//! before their parents, so a parent's id is always greater than its
//! children's ids.

use crate::{Comprehension, EntryExpr, Expr, ExprId, Literal, MacroCall, ParsedExpr, SourceInfo};

/// Builds expression trees with unique, monotonically assigned ids.
#[derive(Debug, Default)]
pub struct ExprBuilder {
    prev_id: i64,
    info: SourceInfo,
}

impl ExprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose locations resolve against the lines of `text`.
    pub fn for_source(text: &str) -> Self {
        let mut builder = Self::new();
        builder.info.line_offsets = SourceInfo::line_offsets_of(text);
        builder
    }

    /// Allocate the next id and record its offset.
    pub fn next_id(&mut self, offset: i32) -> ExprId {
        self.prev_id += 1;
        let id = ExprId::new(self.prev_id);
        self.info.set_position(id, offset);
        id
    }

    pub fn literal(&mut self, offset: i32, value: Literal) -> Expr {
        let id = self.next_id(offset);
        Expr::literal(id, value)
    }

    pub fn ident(&mut self, offset: i32, name: &str) -> Expr {
        let id = self.next_id(offset);
        Expr::ident(id, name)
    }

    pub fn select(&mut self, offset: i32, operand: Expr, field: &str) -> Expr {
        let id = self.next_id(offset);
        Expr::select(id, operand, field, false)
    }

    /// Presence test `has(operand.field)` in its expanded form.
    pub fn presence_test(&mut self, offset: i32, operand: Expr, field: &str) -> Expr {
        let id = self.next_id(offset);
        Expr::select(id, operand, field, true)
    }

    pub fn call(&mut self, offset: i32, function: &str, args: Vec<Expr>) -> Expr {
        let id = self.next_id(offset);
        Expr::call(id, function, args)
    }

    pub fn member_call(&mut self, offset: i32, target: Expr, function: &str, args: Vec<Expr>) -> Expr {
        let id = self.next_id(offset);
        Expr::member_call(id, target, function, args)
    }

    pub fn list(&mut self, offset: i32, elements: Vec<Expr>) -> Expr {
        let id = self.next_id(offset);
        Expr::list(id, elements)
    }

    pub fn map_entry(&mut self, offset: i32, key: Expr, value: Expr) -> EntryExpr {
        let id = self.next_id(offset);
        EntryExpr::map_entry(id, key, value, false)
    }

    pub fn field(&mut self, offset: i32, name: &str, value: Expr) -> EntryExpr {
        let id = self.next_id(offset);
        EntryExpr::field(id, name, value, false)
    }

    pub fn map(&mut self, offset: i32, entries: Vec<EntryExpr>) -> Expr {
        let id = self.next_id(offset);
        Expr::map(id, entries)
    }

    pub fn structure(&mut self, offset: i32, type_name: &str, fields: Vec<EntryExpr>) -> Expr {
        let id = self.next_id(offset);
        Expr::structure(id, type_name, fields)
    }

    pub fn comprehension(&mut self, offset: i32, comprehension: Comprehension) -> Expr {
        let id = self.next_id(offset);
        Expr::comprehension(id, comprehension)
    }

    /// Argument form of `expr` for a macro-call record.
    ///
    /// Expansions of macros already recorded are replaced by a placeholder
    /// that carries only their id; anything else is copied as is.
    pub fn macro_arg(&self, expr: &Expr) -> Expr {
        if self.info.macro_call(expr.id).is_some() {
            Expr::unspecified(expr.id)
        } else {
            expr.clone()
        }
    }

    /// Record that `expansion` replaced the invocation `call`.
    pub fn record_macro_call(&mut self, expansion: &Expr, call: MacroCall) {
        self.info.add_macro_call(expansion.id, call);
    }

    pub fn source_info(&self) -> &SourceInfo {
        &self.info
    }

    pub fn finish(self, root: Expr) -> ParsedExpr {
        ParsedExpr::new(root, self.info)
    }
}
