//! Expression Tree
//!
//! Owned expression nodes as produced by a parser after macro expansion.
//!
//! # Design Notes
//! - Children are owned (`Box`/`Vec`); the tree is built top-down and is
//!   acyclic by construction.
//! - Metadata (positions, macro calls) lives in `SourceInfo`, keyed by
//!   `ExprId`, never inside the nodes.
//! - Nodes are immutable once built; consumers only borrow them.

use crate::ExprId;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(id: ExprId, kind: ExprKind) -> Self {
        Expr { id, kind }
    }

    /// Placeholder node that carries only an id.
    pub fn unspecified(id: ExprId) -> Self {
        Expr::new(id, ExprKind::Unspecified)
    }

    pub fn literal(id: ExprId, value: Literal) -> Self {
        Expr::new(id, ExprKind::Literal(value))
    }

    pub fn ident(id: ExprId, name: impl Into<String>) -> Self {
        Expr::new(id, ExprKind::Ident { name: name.into() })
    }

    pub fn select(id: ExprId, operand: Expr, field: impl Into<String>, test_only: bool) -> Self {
        Expr::new(
            id,
            ExprKind::Select {
                operand: Box::new(operand),
                field: field.into(),
                test_only,
            },
        )
    }

    /// Free-function call `function(args...)`.
    pub fn call(id: ExprId, function: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::new(
            id,
            ExprKind::Call {
                target: None,
                function: function.into(),
                args,
            },
        )
    }

    /// Receiver-style call `target.function(args...)`.
    pub fn member_call(
        id: ExprId,
        target: Expr,
        function: impl Into<String>,
        args: Vec<Expr>,
    ) -> Self {
        Expr::new(
            id,
            ExprKind::Call {
                target: Some(Box::new(target)),
                function: function.into(),
                args,
            },
        )
    }

    pub fn list(id: ExprId, elements: Vec<Expr>) -> Self {
        Expr::new(id, ExprKind::List { elements })
    }

    pub fn map(id: ExprId, entries: Vec<EntryExpr>) -> Self {
        Expr::new(id, ExprKind::Map { entries })
    }

    pub fn structure(id: ExprId, type_name: impl Into<String>, fields: Vec<EntryExpr>) -> Self {
        Expr::new(
            id,
            ExprKind::Struct {
                type_name: type_name.into(),
                fields,
            },
        )
    }

    pub fn comprehension(id: ExprId, comprehension: Comprehension) -> Self {
        Expr::new(id, ExprKind::Comprehension(Box::new(comprehension)))
    }

    /// Check whether this is a receiver-style call.
    pub fn is_member_call(&self) -> bool {
        matches!(&self.kind, ExprKind::Call { target: Some(_), .. })
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// No payload. Producers emit these inside macro-call records in place
    /// of nested macro invocations; the id points at the nested record.
    Unspecified,

    /// Constant value.
    Literal(Literal),

    /// Identifier reference: `a`
    Ident { name: String },

    /// Field selection `operand.field`, or a presence test when `test_only`.
    Select {
        operand: Box<Expr>,
        field: String,
        test_only: bool,
    },

    /// Function or operator call. `target` is present for receiver-style
    /// calls.
    Call {
        target: Option<Box<Expr>>,
        function: String,
        args: Vec<Expr>,
    },

    /// List literal: `[a, b]`
    List { elements: Vec<Expr> },

    /// Map literal: `{k: v}`
    Map { entries: Vec<EntryExpr> },

    /// Message construction: `pkg.Type{field: v}`
    Struct {
        type_name: String,
        fields: Vec<EntryExpr>,
    },

    /// Fold produced by expanding a comprehension macro.
    Comprehension(Box<Comprehension>),
}

/// Constant payload of a literal node.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Bytes(Vec<u8>),
    Double(f64),
    Int(i64),
    Null,
    String(String),
    Uint(u64),
    /// A constant kind outside the known set (deprecated wire kinds).
    ///
    /// `type_name` names the payload type, `text` is its raw rendering.
    /// Neither string has a stable format.
    Unrecognized { type_name: String, text: String },
}

/// Entry of a map literal or message construction.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryExpr {
    pub id: ExprId,
    pub key: EntryKey,
    pub value: Expr,
    /// `?key: value` entries are only set when the value is present.
    pub optional: bool,
}

impl EntryExpr {
    pub fn map_entry(id: ExprId, key: Expr, value: Expr, optional: bool) -> Self {
        EntryExpr {
            id,
            key: EntryKey::MapKey(key),
            value,
            optional,
        }
    }

    pub fn field(id: ExprId, name: impl Into<String>, value: Expr, optional: bool) -> Self {
        EntryExpr {
            id,
            key: EntryKey::Field(name.into()),
            value,
            optional,
        }
    }
}

/// Key of an entry: an expression for maps, a field name for messages.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryKey {
    MapKey(Expr),
    Field(String),
}

/// Fold over a range.
///
/// Evaluates `accu_init`, then for each element of `iter_range` binds
/// `iter_var` (and `iter_var2` for two-variable forms) and replaces the
/// accumulator with `loop_step` while `loop_condition` holds, finally
/// evaluating `result`.
#[derive(Clone, Debug, PartialEq)]
pub struct Comprehension {
    pub iter_var: String,
    pub iter_var2: Option<String>,
    pub iter_range: Expr,
    pub accu_var: String,
    pub accu_init: Expr,
    pub loop_condition: Expr,
    pub loop_step: Expr,
    pub result: Expr,
}

#[cfg(test)]
mod tests;
