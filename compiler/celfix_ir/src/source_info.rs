//! Source metadata side-tables.
//!
//! `SourceInfo` maps expression ids to metadata the tree itself does not
//! carry: the character offset each node started at, and the pre-expansion shape
//! of every macro invocation the parser desugared.
//!
//! Lookups never fail. A missing position yields [`Location::NONE`]; a
//! missing macro call yields `None`.

use rustc_hash::FxHashMap;

use crate::{Expr, ExprId};

/// A line/column position in source text.
///
/// Lines are 1-based, columns are 0-based character offsets from the start
/// of the line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    pub line: i32,
    pub column: i32,
}

impl Location {
    /// Sentinel for an id with no recorded position.
    pub const NONE: Location = Location {
        line: -1,
        column: -1,
    };

    pub const fn new(line: i32, column: i32) -> Self {
        Location { line, column }
    }
}

/// A macro invocation as written, before desugaring.
///
/// Arguments that were themselves macro invocations are replaced by
/// `Unspecified` placeholders whose id is the nested record's key.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroCall {
    pub function: String,
    pub target: Option<Box<Expr>>,
    pub args: Vec<Expr>,
}

impl MacroCall {
    /// Free-function macro such as `has(a.b)`.
    pub fn global(function: impl Into<String>, args: Vec<Expr>) -> Self {
        MacroCall {
            function: function.into(),
            target: None,
            args,
        }
    }

    /// Receiver-style macro such as `list.all(x, p)`.
    pub fn member(target: Expr, function: impl Into<String>, args: Vec<Expr>) -> Self {
        MacroCall {
            function: function.into(),
            target: Some(Box::new(target)),
            args,
        }
    }

    pub fn is_member_call(&self) -> bool {
        self.target.is_some()
    }

    /// Build a standalone call node with the given id from this record.
    ///
    /// The node owns copies of the target and arguments; the record is left
    /// untouched.
    pub fn to_call_expr(&self, id: ExprId) -> Expr {
        match &self.target {
            Some(target) => Expr::member_call(
                id,
                target.as_ref().clone(),
                self.function.clone(),
                self.args.clone(),
            ),
            None => Expr::call(id, self.function.clone(), self.args.clone()),
        }
    }
}

/// Metadata about a parsed expression, keyed by `ExprId`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceInfo {
    /// Name of the source (file name or `<input>`).
    pub description: String,

    /// Character offsets at which each line after the first begins,
    /// ascending.
    pub line_offsets: Vec<i32>,

    /// Starting character offset of each node.
    pub positions: FxHashMap<ExprId, i32>,

    /// Pre-expansion macro invocations, keyed by the id of the node that
    /// replaced them in the tree.
    pub macro_calls: FxHashMap<ExprId, MacroCall>,
}

impl SourceInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build line offsets for `text`: one entry after every `\n`.
    pub fn line_offsets_of(text: &str) -> Vec<i32> {
        text.chars()
            .enumerate()
            .filter(|&(_, c)| c == '\n')
            .filter_map(|(index, _)| i32::try_from(index + 1).ok())
            .collect()
    }

    pub fn set_position(&mut self, id: ExprId, offset: i32) {
        self.positions.insert(id, offset);
    }

    pub fn position(&self, id: ExprId) -> Option<i32> {
        self.positions.get(&id).copied()
    }

    pub fn add_macro_call(&mut self, id: ExprId, call: MacroCall) {
        self.macro_calls.insert(id, call);
    }

    pub fn macro_call(&self, id: ExprId) -> Option<&MacroCall> {
        self.macro_calls.get(&id)
    }

    /// Macro-call keys in descending numeric order.
    ///
    /// Parsers number a macro after its arguments, so the most deeply nested
    /// expansions come first.
    pub fn macro_call_ids_descending(&self) -> Vec<ExprId> {
        let mut ids: Vec<ExprId> = self.macro_calls.keys().copied().collect();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids
    }

    /// Translate a character offset into a line/column location.
    pub fn location_of_offset(&self, offset: i32) -> Location {
        let mut line = 1;
        let mut column = offset;
        for &line_offset in &self.line_offsets {
            if line_offset > offset {
                break;
            }
            line += 1;
            column = offset - line_offset;
        }
        Location::new(line, column)
    }

    /// Location where the node with `id` starts, or [`Location::NONE`].
    pub fn start_location(&self, id: ExprId) -> Location {
        self.position(id)
            .map_or(Location::NONE, |offset| self.location_of_offset(offset))
    }
}
