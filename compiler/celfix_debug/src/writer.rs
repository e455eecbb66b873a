//! Adorned debug writer.
//!
//! Renders an expression tree in its debug form, attaching one annotator tag
//! to every node and every map or struct entry:
//!
//! ```text
//! ^#1:Call#_&&_(
//!   ^#2:Bool#true,
//!   ^#3:Bool#false
//! )
//! ```
//!
//! # Placement
//!
//! With [`Placement::Leading`] (the default) each tag precedes its node's
//! text, so tags appear in pre-order: parent before children, children in
//! the tree's own order. [`Placement::Trailing`] writes each tag after the
//! node's text, which is the layout of existing golden files:
//!
//! ```text
//! _&&_(
//!   true^#2:*expr.Constant_BoolValue#,
//!   false^#3:*expr.Constant_BoolValue#
//! )^#1:*expr.Expr_CallExpr#
//! ```
//!
//! Entries follow the same rule: a leading tag comes before the `?` marker
//! and key, a trailing tag after the value.

use celfix_ir::{Comprehension, EntryExpr, EntryKey, Expr, ExprKind};

use crate::annotate::{Annotator, Element, TagVocabulary};
use crate::emitter::{Emitter, StringEmitter};
use crate::literal::format_literal;
use crate::stack::ensure_sufficient_stack;

/// Where a node's tag goes relative to the node's text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    #[default]
    Leading,
    Trailing,
}

/// Rendering configuration shared by tree and macro-call renderings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub placement: Placement,
    pub vocabulary: TagVocabulary,
}

impl RenderOptions {
    /// Layout and tag names of existing golden files.
    pub fn golden() -> Self {
        RenderOptions {
            placement: Placement::Trailing,
            vocabulary: TagVocabulary::Proto,
        }
    }
}

/// Writes the adorned debug form of a tree to an [`Emitter`].
pub struct DebugWriter<'a, A: Annotator + ?Sized, E: Emitter = StringEmitter> {
    annotator: &'a A,
    placement: Placement,
    emitter: E,
    indent: usize,
    line_start: bool,
}

impl<'a, A: Annotator + ?Sized> DebugWriter<'a, A> {
    pub fn new(annotator: &'a A, placement: Placement) -> Self {
        DebugWriter::with_emitter(annotator, placement, StringEmitter::new())
    }
}

impl<'a, A: Annotator + ?Sized, E: Emitter> DebugWriter<'a, A, E> {
    pub fn with_emitter(annotator: &'a A, placement: Placement, emitter: E) -> Self {
        DebugWriter {
            annotator,
            placement,
            emitter,
            indent: 0,
            line_start: true,
        }
    }

    /// Write `expr` and everything below it.
    pub fn buffer(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.buffer_expr(expr));
    }

    /// Consume the writer, returning its emitter.
    pub fn finish(self) -> E {
        self.emitter
    }

    fn buffer_expr(&mut self, expr: &Expr) {
        if self.placement == Placement::Leading {
            self.adorn(Element::Expr(expr));
        }
        match &expr.kind {
            ExprKind::Unspecified => {}
            ExprKind::Literal(literal) => self.append(&format_literal(literal)),
            ExprKind::Ident { name } => self.append(name),
            ExprKind::Select {
                operand,
                field,
                test_only,
            } => {
                self.buffer(operand);
                self.append(".");
                self.append(field);
                if *test_only {
                    self.append("~test-only~");
                }
            }
            ExprKind::Call {
                target,
                function,
                args,
            } => self.append_call(target.as_deref(), function, args),
            ExprKind::List { elements } => self.append_list(elements),
            ExprKind::Map { entries } => self.append_entries("", entries),
            ExprKind::Struct { type_name, fields } => self.append_entries(type_name, fields),
            ExprKind::Comprehension(comprehension) => self.append_comprehension(comprehension),
        }
        if self.placement == Placement::Trailing {
            self.adorn(Element::Expr(expr));
        }
    }

    fn append_call(&mut self, target: Option<&Expr>, function: &str, args: &[Expr]) {
        if let Some(target) = target {
            self.buffer(target);
            self.append(".");
        }
        self.append(function);
        self.append("(");
        if !args.is_empty() {
            self.indent += 1;
            self.append_line();
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    self.append(",");
                    self.append_line();
                }
                self.buffer(arg);
            }
            self.indent -= 1;
            self.append_line();
        }
        self.append(")");
    }

    fn append_list(&mut self, elements: &[Expr]) {
        self.append("[");
        if !elements.is_empty() {
            self.append_line();
            self.indent += 1;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    self.append(",");
                    self.append_line();
                }
                self.buffer(element);
            }
            self.indent -= 1;
            self.append_line();
        }
        self.append("]");
    }

    /// Map literals have an empty `type_name`.
    fn append_entries(&mut self, type_name: &str, entries: &[EntryExpr]) {
        self.append(type_name);
        self.append("{");
        if !entries.is_empty() {
            self.append_line();
            self.indent += 1;
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    self.append(",");
                    self.append_line();
                }
                self.append_entry(entry);
            }
            self.indent -= 1;
            self.append_line();
        }
        self.append("}");
    }

    fn append_entry(&mut self, entry: &EntryExpr) {
        if self.placement == Placement::Leading {
            self.adorn(Element::Entry(entry));
        }
        if entry.optional {
            self.append("?");
        }
        match &entry.key {
            EntryKey::Field(name) => self.append(name),
            EntryKey::MapKey(key) => self.buffer(key),
        }
        self.append(":");
        self.buffer(&entry.value);
        if self.placement == Placement::Trailing {
            self.adorn(Element::Entry(entry));
        }
    }

    fn append_comprehension(&mut self, comprehension: &Comprehension) {
        self.append("__comprehension__(");
        self.indent += 1;
        self.append_line();
        self.append_section("// Variable");
        self.append(&comprehension.iter_var);
        self.append(",");
        self.append_line();
        if let Some(iter_var2) = &comprehension.iter_var2 {
            self.append_section("// Variable2");
            self.append(iter_var2);
            self.append(",");
            self.append_line();
        }
        self.append_section("// Target");
        self.buffer(&comprehension.iter_range);
        self.append(",");
        self.append_line();
        self.append_section("// Accumulator");
        self.append(&comprehension.accu_var);
        self.append(",");
        self.append_line();
        self.append_section("// Init");
        self.buffer(&comprehension.accu_init);
        self.append(",");
        self.append_line();
        self.append_section("// LoopCondition");
        self.buffer(&comprehension.loop_condition);
        self.append(",");
        self.append_line();
        self.append_section("// LoopStep");
        self.buffer(&comprehension.loop_step);
        self.append(",");
        self.append_line();
        self.append_section("// Result");
        self.buffer(&comprehension.result);
        self.append(")");
        self.indent -= 1;
    }

    fn append_section(&mut self, header: &str) {
        self.append(header);
        self.append_line();
    }

    fn adorn(&mut self, element: Element<'_>) {
        let tag = self.annotator.annotate(element);
        self.append(&tag);
    }

    fn append(&mut self, text: &str) {
        if self.line_start {
            self.line_start = false;
            self.emitter.emit_indent(self.indent);
        }
        self.emitter.emit(text);
    }

    fn append_line(&mut self) {
        self.emitter.emit_newline();
        self.line_start = true;
    }
}

/// Render `root` with leading tags.
pub fn render_tree<A: Annotator + ?Sized>(root: &Expr, annotator: &A) -> String {
    render_tree_with(root, annotator, Placement::Leading)
}

/// Render `root` with the given tag placement.
pub fn render_tree_with<A: Annotator + ?Sized>(
    root: &Expr,
    annotator: &A,
    placement: Placement,
) -> String {
    let mut writer = DebugWriter::new(annotator, placement);
    writer.buffer(root);
    writer.finish().output()
}

#[cfg(test)]
mod tests;
