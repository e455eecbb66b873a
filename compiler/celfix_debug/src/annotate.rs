//! Annotators: per-node tags for adorned renderings.
//!
//! An [`Annotator`] maps one tree element to a short tag such as
//! `^#3:Call#` or `^#3[1,4]#`. Exactly two strategies exist:
//!
//! - [`KindAnnotator`]: structural kind (literal sub-kind for constants),
//!   or the macro name when the node replaced a macro invocation.
//! - [`LocationAnnotator`]: the node's start line and column.
//!
//! Both are pure functions of the element and the `SourceInfo` they borrow.

use std::borrow::Cow;

use celfix_ir::{EntryExpr, Expr, ExprId, ExprKind, Literal, SourceInfo};

/// A tree element that can carry a tag.
#[derive(Copy, Clone, Debug)]
pub enum Element<'a> {
    Expr(&'a Expr),
    Entry(&'a EntryExpr),
}

impl Element<'_> {
    pub fn id(self) -> ExprId {
        match self {
            Element::Expr(expr) => expr.id,
            Element::Entry(entry) => entry.id,
        }
    }
}

/// Produces the tag for one element.
pub trait Annotator {
    fn annotate(&self, element: Element<'_>) -> String;
}

/// Names used for structural tags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagVocabulary {
    /// `Call`, `Select`, `Bool`, `MapEntry`, ...
    #[default]
    Short,
    /// Wire message names (`*expr.Expr_CallExpr`, `*expr.Constant_BoolValue`,
    /// `*expr.Expr_CreateStruct_Entry`, ...) as found in existing golden
    /// files.
    Proto,
}

impl TagVocabulary {
    /// Structural tag of an expression node.
    ///
    /// `Unspecified` nodes have an empty tag. Unrecognized literal kinds
    /// fall back to their payload type name, which has no stable format.
    pub fn expr_tag(self, expr: &Expr) -> Cow<'_, str> {
        let tag = match (&expr.kind, self) {
            (ExprKind::Unspecified, _) => "",
            (ExprKind::Literal(Literal::Unrecognized { type_name, .. }), _) => {
                tracing::warn!(
                    id = %expr.id,
                    type_name = type_name.as_str(),
                    "unrecognized literal kind; tagging with payload type name"
                );
                return Cow::Borrowed(type_name.as_str());
            }
            (ExprKind::Literal(literal), vocabulary) => literal_tag(literal, vocabulary),
            (ExprKind::Ident { .. }, TagVocabulary::Short) => "Ident",
            (ExprKind::Ident { .. }, TagVocabulary::Proto) => "*expr.Expr_IdentExpr",
            (ExprKind::Select { .. }, TagVocabulary::Short) => "Select",
            (ExprKind::Select { .. }, TagVocabulary::Proto) => "*expr.Expr_SelectExpr",
            (ExprKind::Call { .. }, TagVocabulary::Short) => "Call",
            (ExprKind::Call { .. }, TagVocabulary::Proto) => "*expr.Expr_CallExpr",
            (ExprKind::List { .. }, TagVocabulary::Short) => "List",
            (ExprKind::List { .. }, TagVocabulary::Proto) => "*expr.Expr_ListExpr",
            (ExprKind::Map { .. }, TagVocabulary::Short) => "Map",
            (ExprKind::Struct { .. }, TagVocabulary::Short) => "Struct",
            (ExprKind::Map { .. } | ExprKind::Struct { .. }, TagVocabulary::Proto) => {
                "*expr.Expr_StructExpr"
            }
            (ExprKind::Comprehension(_), TagVocabulary::Short) => "Comprehension",
            (ExprKind::Comprehension(_), TagVocabulary::Proto) => "*expr.Expr_ComprehensionExpr",
        };
        Cow::Borrowed(tag)
    }

    /// Tag of a map or struct entry.
    pub fn entry_tag(self) -> &'static str {
        match self {
            TagVocabulary::Short => "MapEntry",
            TagVocabulary::Proto => "*expr.Expr_CreateStruct_Entry",
        }
    }
}

fn literal_tag(literal: &Literal, vocabulary: TagVocabulary) -> &'static str {
    match (literal, vocabulary) {
        (Literal::Bool(_), TagVocabulary::Short) => "Bool",
        (Literal::Bool(_), TagVocabulary::Proto) => "*expr.Constant_BoolValue",
        (Literal::Bytes(_), TagVocabulary::Short) => "Bytes",
        (Literal::Bytes(_), TagVocabulary::Proto) => "*expr.Constant_BytesValue",
        (Literal::Double(_), TagVocabulary::Short) => "Double",
        (Literal::Double(_), TagVocabulary::Proto) => "*expr.Constant_DoubleValue",
        (Literal::Int(_), TagVocabulary::Short) => "Int",
        (Literal::Int(_), TagVocabulary::Proto) => "*expr.Constant_Int64Value",
        (Literal::Null, TagVocabulary::Short) => "Null",
        (Literal::Null, TagVocabulary::Proto) => "*expr.Constant_NullValue",
        (Literal::String(_), TagVocabulary::Short) => "String",
        (Literal::String(_), TagVocabulary::Proto) => "*expr.Constant_StringValue",
        (Literal::Uint(_), TagVocabulary::Short) => "Uint",
        (Literal::Uint(_), TagVocabulary::Proto) => "*expr.Constant_Uint64Value",
        // Tagged by `expr_tag` before reaching here.
        (Literal::Unrecognized { .. }, _) => "",
    }
}

/// Tags nodes with their structural kind, or with the macro name when the
/// node's id is a key of the macro-call table.
///
/// Output: `^#<id>:<tag>#`, or `^#<tag>#` without ids.
#[derive(Copy, Clone, Debug)]
pub struct KindAnnotator<'a> {
    info: &'a SourceInfo,
    vocabulary: TagVocabulary,
    with_ids: bool,
    /// Node tagged structurally even though it is a macro-call key.
    structural_root: Option<ExprId>,
}

impl<'a> KindAnnotator<'a> {
    pub fn new(info: &'a SourceInfo) -> Self {
        KindAnnotator {
            info,
            vocabulary: TagVocabulary::default(),
            with_ids: true,
            structural_root: None,
        }
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: TagVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Omit ids from tags: `^#Call#`.
    #[must_use]
    pub fn without_ids(mut self) -> Self {
        self.with_ids = false;
        self
    }

    /// Tag the node with `id` by its structure, not by macro name.
    ///
    /// Used when rendering a reconstructed macro call whose own id is a
    /// macro-call key. Other ids are unaffected.
    #[must_use]
    pub fn structural_for(mut self, id: ExprId) -> Self {
        self.structural_root = Some(id);
        self
    }

    pub fn vocabulary(&self) -> TagVocabulary {
        self.vocabulary
    }

    fn macro_name(&self, id: ExprId) -> Option<&'a str> {
        if self.structural_root == Some(id) {
            return None;
        }
        self.info.macro_call(id).map(|call| call.function.as_str())
    }

    fn tag(&self, id: ExprId, tag: &str) -> String {
        if self.with_ids {
            format!("^#{id}:{tag}#")
        } else {
            format!("^#{tag}#")
        }
    }
}

impl Annotator for KindAnnotator<'_> {
    fn annotate(&self, element: Element<'_>) -> String {
        match element {
            Element::Expr(expr) => match self.macro_name(expr.id) {
                Some(name) => self.tag(expr.id, name),
                None => self.tag(expr.id, &self.vocabulary.expr_tag(expr)),
            },
            Element::Entry(entry) => self.tag(entry.id, self.vocabulary.entry_tag()),
        }
    }
}

/// Tags nodes with the line and column where they start: `^#<id>[l,c]#`.
///
/// Positions without a record render as `[-1,-1]`. Macro-call status is
/// ignored: the position reported is that of the node in the tree.
#[derive(Copy, Clone, Debug)]
pub struct LocationAnnotator<'a> {
    info: &'a SourceInfo,
}

impl<'a> LocationAnnotator<'a> {
    pub fn new(info: &'a SourceInfo) -> Self {
        LocationAnnotator { info }
    }
}

impl Annotator for LocationAnnotator<'_> {
    fn annotate(&self, element: Element<'_>) -> String {
        let id = element.id();
        let location = self.info.start_location(id);
        format!("^#{id}[{},{}]#", location.line, location.column)
    }
}
