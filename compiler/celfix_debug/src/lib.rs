//! celfix debug - Adorned Renderings of Expression Trees
//!
//! Turns a parsed expression tree and its source info into deterministic
//! text for golden fixtures:
//!
//! - [`render_tree`] writes the tree's debug form with one annotator tag per
//!   node and entry
//! - [`render_macro_calls`] rebuilds every macro invocation erased by
//!   desugaring and renders them as one block
//! - [`normalize_ids`] makes renderings from differently numbered parses
//!   comparable
//!
//! # Annotators
//!
//! [`KindAnnotator`] tags nodes with their kind, or with the macro name where
//! a macro fired. [`LocationAnnotator`] tags nodes with their line and column.
//!
//! # Determinism
//!
//! Output depends only on the tree and its source info. Side-table lookups
//! never fail and the macro block is ordered explicitly, so equal inputs
//! render byte-identically on every call and thread.

mod annotate;
mod emitter;
pub mod literal;
mod macro_calls;
mod normalize;
mod stack;
mod writer;

pub use annotate::{Annotator, Element, KindAnnotator, LocationAnnotator, TagVocabulary};
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use macro_calls::{render_macro_calls, render_macro_calls_with};
pub use normalize::{first_mismatch, normalize_ids};
pub use writer::{render_tree, render_tree_with, DebugWriter, Placement, RenderOptions};
