//! celfix IR - Expression Trees and Source Metadata
//!
//! This crate contains the data a parser hands to fixture rendering:
//! - `ExprId` node identities
//! - The expanded expression tree (`Expr`, `ExprKind`, `Literal`, `EntryExpr`)
//! - `SourceInfo` side-tables: positions, line offsets, macro calls
//! - `ParsedExpr`, the tree and its side-tables together
//!
//! It also provides `ExprBuilder`, which numbers nodes the way a parser
//! does, the standard macro expansions in [`macros`], and a read-only
//! [`visitor`].
//!
//! # Design Philosophy
//!
//! - **Metadata beside the tree**: positions and macro calls are keyed by
//!   id in `SourceInfo`, never embedded in nodes.
//! - **Immutable after construction**: consumers borrow; nothing here
//!   mutates a finished tree.

mod ast;
mod builder;
mod expr_id;
pub mod macros;
mod parsed;
mod source_info;
pub mod visitor;

pub use ast::{Comprehension, EntryExpr, EntryKey, Expr, ExprKind, Literal};
pub use builder::ExprBuilder;
pub use expr_id::ExprId;
pub use parsed::ParsedExpr;
pub use source_info::{Location, MacroCall, SourceInfo};
