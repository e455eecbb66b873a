//! Macro-call reconstruction.
//!
//! Desugaring erases the shape a macro was written in; only the source
//! info's macro-call table remembers it. This module rebuilds each record
//! as a standalone call node carrying the record's id, renders it with kind
//! tags, and joins the renderings into one block.
//!
//! Records are emitted in descending id order. Parsers number a macro after
//! its arguments, so nested expansions come before the macros that contain
//! them.
//!
//! A reconstructed call's own id is a macro-call key, so a plain
//! [`KindAnnotator`] would tag it with the macro name again. Each call is
//! rendered with [`KindAnnotator::structural_for`] its id: the call itself
//! gets its structural tag, while nested macros among its arguments keep
//! their macro names.

use celfix_ir::SourceInfo;

use crate::annotate::KindAnnotator;
use crate::writer::{render_tree_with, RenderOptions};

/// Separator between reconstructed calls.
const SEPARATOR: &str = ",\n";

/// Render every recorded macro call with default options.
///
/// An empty table renders as the empty string.
pub fn render_macro_calls(info: &SourceInfo) -> String {
    render_macro_calls_with(info, &RenderOptions::default())
}

/// Render every recorded macro call.
pub fn render_macro_calls_with(info: &SourceInfo, options: &RenderOptions) -> String {
    let ids = info.macro_call_ids_descending();
    tracing::debug!(count = ids.len(), "rendering macro calls");

    ids.into_iter()
        .filter_map(|id| {
            let call = info.macro_call(id)?;
            let annotator = KindAnnotator::new(info)
                .with_vocabulary(options.vocabulary)
                .structural_for(id);
            Some(render_tree_with(&call.to_call_expr(id), &annotator, options.placement))
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
