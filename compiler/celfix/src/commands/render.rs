//! `celfix render` and `celfix macros`: inspect a single parse result.

use std::path::Path;

use celfix_debug::{
    render_macro_calls_with, render_tree_with, KindAnnotator, LocationAnnotator, RenderOptions,
};

use crate::commands::read_parsed;
use crate::CommandError;

/// Render the tree in `path` with kind tags, or location tags when
/// `locations` is set.
pub fn render_file(
    path: &Path,
    locations: bool,
    options: &RenderOptions,
) -> Result<String, CommandError> {
    let parsed = read_parsed(path)?;
    let info = &parsed.source_info;
    let rendered = if locations {
        render_tree_with(&parsed.expr, &LocationAnnotator::new(info), options.placement)
    } else {
        let kind = KindAnnotator::new(info).with_vocabulary(options.vocabulary);
        render_tree_with(&parsed.expr, &kind, options.placement)
    };
    Ok(rendered)
}

/// Render the macro-call block of the parse result in `path`.
pub fn render_macros_file(path: &Path, options: &RenderOptions) -> Result<String, CommandError> {
    let parsed = read_parsed(path)?;
    Ok(render_macro_calls_with(&parsed.source_info, options))
}
