//! Command handlers for the `celfix` CLI.
//!
//! Each submodule implements one subcommand. Shared file handling lives
//! here in the module root. Handlers return their output instead of
//! printing it, so the binary decides where text goes.

use std::path::Path;

use celfix_debug::RenderOptions;
use celfix_ir::ParsedExpr;
use celfix_proto::decode_parsed_expr;

use crate::CommandError;

mod compare;
mod fixtures;
mod render;

pub use compare::{compare_files, Comparison};
pub use fixtures::run_fixtures;
pub use render::{render_file, render_macros_file};

/// Rendering options selected by the `--golden` flag.
pub fn render_options(golden: bool) -> RenderOptions {
    if golden {
        RenderOptions::golden()
    } else {
        RenderOptions::default()
    }
}

/// Read a file to a string, classifying the failure.
pub(crate) fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::read(path.to_path_buf(), source))
}

/// Read and decode a protojson parse result.
pub(crate) fn read_parsed(path: &Path) -> Result<ParsedExpr, CommandError> {
    let json = read_file(path)?;
    decode_parsed_expr(&json).map_err(|source| CommandError::Decode {
        origin: format!("'{}'", path.display()),
        source,
    })
}

/// Write `text` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, text: &str) -> Result<(), CommandError> {
    match path {
        Some(path) => std::fs::write(path, text).map_err(|source| CommandError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
