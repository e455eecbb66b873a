//! `celfix compare`: compare two renderings regardless of id numbering.

use std::path::Path;

use celfix_debug::first_mismatch;

use crate::commands::read_file;
use crate::CommandError;

/// Outcome of comparing two renderings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    Match,
    /// Character offset of the first difference after normalization.
    Mismatch { offset: usize },
}

/// Compare the renderings stored in two files after normalizing ids and
/// whitespace.
pub fn compare_files(expected: &Path, actual: &Path) -> Result<Comparison, CommandError> {
    let expected = read_file(expected)?;
    let actual = read_file(actual)?;
    Ok(match first_mismatch(&expected, &actual) {
        None => Comparison::Match,
        Some(offset) => Comparison::Mismatch { offset },
    })
}
