//! `celfix fixtures`: render a whole corpus.

use std::path::Path;

use crate::commands::{read_file, write_output};
use crate::corpus::CorpusFile;
use crate::fixture::{extract_fixtures, FixtureConfig};
use crate::CommandError;

/// Render every selected test of the corpus at `corpus` and write the
/// fixture files as pretty-printed JSON. Returns the number of fixtures.
pub fn run_fixtures(
    corpus: &Path,
    output: Option<&Path>,
    config: &FixtureConfig,
) -> Result<usize, CommandError> {
    let text = read_file(corpus)?;
    let files: Vec<CorpusFile> =
        serde_json::from_str(&text).map_err(|source| CommandError::Corpus {
            path: corpus.to_path_buf(),
            source,
        })?;

    let fixtures = extract_fixtures(&files, config)?;
    let count = fixtures
        .iter()
        .flat_map(|file| &file.sections)
        .map(|section| section.tests.len())
        .sum::<usize>();

    let json = serde_json::to_string_pretty(&fixtures).map_err(CommandError::Serialize)?;
    write_output(output, &json)?;
    tracing::info!(count, corpus = %corpus.display(), "wrote fixtures");
    Ok(count)
}
