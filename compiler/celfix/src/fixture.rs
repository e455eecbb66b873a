//! Fixture rendering.
//!
//! Each test's parse result is decoded and rendered three ways: kind tags,
//! location tags, and the macro-call block. Tests are independent, so a
//! corpus renders in parallel; output order always equals input order.

use celfix_debug::{
    render_macro_calls_with, render_tree_with, KindAnnotator, LocationAnnotator, RenderOptions,
};
use celfix_proto::decode_value;
use rayon::prelude::*;

use crate::corpus::{CorpusFile, CorpusTest, Fixture, FixtureFile, FixtureSection};
use crate::CommandError;

/// Configuration for a fixture run.
#[derive(Clone, Debug)]
pub struct FixtureConfig {
    /// Tag placement and vocabulary.
    pub options: RenderOptions,
    /// Render tests in parallel.
    pub parallel: bool,
    /// Only render tests whose name contains this substring.
    pub filter: Option<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            options: RenderOptions::default(),
            parallel: true,
            filter: None,
        }
    }
}

impl FixtureConfig {
    fn selects(&self, test: &CorpusTest) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|filter| test.name.contains(filter))
    }
}

/// Render one corpus test.
pub fn render_fixture(test: &CorpusTest, options: &RenderOptions) -> Result<Fixture, CommandError> {
    let parsed = decode_value(test.result.clone()).map_err(|source| CommandError::Decode {
        origin: format!("test '{}'", test.name),
        source,
    })?;
    let info = &parsed.source_info;

    let kind = KindAnnotator::new(info).with_vocabulary(options.vocabulary);
    let ast = render_tree_with(&parsed.expr, &kind, options.placement);
    let locations = render_tree_with(&parsed.expr, &LocationAnnotator::new(info), options.placement);
    let macro_calls = render_macro_calls_with(info, options);

    tracing::debug!(
        test = test.name.as_str(),
        source = info.description.as_str(),
        macro_calls = info.macro_calls.len(),
        "rendered fixture"
    );
    Ok(Fixture {
        name: test.name.clone(),
        expression: test.expression.clone(),
        ast,
        locations,
        macro_calls,
    })
}

/// A selected test and where its fixture goes.
struct Job<'a> {
    file: usize,
    section: usize,
    test: &'a CorpusTest,
}

/// Render every selected test of `files`.
///
/// Files and sections are kept even when the filter leaves them empty. The
/// first failing test, in input order, fails the whole run.
pub fn extract_fixtures(
    files: &[CorpusFile],
    config: &FixtureConfig,
) -> Result<Vec<FixtureFile>, CommandError> {
    let jobs: Vec<Job<'_>> = files
        .iter()
        .enumerate()
        .flat_map(|(file, corpus_file)| {
            corpus_file
                .sections
                .iter()
                .enumerate()
                .flat_map(move |(section, corpus_section)| {
                    corpus_section
                        .tests
                        .iter()
                        .filter(move |test| config.selects(test))
                        .map(move |test| Job {
                            file,
                            section,
                            test,
                        })
                })
        })
        .collect();
    tracing::debug!(tests = jobs.len(), parallel = config.parallel, "rendering fixtures");

    let options = &config.options;
    let rendered: Vec<Result<Fixture, CommandError>> = if config.parallel {
        jobs.par_iter()
            .map(|job| render_fixture(job.test, options))
            .collect()
    } else {
        jobs.iter()
            .map(|job| render_fixture(job.test, options))
            .collect()
    };

    let mut fixture_files: Vec<FixtureFile> = files
        .iter()
        .map(|file| FixtureFile {
            name: file.name.clone(),
            sections: file
                .sections
                .iter()
                .map(|section| FixtureSection {
                    name: section.name.clone(),
                    tests: Vec::new(),
                })
                .collect(),
        })
        .collect();

    for (job, fixture) in jobs.iter().zip(rendered) {
        let fixture = fixture?;
        if let Some(section) = fixture_files
            .get_mut(job.file)
            .and_then(|file| file.sections.get_mut(job.section))
        {
            section.tests.push(fixture);
        }
    }
    Ok(fixture_files)
}

#[cfg(test)]
mod tests;
