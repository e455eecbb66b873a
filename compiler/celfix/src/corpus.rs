//! Corpus input and fixture output formats.
//!
//! A corpus is a JSON array of test files, each split into named sections
//! of tests. Every test carries the expression source and the protojson
//! parse result a reference parser produced for it:
//!
//! ```json
//! [{"name": "basic", "sections": [{"name": "self_eval", "tests": [
//!   {"name": "self_eval_zero", "expression": "0", "result": {"expr": {...}}}
//! ]}]}]
//! ```
//!
//! Fixture files keep the same hierarchy, replacing each result with its
//! renderings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CorpusFile {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<CorpusSection>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CorpusSection {
    pub name: String,
    #[serde(default)]
    pub tests: Vec<CorpusTest>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CorpusTest {
    pub name: String,
    pub expression: String,
    /// Protojson `ParsedExpr` or `CheckedExpr`.
    pub result: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureFile {
    pub name: String,
    pub sections: Vec<FixtureSection>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureSection {
    pub name: String,
    pub tests: Vec<Fixture>,
}

/// Renderings of one test.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub name: String,
    pub expression: String,
    /// Tree with kind tags.
    pub ast: String,
    /// Tree with location tags.
    pub locations: String,
    /// Reconstructed macro calls; absent when no macro fired.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub macro_calls: String,
}
