#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::corpus::CorpusSection;

fn and_result() -> serde_json::Value {
    json!({
        "expr": {"id": "1", "callExpr": {"function": "_&&_", "args": [
            {"id": "2", "constExpr": {"boolValue": true}},
            {"id": "3", "constExpr": {"boolValue": false}}
        ]}},
        "sourceInfo": {"positions": {"1": 5, "2": 0, "3": 8}}
    })
}

fn has_result() -> serde_json::Value {
    json!({
        "expr": {"id": "3", "selectExpr": {
            "operand": {"id": "1", "identExpr": {"name": "a"}}, "field": "b", "testOnly": true
        }},
        "sourceInfo": {
            "positions": {"1": 4, "2": 5, "3": 3},
            "macroCalls": {"3": {"callExpr": {"function": "has", "args": [
                {"id": "2", "selectExpr": {"operand": {"id": "1", "identExpr": {"name": "a"}}, "field": "b"}}
            ]}}}
        }
    })
}

fn test(name: &str, expression: &str, result: serde_json::Value) -> CorpusTest {
    CorpusTest {
        name: name.to_string(),
        expression: expression.to_string(),
        result,
    }
}

fn corpus() -> Vec<CorpusFile> {
    vec![
        CorpusFile {
            name: "logic".into(),
            sections: vec![CorpusSection {
                name: "and".into(),
                tests: vec![
                    test("and_simple", "true && false", and_result()),
                    test("and_again", "true && false", and_result()),
                ],
            }],
        },
        CorpusFile {
            name: "macros".into(),
            sections: vec![
                CorpusSection {
                    name: "has".into(),
                    tests: vec![test("has_field", "has(a.b)", has_result())],
                },
                CorpusSection {
                    name: "empty".into(),
                    tests: vec![],
                },
            ],
        },
    ]
}

#[test]
fn renders_all_three_views() {
    let fixture = render_fixture(
        &test("has_field", "has(a.b)", has_result()),
        &RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(fixture.name, "has_field");
    assert_eq!(fixture.expression, "has(a.b)");
    assert_eq!(fixture.ast, "^#3:has#^#1:Ident#a.b~test-only~");
    assert_eq!(fixture.locations, "^#3[1,3]#^#1[1,4]#a.b~test-only~");
    assert_eq!(
        fixture.macro_calls,
        "^#3:Call#has(\n  ^#2:Select#^#1:Ident#a.b\n)"
    );
}

#[test]
fn golden_options() {
    let fixture = render_fixture(
        &test("and_simple", "true && false", and_result()),
        &RenderOptions::golden(),
    )
    .unwrap();
    assert_eq!(
        fixture.ast,
        "_&&_(\n  true^#2:*expr.Constant_BoolValue#,\n  \
         false^#3:*expr.Constant_BoolValue#\n)^#1:*expr.Expr_CallExpr#"
    );
    assert_eq!(fixture.locations, "_&&_(\n  true^#2[1,0]#,\n  false^#3[1,8]#\n)^#1[1,5]#");
    assert_eq!(fixture.macro_calls, "");
}

#[test]
fn parallel_matches_sequential() {
    let files = corpus();
    let parallel = extract_fixtures(&files, &FixtureConfig::default()).unwrap();
    let sequential = extract_fixtures(
        &files,
        &FixtureConfig {
            parallel: false,
            ..FixtureConfig::default()
        },
    )
    .unwrap();
    assert_eq!(parallel, sequential);

    let names: Vec<&str> = parallel
        .iter()
        .flat_map(|file| &file.sections)
        .flat_map(|section| &section.tests)
        .map(|fixture| fixture.name.as_str())
        .collect();
    assert_eq!(names, vec!["and_simple", "and_again", "has_field"]);
}

#[test]
fn filter_keeps_structure() {
    let config = FixtureConfig {
        filter: Some("has".into()),
        ..FixtureConfig::default()
    };
    let fixtures = extract_fixtures(&corpus(), &config).unwrap();
    assert_eq!(fixtures.len(), 2);
    assert!(fixtures[0].sections[0].tests.is_empty());
    assert_eq!(fixtures[1].sections[0].tests.len(), 1);
    assert_eq!(fixtures[1].sections[1].name, "empty");
}

#[test]
fn first_failure_is_reported() {
    let mut files = corpus();
    files[1].sections[0]
        .tests
        .push(test("broken", "x", json!({"expr": {"id": "oops"}})));
    let err = extract_fixtures(&files, &FixtureConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot decode test 'broken': invalid integer \"oops\""
    );
}
