//! Comparison of renderings across producers.
//!
//! Two parsers may number nodes differently while producing the same tree.
//! [`normalize_ids`] erases id numbers from kind tags and strips layout
//! whitespace so such renderings compare equal.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used, reason = "pattern is a compile-time literal")]
static ID_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^#\d+:").expect("valid id tag pattern"));

#[allow(clippy::expect_used, reason = "pattern is a compile-time literal")]
static LAYOUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r\t ]+").expect("valid layout pattern"));

/// Rewrite every `^#<digits>:` to `^#0:`, then drop spaces, tabs, and line
/// breaks.
pub fn normalize_ids(rendering: &str) -> String {
    let zeroed = ID_TAG_RE.replace_all(rendering, "^#0:");
    LAYOUT_RE.replace_all(&zeroed, "").into_owned()
}

/// Character offset of the first difference between two normalized
/// renderings, or `None` when they match.
pub fn first_mismatch(expected: &str, actual: &str) -> Option<usize> {
    let expected = normalize_ids(expected);
    let actual = normalize_ids(actual);
    let mut expected_chars = expected.chars();
    let mut actual_chars = actual.chars();
    let mut offset = 0;
    loop {
        match (expected_chars.next(), actual_chars.next()) {
            (None, None) => return None,
            (Some(a), Some(b)) if a == b => offset += 1,
            _ => return Some(offset),
        }
    }
}

#[cfg(test)]
mod tests;
