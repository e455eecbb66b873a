//! Literal formatting.
//!
//! Constants render in expression source syntax: strings and bytes quoted
//! with backslash escapes, doubles in shortest round-trip form, unsigned
//! integers with a `u` suffix.

use std::fmt::Write as _;
use std::sync::LazyLock;

use celfix_ir::Literal;
use regex::Regex;

/// Exponent at or above which doubles switch to exponent form.
const EXPONENT_FORM_MIN: i32 = 6;

/// Exponent below which doubles switch to exponent form.
const EXPONENT_FORM_MAX_NEGATIVE: i32 = -4;

/// Render a literal the way it would be written in source.
pub fn format_literal(literal: &Literal) -> String {
    match literal {
        Literal::Bool(value) => value.to_string(),
        Literal::Bytes(bytes) => quote_bytes(bytes),
        Literal::Double(value) => format_double(*value),
        Literal::Int(value) => value.to_string(),
        Literal::Null => "null".to_string(),
        Literal::String(text) => quote_string(text),
        Literal::Uint(value) => format!("{value}u"),
        Literal::Unrecognized { text, .. } => text.clone(),
    }
}

/// Shortest round-trip form, in exponent notation outside `[1e-4, 1e6)`.
///
/// Exponents carry a sign and at least two digits: `1e+06`, `2.5e-07`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits as `d.ddde<exp>`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (EXPONENT_FORM_MAX_NEGATIVE..EXPONENT_FORM_MIN).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Double-quoted string with escapes for quotes, backslashes, and
/// non-printable characters.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        push_escaped_char(&mut out, c);
    }
    out.push('"');
    out
}

/// `b"..."` with UTF-8 text kept readable and every other byte escaped as
/// `\xNN`.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b\"");
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_escaped_char(&mut out, c);
        }
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{byte:02x}");
        }
    }
    out.push('"');
    out
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0b}' => out.push_str("\\v"),
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        c if is_printable(c) => out.push(c),
        c if u32::from(c) < 0x80 => {
            let _ = write!(out, "\\x{:02x}", u32::from(c));
        }
        c if u32::from(c) < 0x1_0000 => {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
        c => {
            let _ = write!(out, "\\U{:08x}", u32::from(c));
        }
    }
}

/// Other, separator, and unassigned code points. U+0020 is handled before
/// this class is consulted.
#[allow(clippy::expect_used, reason = "pattern is a compile-time literal")]
static NON_PRINTABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{Zl}\p{Zp}\p{Zs}]")
        .expect("valid general category class")
});

/// Graphic characters (letters, marks, numbers, punctuation, symbols) and
/// the ASCII space print as themselves.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let mut buf = [0; 4];
    !NON_PRINTABLE_RE.is_match(c.encode_utf8(&mut buf))
}
