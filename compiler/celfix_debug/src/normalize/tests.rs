use pretty_assertions::assert_eq;

use super::*;

#[test]
fn ids_are_zeroed() {
    assert_eq!(
        normalize_ids("^#12:*expr.Expr_CallExpr#f(\n  ^#3:Ident#a\n)"),
        "^#0:*expr.Expr_CallExpr#f(^#0:Ident#a)"
    );
}

#[test]
fn tags_without_ids_are_kept() {
    assert_eq!(normalize_ids("a^#Ident#"), "a^#Ident#");
    assert_eq!(normalize_ids("^#4[1,2]#a"), "^#4[1,2]#a");
    assert_eq!(normalize_ids("^#:x#"), "^#:x#");
}

#[test]
fn string_contents_lose_whitespace() {
    assert_eq!(normalize_ids("\"a b\"^#7:String#"), "\"ab\"^#0:String#");
}

#[test]
fn renumbered_renderings_match() {
    let first = "^#1:Call#_&&_(\n  ^#2:Bool#true,\n  ^#3:Bool#false\n)";
    let second = "^#7:Call#_&&_(^#5:Bool#true, ^#6:Bool#false)";
    assert_eq!(first_mismatch(first, second), None);
}

#[test]
fn mismatch_offset() {
    assert_eq!(first_mismatch("^#1:Ident#a", "^#2:Ident#b"), Some(10));
    assert_eq!(first_mismatch("ab", "abc"), Some(2));
    assert_eq!(first_mismatch("", ""), None);
}

#[test]
fn only_layout_whitespace_is_stripped() {
    assert_eq!(normalize_ids("a\u{2002}b\r\n\t c"), "a\u{2002}bc");
    assert_eq!(normalize_ids("\"\u{a0}\"^#3:String#"), "\"\u{a0}\"^#0:String#");
}

#[test]
fn ids_zeroed_before_whitespace_removed() {
    assert_eq!(normalize_ids("^#1 2:Int#1"), "^#12:Int#1");
    assert_eq!(normalize_ids("^#-4:Int#1"), "^#-4:Int#1");
}
