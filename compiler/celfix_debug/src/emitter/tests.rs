use pretty_assertions::assert_eq;

use super::*;

#[test]
fn string_emitter_collects_fragments() {
    let mut emitter = StringEmitter::new();
    emitter.emit("_&&_(");
    emitter.emit_newline();
    emitter.emit_indent(1);
    emitter.emit("a");
    assert_eq!(emitter.output(), "_&&_(\n  a");
}

#[test]
fn indent_is_two_spaces_per_level() {
    let mut emitter = StringEmitter::new();
    emitter.emit_indent(3);
    emitter.emit("x");
    assert_eq!(emitter.output(), "      x");
}

#[test]
fn zero_indent_writes_nothing() {
    let mut emitter = StringEmitter::new();
    emitter.emit_indent(0);
    assert_eq!(emitter.output(), "");
}
