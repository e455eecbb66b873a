use pretty_assertions::assert_eq;

use super::*;
use crate::annotate::{KindAnnotator, LocationAnnotator};
use celfix_ir::{macros, ExprBuilder, ExprId, Literal, SourceInfo};

fn id(raw: i64) -> ExprId {
    ExprId::new(raw)
}

fn and_call() -> Expr {
    Expr::call(
        id(1),
        "_&&_",
        vec![
            Expr::literal(id(2), Literal::Bool(true)),
            Expr::literal(id(3), Literal::Bool(false)),
        ],
    )
}

#[test]
fn call_tags_in_pre_order() {
    let info = SourceInfo::new();
    let rendered = render_tree(&and_call(), &KindAnnotator::new(&info));
    assert_eq!(
        rendered,
        "^#1:Call#_&&_(\n  ^#2:Bool#true,\n  ^#3:Bool#false\n)"
    );
    let first = rendered.find("^#1:Call#");
    let second = rendered.find("^#2:Bool#");
    let third = rendered.find("^#3:Bool#");
    assert!(first < second && second < third);
}

#[test]
fn call_golden_layout() {
    let info = SourceInfo::new();
    let annotator = KindAnnotator::new(&info).with_vocabulary(TagVocabulary::Proto);
    assert_eq!(
        render_tree_with(&and_call(), &annotator, Placement::Trailing),
        "_&&_(\n  true^#2:*expr.Constant_BoolValue#,\n  \
         false^#3:*expr.Constant_BoolValue#\n)^#1:*expr.Expr_CallExpr#"
    );
}

#[test]
fn member_call_renders_target_first() {
    let info = SourceInfo::new();
    let call = Expr::member_call(
        id(3),
        Expr::ident(id(1), "x"),
        "f",
        vec![Expr::ident(id(2), "y")],
    );
    assert_eq!(
        render_tree(&call, &KindAnnotator::new(&info)),
        "^#3:Call#^#1:Ident#x.f(\n  ^#2:Ident#y\n)"
    );
}

#[test]
fn call_without_args_stays_on_one_line() {
    let info = SourceInfo::new();
    let call = Expr::call(id(1), "now", vec![]);
    assert_eq!(render_tree(&call, &KindAnnotator::new(&info)), "^#1:Call#now()");
}

#[test]
fn nested_calls_indent_per_level() {
    let info = SourceInfo::new();
    let inner = Expr::call(id(2), "g", vec![Expr::ident(id(1), "a")]);
    let outer = Expr::call(id(3), "f", vec![inner]);
    assert_eq!(
        render_tree(&outer, &KindAnnotator::new(&info)),
        "^#3:Call#f(\n  ^#2:Call#g(\n    ^#1:Ident#a\n  )\n)"
    );
}

#[test]
fn select_and_presence_test() {
    let info = SourceInfo::new();
    let select = Expr::select(id(2), Expr::ident(id(1), "a"), "b", false);
    let test = Expr::select(id(4), Expr::ident(id(3), "a"), "b", true);
    let annotator = KindAnnotator::new(&info);
    assert_eq!(render_tree(&select, &annotator), "^#2:Select#^#1:Ident#a.b");
    assert_eq!(
        render_tree(&test, &annotator),
        "^#4:Select#^#3:Ident#a.b~test-only~"
    );
}

#[test]
fn lists() {
    let info = SourceInfo::new();
    let annotator = KindAnnotator::new(&info);
    assert_eq!(
        render_tree(&Expr::list(id(1), vec![]), &annotator),
        "^#1:List#[]"
    );
    let list = Expr::list(
        id(3),
        vec![
            Expr::literal(id(1), Literal::Int(1)),
            Expr::literal(id(2), Literal::Int(-2)),
        ],
    );
    assert_eq!(
        render_tree(&list, &annotator),
        "^#3:List#[\n  ^#1:Int#1,\n  ^#2:Int#-2\n]"
    );
}

fn string_map() -> Expr {
    let entry = EntryExpr::map_entry(
        id(3),
        Expr::literal(id(1), Literal::String("k".into())),
        Expr::literal(id(2), Literal::Uint(1)),
        false,
    );
    Expr::map(id(4), vec![entry])
}

#[test]
fn map_entries_leading() {
    let info = SourceInfo::new();
    assert_eq!(
        render_tree(&string_map(), &KindAnnotator::new(&info)),
        "^#4:Map#{\n  ^#3:MapEntry#^#1:String#\"k\":^#2:Uint#1u\n}"
    );
}

#[test]
fn map_entries_trailing() {
    let info = SourceInfo::new();
    assert_eq!(
        render_tree_with(&string_map(), &KindAnnotator::new(&info), Placement::Trailing),
        "{\n  \"k\"^#1:String#:1u^#2:Uint#^#3:MapEntry#\n}^#4:Map#"
    );
}

#[test]
fn struct_with_optional_field() {
    let info = SourceInfo::new();
    let fields = vec![
        EntryExpr::field(id(2), "f", Expr::literal(id(1), Literal::Int(1)), true),
        EntryExpr::field(id(4), "g", Expr::literal(id(3), Literal::Null), false),
    ];
    let message = Expr::structure(id(5), "pkg.Msg", fields);
    assert_eq!(
        render_tree(&message, &KindAnnotator::new(&info)),
        "^#5:Struct#pkg.Msg{\n  ^#2:MapEntry#?f:^#1:Int#1,\n  ^#4:MapEntry#g:^#3:Null#null\n}"
    );
    assert_eq!(
        render_tree(&Expr::structure(id(6), "pkg.Empty", vec![]), &KindAnnotator::new(&info)),
        "^#6:Struct#pkg.Empty{}"
    );
}

fn fold(iter_var2: Option<&str>) -> Expr {
    Expr::comprehension(
        id(6),
        Comprehension {
            iter_var: "x".into(),
            iter_var2: iter_var2.map(String::from),
            iter_range: Expr::ident(id(1), "l"),
            accu_var: "@result".into(),
            accu_init: Expr::literal(id(2), Literal::Bool(true)),
            loop_condition: Expr::ident(id(3), "@result"),
            loop_step: Expr::ident(id(4), "x"),
            result: Expr::ident(id(5), "@result"),
        },
    )
}

#[test]
fn comprehension_sections() {
    let info = SourceInfo::new();
    let expected = "\
^#6:Comprehension#__comprehension__(
  // Variable
  x,
  // Target
  ^#1:Ident#l,
  // Accumulator
  @result,
  // Init
  ^#2:Bool#true,
  // LoopCondition
  ^#3:Ident#@result,
  // LoopStep
  ^#4:Ident#x,
  // Result
  ^#5:Ident#@result)";
    assert_eq!(render_tree(&fold(None), &KindAnnotator::new(&info)), expected);
}

#[test]
fn comprehension_second_variable() {
    let info = SourceInfo::new();
    let rendered = render_tree(&fold(Some("y")), &KindAnnotator::new(&info));
    assert!(rendered.contains("  // Variable\n  x,\n  // Variable2\n  y,\n  // Target\n"));
}

#[test]
fn macro_expansion_is_tagged_with_macro_name() {
    let mut builder = ExprBuilder::new();
    let operand = builder.ident(4, "a");
    let select = builder.select(5, operand, "b");
    let root = macros::expand_has(&mut builder, 3, select);
    let parsed = builder.finish(root);

    let annotator = KindAnnotator::new(&parsed.source_info);
    assert_eq!(
        render_tree(&parsed.expr, &annotator),
        "^#3:has#^#1:Ident#a.b~test-only~"
    );
}

#[test]
fn unspecified_renders_only_its_tag() {
    let info = SourceInfo::new();
    assert_eq!(
        render_tree(&Expr::unspecified(id(5)), &KindAnnotator::new(&info)),
        "^#5:#"
    );
}

#[test]
fn location_rendering() {
    let mut builder = ExprBuilder::for_source("a &&\nb");
    let a = builder.ident(0, "a");
    let b = builder.ident(5, "b");
    let root = builder.call(2, "_&&_", vec![a, b]);
    let parsed = builder.finish(root);

    let annotator = LocationAnnotator::new(&parsed.source_info);
    assert_eq!(
        render_tree(&parsed.expr, &annotator),
        "^#3[1,2]#_&&_(\n  ^#1[1,0]#a,\n  ^#2[2,0]#b\n)"
    );
}

#[test]
fn renders_through_trait_object() {
    let info = SourceInfo::new();
    let kind = KindAnnotator::new(&info);
    let annotator: &dyn Annotator = &kind;
    assert_eq!(
        render_tree(&and_call(), annotator),
        render_tree(&and_call(), &kind)
    );
}

/// Records each output line with its nesting level.
#[derive(Default)]
struct LineEmitter {
    lines: Vec<(usize, String)>,
}

impl Emitter for LineEmitter {
    fn emit(&mut self, text: &str) {
        match self.lines.last_mut() {
            Some((_, line)) => line.push_str(text),
            None => self.lines.push((0, text.to_string())),
        }
    }

    fn emit_newline(&mut self) {
        self.lines.push((0, String::new()));
    }

    fn emit_indent(&mut self, level: usize) {
        match self.lines.last_mut() {
            Some((indent, _)) => *indent = level,
            None => self.lines.push((level, String::new())),
        }
    }
}

#[test]
fn writer_drives_custom_emitter() {
    let info = SourceInfo::new();
    let annotator = KindAnnotator::new(&info).without_ids();
    let mut writer =
        DebugWriter::with_emitter(&annotator, Placement::Trailing, LineEmitter::default());
    writer.buffer(&and_call());
    let lines = writer.finish().lines;
    assert_eq!(
        lines,
        vec![
            (0, "_&&_(".to_string()),
            (1, "true^#Bool#,".to_string()),
            (1, "false^#Bool#".to_string()),
            (0, ")^#Call#".to_string()),
        ]
    );
}

#[test]
fn deep_select_chain() {
    const DEPTH: i64 = 5_000;
    let mut expr = Expr::ident(id(1), "a");
    for raw in 2..=DEPTH {
        expr = Expr::select(id(raw), expr, "f", false);
    }
    let info = SourceInfo::new();
    let annotator = KindAnnotator::new(&info).without_ids();
    let rendered = render_tree(&expr, &annotator);

    let selects = usize::try_from(DEPTH - 1).unwrap_or_default();
    let expected = format!(
        "{}^#Ident#a{}",
        "^#Select#".repeat(selects),
        ".f".repeat(selects)
    );
    assert_eq!(rendered, expected);
}

#[test]
fn default_options() {
    assert_eq!(RenderOptions::default().placement, Placement::Leading);
    assert_eq!(RenderOptions::default().vocabulary, TagVocabulary::Short);
    assert_eq!(
        RenderOptions::golden(),
        RenderOptions {
            placement: Placement::Trailing,
            vocabulary: TagVocabulary::Proto,
        }
    );
}
