use super::*;

fn id(raw: i64) -> ExprId {
    ExprId::new(raw)
}

#[test]
fn test_call_has_no_target() {
    let call = Expr::call(
        id(1),
        "_&&_",
        vec![
            Expr::literal(id(2), Literal::Bool(true)),
            Expr::literal(id(3), Literal::Bool(false)),
        ],
    );
    assert!(!call.is_member_call());
    let ExprKind::Call { function, args, .. } = &call.kind else {
        panic!("expected a call");
    };
    assert_eq!(function, "_&&_");
    assert_eq!(args.len(), 2);
}

#[test]
fn test_member_call_keeps_target() {
    let call = Expr::member_call(id(3), Expr::ident(id(1), "a"), "size", vec![]);
    assert!(call.is_member_call());
    let ExprKind::Call { target, .. } = &call.kind else {
        panic!("expected a call");
    };
    assert_eq!(target.as_deref(), Some(&Expr::ident(id(1), "a")));
}

#[test]
fn test_entry_constructors() {
    let map_entry = EntryExpr::map_entry(
        id(3),
        Expr::literal(id(1), Literal::String("k".into())),
        Expr::literal(id(2), Literal::Int(1)),
        false,
    );
    assert!(matches!(map_entry.key, EntryKey::MapKey(_)));

    let field = EntryExpr::field(id(5), "single_int64", Expr::literal(id(4), Literal::Int(1)), true);
    assert_eq!(field.key, EntryKey::Field("single_int64".into()));
    assert!(field.optional);
}

#[test]
fn test_clone_is_structurally_equal() {
    let expr = Expr::select(id(2), Expr::ident(id(1), "a"), "b", true);
    assert_eq!(expr.clone(), expr);
}
