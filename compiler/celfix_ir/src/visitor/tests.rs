use pretty_assertions::assert_eq;

use super::*;
use crate::{Comprehension, Literal};

fn id(raw: i64) -> ExprId {
    ExprId::new(raw)
}

fn raw_ids(expr: &Expr) -> Vec<i64> {
    collect_ids(expr).into_iter().map(ExprId::raw).collect()
}

#[test]
fn test_call_visits_target_before_args() {
    let expr = Expr::member_call(
        id(1),
        Expr::ident(id(2), "a"),
        "f",
        vec![Expr::ident(id(3), "b"), Expr::ident(id(4), "c")],
    );
    assert_eq!(raw_ids(&expr), vec![1, 2, 3, 4]);
}

#[test]
fn test_map_visits_entry_then_key_then_value() {
    let expr = Expr::map(
        id(1),
        vec![
            EntryExpr::map_entry(id(2), Expr::ident(id(3), "k"), Expr::ident(id(4), "v"), false),
            EntryExpr::map_entry(id(5), Expr::ident(id(6), "k2"), Expr::ident(id(7), "v2"), true),
        ],
    );
    assert_eq!(raw_ids(&expr), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_struct_field_has_no_key_expr() {
    let expr = Expr::structure(
        id(1),
        "Msg",
        vec![EntryExpr::field(id(2), "f", Expr::literal(id(3), Literal::Int(1)), false)],
    );
    assert_eq!(raw_ids(&expr), vec![1, 2, 3]);
}

#[test]
fn test_comprehension_order() {
    let expr = Expr::comprehension(
        id(10),
        Comprehension {
            iter_var: "x".into(),
            iter_var2: None,
            iter_range: Expr::ident(id(1), "list"),
            accu_var: "@result".into(),
            accu_init: Expr::literal(id(2), Literal::Bool(true)),
            loop_condition: Expr::ident(id(3), "@not_strictly_false"),
            loop_step: Expr::ident(id(4), "step"),
            result: Expr::ident(id(5), "@result"),
        },
    );
    assert_eq!(raw_ids(&expr), vec![10, 1, 2, 3, 4, 5]);
}

#[test]
fn test_custom_visitor_counts_idents() {
    struct CountIdents {
        count: usize,
    }

    impl<'ast> Visitor<'ast> for CountIdents {
        fn visit_expr(&mut self, expr: &'ast Expr) {
            if let ExprKind::Ident { .. } = expr.kind {
                self.count += 1;
            }
            walk_expr(self, expr);
        }
    }

    let expr = Expr::list(
        id(1),
        vec![
            Expr::ident(id(2), "a"),
            Expr::select(id(4), Expr::ident(id(3), "b"), "c", false),
            Expr::unspecified(id(5)),
        ],
    );
    let mut visitor = CountIdents { count: 0 };
    visitor.visit_expr(&expr);
    assert_eq!(visitor.count, 2);
}
