//! Standard macro expansions.
//!
//! Each `expand_*` function builds the desugared form of a macro through an
//! [`ExprBuilder`] and records the invocation as written in the builder's
//! macro-call table, keyed by the expansion's id. Invocations that do not
//! have the macro's shape are built as ordinary calls and nothing is
//! recorded.

use crate::{Comprehension, Expr, ExprBuilder, ExprKind, Literal, MacroCall};

/// Accumulator variable bound by every fold expansion.
pub const ACCU_VAR: &str = "@result";

fn iter_var_name(var: &Expr) -> Option<String> {
    match &var.kind {
        ExprKind::Ident { name } => Some(name.clone()),
        _ => None,
    }
}

fn record(builder: &mut ExprBuilder, expansion: Expr, call: MacroCall) -> Expr {
    builder.record_macro_call(&expansion, call);
    expansion
}

/// `has(a.b)` becomes the presence test `a.b~test-only~`.
pub fn expand_has(builder: &mut ExprBuilder, offset: i32, arg: Expr) -> Expr {
    let call = MacroCall::global("has", vec![builder.macro_arg(&arg)]);
    match arg.kind {
        ExprKind::Select { operand, field, .. } => {
            let expansion = builder.presence_test(offset, *operand, &field);
            record(builder, expansion, call)
        }
        kind => {
            let arg = Expr::new(arg.id, kind);
            builder.call(offset, "has", vec![arg])
        }
    }
}

/// Two-argument receiver macro: `target.name(var, body)`.
struct Invocation {
    target: Expr,
    var: Expr,
    body: Expr,
}

impl Invocation {
    fn record_shape(&self, builder: &ExprBuilder, function: &str) -> MacroCall {
        MacroCall::member(
            builder.macro_arg(&self.target),
            function,
            vec![builder.macro_arg(&self.var), builder.macro_arg(&self.body)],
        )
    }

    fn unexpanded(self, builder: &mut ExprBuilder, offset: i32, function: &str) -> Expr {
        builder.member_call(offset, self.target, function, vec![self.var, self.body])
    }
}

fn bool_fold(
    builder: &mut ExprBuilder,
    offset: i32,
    iter_range: Expr,
    iter_var: String,
    init: bool,
    loop_step: Expr,
    loop_condition: Expr,
) -> Expr {
    let accu_init = builder.literal(offset, Literal::Bool(init));
    let result = builder.ident(offset, ACCU_VAR);
    builder.comprehension(
        offset,
        Comprehension {
            iter_var,
            iter_var2: None,
            iter_range,
            accu_var: ACCU_VAR.to_string(),
            accu_init,
            loop_condition,
            loop_step,
            result,
        },
    )
}

fn list_fold(
    builder: &mut ExprBuilder,
    offset: i32,
    iter_range: Expr,
    iter_var: String,
    loop_step: Expr,
) -> Expr {
    let accu_init = builder.list(offset, vec![]);
    let loop_condition = builder.literal(offset, Literal::Bool(true));
    let result = builder.ident(offset, ACCU_VAR);
    builder.comprehension(
        offset,
        Comprehension {
            iter_var,
            iter_var2: None,
            iter_range,
            accu_var: ACCU_VAR.to_string(),
            accu_init,
            loop_condition,
            loop_step,
            result,
        },
    )
}

/// `@result + [element]`
fn append_step(builder: &mut ExprBuilder, offset: i32, element: Expr) -> Expr {
    let accu = builder.ident(offset, ACCU_VAR);
    let single = builder.list(offset, vec![element]);
    builder.call(offset, "_+_", vec![accu, single])
}

/// `target.all(x, p)`: true when `p` holds for every element.
pub fn expand_all(builder: &mut ExprBuilder, offset: i32, target: Expr, var: Expr, body: Expr) -> Expr {
    let invocation = Invocation { target, var, body };
    let Some(iter_var) = iter_var_name(&invocation.var) else {
        return invocation.unexpanded(builder, offset, "all");
    };
    let call = invocation.record_shape(builder, "all");

    let accu = builder.ident(offset, ACCU_VAR);
    let loop_step = builder.call(offset, "_&&_", vec![accu, invocation.body]);
    let accu = builder.ident(offset, ACCU_VAR);
    let loop_condition = builder.call(offset, "@not_strictly_false", vec![accu]);
    let expansion = bool_fold(builder, offset, invocation.target, iter_var, true, loop_step, loop_condition);
    record(builder, expansion, call)
}

/// `target.exists(x, p)`: true when `p` holds for some element.
pub fn expand_exists(
    builder: &mut ExprBuilder,
    offset: i32,
    target: Expr,
    var: Expr,
    body: Expr,
) -> Expr {
    let invocation = Invocation { target, var, body };
    let Some(iter_var) = iter_var_name(&invocation.var) else {
        return invocation.unexpanded(builder, offset, "exists");
    };
    let call = invocation.record_shape(builder, "exists");

    let accu = builder.ident(offset, ACCU_VAR);
    let loop_step = builder.call(offset, "_||_", vec![accu, invocation.body]);
    let accu = builder.ident(offset, ACCU_VAR);
    let negated = builder.call(offset, "!_", vec![accu]);
    let loop_condition = builder.call(offset, "@not_strictly_false", vec![negated]);
    let expansion = bool_fold(builder, offset, invocation.target, iter_var, false, loop_step, loop_condition);
    record(builder, expansion, call)
}

/// `target.exists_one(x, p)`: true when `p` holds for exactly one element.
pub fn expand_exists_one(
    builder: &mut ExprBuilder,
    offset: i32,
    target: Expr,
    var: Expr,
    body: Expr,
) -> Expr {
    let invocation = Invocation { target, var, body };
    let Some(iter_var) = iter_var_name(&invocation.var) else {
        return invocation.unexpanded(builder, offset, "exists_one");
    };
    let call = invocation.record_shape(builder, "exists_one");

    let accu_init = builder.literal(offset, Literal::Int(0));
    let loop_condition = builder.literal(offset, Literal::Bool(true));
    let accu = builder.ident(offset, ACCU_VAR);
    let one = builder.literal(offset, Literal::Int(1));
    let increment = builder.call(offset, "_+_", vec![accu, one]);
    let accu = builder.ident(offset, ACCU_VAR);
    let loop_step = builder.call(offset, "_?_:_", vec![invocation.body, increment, accu]);
    let accu = builder.ident(offset, ACCU_VAR);
    let one = builder.literal(offset, Literal::Int(1));
    let result = builder.call(offset, "_==_", vec![accu, one]);
    let expansion = builder.comprehension(
        offset,
        Comprehension {
            iter_var,
            iter_var2: None,
            iter_range: invocation.target,
            accu_var: ACCU_VAR.to_string(),
            accu_init,
            loop_condition,
            loop_step,
            result,
        },
    );
    record(builder, expansion, call)
}

/// `target.map(x, f)`: the list of `f` applied to each element.
pub fn expand_map(builder: &mut ExprBuilder, offset: i32, target: Expr, var: Expr, body: Expr) -> Expr {
    let invocation = Invocation { target, var, body };
    let Some(iter_var) = iter_var_name(&invocation.var) else {
        return invocation.unexpanded(builder, offset, "map");
    };
    let call = invocation.record_shape(builder, "map");

    let loop_step = append_step(builder, offset, invocation.body);
    let expansion = list_fold(builder, offset, invocation.target, iter_var, loop_step);
    record(builder, expansion, call)
}

/// `target.map(x, p, f)`: `f` applied to each element for which `p` holds.
pub fn expand_map_filter(
    builder: &mut ExprBuilder,
    offset: i32,
    target: Expr,
    var: Expr,
    filter: Expr,
    body: Expr,
) -> Expr {
    let Some(iter_var) = iter_var_name(&var) else {
        return builder.member_call(offset, target, "map", vec![var, filter, body]);
    };
    let call = MacroCall::member(
        builder.macro_arg(&target),
        "map",
        vec![
            builder.macro_arg(&var),
            builder.macro_arg(&filter),
            builder.macro_arg(&body),
        ],
    );

    let append = append_step(builder, offset, body);
    let accu = builder.ident(offset, ACCU_VAR);
    let loop_step = builder.call(offset, "_?_:_", vec![filter, append, accu]);
    let expansion = list_fold(builder, offset, target, iter_var, loop_step);
    record(builder, expansion, call)
}

/// `target.filter(x, p)`: the elements for which `p` holds.
pub fn expand_filter(
    builder: &mut ExprBuilder,
    offset: i32,
    target: Expr,
    var: Expr,
    body: Expr,
) -> Expr {
    let invocation = Invocation { target, var, body };
    let Some(iter_var) = iter_var_name(&invocation.var) else {
        return invocation.unexpanded(builder, offset, "filter");
    };
    let call = invocation.record_shape(builder, "filter");

    let element = builder.ident(offset, &iter_var);
    let append = append_step(builder, offset, element);
    let accu = builder.ident(offset, ACCU_VAR);
    let loop_step = builder.call(offset, "_?_:_", vec![invocation.body, append, accu]);
    let expansion = list_fold(builder, offset, invocation.target, iter_var, loop_step);
    record(builder, expansion, call)
}
