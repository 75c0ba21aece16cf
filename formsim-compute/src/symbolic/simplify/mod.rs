//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which brings an expression into a normal form
//! by repeatedly applying rewriting rules to it in multiple passes, until no more rules apply.
//! Terms and factors are then sorted with [`order::sort`](super::order::sort), so that two
//! formulas that differ only in the order of their operands, or in the names of their variables,
//! end up with the same shape.

pub mod fraction;
pub mod rules;
pub mod step;

use log::{debug, trace};
use step::Step;
use super::{
    expr::{Primary, SymExpr},
    order,
    step_log::StepLog,
};

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &SymExpr, log: &mut dyn StepLog<Step>) -> (SymExpr, bool) {
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    loop {
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules::apply(&expr, log) {
            trace!("rewrote `{}` to `{}`", expr, new_expr);
            expr = new_expr;
            changed_in_this_pass = true;
            changed_at_least_once = true;
        }

        // then begin recursing into the expression's children
        let children: Vec<&mut SymExpr> = match expr {
            SymExpr::Primary(Primary::Call(_, ref mut args)) => args.iter_mut().collect(),
            SymExpr::Primary(_) => Vec::new(),
            SymExpr::Add(ref mut exprs) | SymExpr::Mul(ref mut exprs) => exprs.iter_mut().collect(),
            SymExpr::Exp(ref mut lhs, ref mut rhs)
                | SymExpr::Relation(_, ref mut lhs, ref mut rhs) => vec![&mut **lhs, &mut **rhs],
        };
        for child in children {
            let (new_child, changed) = inner_simplify(child, log);
            *child = new_child;
            // use |= instead of = to not reset these variables to false if already true
            changed_in_this_pass |= changed;
            changed_at_least_once |= changed;
        }

        if !changed_in_this_pass {
            break;
        }
    }

    (expr, changed_at_least_once)
}

/// Simplify the given expression, and sort its terms and factors into canonical order.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    let mut steps = 0usize;
    let simplified = inner_simplify(expr, &mut steps).0;
    debug!("simplified `{}` in {} steps", expr, steps);
    order::sort(simplified)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, which is useful for debugging.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps).0;
    (order::sort(expr), steps)
}
