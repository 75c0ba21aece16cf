//! Canonical ordering of terms and factors.
//!
//! The simplifier is free to reorder terms and factors while it works, and the parser keeps them
//! in source order. Two formulas that are the same up to commutativity would therefore flatten to
//! different token arrays. [`sort`] fixes this by ordering the operands of every
//! [`SymExpr::Add`] and [`SymExpr::Mul`] by a key that describes their _shape_.
//!
//! The key never includes the name of a [`Primary::Symbol`], so renaming variables consistently
//! does not change the order. Operands with equal keys, such as `x^2` and `y^2`, are then ordered
//! by how their variables relate to the ones met earlier in the expression: each is
//! [canonicalized](SymbolContext) against the variables seen so far, and the smallest result goes
//! first. Operands that still tie keep their relative order.

use crate::similarity::{canonical::SymbolContext, flatten::flatten};
use super::expr::{Primary, SymExpr};

/// Returns the shape key of an expression whose children are already sorted.
fn shape_key(expr: &SymExpr) -> String {
    let join = |exprs: &[SymExpr]| exprs.iter().map(shape_key).collect::<Vec<_>>().join(",");
    match expr {
        SymExpr::Primary(Primary::Integer(n)) => format!("I{}", n),
        SymExpr::Primary(Primary::Float(n)) => format!("F{}", n),
        SymExpr::Primary(Primary::Symbol(_)) => String::from("S"),
        SymExpr::Primary(Primary::Constant(name)) => format!("K{}", name),
        SymExpr::Primary(Primary::Call(name, args)) => format!("C{}({})", name, join(args)),
        SymExpr::Add(terms) => format!("A({})", join(terms)),
        SymExpr::Mul(factors) => format!("M({})", join(factors)),
        SymExpr::Exp(base, exp) => format!("E({},{})", shape_key(base), shape_key(exp)),
        SymExpr::Relation(kind, lhs, rhs) => {
            format!("R{}({},{})", kind.name(), shape_key(lhs), shape_key(rhs))
        },
    }
}

/// Sorts the terms and factors of the expression, recursively, by shape key alone. Sums and
/// products left with a single operand are replaced by that operand.
fn sort_by_shape(expr: SymExpr) -> SymExpr {
    let sort_list = |exprs: Vec<SymExpr>| {
        let mut exprs = exprs.into_iter().map(sort_by_shape).collect::<Vec<_>>();
        exprs.sort_by_cached_key(shape_key);
        exprs
    };

    match expr {
        SymExpr::Primary(Primary::Call(name, args)) => {
            SymExpr::Primary(Primary::Call(name, args.into_iter().map(sort_by_shape).collect()))
        },
        SymExpr::Primary(primary) => SymExpr::Primary(primary),
        SymExpr::Add(terms) => SymExpr::Add(sort_list(terms)).downgrade(),
        SymExpr::Mul(factors) => SymExpr::Mul(sort_list(factors)).downgrade(),
        SymExpr::Exp(base, exp) => {
            SymExpr::Exp(Box::new(sort_by_shape(*base)), Box::new(sort_by_shape(*exp)))
        },
        SymExpr::Relation(kind, lhs, rhs) => {
            SymExpr::Relation(kind, Box::new(sort_by_shape(*lhs)), Box::new(sort_by_shape(*rhs)))
        },
    }
}

/// Reorders operands that share a shape key, visiting the expression in flattened order.
/// `context` holds the variables met so far.
fn break_ties(expr: SymExpr, context: &mut SymbolContext) -> SymExpr {
    match expr {
        SymExpr::Primary(Primary::Call(name, args)) => {
            let args = args.into_iter().map(|arg| break_ties(arg, context)).collect();
            SymExpr::Primary(Primary::Call(name, args))
        },
        SymExpr::Primary(primary) => {
            let leaf = SymExpr::Primary(primary);
            context.canonicalize(flatten(&leaf));
            leaf
        },
        SymExpr::Add(terms) => SymExpr::Add(order_operands(terms, context)),
        SymExpr::Mul(factors) => SymExpr::Mul(order_operands(factors, context)),
        SymExpr::Exp(base, exp) => {
            let base = break_ties(*base, context);
            SymExpr::Exp(Box::new(base), Box::new(break_ties(*exp, context)))
        },
        SymExpr::Relation(kind, lhs, rhs) => {
            let lhs = break_ties(*lhs, context);
            SymExpr::Relation(kind, Box::new(lhs), Box::new(break_ties(*rhs, context)))
        },
    }
}

/// Picks operands one at a time from a list already sorted by shape. Among the leading operands
/// that share a shape key, the one whose canonical form under `context` is smallest goes next.
fn order_operands(mut remaining: Vec<SymExpr>, context: &mut SymbolContext) -> Vec<SymExpr> {
    let mut ordered = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let shape = shape_key(&remaining[0]);
        let next = remaining.iter()
            .take_while(|operand| shape_key(operand) == shape)
            .map(|operand| context.clone().canonicalize(flatten(operand)))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map_or(0, |(i, _)| i);
        let operand = remaining.remove(next);
        ordered.push(break_ties(operand, context));
    }
    ordered
}

/// Sorts the terms and factors of the expression, recursively, into canonical order. Sums and
/// products left with a single operand are replaced by that operand.
pub fn sort(expr: SymExpr) -> SymExpr {
    break_ties(sort_by_shape(expr), &mut SymbolContext::new())
}

#[cfg(test)]
mod tests {
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> SymExpr {
        SymExpr::Primary(Primary::Symbol(String::from(name)))
    }

    fn num(n: i64) -> SymExpr {
        SymExpr::Primary(Primary::Integer(int(n)))
    }

    /// Compares operand order exactly, unlike the strict equality of [`SymExpr`].
    fn exact(expr: &SymExpr) -> String {
        format!("{:?}", expr)
    }

    #[test]
    fn numbers_before_symbols() {
        let sorted = sort(SymExpr::Mul(vec![sym("x"), num(3)]));
        assert_eq!(exact(&sorted), exact(&SymExpr::Mul(vec![num(3), sym("x")])));
    }

    #[test]
    fn shape_not_names() {
        let expr = |a: &str, b: &str| SymExpr::Add(vec![
            SymExpr::Exp(Box::new(sym(a)), Box::new(num(2))),
            sym(b),
        ]);
        let first = sort(expr("x", "y"));
        let renamed = sort(expr("p", "q"));

        // the power sorts before the bare symbol regardless of names
        assert_eq!(exact(&first), exact(&SymExpr::Add(vec![
            SymExpr::Exp(Box::new(sym("x")), Box::new(num(2))),
            sym("y"),
        ])));
        assert_eq!(exact(&renamed), exact(&SymExpr::Add(vec![
            SymExpr::Exp(Box::new(sym("p")), Box::new(num(2))),
            sym("q"),
        ])));
    }

    #[test]
    fn ties_keep_order() {
        let sorted = sort(SymExpr::Add(vec![sym("b"), sym("a")]));
        assert_eq!(exact(&sorted), exact(&SymExpr::Add(vec![sym("b"), sym("a")])));
    }

    #[test]
    fn ties_follow_earlier_variables() {
        // 2yx after x^2 and y^2: the factor matching the first squared variable comes first
        let expr = |first: &str, second: &str| SymExpr::Add(vec![
            SymExpr::Mul(vec![num(2), sym("y"), sym("x")]),
            SymExpr::Exp(Box::new(sym(first)), Box::new(num(2))),
            SymExpr::Exp(Box::new(sym(second)), Box::new(num(2))),
        ]);
        let square = |name: &str| SymExpr::Exp(Box::new(sym(name)), Box::new(num(2)));

        assert_eq!(exact(&sort(expr("x", "y"))), exact(&SymExpr::Add(vec![
            square("x"),
            square("y"),
            SymExpr::Mul(vec![num(2), sym("x"), sym("y")]),
        ])));
        assert_eq!(exact(&sort(expr("y", "x"))), exact(&SymExpr::Add(vec![
            square("y"),
            square("x"),
            SymExpr::Mul(vec![num(2), sym("y"), sym("x")]),
        ])));
    }

    #[test]
    fn single_operand_downgrades() {
        assert_eq!(exact(&sort(SymExpr::Mul(vec![sym("x")]))), exact(&sym("x")));
    }
}
