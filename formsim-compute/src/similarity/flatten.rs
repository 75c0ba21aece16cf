//! Flattening a [`SymExpr`] into a sequence of operators and operands.

use crate::symbolic::expr::{Primary, SymExpr};
use num::BigInt;
use std::fmt;

/// One element of a flattened expression, before symbols are renamed.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatToken {
    /// The name of an operation: `Add`, `Mul`, `Pow`, a relation name, or a function name.
    Operator(String),

    /// An integer literal.
    Integer(BigInt),

    /// A floating-point literal.
    Float(f64),

    /// A variable.
    Symbol(String),

    /// A named constant, such as `pi`.
    Constant(String),
}

impl fmt::Display for FlatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(name) | Self::Symbol(name) | Self::Constant(name) => write!(f, "{}", name),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Pending work for [`flatten`].
enum Work<'a> {
    /// Flatten this expression.
    Visit(&'a SymExpr),

    /// Output this operator name.
    Emit(String),
}

/// Returns the operator name and operands of an interior node, or `None` for a leaf.
fn operation(expr: &SymExpr) -> Option<(String, Vec<&SymExpr>)> {
    match expr {
        SymExpr::Primary(Primary::Call(name, args)) => Some((name.clone(), args.iter().collect())),
        SymExpr::Primary(_) => None,
        SymExpr::Add(terms) => Some((String::from("Add"), terms.iter().collect())),
        SymExpr::Mul(factors) => Some((String::from("Mul"), factors.iter().collect())),
        SymExpr::Exp(base, exp) => Some((String::from("Pow"), vec![&**base, &**exp])),
        SymExpr::Relation(kind, lhs, rhs) => Some((kind.name().to_owned(), vec![&**lhs, &**rhs])),
    }
}

/// Flattens the expression depth-first.
///
/// A node with two or more operands produces its first operand, then, for each remaining operand,
/// the node's operator followed by that operand: `a + b + c` becomes `a Add b Add c`. A node with
/// one operand produces the operand followed by the operator: `sin(x)` becomes `x sin`.
pub fn flatten(expr: &SymExpr) -> Vec<FlatToken> {
    let mut out = Vec::new();
    let mut stack = vec![Work::Visit(expr)];

    while let Some(work) = stack.pop() {
        let expr = match work {
            Work::Visit(expr) => expr,
            Work::Emit(name) => {
                out.push(FlatToken::Operator(name));
                continue;
            },
        };

        let Some((name, operands)) = operation(expr) else {
            out.push(match expr {
                SymExpr::Primary(Primary::Integer(n)) => FlatToken::Integer(n.clone()),
                SymExpr::Primary(Primary::Float(n)) => FlatToken::Float(*n),
                SymExpr::Primary(Primary::Constant(name)) => FlatToken::Constant(name.clone()),
                SymExpr::Primary(Primary::Symbol(name)) => FlatToken::Symbol(name.clone()),
                _ => continue,
            });
            continue;
        };

        match operands.as_slice() {
            [] => out.push(FlatToken::Operator(name)),
            [operand] => {
                stack.push(Work::Emit(name));
                stack.push(Work::Visit(*operand));
            },
            [first, rest @ ..] => {
                // pushed in reverse, so that the first operand is visited first
                for operand in rest.iter().rev() {
                    stack.push(Work::Visit(*operand));
                    stack.push(Work::Emit(name.clone()));
                }
                stack.push(Work::Visit(*first));
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> SymExpr {
        SymExpr::Primary(Primary::Symbol(String::from(name)))
    }

    fn render(expr: &SymExpr) -> Vec<String> {
        flatten(expr).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn n_ary_infix() {
        let expr = SymExpr::Add(vec![sym("a"), sym("b"), sym("c")]);
        assert_eq!(render(&expr), vec!["a", "Add", "b", "Add", "c"]);
    }

    #[test]
    fn unary_suffix() {
        let expr = SymExpr::Primary(Primary::Call(String::from("sin"), vec![sym("x")]));
        assert_eq!(render(&expr), vec!["x", "sin"]);
    }

    #[test]
    fn nested() {
        // x^2 + 3y
        let expr = SymExpr::Add(vec![
            SymExpr::Exp(Box::new(sym("x")), Box::new(SymExpr::Primary(Primary::Integer(int(2))))),
            SymExpr::Mul(vec![SymExpr::Primary(Primary::Integer(int(3))), sym("y")]),
        ]);
        assert_eq!(render(&expr), vec!["x", "Pow", "2", "Add", "3", "Mul", "y"]);
    }

    #[test]
    fn deep_nesting() {
        let mut expr = sym("x");
        for _ in 0..100_000 {
            expr = SymExpr::Primary(Primary::Call(String::from("f"), vec![expr]));
        }
        let flat = flatten(&expr);
        assert_eq!(flat.len(), 100_001);
        assert_eq!(flat[0], FlatToken::Symbol(String::from("x")));

        // dropping a tree this deep recursively would overflow the test thread's stack
        std::mem::forget(expr);
    }
}
