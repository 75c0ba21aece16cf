//! Rules that push a product or a power into the operands of the expression it applies to.
//!
//! These can make the expression larger, so they are tried after the rules that only shrink it.

use crate::symbolic::{expr::SymExpr, simplify::step::Step};
use super::Rule;

/// The distribution rules, in the order they are tried.
pub const RULES: &[Rule] = &[distributive_property, distribute_power];

/// `a*(b+c) = a*b + a*c`
///
/// Only the first sum among the factors is distributed over; the others are handled by later
/// passes.
pub fn distributive_property(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Mul(factors) = expr else {
        return None;
    };

    let mut others = factors.clone();
    let idx = others.iter().position(|factor| matches!(factor, SymExpr::Add(_)))?;
    let SymExpr::Add(terms) = others.swap_remove(idx) else {
        return None;
    };

    let distributed = terms.into_iter()
        .map(|term| SymExpr::Mul(others.clone()) * term)
        .collect();
    Some((SymExpr::Add(distributed), Step::DistributiveProperty))
}

/// `(a*b)^c = a^c * b^c`
pub fn distribute_power(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Exp(base, exponent) = expr else {
        return None;
    };
    let SymExpr::Mul(factors) = &**base else {
        return None;
    };

    let powers = factors.iter()
        .map(|factor| SymExpr::Exp(Box::new(factor.clone()), exponent.clone()))
        .collect();
    Some((SymExpr::Mul(powers), Step::DistributePower))
}
