//! Rules for products: zero and one factors, integer fractions, and repeated bases.

use crate::primitive::int;
use crate::symbolic::{
    expr::{SymExpr, Primary},
    simplify::{fraction::{extract_integer_fraction, make_fraction}, step::Step},
};
use num::Integer;
use super::Rule;

/// The rules for products, in the order they are tried.
pub const RULES: &[Rule] = &[
    multiply_zero,
    multiply_one,
    reduce_numerical_fraction,
    combine_like_factors,
];

fn is_integer(expr: &SymExpr, value: i64) -> bool {
    expr.as_integer().is_some_and(|n| n == &int(value))
}

fn is_number(expr: &SymExpr) -> bool {
    expr.is_integer() || expr.is_float()
}

/// Splits a factor into its base and exponent. A factor that is not a power has exponent `1`.
fn base_and_exponent(factor: &SymExpr) -> (SymExpr, SymExpr) {
    match factor {
        SymExpr::Exp(base, exponent) => (*base.clone(), *exponent.clone()),
        _ => (factor.clone(), SymExpr::Primary(Primary::Integer(int(1)))),
    }
}

/// Removes every factor after `factors[idx]` that can be folded into it, and returns the
/// resulting base and exponent for `factors[idx]`.
///
/// A later factor is folded in when it has the same base (`a^b*a^c = a^(b+c)`), or when both
/// bases are numbers raised to the same exponent (`2^c*3^c = 6^c`).
fn absorb_like_factors(factors: &mut Vec<SymExpr>, idx: usize) -> (SymExpr, SymExpr) {
    let (mut base, mut exponent) = base_and_exponent(&factors[idx]);

    let mut next = idx + 1;
    while next < factors.len() {
        let (other_base, other_exponent) = base_and_exponent(&factors[next]);
        if exponent == other_exponent && is_number(&base) && is_number(&other_base) {
            base *= other_base;
        } else if base == other_base {
            exponent += other_exponent;
        } else {
            next += 1;
            continue;
        }
        factors.swap_remove(next);
    }

    (base, exponent)
}

/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Mul(factors) = expr else {
        return None;
    };
    factors.iter()
        .any(|factor| is_integer(factor, 0))
        .then(|| (SymExpr::Primary(Primary::Integer(int(0))), Step::MultiplyZero))
}

/// `a*1 = a`
pub fn multiply_one(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Mul(factors) = expr else {
        return None;
    };
    if !factors.iter().any(|factor| is_integer(factor, 1)) {
        return None;
    }

    let kept = factors.iter()
        .filter(|factor| !is_integer(factor, 1))
        .cloned()
        .collect();
    Some((SymExpr::Mul(kept).downgrade(), Step::MultiplyOne))
}

/// `3/12 = 1/4`, `12/3 = 4`
pub fn reduce_numerical_fraction(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Mul(factors) = expr else {
        return None;
    };

    let mut rest = factors.clone();
    let (numerator, denominator) = extract_integer_fraction(&mut rest, false, false)?;
    let gcd = numerator.gcd(&denominator);
    if gcd == int(0) || gcd == int(1) {
        return None;
    }

    let reduced = make_fraction(
        SymExpr::Primary(Primary::Integer(numerator / &gcd)),
        SymExpr::Primary(Primary::Integer(denominator / &gcd)),
    );
    Some((SymExpr::Mul(rest) * reduced, Step::ReduceFraction))
}

/// `a*a = a^2`, `a^b*a^c = a^(b+c)`, `2^c*3^c = 6^c`
pub fn combine_like_factors(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Mul(factors) = expr else {
        return None;
    };

    let mut merged = factors.clone();
    let mut idx = 0;
    while idx < merged.len() {
        let (base, exponent) = absorb_like_factors(&mut merged, idx);
        merged[idx] = if is_integer(&exponent, 1) {
            base
        } else {
            SymExpr::Exp(Box::new(base), Box::new(exponent))
        };
        idx += 1;
    }

    if merged.len() == factors.len() {
        return None;
    }
    Some((SymExpr::Mul(merged).downgrade(), Step::CombineLikeFactors))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> SymExpr {
        SymExpr::Primary(Primary::Symbol(String::from(name)))
    }

    fn num(n: i64) -> SymExpr {
        SymExpr::Primary(Primary::Integer(int(n)))
    }

    #[test]
    fn number_bases_merge_under_equal_exponents() {
        let product = SymExpr::Mul(vec![
            SymExpr::Exp(Box::new(num(2)), Box::new(sym("c"))),
            SymExpr::Exp(Box::new(num(3)), Box::new(sym("c"))),
        ]);
        let (merged, step) = combine_like_factors(&product).unwrap();
        assert_eq!(step, Step::CombineLikeFactors);
        assert_eq!(merged, SymExpr::Exp(Box::new(num(6)), Box::new(sym("c"))));
    }

    #[test]
    fn distinct_factors_stay() {
        assert_eq!(combine_like_factors(&SymExpr::Mul(vec![sym("a"), sym("b")])), None);
        assert_eq!(multiply_zero(&SymExpr::Mul(vec![sym("a"), num(2)])), None);
    }
}
