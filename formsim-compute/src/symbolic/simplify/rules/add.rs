//! Rules for sums: dropping zero terms and merging terms that differ only in their coefficient.

use crate::primitive::{int, int_to_float};
use crate::symbolic::{
    expr::{SymExpr, Primary},
    simplify::{fraction::{extract_explicit_frac, make_fraction, extract_fractional}, step::Step},
};
use super::Rule;

/// The rules for sums, in the order they are tried.
pub const RULES: &[Rule] = &[add_zero, combine_like_terms];

fn one() -> SymExpr {
    SymExpr::Primary(Primary::Integer(int(1)))
}

/// Numeric value of a coefficient produced by [`split_coefficient`].
fn coefficient_value(expr: &SymExpr) -> Option<f64> {
    match expr {
        SymExpr::Primary(Primary::Integer(n)) => Some(int_to_float(n)),
        SymExpr::Primary(Primary::Float(n)) => Some(*n),
        SymExpr::Exp(..) => Some(1.0 / int_to_float(expr.as_integer_recip()?)),
        SymExpr::Mul(factors) => factors.iter()
            .try_fold(1.0, |acc, factor| Some(acc * coefficient_value(factor)?)),
        _ => None,
    }
}

/// Sums two coefficients into a single number or reduced-form fraction.
///
/// If either side is a float, the sum is a float.
fn sum_coefficients(lhs: SymExpr, rhs: SymExpr) -> SymExpr {
    if lhs.is_float() || rhs.is_float() {
        if let (Some(a), Some(b)) = (coefficient_value(&lhs), coefficient_value(&rhs)) {
            return SymExpr::Primary(Primary::Float(a + b));
        }
    }

    let (Some((num1, den1)), Some((num2, den2))) = (
        extract_explicit_frac(&mut lhs.clone()),
        extract_explicit_frac(&mut rhs.clone()),
    ) else {
        return lhs + rhs;
    };

    // n1/d1 + n2/d2 = (n1*d2 + n2*d1) / (d1*d2)
    let numerator = SymExpr::Primary(Primary::Integer(num1 * &den2 + num2 * &den1));
    let denominator = den1 * den2;
    if denominator == int(1) {
        numerator
    } else {
        make_fraction(numerator, SymExpr::Primary(Primary::Integer(denominator)))
    }
}

/// Splits a term into its numeric coefficient and whatever it multiplies.
///
/// | term      | coefficient | rest    |
/// |-----------|-------------|---------|
/// | `5`       | `5`         | `1`     |
/// | `3*a`     | `3`         | `a`     |
/// | `1/4*a*b` | `1/4`       | `a*b`   |
/// | `a`       | `1`         | `a`     |
fn split_coefficient(term: &SymExpr) -> (SymExpr, SymExpr) {
    match term {
        SymExpr::Primary(Primary::Integer(_) | Primary::Float(_)) => (term.clone(), one()),
        SymExpr::Exp(..) if term.is_integer_recip() => (term.clone(), one()),
        SymExpr::Mul(factors) => {
            let mut rest = factors.clone();
            let coefficient = extract_fractional(&mut rest).unwrap_or_else(one);
            (coefficient, SymExpr::Mul(rest).downgrade())
        },
        _ => (one(), term.clone()),
    }
}

/// Removes every term after `terms[idx]` with the same non-numeric part as `terms[idx]`, and
/// returns the total coefficient of the removed terms and `terms[idx]` itself.
///
/// Returns [`None`] if no term was removed.
fn absorb_like_terms(terms: &mut Vec<SymExpr>, idx: usize) -> Option<(SymExpr, SymExpr)> {
    let (mut coefficient, rest) = split_coefficient(&terms[idx]);
    let mut absorbed = false;

    let mut next = idx + 1;
    while next < terms.len() {
        let (other_coefficient, other_rest) = split_coefficient(&terms[next]);
        if other_rest == rest {
            coefficient = sum_coefficients(coefficient, other_coefficient);
            terms.swap_remove(next);
            absorbed = true;
        } else {
            next += 1;
        }
    }

    absorbed.then_some((coefficient, rest))
}

/// `a+0 = a`
pub fn add_zero(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Add(terms) = expr else {
        return None;
    };

    let is_zero = |term: &&SymExpr| term.as_integer().is_some_and(|n| n == &int(0));
    if !terms.iter().any(|term| is_zero(&term)) {
        return None;
    }

    let kept = terms.iter()
        .filter(|term| !is_zero(term))
        .cloned()
        .collect();
    Some((SymExpr::Add(kept).downgrade(), Step::AddZero))
}

/// `a+a = 2a`, `2a+3a = 5a`, `\frac{a}{2} + \frac{a}{3} = \frac{5}{6} a`
pub fn combine_like_terms(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Add(terms) = expr else {
        return None;
    };

    let mut merged = terms.clone();
    let mut idx = 0;
    while idx < merged.len() {
        if let Some((coefficient, rest)) = absorb_like_terms(&mut merged, idx) {
            merged[idx] = if coefficient.as_integer().is_some_and(|n| n == &int(1)) {
                rest
            } else {
                coefficient * rest
            };
        }
        idx += 1;
    }

    if merged.len() == terms.len() {
        return None;
    }
    Some((SymExpr::Add(merged).downgrade(), Step::CombineLikeTerms))
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
    fn coefficients_split_off() {
        assert_eq!(split_coefficient(&num(5)), (num(5), num(1)));
        assert_eq!(split_coefficient(&sym("a")), (num(1), sym("a")));
        assert_eq!(
            split_coefficient(&SymExpr::Mul(vec![num(3), sym("a")])),
            (num(3), sym("a")),
        );
    }

    #[test]
    fn unrelated_terms_stay() {
        assert_eq!(combine_like_terms(&SymExpr::Add(vec![sym("a"), sym("b")])), None);
        assert_eq!(add_zero(&SymExpr::Add(vec![sym("a"), sym("b")])), None);
    }
}
