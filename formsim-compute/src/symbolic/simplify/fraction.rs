//! Tools to help manipulate fractions.

use crate::primitive::int;
use crate::symbolic::expr::{SymExpr, Primary};
use num::BigInt;

/// Create a [`SymExpr`] representing a fraction with the given numerator and denominator.
///
/// The representation is a [`SymExpr::Mul`] containing two factors. The first factor is the
/// numerator, and the second factor is the denominator raised to the power of -1.
pub(crate) fn make_fraction(numerator: SymExpr, denominator: SymExpr) -> SymExpr {
    numerator *
        SymExpr::Exp(
            Box::new(denominator),
            Box::new(SymExpr::Primary(Primary::Integer(int(-1)))),
        )
}

/// Extracts a numerical fraction from the factors of a [`SymExpr::Mul`].
///
/// Fractions are represented as a [`SymExpr::Mul`] containing a [`Primary::Integer`], and a
/// [`SymExpr::Exp`] whose base is a [`Primary::Integer`] and whose exponent is `-1`. This function
/// finds two factors that match this pattern, removes them, and returns the numerator and
/// denominator.
///
/// When `numerator_optional` is `true`, an implied 1 is returned as the numerator if no
/// [`Primary::Integer`] is found. `denominator_optional` does the same for the denominator.
pub(crate) fn extract_integer_fraction(
    factors: &mut Vec<SymExpr>,
    numerator_optional: bool,
    denominator_optional: bool,
) -> Option<(BigInt, BigInt)> {
    let numerator_idx = factors.iter().position(SymExpr::is_integer);
    let denominator_idx = factors.iter().position(SymExpr::is_integer_recip);

    match (numerator_idx, denominator_idx) {
        (Some(_), Some(_)) => {},
        (Some(_), None) if denominator_optional => {},
        (None, Some(_)) if numerator_optional => {},
        (None, None) if numerator_optional && denominator_optional => {},
        _ => return None,
    }

    // remove the larger index first, so that the smaller index is still valid
    let mut numerator = int(1);
    let mut denominator = int(1);
    let mut indices = [numerator_idx, denominator_idx];
    indices.sort_unstable();
    for idx in indices.into_iter().rev().flatten() {
        let factor = factors.swap_remove(idx);
        if Some(idx) == numerator_idx {
            numerator = factor.into_integer()?;
        } else {
            denominator = factor.into_integer_recip()?;
        }
    }

    Some((numerator, denominator))
}

/// Extracts an expression from the factors of a [`SymExpr::Mul`] that represents a numeric
/// coefficient. This is like [`extract_integer_fraction`], but the result is a [`SymExpr`], and
/// [`Primary::Float`]s are also extracted as-is.
pub(crate) fn extract_fractional(factors: &mut Vec<SymExpr>) -> Option<SymExpr> {
    if let Some(idx) = factors.iter().position(SymExpr::is_float) {
        return Some(factors.swap_remove(idx));
    }

    let numerator_idx = factors.iter().position(SymExpr::is_integer);
    let denominator_idx = factors.iter().position(SymExpr::is_integer_recip);
    match (numerator_idx, denominator_idx) {
        (Some(numerator_idx), Some(denominator_idx)) => {
            if numerator_idx > denominator_idx {
                Some(factors.swap_remove(numerator_idx)
                    * factors.swap_remove(denominator_idx))
            } else {
                Some(factors.swap_remove(denominator_idx)
                    * factors.swap_remove(numerator_idx))
            }
        },
        (Some(idx), None) | (None, Some(idx)) => Some(factors.swap_remove(idx)),
        (None, None) => None,
    }
}

/// Extracts a numerical fraction from an expression, replacing the extracted part with a
/// [`Primary::Integer`] containing the number 1.
///
/// - `int` -> `int / 1`
/// - `Mul(factors)` -> `numerator / denominator`, where `numerator` is the first integer factor
///   and `denominator` is the first integer reciprocal factor, or `1` if there is none
/// - `int^-1` -> `1 / int`
///
/// [`Primary::Float`]s are not extracted; they are added as floats instead.
pub(crate) fn extract_explicit_frac(expr: &mut SymExpr) -> Option<(BigInt, BigInt)> {
    match expr {
        SymExpr::Primary(Primary::Integer(num)) => {
            Some((std::mem::replace(num, int(1)), int(1)))
        },
        SymExpr::Mul(factors) => extract_integer_fraction(factors, false, true),
        SymExpr::Exp(..) if expr.is_integer_recip() => {
            let denominator = std::mem::replace(expr, SymExpr::Primary(Primary::Integer(int(1))))
                .into_integer_recip()?;
            Some((int(1), denominator))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(n: i64) -> SymExpr {
        SymExpr::Primary(Primary::Integer(int(n)))
    }

    fn recip(n: i64) -> SymExpr {
        SymExpr::Exp(Box::new(num(n)), Box::new(num(-1)))
    }

    #[test]
    fn integer_fraction() {
        let x = SymExpr::Primary(Primary::Symbol(String::from("x")));
        let mut factors = vec![x.clone(), recip(4), num(3)];
        assert_eq!(extract_integer_fraction(&mut factors, false, false), Some((int(3), int(4))));
        assert_eq!(factors, vec![x]);
    }

    #[test]
    fn optional_parts() {
        let mut factors = vec![num(5)];
        assert_eq!(extract_integer_fraction(&mut factors.clone(), false, false), None);
        assert_eq!(extract_integer_fraction(&mut factors, false, true), Some((int(5), int(1))));
        assert!(factors.is_empty());
    }

    #[test]
    fn explicit_frac() {
        let mut expr = recip(7);
        assert_eq!(extract_explicit_frac(&mut expr), Some((int(1), int(7))));
        assert_eq!(expr, num(1));

        let mut float = SymExpr::Primary(Primary::Float(0.5));
        assert_eq!(extract_explicit_frac(&mut float), None);
    }
}
