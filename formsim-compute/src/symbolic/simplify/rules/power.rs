//! Simplification rules for power expressions.

use crate::primitive::int;
use crate::symbolic::{
    expr::{SymExpr, Primary},
    simplify::step::Step,
};
use num_traits::ToPrimitive;
use super::Rule;

/// The power rules, in the order they are tried.
pub const RULES: &[Rule] = &[
    power_zero,
    power_zero_left,
    power_one_left,
    power_one,
    power_power,
    integer,
];

/// Integer powers with a larger exponent are left unevaluated.
const MAX_INTEGER_EXPONENT: u32 = 256;

/// Returns the base and exponent of a power.
fn power(expr: &SymExpr) -> Option<(&SymExpr, &SymExpr)> {
    match expr {
        SymExpr::Exp(base, exponent) => Some((&**base, &**exponent)),
        _ => None,
    }
}

fn integer_expr(n: i64) -> SymExpr {
    SymExpr::Primary(Primary::Integer(int(n)))
}

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let (_, exponent) = power(expr)?;
    (exponent.as_integer()? == &int(0)).then(|| (integer_expr(1), Step::PowerZero))
}

/// `0^a = 0`
///
/// `0^0` is handled by the [`power_zero`] rule.
pub fn power_zero_left(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let (base, _) = power(expr)?;
    (base.as_integer()? == &int(0)).then(|| (integer_expr(0), Step::PowerZeroLeft))
}

/// `1^a = 1`
pub fn power_one_left(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let (base, _) = power(expr)?;
    (base.as_integer()? == &int(1)).then(|| (integer_expr(1), Step::PowerOneLeft))
}

/// `a^1 = a`
pub fn power_one(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let (base, exponent) = power(expr)?;
    (exponent.as_integer()? == &int(1)).then(|| (base.clone(), Step::PowerOne))
}

/// `(a^b)^c = a^(b*c)`
pub fn power_power(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let (SymExpr::Exp(base, inner), outer) = power(expr)? else {
        return None;
    };
    let exponent = *inner.clone() * outer.clone();
    Some((SymExpr::Exp(base.clone(), Box::new(exponent)), Step::PowerPower))
}

/// Evaluates integer powers with a small non-negative exponent.
///
/// `2^3 = 8`
pub fn integer(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let (base, exponent) = power(expr)?;
    let base = base.as_integer()?;
    let exp = exponent.as_integer()?.to_u32().filter(|exp| *exp <= MAX_INTEGER_EXPONENT)?;
    let value = num_traits::pow(base.clone(), exp as usize);
    Some((SymExpr::Primary(Primary::Integer(value)), Step::IntegerPower))
}
