//! Expansion of small integer powers of sums.

use crate::symbolic::{expr::SymExpr, simplify::step::Step};
use num_traits::ToPrimitive;
use super::Rule;

/// The expansion rules, in the order they are tried.
pub const RULES: &[Rule] = &[expand_power];

/// The largest exponent that is expanded.
const MAX_EXPANDED_EXPONENT: u32 = 8;

/// Powers whose expansion would produce more terms than this are left as they are.
const MAX_EXPANDED_TERMS: usize = 1024;

/// `(a+b)^2 = a*a + a*b + b*a + b*b`
///
/// The sum is multiplied out directly into a sum of products, so that later passes only need to
/// combine like factors and like terms.
pub fn expand_power(expr: &SymExpr) -> Option<(SymExpr, Step)> {
    let SymExpr::Exp(base, exponent) = expr else {
        return None;
    };
    let SymExpr::Add(terms) = &**base else {
        return None;
    };
    let exp = exponent.as_integer()?.to_u32()
        .filter(|exp| (2..=MAX_EXPANDED_EXPONENT).contains(exp))?;
    terms.len().checked_pow(exp).filter(|count| *count <= MAX_EXPANDED_TERMS)?;

    let mut products = terms.clone();
    for _ in 1..exp {
        products = products.iter()
            .flat_map(|product| terms.iter().map(move |term| product.clone() * term.clone()))
            .collect();
    }
    Some((SymExpr::Add(products), Step::ExpandPower))
}
