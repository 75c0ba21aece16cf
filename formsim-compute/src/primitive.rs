//! Functions to construct the numbers stored in a [`SymExpr`](crate::symbolic::SymExpr).

use num::BigInt;
use num_traits::ToPrimitive;

/// Creates a [`BigInt`] with the given value.
pub fn int<T>(n: T) -> BigInt
where
    BigInt: From<T>,
{
    BigInt::from(n)
}

/// Creates a [`BigInt`] from a string slice of decimal digits.
///
/// Integer literals produced by the tokenizer only ever contain ASCII digits, so this cannot fail
/// for them. Anything else is read as zero.
pub fn int_from_str(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 10).unwrap_or_default()
}

/// Creates an `f64` from a string slice, such as `3.14` or `2.`.
pub fn float_from_str(s: &str) -> f64 {
    s.parse().unwrap_or_default()
}

/// Converts a [`BigInt`] to the nearest `f64`. Integers too large to represent become infinite.
pub fn int_to_float(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn big_literals() {
        let n = int_from_str("123456789012345678901234567890");
        assert_eq!(n.to_string(), "123456789012345678901234567890");
        assert_eq!(int_from_str("007"), int(7));
    }

    #[test]
    fn float_literals() {
        assert_float_relative_eq!(float_from_str("3.25"), 3.25);
        assert_float_relative_eq!(float_from_str("2."), 2.0);
        assert_float_relative_eq!(int_to_float(&int(-12)), -12.0);
    }
}
