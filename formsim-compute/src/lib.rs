//! Structural comparison of LaTeX formulas.
//!
//! Two independent pipelines are provided:
//!
//! - [`similarity_percent`] parses and [normalizes](symbolic::Normalizer) both formulas,
//! [flattens](similarity::flatten) the resulting trees, renames their variables by order of
//! appearance, and scores how much of the two token arrays match. Renaming variables
//! consistently never changes the score.
//! - [`find_common_spans`] works on the raw source instead, and returns the regions of the first
//! formula that also appear in the second, up to a consistent renaming of variables. It accepts
//! any text, including formulas that do not parse.
//!
//! ```
//! use formsim_compute::{find_common_spans, similarity_percent};
//!
//! assert_eq!(similarity_percent("x^2 + y^2", "p^2 + q^2").unwrap(), 100.0);
//! assert_eq!(find_common_spans("a+b+c", "a+b+d")[0], 0..4);
//! ```
//!
//! The [`catalog`] module ranks a whole library of formulas against a query using both
//! pipelines.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod job;
pub mod options;
pub mod primitive;
pub mod similarity;
pub mod spans;
pub mod symbolic;

use formsim_error::Error;
use log::warn;
use std::ops::Range;
use symbolic::{LatexNormalizer, Normalizer};

pub use catalog::{rank, Formula, FormulaMatch};
pub use extract::{extract_display_math, DisplayMath};
pub use job::JobStatus;
pub use options::{MatchOptions, MatchOptionsBuilder};

/// Fails with [`InputTooLarge`](error::InputTooLarge) if the input is longer than the options
/// allow.
pub(crate) fn check_len(input: &str, options: &MatchOptions) -> Result<(), Error> {
    if options.exceeds_limit(input) {
        let len = input.chars().count();
        return Err(Error::new(vec![0..len], error::InputTooLarge {
            len,
            max: options.max_input_len.unwrap_or_default(),
        }));
    }
    Ok(())
}

/// Normalizes the formula and returns its canonical token array.
pub(crate) fn canonical_array(latex: &str) -> Result<Vec<String>, Error> {
    let expr = LatexNormalizer.normalize(latex)?;
    Ok(similarity::token_array(&expr))
}

/// Computes how similar two formulas are, from 0 to 100, with the default options.
///
/// See [`similarity_percent_with`].
pub fn similarity_percent(a: &str, b: &str) -> Result<f64, Error> {
    similarity_percent_with(a, b, &MatchOptions::default())
}

/// Computes how similar two formulas are, from 0 to 100.
///
/// The score is the number of matched tokens of the two canonical token arrays, over the length
/// of the longer one. It is not guaranteed to be symmetric.
///
/// Fails if either formula cannot be parsed, or is longer than
/// [`MatchOptions::max_input_len`].
pub fn similarity_percent_with(a: &str, b: &str, options: &MatchOptions) -> Result<f64, Error> {
    check_len(a, options)?;
    check_len(b, options)?;
    let a = canonical_array(a)?;
    let b = canonical_array(b)?;
    Ok(similarity::score(&a, &b))
}

/// Finds the character spans of `a` shared with `b`, with the default options.
///
/// See [`find_common_spans_with`].
pub fn find_common_spans(a: &str, b: &str) -> Vec<Range<usize>> {
    find_common_spans_with(a, b, &MatchOptions::default())
}

/// Finds the character spans of `a` that also appear in `b`, up to a consistent renaming of
/// variables.
///
/// Each span starts at the first token of a shared block and ends where the block's last token
/// starts; a block of one token covers that token. Longer blocks come first. Blocks that map onto
/// the same span are reported once, so there can be fewer spans than shared blocks.
///
/// This never fails. If either input is longer than [`MatchOptions::max_input_len`], a warning is
/// logged and no spans are returned.
pub fn find_common_spans_with(a: &str, b: &str, options: &MatchOptions) -> Vec<Range<usize>> {
    if options.exceeds_limit(a) || options.exceeds_limit(b) {
        warn!("input exceeds {:?} characters, not looking for common spans", options.max_input_len);
        return Vec::new();
    }
    spans::common_spans(a, b, options.min_block_len)
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
    fn self_similarity() {
        for formula in ["x^2 + 2x + 1", r"\frac{a}{b} = c", r"\sqrt{x^2 + 1}"] {
            assert_float_relative_eq!(similarity_percent(formula, formula).unwrap(), 100.0);
        }
    }

    #[test]
    fn renaming_keeps_score() {
        assert_float_relative_eq!(similarity_percent("a + bc", "x + yz").unwrap(), 100.0);
        assert_float_relative_eq!(similarity_percent("x^2+y^2", "p^2+q^2").unwrap(), 100.0);
    }

    #[test]
    fn equal_length_symmetry() {
        let ab = similarity_percent("x + y", "xy").unwrap();
        let ba = similarity_percent("xy", "x + y").unwrap();
        assert_float_relative_eq!(ab, ba);
        assert!(ab > 0.0 && ab < 100.0);
    }

    #[test]
    fn unequal_length_directions() {
        // the score is not symmetric in general, so each direction is checked on its own; for this
        // pair both directions happen to match the same three tokens out of five
        let ab = similarity_percent("x+y", "x+y+z").unwrap();
        let ba = similarity_percent("x+y+z", "x+y").unwrap();
        assert!(ab > 0.0 && ab < 100.0);
        assert!(ba > 0.0 && ba < 100.0);
        assert_float_relative_eq!(ab, 60.0);
        assert_float_relative_eq!(ba, 60.0);
    }

    #[test]
    fn term_order_keeps_score() {
        assert_float_relative_eq!(similarity_percent("(x+y)^2", "y^2+2xy+x^2").unwrap(), 100.0);
        assert_float_relative_eq!(similarity_percent("(x+y)^2", "x^2+2xy+y^2").unwrap(), 100.0);
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let formula = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
        let err = similarity_percent(&formula, "x").unwrap_err();
        assert!(err.to_string().starts_with("formula is nested too deeply"));
    }

    #[test]
    fn partial_similarity() {
        let score = similarity_percent("x+y", "x+y+z").unwrap();
        assert!(score > 0.0 && score < 100.0);
        assert_float_relative_eq!(score, 60.0);
    }

    #[test]
    fn parse_errors_propagate() {
        let err = similarity_percent(r"\frac{a}{", "x").unwrap_err();
        assert!(err.to_string().starts_with("unexpected end of formula"));
    }

    #[test]
    fn input_too_large() {
        let options = MatchOptionsBuilder::new().max_input_len(Some(5)).build();
        let err = similarity_percent_with("a + b + c", "a", &options).unwrap_err();
        assert_eq!(err.to_string(), "formula is too long to compare (at 0..9)");
        assert_eq!(err.spans, vec![0..9]);
        assert!(find_common_spans_with("a + b + c", "a + b + c", &options).is_empty());
    }

    #[test]
    fn spans_of_itself() {
        let formula = r"\frac{a+b}{c}";
        let spans = find_common_spans(formula, formula);
        assert!(!spans.is_empty());
        let len = formula.chars().count();
        for span in spans {
            assert!(span.start < span.end);
            assert!(span.end <= len);
        }
    }

    #[test]
    fn inconsistent_variables_split() {
        assert!(find_common_spans("a+b", "a+a").is_empty());

        let options = MatchOptionsBuilder::new().min_block_len(1).build();
        assert_eq!(find_common_spans_with("a+b", "a+a", &options), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn shared_prefix() {
        let spans = find_common_spans("a+b+c", "a+b+d");
        assert!(spans.contains(&(0..4)));
        assert!(spans.iter().all(|span| span.end <= 4));
    }
}
