//! Tree-based similarity scoring.
//!
//! A normalized expression is [flattened](flatten::flatten) into a sequence of operators and
//! operands, its variables are [renamed](canonical::SymbolContext) by order of first appearance,
//! and the two resulting string arrays are compared with a [`SequenceMatcher`]. The score is the
//! share of matched elements, relative to the longer array.

pub mod canonical;
pub mod flatten;
pub mod matcher;

use crate::symbolic::SymExpr;
use canonical::SymbolContext;
use log::trace;
pub use matcher::{Block, SequenceMatcher};

/// Converts a normalized expression into its canonical token array.
pub fn token_array(expr: &SymExpr) -> Vec<String> {
    SymbolContext::new().canonicalize(flatten::flatten(expr))
}

/// Scores two canonical token arrays, from 0 to 100.
///
/// The score is `matched / max(len(a), len(b)) * 100`. It is not symmetric in general, since the
/// matching blocks found depend on which array is searched first. Two empty arrays score 0.
pub fn score(a: &[String], b: &[String]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }

    let mut blocks = SequenceMatcher::new(a, b).matching_blocks();
    blocks.sort_by(|x, y| y.size.cmp(&x.size));
    let matched = blocks.iter().map(|block| block.size).sum::<usize>();
    trace!("matched {} of {} tokens in blocks {:?}", matched, longest, blocks);
    matched as f64 / longest as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::symbolic::{LatexNormalizer, Normalizer};
    use pretty_assertions::assert_eq;
    use super::*;

    fn array(latex: &str) -> Vec<String> {
        token_array(&LatexNormalizer.normalize(latex).unwrap())
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renamed_arrays_match() {
        assert_eq!(array("x^2 + y^2"), array("p^2 + q^2"));
        assert_eq!(array("x^2 + y^2"), strings(&["x0", "Pow", "2", "Add", "x1", "Pow", "2"]));
    }

    #[test]
    fn partial_score() {
        let a = strings(&["x0", "Add", "x1"]);
        let b = strings(&["x0", "Add", "x1", "Add", "x2"]);
        assert_float_relative_eq!(score(&a, &b), 60.0);
    }

    #[test]
    fn score_depends_on_direction() {
        // the first longest match is taken in the first array, which decides what is left to match
        let a = strings(&["x0", "x0", "Add"]);
        let b = strings(&["Add", "x0", "x1", "x0"]);
        assert_float_relative_eq!(score(&a, &b), 50.0);
        assert_float_relative_eq!(score(&b, &a), 25.0);
    }

    #[test]
    fn empty_arrays_score_zero() {
        assert_eq!(score(&[], &[]), 0.0);
        assert_eq!(score(&strings(&["x0"]), &[]), 0.0);
    }
}
