//! Token-based location of the subexpressions two formulas share.
//!
//! Both formulas are [lexed](lexer::lex) from their raw source, which never fails. Each token
//! stream is [abstracted](abstraction::Abstraction) twice: once with every variable hidden behind
//! the same placeholder, once with each distinct variable numbered. Runs of equal tokens are
//! found on the first view and [checked](blocks::validate) against the second, so that a run
//! only survives where the variables of the two formulas correspond one-to-one. The surviving
//! runs are finally [mapped](offset::block_span) back onto the text of the first formula.

pub mod abstraction;
pub mod blocks;
pub mod lexer;
pub mod offset;

use abstraction::Abstraction;
use log::debug;
use std::{collections::HashSet, ops::Range};

/// Returns the character spans of `a` that also appear, up to consistent variable renaming, in
/// `b`. Only runs of at least `min_len` tokens are reported.
///
/// Spans come out in the order of their blocks (longest first). Blocks mapping onto the same
/// span of `a` are reported once, so the result can be shorter than the list of shared blocks.
pub fn common_spans(a: &str, b: &str, min_len: usize) -> Vec<Range<usize>> {
    let min_len = min_len.max(1);
    let tokens_a = lexer::lex(a);
    let tokens_b = lexer::lex(b);
    let blocks = blocks::find_blocks(
        &Abstraction::new(&tokens_a),
        &Abstraction::new(&tokens_b),
        min_len,
    );
    debug!("{} shared blocks between {:?} and {:?}", blocks.len(), a, b);

    let mut seen = HashSet::new();
    blocks.into_iter()
        .map(|block| offset::block_span(a, &tokens_a, block))
        .filter(|span| seen.insert(span.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn shared_prefix() {
        assert_eq!(common_spans("a+b+c", "a+b+d", 3), vec![0..4, 0..2, 2..4]);
    }

    #[test]
    fn renamed_formula() {
        let spans = common_spans("x^2+y^2", "p^2+q^2", 3);
        assert_eq!(spans[0], 0..6);
    }

    #[test]
    fn nothing_shared() {
        assert!(common_spans("a", "1", 3).is_empty());
        assert!(common_spans("", "", 3).is_empty());
    }

    #[test]
    fn repeated_spans_collapse() {
        // four blocks: `x+` against `x+`, then each variable of `a` against each `x` of `b`
        let a = Abstraction::new(&lexer::lex("x+y"));
        let b = Abstraction::new(&lexer::lex("x+1x"));
        assert_eq!(blocks::find_blocks(&a, &b, 1).len(), 4);
        assert_eq!(common_spans("x+y", "x+1x", 1), vec![0..1, 2..3]);
    }

    #[test]
    fn zero_minimum_is_one() {
        assert_eq!(common_spans("x", "y", 0), vec![0..1]);
    }
}
