//! Mapping token blocks back onto the source text.

use crate::similarity::Block;
use std::ops::Range;
use super::lexer::RawToken;

/// Converts a byte offset into `source` to a character offset.
fn char_offset(source: &str, byte: usize) -> usize {
    source[..byte].chars().count()
}

/// Returns the character span of `source` covered by the block's tokens in the first formula.
///
/// The span runs from the start of the block's first token up to the start of its last token, so
/// the last token itself is not included. A block of a single token covers that whole token, while
/// a block of two tokens covers only its first token and the text up to the second.
pub fn block_span(source: &str, tokens: &[RawToken], block: Block) -> Range<usize> {
    let first = &tokens[block.a];
    let last = &tokens[block.a + block.size - 1];
    let start = char_offset(source, first.span.start);
    let end = if block.size == 1 {
        char_offset(source, first.span.end)
    } else {
        char_offset(source, last.span.start)
    };
    start..end
}

#[cfg(test)]
mod tests {
    use crate::spans::lexer::lex;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn excludes_last_token() {
        let source = "a + b + c";
        let tokens = lex(source);
        assert_eq!(block_span(source, &tokens, Block { a: 0, b: 0, size: 4 }), 0..6);
    }

    #[test]
    fn two_tokens_cover_the_first() {
        let source = "a + b";
        let tokens = lex(source);
        assert_eq!(block_span(source, &tokens, Block { a: 0, b: 0, size: 2 }), 0..2);
        assert_eq!(block_span(source, &tokens, Block { a: 0, b: 0, size: 1 }), 0..1);
    }

    #[test]
    fn single_token() {
        let source = r"\alpha + 1";
        let tokens = lex(source);
        assert_eq!(block_span(source, &tokens, Block { a: 0, b: 0, size: 1 }), 0..6);
    }

    #[test]
    fn commands_keep_their_backslash() {
        let source = r"\frac{a}{b}";
        let tokens = lex(source);
        assert_eq!(block_span(source, &tokens, Block { a: 1, b: 0, size: 3 }), 5..7);
        assert_eq!(&source[5..7], "{a");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // `é` is two bytes and is dropped by the lexer
        let source = "é+x+y";
        let tokens = lex(source);
        assert_eq!(block_span(source, &tokens, Block { a: 0, b: 0, size: 3 }), 1..3);
    }
}
