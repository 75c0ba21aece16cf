pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the lexer cannot classify becomes a [`TokenKind::Symbol`], so the parser can report it
/// instead of the formula being silently truncated.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + x^2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Letter, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn commands_and_groups() {
        compare_tokens(
            r"\frac{ab}{3.5}\,\alpha_{1}",
            [
                (TokenKind::Command, r"\frac"),
                (TokenKind::OpenBrace, "{"),
                (TokenKind::Letter, "a"),
                (TokenKind::Letter, "b"),
                (TokenKind::CloseBrace, "}"),
                (TokenKind::OpenBrace, "{"),
                (TokenKind::Float, "3.5"),
                (TokenKind::CloseBrace, "}"),
                (TokenKind::Spacing, r"\,"),
                (TokenKind::Command, r"\alpha"),
                (TokenKind::Subscript, "_"),
                (TokenKind::OpenBrace, "{"),
                (TokenKind::Int, "1"),
                (TokenKind::CloseBrace, "}"),
            ],
        );
    }

    #[test]
    fn escaped_braces_and_symbols() {
        compare_tokens(
            r"\{x\} & f'",
            [
                (TokenKind::OpenBrace, r"\{"),
                (TokenKind::Letter, "x"),
                (TokenKind::CloseBrace, r"\}"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "&"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Letter, "f"),
                (TokenKind::Prime, "'"),
            ],
        );
    }

    #[test]
    fn layout_commands_are_whitespace() {
        let tokens = tokenize_complete(r"a \quad b");
        let meaningful = tokens.iter()
            .filter(|token| !token.is_whitespace())
            .map(|token| token.lexeme)
            .collect::<Vec<_>>();
        assert_eq!(meaningful, vec!["a", "b"]);
    }
}
