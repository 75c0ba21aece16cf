//! A forgiving lexer over raw LaTeX source.
//!
//! Unlike the [`formsim_parser`] tokenizer, this lexer never fails: characters it does not
//! recognize are dropped. It is used to locate shared regions of two formulas, where a formula
//! that does not parse should still produce some answer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Token grammar, in priority order. Each alternative is a named group.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<command>\\[a-zA-Z]+)",
        r"|(?P<number>[0-9]+(?:\.[0-9]+)?)",
        r"|(?P<identifier>[a-zA-Z]+)",
        r"|(?P<bracket>[(){}^_])",
        r"|(?P<operator>[+\-*/=])",
    )).expect("valid regex literal")
});

/// The kind of a [`RawToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTokenKind {
    /// A backslash followed by letters, such as `\alpha`.
    Command,

    /// A decimal number, such as `2` or `3.14`.
    Number,

    /// A run of letters, such as `x` or `xy`.
    Identifier,

    /// One of `(){}^_`.
    Bracket,

    /// One of `+-*/=`.
    Operator,
}

/// A token of raw LaTeX source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// The kind of token.
    pub kind: RawTokenKind,

    /// The exact text of the token.
    pub lexeme: String,

    /// The region of the source this token came from, in bytes.
    pub span: Range<usize>,
}

/// Splits the source into raw tokens, silently dropping anything the grammar does not match.
pub fn lex(source: &str) -> Vec<RawToken> {
    TOKEN.captures_iter(source)
        .filter_map(|captures| {
            let (kind, m) = [
                (RawTokenKind::Command, "command"),
                (RawTokenKind::Number, "number"),
                (RawTokenKind::Identifier, "identifier"),
                (RawTokenKind::Bracket, "bracket"),
                (RawTokenKind::Operator, "operator"),
            ]
                .into_iter()
                .find_map(|(kind, name)| captures.name(name).map(|m| (kind, m)))?;
            Some(RawToken {
                kind,
                lexeme: m.as_str().to_owned(),
                span: m.range(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use RawTokenKind::*;

    fn kinds_and_lexemes(source: &str) -> Vec<(RawTokenKind, String)> {
        lex(source).into_iter().map(|token| (token.kind, token.lexeme)).collect()
    }

    #[test]
    fn basic_formula() {
        assert_eq!(kinds_and_lexemes(r"\frac{xy}{2.5}"), vec![
            (Command, String::from(r"\frac")),
            (Bracket, String::from("{")),
            (Identifier, String::from("xy")),
            (Bracket, String::from("}")),
            (Bracket, String::from("{")),
            (Number, String::from("2.5")),
            (Bracket, String::from("}")),
        ]);
    }

    #[test]
    fn drops_unknown_characters() {
        let tokens = lex("a + b , [c]");
        let lexemes = tokens.iter().map(|token| token.lexeme.as_str()).collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["a", "+", "b", "c"]);
        assert_eq!(tokens[3].span, 9..10);
    }

    #[test]
    fn number_without_fraction() {
        assert_eq!(kinds_and_lexemes("3."), vec![(Number, String::from("3"))]);
    }
}
