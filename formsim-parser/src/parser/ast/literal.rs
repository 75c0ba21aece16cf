use crate::{
    command::{command_kind, command_name, CommandKind},
    parser::{
        error::{kind, Error},
        token::{OpenBrace, Prime, Subscript},
        Parser,
    },
    tokenizer::{Token, TokenKind},
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The digits of the literal.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol, such as `x`, `x_1`, `\alpha` or `f'`.
///
/// Subscripts and primes are part of the name: `x_1` and `x_2` are different symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol, without any leading backslash.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitSym {
    /// Parses the optional subscript and primes that follow a symbol's base name, where `token`
    /// is the already consumed letter or Greek letter command.
    pub(crate) fn parse_decorated(input: &mut Parser, token: Token) -> Result<Self, Error> {
        let mut name = command_name(token.lexeme).to_owned();

        if input.try_parse::<Subscript>().is_ok() {
            let subscript = parse_subscript(input)?;
            if subscript.chars().count() == 1 {
                name.push('_');
                name.push_str(&subscript);
            } else {
                name.push_str("_{");
                name.push_str(&subscript);
                name.push('}');
            }
        }

        if let Ok(prime) = input.try_parse::<Prime>() {
            name.push_str(&prime.lexeme);
        }

        Ok(Self {
            name,
            span: input.span_from(token.span.start),
        })
    }
}

/// Parses the text of a subscript, either a single token or a braced group, which is kept
/// verbatim with whitespace removed.
fn parse_subscript(input: &mut Parser) -> Result<String, Error> {
    if let Ok(open) = input.try_parse::<OpenBrace>() {
        let mut depth = 0usize;
        let mut text = String::new();
        loop {
            let token = input.next_token().map_err(|_| {
                Error::new(vec![open.span.clone()], kind::UnclosedDelimiter { closing: "}" })
            })?;
            match token.kind {
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace if depth == 0 => break,
                TokenKind::CloseBrace => depth -= 1,
                _ => (),
            }
            text.push_str(token.lexeme);
        }

        if text.is_empty() {
            let end = input.prev_token().map_or(open.span.end, |token| token.span.end);
            return Err(Error::new(vec![open.span.start..end], kind::EmptyGroup));
        }
        Ok(text)
    } else {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Letter | TokenKind::Int | TokenKind::Float => Ok(token.lexeme.to_owned()),
            TokenKind::Command if command_kind(token.lexeme) == Some(CommandKind::Greek) => {
                Ok(token.lexeme.to_owned())
            },
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Letter, TokenKind::Int, TokenKind::OpenBrace],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A literal value in a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// An integer literal, such as `2`.
    Integer(LitNum),

    /// A decimal literal, such as `3.14`.
    Float(LitNum),

    /// A symbol, such as `x` or `\theta`.
    Symbol(LitSym),

    /// A named constant, such as `\pi`.
    Constant(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(num) | Literal::Float(num) => num.span.clone(),
            Literal::Symbol(sym) | Literal::Constant(sym) => sym.span.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Integer(num) | Literal::Float(num) => num.fmt(f),
            Literal::Symbol(sym) | Literal::Constant(sym) => sym.fmt(f),
        }
    }
}
