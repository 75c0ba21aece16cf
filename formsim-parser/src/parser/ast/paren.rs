use crate::{
    command::CommandKind,
    parser::{
        ast::{call::Call, expr::Expr},
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::{Token, TokenKind},
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grouped expression, written with `()`, `[]`, `{}` or `\left ... \right`. A [`Paren`] can
/// only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression in the parenthesized expression.
    pub fn innermost(&self) -> &Expr {
        let mut inner = &self.expr;
        while let Expr::Paren(paren) = inner.as_ref() {
            inner = &paren.expr;
        }
        inner
    }

    /// Returns the innermost expression in the parenthesized expression, consuming the [`Paren`].
    pub fn into_innermost(self) -> Expr {
        let mut inner = self.expr;
        while let Expr::Paren(paren) = *inner {
            inner = paren.expr;
        }
        *inner
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}

/// The delimiter that opened a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
    Pipe,

    /// The invisible delimiter of `\left.`.
    Blank,
}

impl Delimiter {
    /// Returns the delimiter opened by the given token, if any. `sized` is true if the token
    /// follows `\left`.
    fn from_open(token: &Token, sized: bool) -> Option<Self> {
        match token.kind {
            TokenKind::OpenParen => Some(Self::Paren),
            TokenKind::OpenBracket => Some(Self::Bracket),
            TokenKind::OpenBrace => Some(Self::Brace),
            TokenKind::Pipe => Some(Self::Pipe),
            TokenKind::Symbol if sized && token.lexeme == "." => Some(Self::Blank),
            _ => None,
        }
    }

    /// Returns the token kind that closes an unsized group opened by this delimiter.
    fn closing_kind(self) -> TokenKind {
        match self {
            Self::Paren | Self::Blank => TokenKind::CloseParen,
            Self::Bracket => TokenKind::CloseBracket,
            Self::Brace => TokenKind::CloseBrace,
            Self::Pipe => TokenKind::Pipe,
        }
    }

    /// Returns the text that closes a group opened by this delimiter.
    fn closing(self) -> &'static str {
        match self {
            Self::Paren | Self::Blank => ")",
            Self::Bracket => "]",
            Self::Brace => "}",
            Self::Pipe => "|",
        }
    }
}

/// One or more comma-separated expressions surrounded by delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The expressions inside the group.
    pub items: Vec<Expr>,

    /// The delimiter that opened the group.
    pub delimiter: Delimiter,

    /// The region of the source code that this group was parsed from, delimiters included.
    pub span: Range<usize>,
}

impl Group {
    /// Returns true if the token opens a group.
    pub fn starts_group(token: &Token) -> bool {
        matches!(token.kind, TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenBrace)
            || token.command() == Some(CommandKind::Left)
    }

    /// Parses a group. If `allow_list` is false, the group must contain exactly one expression.
    pub fn parse_list(input: &mut Parser, allow_list: bool) -> Result<Self, Error> {
        let open = input.next_token()?;
        let sized = open.command() == Some(CommandKind::Left);
        let delimiter_token = if sized { input.next_token()? } else { open.clone() };
        let delimiter = Delimiter::from_open(&delimiter_token, sized).ok_or_else(|| {
            Error::new(vec![delimiter_token.span.clone()], kind::UnexpectedToken {
                expected: &[
                    TokenKind::OpenParen,
                    TokenKind::OpenBracket,
                    TokenKind::OpenBrace,
                    TokenKind::Pipe,
                ],
                found: delimiter_token.kind,
            })
        })?;

        if Self::at_close(input, delimiter, sized) {
            let end = input.span().end;
            return Err(Error::new(vec![open.span.start..end], kind::EmptyGroup));
        }

        // a group inside an unparenthesized function argument can hold further function calls
        let parse_items = |input: &mut Parser| input.with_function_arg(false, |input| {
            if allow_list {
                input.try_parse_delimited::<Expr>(TokenKind::Comma)
            } else {
                input.try_parse::<Expr>().map(|expr| vec![expr])
            }
        });
        let items = if delimiter == Delimiter::Pipe {
            input.within_abs(parse_items)?
        } else {
            parse_items(input)?
        };

        if sized {
            Self::parse_right(input, &open)?;
        } else {
            match input.next_token() {
                Ok(token) if token.kind == delimiter.closing_kind() => (),
                _ => return Err(Error::new(vec![open.span.clone()], kind::UnclosedDelimiter {
                    closing: delimiter.closing(),
                })),
            }
        }

        Ok(Self {
            items,
            delimiter,
            span: input.span_from(open.span.start),
        })
    }

    /// Returns true if the next token closes the group.
    fn at_close(input: &Parser, delimiter: Delimiter, sized: bool) -> bool {
        input.peek_token().is_some_and(|token| if sized {
            token.command() == Some(CommandKind::Right)
        } else {
            token.kind == delimiter.closing_kind()
        })
    }

    /// Parses `\right` and the delimiter after it. Any closing delimiter is accepted, since
    /// `\left( x \right]` is valid LaTeX.
    fn parse_right(input: &mut Parser, open: &Token) -> Result<(), Error> {
        match input.next_token() {
            Ok(token) if token.command() == Some(CommandKind::Right) => (),
            _ => return Err(Error::new(vec![open.span.clone()], kind::MissingRight)),
        }

        let token = input.next_token()?;
        match token.kind {
            TokenKind::CloseParen
                | TokenKind::CloseBracket
                | TokenKind::CloseBrace
                | TokenKind::Pipe => Ok(()),
            TokenKind::Symbol if token.lexeme == "." => Ok(()),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[
                    TokenKind::CloseParen,
                    TokenKind::CloseBracket,
                    TokenKind::CloseBrace,
                    TokenKind::Pipe,
                ],
                found: token.kind,
            })),
        }
    }

    /// Converts a single-expression group into an expression: `|x|` becomes a call to `abs`,
    /// anything else a [`Paren`].
    pub(crate) fn into_expr(mut self) -> Expr {
        let expr = self.items.swap_remove(0);
        if self.delimiter == Delimiter::Pipe {
            Expr::Call(Call {
                name: "abs".to_owned(),
                args: vec![expr],
                span: self.span,
            })
        } else {
            Expr::Paren(Paren {
                expr: Box::new(expr),
                span: self.span,
            })
        }
    }
}

impl Parse for Group {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Self::parse_list(input, false)
    }
}
