use crate::{
    command::command_name,
    parser::{
        ast::{
            binary::Binary,
            expr::{parse_primary, Expr},
            literal::{LitNum, Literal},
            paren::Group,
            unary::Unary,
        },
        error::{kind, Error},
        token::{op::{BinOp, BinOpKind}, CloseBracket, Exp, OpenBracket, Subscript},
        Parser,
        Precedence,
    },
    tokenizer::{Token, TokenKind},
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `\sin x`, `\sqrt{x}` or `|x|`.
///
/// Roots are calls to `sqrt` (one argument) or `root` (radicand, then index), absolute values
/// are calls to `abs`, and `\log_b x` is a call to `log` with the base as second argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function, without any leading backslash.
    pub name: String,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the rest of a function command such as `\sin^2 x` or `\log_{10}(x)`, where
    /// `command` is the already consumed command token.
    pub(crate) fn parse_function(input: &mut Parser, command: Token) -> Result<Expr, Error> {
        let name = command_name(command.lexeme).to_owned();

        // `\sin^2 x` and `\log_2^3 x` / `\log^3_2 x` all place decorations before the argument
        let mut power = parse_power(input)?;
        let base = match input.try_parse::<Subscript>() {
            Ok(_) => Some(parse_command_arg(input)?),
            Err(_) => None,
        };
        if power.is_none() {
            power = parse_power(input)?;
        }

        let mut args = match input.peek_token() {
            Some(token) if Group::starts_group(token) => Group::parse_list(input, true)?.items,
            _ => vec![input.with_function_arg(true, |input| {
                let lhs = Unary::parse_or_lower(input)?;
                Ok(Binary::parse_expr(input, lhs, Precedence::Factor)?.0)
            })?],
        };
        args.extend(base);

        let call = Expr::Call(Self {
            name,
            args,
            span: input.span_from(command.span.start),
        });
        Ok(match power {
            Some(power) => {
                let op = BinOp {
                    kind: BinOpKind::Exp,
                    implicit: false,
                    span: power.span(),
                };
                let span = command.span.start..call.span().end;
                Expr::Binary(Binary {
                    lhs: Box::new(call),
                    op,
                    rhs: Box::new(power),
                    span,
                })
            },
            None => call,
        })
    }

    /// Parses the two arguments of `\frac`, where `command` is the already consumed command
    /// token. The result is a division.
    pub(crate) fn parse_frac(input: &mut Parser, command: Token) -> Result<Expr, Error> {
        // `\frac12` takes its arguments from the digits of a single number token
        let digits = input.peek_token()
            .filter(|token| token.kind == TokenKind::Int && token.lexeme.len() >= 2)
            .cloned();
        if let Some(token) = digits {
            input.next_token()?;
            return Ok(split_digit_frac(&command, &token));
        }

        let numerator = parse_command_arg(input)?;
        let denominator = parse_command_arg(input)?;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(numerator),
            op: BinOp {
                kind: BinOpKind::Div,
                implicit: false,
                span: command.span.clone(),
            },
            rhs: Box::new(denominator),
            span: input.span_from(command.span.start),
        }))
    }

    /// Parses the optional index and the radicand of `\sqrt`, where `command` is the already
    /// consumed command token.
    pub(crate) fn parse_sqrt(input: &mut Parser, command: Token) -> Result<Expr, Error> {
        let index = match input.try_parse::<OpenBracket>() {
            Ok(open) => {
                let index = input.try_parse::<Expr>()?;
                input.try_parse::<CloseBracket>().map_err(|_| {
                    Error::new(vec![open.span.clone()], kind::UnclosedDelimiter { closing: "]" })
                })?;
                Some(index)
            },
            Err(_) => None,
        };

        let radicand = parse_command_arg(input)?;
        let (name, args) = match index {
            Some(index) => ("root", vec![radicand, index]),
            None => ("sqrt", vec![radicand]),
        };
        Ok(Expr::Call(Self {
            name: name.to_owned(),
            args,
            span: input.span_from(command.span.start),
        }))
    }
}

/// Parses a `^power` decoration of a function command, if present.
fn parse_power(input: &mut Parser) -> Result<Option<Expr>, Error> {
    match input.try_parse::<Exp>() {
        Ok(_) => Ok(Some(parse_command_arg(input)?)),
        Err(_) => Ok(None),
    }
}

/// Parses a single argument of a command: a braced group (whose braces are dropped) or a single
/// operand.
fn parse_command_arg(input: &mut Parser) -> Result<Expr, Error> {
    match input.peek_token() {
        Some(token) if token.kind == TokenKind::OpenBrace => {
            match input.try_parse::<Group>()?.into_expr() {
                Expr::Paren(paren) => Ok(paren.into_innermost()),
                expr => Ok(expr),
            }
        },
        Some(token) if matches!(token.kind, TokenKind::Sub | TokenKind::Add) => {
            Unary::parse_right(input).map(Expr::Unary)
        },
        _ => parse_primary(input),
    }
}

/// Builds `\frac12` (and `\frac123`, which is `\frac12 3`) from a single number token.
fn split_digit_frac(command: &Token, token: &Token) -> Expr {
    let start = token.span.start;
    let digit = |i: usize| Expr::Literal(Literal::Integer(LitNum {
        value: token.lexeme[i..i + 1].to_owned(),
        span: start + i..start + i + 1,
    }));

    let frac = Expr::Binary(Binary {
        lhs: Box::new(digit(0)),
        op: BinOp {
            kind: BinOpKind::Div,
            implicit: false,
            span: command.span.clone(),
        },
        rhs: Box::new(digit(1)),
        span: command.span.start..start + 2,
    });

    if token.lexeme.len() == 2 {
        return frac;
    }

    let rest = Expr::Literal(Literal::Integer(LitNum {
        value: token.lexeme[2..].to_owned(),
        span: start + 2..token.span.end,
    }));
    Expr::Binary(Binary::new(frac, BinOp {
        kind: BinOpKind::Mul,
        implicit: true,
        span: start + 2..start + 2,
    }, rest))
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
