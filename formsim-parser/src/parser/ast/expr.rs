use crate::{
    command::{command_name, suggest_command, CommandKind},
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            literal::{LitNum, LitSym, Literal},
            paren::{Group, Paren},
            unary::Unary,
        },
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Token kinds that can begin an operand, reported when something else is found.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Letter,
    TokenKind::Command,
    TokenKind::OpenParen,
    TokenKind::OpenBracket,
    TokenKind::OpenBrace,
    TokenKind::Pipe,
];

/// Represents any kind of expression in a formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A grouped expression.
    Paren(Paren),

    /// A function call, root or absolute value.
    Call(Call),

    /// A unary operation, such as `-x` or `n!`.
    Unary(Unary),

    /// A binary operation, such as `a + b`, `\frac{a}{b}` or `a = b`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns the precedence of the outermost operation of the expression. Operands that
    /// cannot be split, like literals and groups, bind tightest.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Literal(_) | Expr::Paren(_) | Expr::Call(_) => Precedence::Factorial,
            Expr::Unary(unary) => unary.op.precedence(),
            Expr::Binary(binary) => binary.op.precedence(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression, consuming `self`. Otherwise, returns `self`.
    pub fn into_innermost(self) -> Expr {
        match self {
            Expr::Paren(paren) => paren.into_innermost(),
            expr => expr,
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Ok(Binary::parse_expr(input, lhs, Precedence::Any)?.0)
    }
}

/// Parses a single operand: a literal, a group, or a command that produces a value.
pub(crate) fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
    let token = match input.peek_token() {
        Some(token) => token.clone(),
        None => return Err(input.error(kind::UnexpectedEof)),
    };

    match token.kind {
        TokenKind::Int | TokenKind::Float => {
            input.next_token()?;
            let num = LitNum {
                value: token.lexeme.to_owned(),
                span: token.span,
            };
            if token.kind == TokenKind::Int {
                Ok(Expr::Literal(Literal::Integer(num)))
            } else {
                Ok(Expr::Literal(Literal::Float(num)))
            }
        },
        TokenKind::Letter => {
            input.next_token()?;
            LitSym::parse_decorated(input, token).map(|sym| Expr::Literal(Literal::Symbol(sym)))
        },
        TokenKind::OpenParen
            | TokenKind::OpenBracket
            | TokenKind::OpenBrace
            | TokenKind::Pipe => input.try_parse::<Group>().map(Group::into_expr),
        TokenKind::Command => match token.command() {
            Some(CommandKind::Greek) => {
                input.next_token()?;
                LitSym::parse_decorated(input, token).map(|sym| Expr::Literal(Literal::Symbol(sym)))
            },
            Some(CommandKind::Constant) => {
                input.next_token()?;
                Ok(Expr::Literal(Literal::Constant(LitSym {
                    name: command_name(token.lexeme).to_owned(),
                    span: token.span,
                })))
            },
            Some(CommandKind::Function) => {
                input.next_token()?;
                Call::parse_function(input, token)
            },
            Some(CommandKind::Frac) => {
                input.next_token()?;
                Call::parse_frac(input, token)
            },
            Some(CommandKind::Sqrt) => {
                input.next_token()?;
                Call::parse_sqrt(input, token)
            },
            Some(CommandKind::Left) => input.try_parse::<Group>().map(Group::into_expr),
            Some(CommandKind::Right) => Err(Error::new(vec![token.span], kind::UnmatchedRight)),
            Some(CommandKind::Operator | CommandKind::Ignored) => {
                Err(Error::new(vec![token.span], kind::UnexpectedToken {
                    expected: OPERAND_START,
                    found: token.kind,
                }))
            },
            None => Err(Error::new(vec![token.span], kind::UnknownCommand {
                name: token.lexeme.to_owned(),
                suggestion: suggest_command(token.lexeme),
            })),
        },
        _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected: OPERAND_START,
            found: token.kind,
        })),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
