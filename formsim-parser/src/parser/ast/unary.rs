use crate::{
    parser::{
        ast::{binary::Binary, expr::{parse_primary, Expr}},
        error::{kind, Error},
        token::op::{UnaryOp, UnaryOpKind},
        Associativity,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary operation, such as `-x` or `n!`. Unary operations can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary operation.
    pub operand: Box<Expr>,

    /// The operator of the unary operation.
    pub op: UnaryOp,

    /// The region of the source code that this unary operation was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary operation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a right-associative unary operation, such as `-x`. The operand extends as far as
    /// operators of higher precedence than the unary operator allow, so `-x^2` is `-(x^2)`.
    pub fn parse_right(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        if op.associativity() != Associativity::Right {
            return Err(Error::new(vec![op.span], kind::UnexpectedToken {
                expected: &[TokenKind::Sub, TokenKind::Add],
                found: TokenKind::Factorial,
            }));
        }

        let start_span = op.span.start;
        let operand = {
            let lhs = Self::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op.precedence())?.0
        };
        let end_span = operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parses an operand followed by any number of left-associative unary operators, such as
    /// `n!`. Returns the operand alone if no operator follows it.
    pub fn parse_left_or_operand(input: &mut Parser) -> Result<Expr, Error> {
        let mut result = parse_primary(input)?;
        let start_span = result.span().start;

        while let Some(token) = input.next_if(TokenKind::Factorial) {
            result = Expr::Unary(Self {
                operand: Box::new(result),
                op: UnaryOp {
                    kind: UnaryOpKind::Factorial,
                    span: token.span.clone(),
                },
                span: start_span..token.span.end,
            });
        }

        Ok(result)
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        input.nested(|input| {
            let starts_with_sign = input.peek_token()
                .is_some_and(|token| matches!(token.kind, TokenKind::Sub | TokenKind::Add));

            if starts_with_sign {
                Self::parse_right(input).map(Expr::Unary)
            } else {
                Self::parse_left_or_operand(input)
            }
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let wrap = self.operand.precedence() < self.op.precedence();
        let operand = if wrap {
            format!("({})", self.operand)
        } else {
            self.operand.to_string()
        };

        match self.op.associativity() {
            Associativity::Left => write!(f, "{}{}", operand, self.op.kind),
            Associativity::Right => write!(f, "{}{}", self.op.kind, operand),
        }
    }
}
