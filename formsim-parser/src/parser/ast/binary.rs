use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Builds the node `lhs op rhs`.
    pub fn new(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        let span = lhs.span().start..rhs.span().end;
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// In `1 + 2 * 3`, the right-hand-side of `+` starts as `2`. The operator after it binds
    /// tighter than `+`, so the expression starting with `2` is parsed first, giving `2 * 3` as
    /// the right-hand-side. In `3 * 2 + 1`, the following operator binds looser, so `3 * 2` is
    /// built here and [`Self::parse_expr`] picks up `+ 1` afterwards.
    ///
    /// When no operator follows, an operand after `rhs` means implicit multiplication, which
    /// binds like `*`. [`Self::parse_expr`] reports whether it consumed anything; if it did not,
    /// there is nothing left to multiply and the loop must stop.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            if let Ok(next_op) = input.try_peek::<BinOp>() {
                let binds_tighter = next_op.precedence() > precedence
                    || (next_op.precedence() == precedence
                        && next_op.associativity() == Associativity::Right);
                if !binds_tighter {
                    break;
                }
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?.0;
            } else {
                // implicit multiplication cannot take priority over an operator that binds at
                // least as tightly as multiplication
                if precedence >= Precedence::Factor || !input.starts_implicit_operand() {
                    break;
                }

                let (expr, changed) = Self::parse_expr(input, rhs, Precedence::Factor)?;
                rhs = expr;
                if !changed {
                    break;
                }
            }
        }

        Ok(Expr::Binary(Self::new(lhs, op, rhs)))
    }

    /// Parses a binary expression with the given left-hand-side, consuming operators whose
    /// precedence is at least `precedence`.
    ///
    /// Returns the parsed expression and whether anything was consumed.
    pub fn parse_expr(input: &mut Parser, lhs: Expr, precedence: Precedence) -> Result<(Expr, bool), Error> {
        input.nested(|input| Self::parse_expr_nested(input, lhs, precedence))
    }

    fn parse_expr_nested(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<(Expr, bool), Error> {
        let mut changed = false;

        loop {
            if let Ok(op) = input.try_peek::<BinOp>() {
                if op.precedence() < precedence {
                    break;
                }

                // consume the operator we peeked at
                input.try_parse::<BinOp>()?;
                let rhs = Unary::parse_or_lower(input)?;
                lhs = Self::complete_rhs(input, lhs, op, rhs)?;
            } else if Precedence::Factor >= precedence && input.starts_implicit_operand() {
                let rhs = Unary::parse_or_lower(input)?;
                let op = BinOp {
                    kind: BinOpKind::Mul,
                    implicit: true,
                    span: lhs.span().end..rhs.span().start,
                };
                lhs = Self::complete_rhs(input, lhs, op, rhs)?;
            } else {
                break;
            }

            changed = true;
        }

        Ok((lhs, changed))
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precedence = self.op.precedence();
        let (wrap_lhs, wrap_rhs) = match self.op.associativity() {
            Associativity::Left => (
                self.lhs.precedence() < precedence,
                self.rhs.precedence() <= precedence,
            ),
            Associativity::Right => (
                self.lhs.precedence() <= precedence,
                self.rhs.precedence() < precedence,
            ),
        };

        if wrap_lhs {
            write!(f, "({})", self.lhs)?;
        } else {
            write!(f, "{}", self.lhs)?;
        }
        write!(f, " {} ", self.op.kind)?;
        if wrap_rhs {
            write!(f, "({})", self.rhs)
        } else {
            write!(f, "{}", self.rhs)
        }
    }
}
