//! Structs to help parse binary and unary operators.

use crate::{
    command::command_name,
    parser::{
        error::{Error, kind},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
    Pos,
    Factorial,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Neg | Self::Pos => Precedence::Neg,
            Self::Factorial => Precedence::Factorial,
        }
    }

    /// Returns the associativity of the unary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Neg | Self::Pos => Associativity::Right,
            Self::Factorial => Associativity::Left,
        }
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
            Self::Pos => write!(f, "+"),
            Self::Factorial => write!(f, "!"),
        }
    }
}

/// A unary operator that takes one operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl UnaryOp {
    /// Returns the precedence of the unary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the unary operator.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Sub => Ok(UnaryOpKind::Neg),
            TokenKind::Add => Ok(UnaryOpKind::Pos),
            TokenKind::Factorial => Ok(UnaryOpKind::Factorial),
            _ => Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Sub,
                    TokenKind::Add,
                    TokenKind::Factorial,
                ],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Eq | Self::NotEq
                | Self::Less | Self::LessEq
                | Self::Greater | Self::GreaterEq => Precedence::Compare,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns true if the operation is a relation between two sides of a formula.
    pub fn is_relation(&self) -> bool {
        self.precedence() == Precedence::Compare
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
        };
        write!(f, "{}", symbol)
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether this binary operator was implicitly inserted by the parser.
    pub implicit: bool,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Exp => Some(BinOpKind::Exp),
            TokenKind::Mul => Some(BinOpKind::Mul),
            TokenKind::Div => Some(BinOpKind::Div),
            TokenKind::Add => Some(BinOpKind::Add),
            TokenKind::Sub => Some(BinOpKind::Sub),
            TokenKind::Eq => Some(BinOpKind::Eq),
            TokenKind::Less => Some(BinOpKind::Less),
            TokenKind::Greater => Some(BinOpKind::Greater),
            TokenKind::Command => match command_name(token.lexeme) {
                "cdot" | "times" | "ast" => Some(BinOpKind::Mul),
                "div" => Some(BinOpKind::Div),
                "neq" | "ne" => Some(BinOpKind::NotEq),
                "leq" | "le" | "leqslant" => Some(BinOpKind::LessEq),
                "geq" | "ge" | "geqslant" => Some(BinOpKind::GreaterEq),
                _ => None,
            },
            _ => None,
        };

        let kind = kind.ok_or_else(|| Error::new(vec![token.span.clone()], kind::UnexpectedToken {
            expected: &[
                TokenKind::Exp,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Eq,
                TokenKind::Less,
                TokenKind::Greater,
            ],
            found: token.kind,
        }))?;

        Ok(Self {
            kind,
            implicit: false,
            span: token.span,
        })
    }
}
