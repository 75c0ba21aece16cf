//! A representation of formulas that is easier to manipulate than an AST.
//!
//! The [`Expr`](formsim_parser::parser::ast::Expr) type from `formsim_parser` mirrors the LaTeX
//! source closely: every `+`, `\cdot` and `\frac` is its own binary node, and every group keeps
//! its delimiters. That is convenient for reporting errors, but not for comparing the structure of
//! two formulas.
//!
//! This module defines [`SymExpr`], which **flattens** chains of additions and multiplications
//! into lists of terms and factors, rewrites subtraction as addition of a negated term, division
//! as multiplication by a reciprocal, and roots as fractional powers.
//!
//! # Strict equality
//!
//! Two expressions are considered strictly equal if:
//!
//! - They are the same type of expression (i.e. both [`SymExpr::Primary`], both [`SymExpr::Add`],
//! etc.).
//! - If both are [`SymExpr::Primary`], both expressions must have strictly equal values.
//! - If both are [`SymExpr::Add`] or [`SymExpr::Mul`], both expressions must have strictly equal
//! terms / factors, in any order.
//! - If both are [`SymExpr::Exp`] or [`SymExpr::Relation`], their operands must be strictly equal
//! (and the relations must be of the same kind).
//!
//! Strict equality is a subset of mathematical equality: `x^2 + 2x + 1` and `(x + 1)^2` are
//! **not** strictly equal. It never reports false positives, which is what the simplifier needs
//! to decide whether terms and factors can be combined.

use crate::primitive::{float_from_str, int, int_from_str, int_to_float};
use formsim_parser::parser::{
    ast::{Expr as AstExpr, Literal},
    token::op::{BinOpKind, UnaryOpKind},
    Precedence,
};
use num::BigInt;
use std::{fmt, hash::{Hash, Hasher}, ops::{Add, AddAssign, Mul, MulAssign, Neg}};
use super::simplify::fraction::make_fraction;

/// A single term / factor, such as a number, variable, or function call.
#[derive(Debug, Clone)]
pub enum Primary {
    /// An integer, such as `2` or `144`.
    Integer(BigInt),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(f64),

    /// A variable, such as `x`, `x_1` or `alpha`.
    Symbol(String),

    /// A named constant, such as `pi` or `infty`. Constants are never renamed.
    Constant(String),

    /// A function call, such as `sin(x)` or `log(n, 2)`.
    Call(String, Vec<SymExpr>),
}

/// [`PartialEq`] is implemented manually to compare [`Primary::Float`]s by value. This module
/// **must never** produce `NaN`s.
impl PartialEq for Primary {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            (Self::Constant(lhs), Self::Constant(rhs)) => lhs == rhs,
            (Self::Call(lhs_name, lhs_args), Self::Call(rhs_name, rhs_args)) => {
                lhs_name == rhs_name && lhs_args == rhs_args
            },
            _ => false,
        }
    }
}

impl Eq for Primary {}

/// [`Hash`] is implemented manually to allow hashing [`Primary::Float`]s. `0.0` and `-0.0` hash
/// the same, matching the [`PartialEq`] implementation.
impl Hash for Primary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(int) => int.hash(state),
            Self::Float(float) => (float + 0.0).to_bits().hash(state),
            Self::Symbol(sym) | Self::Constant(sym) => sym.hash(state),
            Self::Call(name, args) => {
                name.hash(state);
                args.hash(state);
            },
        }
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Float(num) => write!(f, "{}", num),
            Self::Symbol(sym) | Self::Constant(sym) => write!(f, "{}", sym),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

/// Adds two [`Primary`]s together. If both are numbers, they are added together, promoting to a
/// float if either one is a float. Otherwise, the two [`Primary`]s are wrapped in an
/// [`SymExpr::Add`].
impl Add<Primary> for Primary {
    type Output = SymExpr;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => {
                SymExpr::Primary(Primary::Integer(lhs + rhs))
            },
            (Primary::Float(lhs), Primary::Float(rhs)) => {
                SymExpr::Primary(Primary::Float(lhs + rhs))
            },
            (Primary::Integer(int), Primary::Float(float))
                | (Primary::Float(float), Primary::Integer(int)) => {
                SymExpr::Primary(Primary::Float(int_to_float(&int) + float))
            },
            (lhs, rhs) => SymExpr::Add(vec![
                SymExpr::Primary(lhs),
                SymExpr::Primary(rhs),
            ]),
        }
    }
}

/// Multiplies two [`Primary`]s together, following the same rules as [`Add`].
impl Mul<Primary> for Primary {
    type Output = SymExpr;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => {
                SymExpr::Primary(Primary::Integer(lhs * rhs))
            },
            (Primary::Float(lhs), Primary::Float(rhs)) => {
                SymExpr::Primary(Primary::Float(lhs * rhs))
            },
            (Primary::Integer(int), Primary::Float(float))
                | (Primary::Float(float), Primary::Integer(int)) => {
                SymExpr::Primary(Primary::Float(int_to_float(&int) * float))
            },
            (lhs, rhs) => SymExpr::Mul(vec![
                SymExpr::Primary(lhs),
                SymExpr::Primary(rhs),
            ]),
        }
    }
}

/// The kind of a [`SymExpr::Relation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `a = b`
    Eq,

    /// `a \neq b`
    NotEq,

    /// `a < b`
    Less,

    /// `a \leq b`
    LessEq,

    /// `a > b`
    Greater,

    /// `a \geq b`
    GreaterEq,
}

impl RelationKind {
    /// Returns the relation corresponding to the given binary operator, if it is a relation.
    pub fn from_op(op: BinOpKind) -> Option<Self> {
        match op {
            BinOpKind::Eq => Some(Self::Eq),
            BinOpKind::NotEq => Some(Self::NotEq),
            BinOpKind::Less => Some(Self::Less),
            BinOpKind::LessEq => Some(Self::LessEq),
            BinOpKind::Greater => Some(Self::Greater),
            BinOpKind::GreaterEq => Some(Self::GreaterEq),
            _ => None,
        }
    }

    /// The operator name used for this relation in a flattened token array.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eq => "Eq",
            Self::NotEq => "Ne",
            Self::Less => "Lt",
            Self::LessEq => "Le",
            Self::Greater => "Gt",
            Self::GreaterEq => "Ge",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
        }
    }
}

/// A mathematical expression with information about its terms and factors.
///
/// The tree structure is **flattened**: `x + (y + z)` is represented as a single
/// [`SymExpr::Add`] node with _three_ children, `x`, `y`, and `z`.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, Eq, Hash)]
pub enum SymExpr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to a power.
    Exp(Box<SymExpr>, Box<SymExpr>),

    /// A relation between two expressions, such as `a = b`.
    Relation(RelationKind, Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Returns the precedence of the outermost operation of the expression.
    fn precedence(&self) -> Precedence {
        match self {
            Self::Primary(_) => Precedence::Factorial,
            Self::Add(_) => Precedence::Term,
            Self::Mul(_) => Precedence::Factor,
            Self::Exp(..) => Precedence::Exp,
            Self::Relation(..) => Precedence::Compare,
        }
    }

    /// Writes `child`, wrapping it in parentheses if it binds looser than `self` (or equally
    /// loose, when `strict` is set).
    fn fmt_child(&self, child: &Self, strict: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (parent, child_prec) = (self.precedence(), child.precedence());
        if child_prec < parent || strict && child_prec == parent {
            write!(f, "({})", child)
        } else {
            write!(f, "{}", child)
        }
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Integer`], returns the contained integer.
    pub fn into_integer(self) -> Option<BigInt> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_)))
    }

    /// Returns true if the expression is a [`Primary::Integer`] raised to the power of -1.
    pub fn is_integer_recip(&self) -> bool {
        self.as_integer_recip().is_some()
    }

    /// If the expression is a [`Primary::Integer`] raised to the power of -1, returns a reference
    /// to the contained integer (the denominator of the fraction).
    pub fn as_integer_recip(&self) -> Option<&BigInt> {
        if let Self::Exp(base, exp) = self {
            if exp.as_integer()? == &int(-1) {
                return base.as_integer();
            }
        }

        None
    }

    /// If the expression is a [`Primary::Integer`] raised to the power of -1, returns the
    /// contained integer (the denominator of the fraction).
    pub fn into_integer_recip(self) -> Option<BigInt> {
        if let Self::Exp(base, exp) = self {
            if exp.as_integer()? == &int(-1) {
                return base.into_integer();
            }
        }

        None
    }

    /// Returns true if the expression is a [`Primary::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Primary(Primary::Float(_)))
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or an [`SymExpr::Primary`]
    /// containing the integer 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::Primary(Primary::Integer(int(0)))
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::Primary(Primary::Integer(int(1)))
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns the square root of this expression. No simplification is done.
    pub fn sqrt(self) -> Self {
        self.root(Self::Primary(Primary::Integer(int(2))))
    }

    /// Returns the `index`-th root of this expression, `self^(1/index)`. No simplification is
    /// done.
    pub fn root(self, index: Self) -> Self {
        Self::Exp(
            Box::new(self),
            Box::new(make_fraction(Self::Primary(Primary::Integer(int(1))), index)),
        )
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    self.fmt_child(term, false, f)?;
                    for term in iter {
                        write!(f, " + ")?;
                        self.fmt_child(term, false, f)?;
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => {
                let mut iter = factors.iter();
                if let Some(factor) = iter.next() {
                    self.fmt_child(factor, false, f)?;
                    for factor in iter {
                        write!(f, " * ")?;
                        self.fmt_child(factor, false, f)?;
                    }
                }
                Ok(())
            },
            Self::Exp(base, exp) => {
                self.fmt_child(base, true, f)?;
                write!(f, "^")?;
                self.fmt_child(exp, false, f)
            },
            Self::Relation(kind, lhs, rhs) => {
                self.fmt_child(lhs, true, f)?;
                write!(f, " {} ", kind.symbol())?;
                self.fmt_child(rhs, true, f)
            },
        }
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                lhs.len() == rhs.len()
                    && lhs.iter().all(|lhs| rhs.contains(lhs))
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            (Self::Relation(lhs_kind, lhs_l, lhs_r), Self::Relation(rhs_kind, rhs_l, rhs_r)) => {
                lhs_kind == rhs_kind && lhs_l == rhs_l && lhs_r == rhs_r
            },
            _ => false,
        }
    }
}

impl From<AstExpr> for SymExpr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Integer(int) => Self::Primary(Primary::Integer(int_from_str(&int.value))),
                Literal::Float(float) => Self::Primary(Primary::Float(float_from_str(&float.value))),
                Literal::Symbol(sym) => Self::Primary(Primary::Symbol(sym.name)),
                Literal::Constant(sym) => Self::Primary(Primary::Constant(sym.name)),
            },
            AstExpr::Paren(paren) => Self::from(paren.into_innermost()),
            AstExpr::Call(call) => {
                let mut args = call.args.into_iter().map(Self::from).collect::<Vec<_>>();
                match (call.name.as_str(), args.len()) {
                    ("sqrt", 1) => args.remove(0).sqrt(),
                    ("root", 2) => {
                        let index = args.remove(1);
                        args.remove(0).root(index)
                    },
                    _ => Self::Primary(Primary::Call(call.name, args)),
                }
            },
            AstExpr::Unary(unary) => {
                let operand = Self::from(*unary.operand);
                match unary.op.kind {
                    // treat this as -1 * operand
                    UnaryOpKind::Neg => operand.neg(),
                    UnaryOpKind::Pos => operand,
                    UnaryOpKind::Factorial => {
                        Self::Primary(Primary::Call(String::from("factorial"), vec![operand]))
                    },
                }
            },
            AstExpr::Binary(bin) => {
                match bin.op.kind {
                    BinOpKind::Exp => {
                        Self::Exp(Box::new(Self::from(*bin.lhs)), Box::new(Self::from(*bin.rhs)))
                    },
                    BinOpKind::Mul => {
                        // iteratively flatten binary expressions into factors
                        let mut factors = Self::Mul(Vec::new());
                        let mut stack = vec![AstExpr::Binary(bin)];
                        while let Some(expr) = stack.pop() {
                            match expr {
                                // rhs first, so operands come off the stack in source order
                                AstExpr::Binary(bin) if bin.op.kind == BinOpKind::Mul => {
                                    stack.push(*bin.rhs);
                                    stack.push(*bin.lhs);
                                },
                                // if the converted expression is another `SymExpr::Mul`, its
                                // factors are added to the current list of factors instead
                                expr => factors *= Self::from(expr),
                            }
                        }
                        factors
                    },
                    // treat this as lhs * rhs^-1
                    BinOpKind::Div => make_fraction(Self::from(*bin.lhs), Self::from(*bin.rhs)),
                    BinOpKind::Add => {
                        let mut terms = Self::Add(Vec::new());
                        let mut stack = vec![AstExpr::Binary(bin)];
                        while let Some(expr) = stack.pop() {
                            match expr {
                                AstExpr::Binary(bin) if bin.op.kind == BinOpKind::Add => {
                                    stack.push(*bin.rhs);
                                    stack.push(*bin.lhs);
                                },
                                expr => terms += Self::from(expr),
                            }
                        }
                        terms
                    },
                    // treat this as lhs + -1 * rhs
                    BinOpKind::Sub => Self::from(*bin.lhs) + Self::from(*bin.rhs).neg(),
                    kind => {
                        let lhs = Box::new(Self::from(*bin.lhs));
                        let rhs = Box::new(Self::from(*bin.rhs));
                        match RelationKind::from_op(kind) {
                            Some(relation) => Self::Relation(relation, lhs, rhs),
                            // every other operator is handled above
                            None => Self::Relation(RelationKind::Eq, lhs, rhs),
                        }
                    },
                }
            },
        }
    }
}

/// Adds two [`SymExpr`]s together. No simplification is done, except for the case where the
/// operands are a mix of [`Primary`] and / or [`SymExpr::Add`], in which case both are combined
/// in one list of terms (flattening).
impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs + rhs,
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Adds two [`SymExpr`]s together. The behavior is the same as [`Add`], except we can reuse the
/// allocated memory of `self` if possible.
impl AddAssign for SymExpr {
    fn add_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Primary(Primary::Integer(lhs)), Self::Primary(Primary::Integer(rhs))) => {
                *lhs += rhs;
            },
            (Self::Primary(Primary::Float(lhs)), Self::Primary(Primary::Float(rhs))) => {
                *lhs += rhs;
            },
            (Self::Add(terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
            },
            (Self::Add(terms), other) => {
                terms.push(other);
            },
            (lhs, rhs) => {
                let owned = std::mem::replace(lhs, Self::Add(Vec::new()));
                *lhs = owned + rhs;
            },
        }
    }
}

/// Multiplies two [`SymExpr`]s together. No simplification is done, except for the case where
/// the operands are a mix of [`Primary`] and / or [`SymExpr::Mul`], in which case both are
/// combined in one list of factors (flattening).
impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs * rhs,
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// Multiplies two [`SymExpr`]s together. The behavior is the same as [`Mul`], except we can
/// reuse the allocated memory of `self` if possible.
impl MulAssign for SymExpr {
    fn mul_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Primary(Primary::Integer(lhs)), Self::Primary(Primary::Integer(rhs))) => {
                *lhs *= rhs;
            },
            (Self::Primary(Primary::Float(lhs)), Self::Primary(Primary::Float(rhs))) => {
                *lhs *= rhs;
            },
            (Self::Mul(factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
            },
            (Self::Mul(factors), other) => {
                factors.push(other);
            },
            (lhs, rhs) => {
                let owned = std::mem::replace(lhs, Self::Mul(Vec::new()));
                *lhs = owned * rhs;
            },
        }
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a numeric [`Primary`], in which case the number is negated.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(int)) => Self::Primary(Primary::Integer(-int)),
            Self::Primary(Primary::Float(float)) => Self::Primary(Primary::Float(-float)),
            expr => Self::Primary(Primary::Integer(int(-1))) * expr,
        }
    }
}

/// Strict equality ignores the order of terms and factors, so the expected values below are
/// written in whatever order reads best.
#[cfg(test)]
mod tests {
    use formsim_parser::parser::{ast::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parse the given formula and return the [`SymExpr`] representation.
    fn parse_expr(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        SymExpr::from(expr)
    }

    fn sym(name: &str) -> SymExpr {
        SymExpr::Primary(Primary::Symbol(String::from(name)))
    }

    fn num(n: i64) -> SymExpr {
        SymExpr::Primary(Primary::Integer(int(n)))
    }

    #[test]
    fn strict_equality() {
        let a = parse_expr("2(x + (y - 5))");
        let b = parse_expr(r"(y - 5 + x) \cdot 2");
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_2() {
        // mathematically equal, but not strictly equal
        let a = parse_expr("2(x + (y - 5))");
        let b = parse_expr("2x + 2y - 10");
        assert_ne!(a, b);
    }

    #[test]
    fn simple_expr() {
        let expr = parse_expr("x^2 + 5x + 6");
        assert_eq!(expr, SymExpr::Add(vec![
            num(6),
            SymExpr::Mul(vec![sym("x"), num(5)]),
            SymExpr::Exp(Box::new(sym("x")), Box::new(num(2))),
        ]));
    }

    #[test]
    fn fractions_and_roots() {
        let expr = parse_expr(r"\frac{a}{b} + \sqrt{c}");
        assert_eq!(expr, SymExpr::Add(vec![
            SymExpr::Mul(vec![
                sym("a"),
                SymExpr::Exp(Box::new(sym("b")), Box::new(num(-1))),
            ]),
            SymExpr::Exp(
                Box::new(sym("c")),
                Box::new(SymExpr::Mul(vec![
                    num(1),
                    SymExpr::Exp(Box::new(num(2)), Box::new(num(-1))),
                ])),
            ),
        ]));
    }

    #[test]
    fn subtraction_is_negated_term() {
        let expr = parse_expr("a - b");
        assert_eq!(expr, SymExpr::Add(vec![
            sym("a"),
            SymExpr::Mul(vec![num(-1), sym("b")]),
        ]));
    }

    #[test]
    fn relations_and_calls() {
        let expr = parse_expr(r"E = mc^2 + \sin x");
        assert_eq!(expr, SymExpr::Relation(
            RelationKind::Eq,
            Box::new(sym("E")),
            Box::new(SymExpr::Add(vec![
                SymExpr::Mul(vec![
                    sym("m"),
                    SymExpr::Exp(Box::new(sym("c")), Box::new(num(2))),
                ]),
                SymExpr::Primary(Primary::Call(String::from("sin"), vec![sym("x")])),
            ])),
        ));
    }

    #[test]
    fn constants_and_factorials() {
        let expr = parse_expr(r"n! \pi");
        assert_eq!(expr, SymExpr::Mul(vec![
            SymExpr::Primary(Primary::Call(String::from("factorial"), vec![sym("n")])),
            SymExpr::Primary(Primary::Constant(String::from("pi"))),
        ]));
    }

    #[test]
    fn mixed_numbers_promote_to_float() {
        let sum = SymExpr::Primary(Primary::Integer(int(2))) + SymExpr::Primary(Primary::Float(0.5));
        assert_eq!(sum, SymExpr::Primary(Primary::Float(2.5)));

        let mut product = SymExpr::Primary(Primary::Float(1.5));
        product *= num(4);
        assert_eq!(product, SymExpr::Primary(Primary::Float(6.0)));
    }

    #[test]
    fn assign_reuses_lists() {
        let mut terms = sym("a");
        terms += SymExpr::Add(vec![sym("b"), sym("c")]);
        assert_eq!(terms, SymExpr::Add(vec![sym("a"), sym("b"), sym("c")]));

        let mut factors = sym("a");
        factors *= sym("b");
        assert_eq!(factors, SymExpr::Mul(vec![sym("a"), sym("b")]));
    }

    #[test]
    fn fmt_expr() {
        let expr = parse_expr("(a + b)c");
        assert_eq!(expr.to_string(), "(a + b) * c");
    }
}
