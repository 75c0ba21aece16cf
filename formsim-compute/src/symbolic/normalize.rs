//! Turning LaTeX source into a canonical [`SymExpr`].

use formsim_error::Error;
use formsim_parser::parser::{ast::Expr as AstExpr, Parser};
use log::debug;
use super::{expr::SymExpr, simplify::simplify};

/// Produces the canonical expression tree of a formula.
///
/// The similarity scorer only ever sees the output of a normalizer, so two formulas are treated
/// as the same structure exactly when their normalized trees match.
pub trait Normalizer {
    /// Normalizes the given LaTeX source.
    fn normalize(&self, latex: &str) -> Result<SymExpr, Error>;
}

/// The default [`Normalizer`]: parses the formula, converts it to a [`SymExpr`], expands and
/// simplifies it, and sorts its terms and factors into canonical order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexNormalizer;

impl Normalizer for LatexNormalizer {
    fn normalize(&self, latex: &str) -> Result<SymExpr, Error> {
        let ast = Parser::new(latex).try_parse_full::<AstExpr>()?;
        debug!("parsed `{}` as `{}`", latex, ast);
        let expr = simplify(&SymExpr::from(ast));
        debug!("normalized `{}` to `{}`", latex, expr);
        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use crate::similarity::token_array;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Normalizes the formula and returns its canonical token array, which unlike [`SymExpr`]'s
    /// equality depends on the order of operands.
    fn array(latex: &str) -> Vec<String> {
        token_array(&LatexNormalizer.normalize(latex).unwrap())
    }

    #[test]
    fn normalizes_equivalent_forms() {
        let a = LatexNormalizer.normalize(r"(x + y)^2").unwrap();
        let b = LatexNormalizer.normalize(r"y^2 + 2 x y + x^2").unwrap();
        assert_eq!(a, b);
        assert_eq!(array(r"(x + y)^2"), array(r"y^2 + 2 x y + x^2"));
        assert_eq!(array(r"(x + y)^2"), array(r"x^2 + 2 x y + y^2"));
    }

    #[test]
    fn term_order_does_not_matter() {
        assert_eq!(array("x^2 y + x y^2"), array("y^2 x + y x^2"));
        assert_eq!(array("a b + c"), array("c + b a"));
        assert_eq!(array(r"\sin(x) + \cos(y)"), array(r"\cos(y) + \sin(x)"));
    }

    #[test]
    fn reports_parse_errors() {
        let err = LatexNormalizer.normalize(r"\frac{a}{").unwrap_err();
        assert_eq!(err.kind.message(), "unexpected end of formula");
    }
}
