//! Tokenizer and parser for single LaTeX formulas.
//!
//! The [`tokenizer`] splits a formula into [`Token`](tokenizer::Token)s, and the [`parser`] turns
//! those tokens into an abstract syntax tree ([`parser::ast::Expr`]) that keeps track of the
//! region of the source each node came from.
//!
//! Only the subset of LaTeX that shows up inside a single display formula is understood:
//! arithmetic, relations, fractions, roots, powers, subscripts, function commands such as `\sin`,
//! Greek letters and grouping. Anything else is reported as an error.
//!
//! ```
//! use formsim_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new(r"\frac{a}{b} + c^2");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "a / b + c ^ 2");
//! ```

pub mod command;
pub mod parser;
pub mod tokenizer;
