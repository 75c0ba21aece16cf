//! Symbolic normalization of formulas.
//!
//! # Expression representation
//!
//! Formulas are represented as a tree of [`SymExpr`] nodes. It's similar to the
//! [`formsim_parser::parser::ast::Expr`] nodes produced by [`formsim_parser`], with the main
//! difference being that [`SymExpr`] nodes **flatten** out the tree structure: `x + (y + z)` is
//! a single [`SymExpr::Add`] node with _three_ children.
//!
//! ```
//! use formsim_compute::symbolic::expr::{Primary, SymExpr};
//! use formsim_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + (y + z)");
//! let ast_expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! let expr: SymExpr = ast_expr.into();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//!     SymExpr::Primary(Primary::Symbol("y".to_string())),
//!     SymExpr::Primary(Primary::Symbol("z".to_string())),
//! ]));
//! ```
//!
//! # Normalization
//!
//! [`simplify()`] repeatedly applies the rules in [`simplify::rules`] (combining like terms and
//! factors, distributing products over sums, expanding small powers of sums, basic power rules)
//! until none apply, then sorts the result with [`order::sort`]. The [`Normalizer`] trait wraps
//! parsing and simplification into a single step.
//!
//! ```
//! use formsim_compute::primitive::int;
//! use formsim_compute::symbolic::{expr::{Primary, SymExpr}, simplify};
//! use formsim_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + x + x");
//! let ast_expr = parser.try_parse_full::<Expr>().unwrap();
//! let simplified = simplify(&ast_expr.into());
//!
//! // `x + x + x = 3x`
//! assert_eq!(simplified, SymExpr::Mul(vec![
//!     SymExpr::Primary(Primary::Integer(int(3))),
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//! ]));
//! ```

pub mod expr;
pub mod normalize;
pub mod order;
pub mod simplify;
pub mod step_log;

pub use expr::SymExpr;
pub use normalize::{LatexNormalizer, Normalizer};
pub use simplify::{simplify, simplify_with_steps};
pub use step_log::StepLog;
