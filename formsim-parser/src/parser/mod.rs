pub mod ast;
pub mod error;
pub mod token;

use error::{Error, kind};
use formsim_error::ErrorKind;
use super::{command::CommandKind, tokenizer::{tokenize_complete, Token, TokenKind}};
use std::ops::Range;

/// The deepest that operands may be nested inside one another, counting groups, unary operators
/// and chains of right-associative operators.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A high-level parser for LaTeX formulas. This is the type to use to parse a formula into an
/// abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The formula being parsed.
    source: &'source str,

    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of `|...|` groups that enclose the cursor. Inside such a group, a `|` closes
    /// the group instead of starting an implicitly multiplied operand.
    abs_depth: usize,

    /// Whether the parser is reading the unparenthesized argument of a function command, as in
    /// `\sin x`. Such an argument ends before the next function command.
    function_arg: bool,

    /// The number of operands currently being parsed inside one another.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: tokenize_complete(source),
            cursor: 0,
            abs_depth: 0,
            function_arg: false,
            depth: 0,
        }
    }

    /// Returns the formula being parsed.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Creates an error that points at the next meaningful token, or the end of the source code
    /// if there are no more tokens.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next meaningful token, or the end of the source code if there are
    /// no more tokens.
    pub fn span(&self) -> Range<usize> {
        self.peek_token().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the last meaningful token that was consumed. The cursor is not moved.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens[..self.cursor].iter().rev().find(|token| !token.is_whitespace())
    }

    /// Returns the next meaningful token without consuming it.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: usize) -> Range<usize> {
        let end = self.prev_token().map_or(start, |token| token.span.end);
        start..end.max(start)
    }

    /// Moves the cursor past any whitespace.
    pub fn advance_past_whitespace(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.is_whitespace() {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.advance_past_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Consumes the next token if it has the given kind.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        match self.peek_token() {
            Some(token) if token.kind == kind => self.next_token().ok(),
            _ => None,
        }
    }

    /// Returns true if the next meaningful token could begin an operand that is implicitly
    /// multiplied with whatever precedes it, as in `2x` or `a\sin b`.
    pub fn starts_implicit_operand(&self) -> bool {
        let Some(token) = self.peek_token() else {
            return false;
        };

        match token.kind {
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::Letter
                | TokenKind::OpenParen
                | TokenKind::OpenBracket
                | TokenKind::OpenBrace => true,
            TokenKind::Pipe => self.abs_depth == 0,
            TokenKind::Command => token.command().is_some_and(|kind| {
                kind.starts_operand() && !(self.function_arg && kind == CommandKind::Function)
            }),
            _ => false,
        }
    }

    /// Runs `f` with the parser marked as inside a `|...|` group.
    pub fn within_abs<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        self.abs_depth += 1;
        let result = f(self);
        self.abs_depth -= 1;
        result
    }

    /// Runs `f` with the parser marked as reading (or not reading) an unparenthesized function
    /// argument.
    pub fn with_function_arg<T>(
        &mut self,
        function_arg: bool,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let outer = std::mem::replace(&mut self.function_arg, function_arg);
        let result = f(self);
        self.function_arg = outer;
        result
    }

    /// Runs `f` one nesting level deeper. Fails with [`kind::NestingTooDeep`] instead of running
    /// `f` if the parser is already [`MAX_NESTING_DEPTH`] levels deep.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(kind::NestingTooDeep { max: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Parses a value without consuming any tokens, whether or not parsing succeeds.
    pub fn try_peek<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        let result = T::parse(self);
        self.cursor = start;
        result
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.cursor = start;
                    return Err(err);
                },
            }

            if self.next_if(delimiter).is_none() {
                return Ok(values);
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.advance_past_whitespace();

        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`. For unary
    /// operations, this means `a op op` is evaluated as `(a op) op` (the operators appear to the
    /// right of the operand).
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)` (the operators appear to the
    /// left of the operand).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of relations (`=`, `\neq`, `<`, `\leq`, `>`, and `\geq`).
    Compare,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`\cdot`, `\times`, implicit) and division (`/`, `\div`),
    /// which separate factors.
    Factor,

    /// Precedence of unary negation (`-`) and unary plus (`+`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of factorial (`!`).
    Factorial,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::Expr;

    /// Parses the formula and renders it back as plain infix text.
    fn render(source: &str) -> String {
        let mut parser = Parser::new(source);
        match parser.try_parse_full::<Expr>() {
            Ok(expr) => expr.to_string(),
            Err(err) => panic!("failed to parse `{}`: {}", source, err),
        }
    }

    /// Parses the formula, expecting an error, and returns its message.
    fn error_message(source: &str) -> String {
        let mut parser = Parser::new(source);
        match parser.try_parse_full::<Expr>() {
            Ok(expr) => panic!("`{}` unexpectedly parsed as `{}`", source, expr),
            Err(err) => err.kind.message(),
        }
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(render("1 + 2 * 3"), "1 + 2 * 3");
        assert_eq!(render("(1 + 2) * 3"), "(1 + 2) * 3");
        assert_eq!(render("a - b - c"), "a - b - c");
        assert_eq!(render("a - (b - c)"), "a - (b - c)");
        assert_eq!(render("a^b^c"), "a ^ b ^ c");
        assert_eq!(render("{a^b}^c"), "(a ^ b) ^ c");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(render("2x^2"), "2 * x ^ 2");
        assert_eq!(render("xy + 1"), "x * y + 1");
        assert_eq!(render(r"2\pi r"), "2 * pi * r");
        assert_eq!(render("2(a+b)"), "2 * (a + b)");
    }

    #[test]
    fn unary_operators() {
        assert_eq!(render("-x^2"), "-x ^ 2");
        assert_eq!(render("-2x"), "-2 * x");
        assert_eq!(render("a - -b"), "a - -b");
        assert_eq!(render("n!"), "n!");
    }

    #[test]
    fn latex_operators() {
        assert_eq!(render(r"a \cdot b \times c"), "a * b * c");
        assert_eq!(render(r"a \div b"), "a / b");
        assert_eq!(render(r"x \leq y"), "x <= y");
        assert_eq!(render(r"x \neq y"), "x != y");
        assert_eq!(render("E = mc^2"), "E = m * c ^ 2");
    }

    #[test]
    fn fractions_and_roots() {
        assert_eq!(render(r"\frac{a}{b} + c^2"), "a / b + c ^ 2");
        assert_eq!(render(r"\frac{a+b}{2}"), "(a + b) / 2");
        assert_eq!(render(r"\dfrac12"), "1 / 2");
        assert_eq!(render(r"\sqrt{x+1}"), "sqrt(x + 1)");
        assert_eq!(render(r"\sqrt[3]{x}"), "root(x, 3)");
    }

    #[test]
    fn functions() {
        assert_eq!(render(r"\sin x"), "sin(x)");
        assert_eq!(render(r"\sin(x) y"), "sin(x) * y");
        assert_eq!(render(r"\sin 2x + 1"), "sin(2 * x) + 1");
        assert_eq!(render(r"\cos^2 \theta"), "cos(theta) ^ 2");
        assert_eq!(render(r"\log_2 n"), "log(n, 2)");
        assert_eq!(render(r"\max(a, b)"), "max(a, b)");
        assert_eq!(render(r"\sin x \cos x"), "sin(x) * cos(x)");
        assert_eq!(render(r"\sin \cos x"), "sin(cos(x))");
    }

    #[test]
    fn symbols_with_subscripts() {
        assert_eq!(render("x_1 + x_{ij}"), "x_1 + x_{ij}");
        assert_eq!(render(r"\alpha_0 f'"), "alpha_0 * f'");
    }

    #[test]
    fn delimiters() {
        assert_eq!(render(r"\left( a + b \right)^2"), "(a + b) ^ 2");
        assert_eq!(render("|x - y|"), "abs(x - y)");
        assert_eq!(render("2|x|"), "2 * abs(x)");
        assert_eq!(render(r"\left| x \right|"), "abs(x)");
        assert_eq!(render("[a + b]c"), "(a + b) * c");
    }

    #[test]
    fn spacing_is_ignored() {
        assert_eq!(render(r"a\,+\;b \quad"), "a + b");
    }

    #[test]
    fn errors() {
        assert_eq!(error_message(""), "unexpected end of formula");
        assert_eq!(error_message("1 +"), "unexpected end of formula");
        assert_eq!(error_message("(a + b"), "unclosed delimiter");
        assert_eq!(error_message("a)"), "expected end of formula");
        assert_eq!(error_message("()"), "missing expression inside delimiters");
        assert_eq!(error_message(r"\fracc{a}{b}"), "unknown command: `\\fracc`");
        assert_eq!(error_message(r"\left( a"), "missing `\\right` delimiter");
    }

    #[test]
    fn nesting_limit() {
        let nested = |depth: usize| format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(render(&nested(40)), nested(40));
        assert_eq!(error_message(&nested(5000)), "formula is nested too deeply");
        assert_eq!(error_message(&format!("{}x", "-".repeat(5000))), "formula is nested too deeply");
        assert_eq!(error_message(&"x^".repeat(5000)), "formula is nested too deeply");
    }

    #[test]
    fn error_spans_point_at_the_problem() {
        let mut parser = Parser::new(r"1 + \foo");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![4..8]);
    }
}
