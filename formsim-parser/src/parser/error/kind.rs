use ariadne::Fmt;
use formsim_attrs::ErrorKind;
use formsim_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of formula",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of formula",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A grouping delimiter was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed delimiter",
    labels = ["this delimiter is not closed"],
    help = format!("add a matching {} somewhere after this", closing.fg(EXPR)),
)]
pub struct UnclosedDelimiter {
    /// The delimiter that would close the group.
    pub closing: &'static str,
}

/// There was no expression inside a pair of delimiters.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside delimiters",
    labels = ["add an expression here"],
)]
pub struct EmptyGroup;

/// A command that the parser does not understand was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command: `{}`", name),
    labels = ["this command"],
    help = match suggestion {
        Some(suggestion) => format!("did you mean `\\{}`?", suggestion.fg(EXPR)),
        None => "only commands that appear in ordinary formulas are supported".to_string(),
    },
)]
pub struct UnknownCommand {
    /// The command as written, including the leading backslash.
    pub name: String,

    /// The known command with the closest spelling, if one is close enough.
    pub suggestion: Option<&'static str>,
}

/// A `\left` delimiter had no matching `\right`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing `\\right` delimiter",
    labels = ["this `\\left` is never closed"],
    help = format!("add a {} delimiter after the group", "\\right".fg(EXPR)),
)]
pub struct MissingRight;

/// A `\right` delimiter appeared without a matching `\left`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected `\\right` delimiter",
    labels = ["there is no `\\left` for this delimiter"],
)]
pub struct UnmatchedRight;

/// Operands were nested inside one another more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "formula is nested too deeply",
    labels = [format!("this {} is more than {} levels deep", "operand".fg(EXPR), max)],
    help = "split the formula into smaller parts",
)]
pub struct NestingTooDeep {
    /// The deepest nesting allowed.
    pub max: usize,
}
