use ariadne::Fmt;
use formsim_attrs::ErrorKind;
use formsim_error::EXPR;

/// A formula was longer than the configured limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "formula is too long to compare",
    labels = [format!("this {} has {} characters", "formula".fg(EXPR), len)],
    help = format!("the limit is {} characters; raise it with `max_input_len`", max),
)]
pub struct InputTooLarge {
    /// The length of the formula, in characters.
    pub len: usize,

    /// The maximum allowed length, in characters.
    pub max: usize,
}

/// A job status code that is not one of the known codes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown job status: `{}`", code),
    labels = ["this code"],
    help = format!("expected one of {}, {}, {}, {}, {}", "pnd".fg(EXPR), "prc".fg(EXPR), "suc".fg(EXPR), "err".fg(EXPR), "arc".fg(EXPR)),
)]
pub struct UnknownJobStatus {
    /// The code that was found.
    pub code: String,
}
