//! Table of the LaTeX commands the parser understands.

use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The role a LaTeX command plays in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// A named function applied to an argument, such as `\sin x`.
    Function,

    /// A Greek letter, used as a symbol.
    Greek,

    /// A named constant, such as `\pi`.
    Constant,

    /// `\frac{a}{b}` and its display / text variants.
    Frac,

    /// `\sqrt{x}` or `\sqrt[n]{x}`.
    Sqrt,

    /// Opens a sized delimiter group.
    Left,

    /// Closes a sized delimiter group.
    Right,

    /// A binary operator or relation, such as `\cdot` or `\leq`.
    Operator,

    /// Layout commands with no mathematical meaning, such as `\quad`.
    Ignored,
}

impl CommandKind {
    /// Returns true if a command of this kind can begin an operand.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            Self::Function | Self::Greek | Self::Constant | Self::Frac | Self::Sqrt | Self::Left
        )
    }
}

const FUNCTIONS: [&str; 21] = [
    "sin", "cos", "tan", "cot", "sec", "csc",
    "arcsin", "arccos", "arctan",
    "sinh", "cosh", "tanh", "coth",
    "ln", "log", "lg", "exp",
    "max", "min", "det", "gcd",
];

const GREEK: [&str; 35] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "varepsilon", "zeta", "eta", "theta",
    "vartheta", "iota", "kappa", "lambda", "mu", "nu", "xi", "rho", "varrho", "sigma", "tau",
    "upsilon", "phi", "varphi", "chi", "psi", "omega",
    "Gamma", "Delta", "Theta", "Lambda", "Xi", "Sigma", "Phi", "Psi", "Omega",
];

const OPERATORS: [&str; 12] = [
    "cdot", "times", "ast", "div", "neq", "ne", "leq", "le", "leqslant", "geq", "ge", "geqslant",
];

const IGNORED: [&str; 6] = ["quad", "qquad", "displaystyle", "textstyle", "limits", "nolimits"];

/// Every known command, keyed by its name without the leading backslash.
static COMMANDS: Lazy<HashMap<&'static str, CommandKind>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.extend(FUNCTIONS.iter().map(|name| (*name, CommandKind::Function)));
    map.extend(GREEK.iter().map(|name| (*name, CommandKind::Greek)));
    map.extend(OPERATORS.iter().map(|name| (*name, CommandKind::Operator)));
    map.extend(IGNORED.iter().map(|name| (*name, CommandKind::Ignored)));
    map.extend([
        ("pi", CommandKind::Constant),
        ("infty", CommandKind::Constant),
        ("frac", CommandKind::Frac),
        ("dfrac", CommandKind::Frac),
        ("tfrac", CommandKind::Frac),
        ("sqrt", CommandKind::Sqrt),
        ("left", CommandKind::Left),
        ("right", CommandKind::Right),
    ]);
    map
});

/// Strips the leading backslash from a command lexeme.
pub fn command_name(lexeme: &str) -> &str {
    lexeme.strip_prefix('\\').unwrap_or(lexeme)
}

/// Looks up the kind of the given command lexeme, with or without its leading backslash.
pub fn command_kind(lexeme: &str) -> Option<CommandKind> {
    COMMANDS.get(command_name(lexeme)).copied()
}

/// Suggests the known command closest to the given unknown one, if any is close enough to be a
/// plausible typo.
pub fn suggest_command(lexeme: &str) -> Option<&'static str> {
    let name = command_name(lexeme);
    COMMANDS
        .keys()
        .map(|candidate| (levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(command_kind(r"\sin"), Some(CommandKind::Function));
        assert_eq!(command_kind("alpha"), Some(CommandKind::Greek));
        assert_eq!(command_kind(r"\leq"), Some(CommandKind::Operator));
        assert_eq!(command_kind(r"\quad"), Some(CommandKind::Ignored));
        assert_eq!(command_kind(r"\unknown"), None);
    }

    #[test]
    fn suggestion() {
        assert_eq!(suggest_command(r"\fracc"), Some("frac"));
        assert_eq!(suggest_command(r"\sqr"), Some("sqrt"));
        assert_eq!(suggest_command(r"\mathbbold"), None);
    }
}
