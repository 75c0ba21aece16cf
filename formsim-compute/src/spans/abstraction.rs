//! Hiding the names of variables in a raw token stream.

use std::collections::HashMap;
use super::lexer::{RawToken, RawTokenKind};

/// The placeholder that every identifier is replaced with.
pub const VAR: &str = "VAR";

/// The two abstracted views of one formula's tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abstraction {
    /// Every identifier replaced by [`VAR`]; variables are interchangeable.
    pub generic: Vec<String>,

    /// Every distinct identifier replaced by `VAR1`, `VAR2`, ... in order of first appearance.
    pub indexed: Vec<String>,

    /// Maps each original identifier to its placeholder in [`Abstraction::indexed`].
    pub variables: HashMap<String, String>,
}

impl Abstraction {
    /// Abstracts the given tokens. Numbering always starts at `VAR1`.
    pub fn new(tokens: &[RawToken]) -> Self {
        let mut generic = Vec::with_capacity(tokens.len());
        let mut indexed = Vec::with_capacity(tokens.len());
        let mut variables = HashMap::new();

        for token in tokens {
            if token.kind == RawTokenKind::Identifier {
                let next = variables.len() + 1;
                let placeholder = variables.entry(token.lexeme.clone())
                    .or_insert_with(|| format!("{}{}", VAR, next));
                generic.push(VAR.to_owned());
                indexed.push(placeholder.clone());
            } else {
                generic.push(token.lexeme.clone());
                indexed.push(token.lexeme.clone());
            }
        }

        Self { generic, indexed, variables }
    }
}

#[cfg(test)]
mod tests {
    use crate::spans::lexer::lex;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn generic_and_indexed() {
        let abstraction = Abstraction::new(&lex(r"x + \alpha y - x"));
        assert_eq!(abstraction.generic, vec!["VAR", "+", r"\alpha", "VAR", "-", "VAR"]);
        assert_eq!(abstraction.indexed, vec!["VAR1", "+", r"\alpha", "VAR2", "-", "VAR1"]);
        assert_eq!(abstraction.variables.get("y").map(String::as_str), Some("VAR2"));
    }

    #[test]
    fn numbering_is_per_formula() {
        let a = Abstraction::new(&lex("p + q"));
        let b = Abstraction::new(&lex("q + p"));
        assert_eq!(a.indexed, b.indexed);
    }
}
