//! Renaming variables into a canonical, name-independent form.

use std::collections::HashMap;
use super::flatten::FlatToken;

/// Numbering state for one token array.
///
/// Every distinct variable is named `x0`, `x1`, ... in the order it first appears. Numbering
/// carries over between calls to [`SymbolContext::canonicalize`] on the same context; each token
/// array starts from a fresh one.
#[derive(Debug, Default, Clone)]
pub struct SymbolContext {
    names: HashMap<String, String>,
}

impl SymbolContext {
    /// Creates a new, empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical name of the given variable, assigning the next one on first sight.
    fn rename(&mut self, symbol: String) -> String {
        // a symbol made only of digits is a number in disguise and keeps its text
        if !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit()) {
            return symbol;
        }

        let next = self.names.len();
        self.names.entry(symbol)
            .or_insert_with(|| format!("x{}", next))
            .clone()
    }

    /// Renames every variable in the array and converts every element to a string.
    pub fn canonicalize(&mut self, tokens: Vec<FlatToken>) -> Vec<String> {
        tokens.into_iter()
            .map(|token| match token {
                FlatToken::Symbol(symbol) => self.rename(symbol),
                token => token.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> FlatToken {
        FlatToken::Symbol(String::from(name))
    }

    fn op(name: &str) -> FlatToken {
        FlatToken::Operator(String::from(name))
    }

    #[test]
    fn first_occurrence_order() {
        let tokens = vec![sym("y"), op("Add"), sym("x"), op("Mul"), sym("y")];
        assert_eq!(
            SymbolContext::new().canonicalize(tokens),
            vec!["x0", "Add", "x1", "Mul", "x0"],
        );
    }

    #[test]
    fn constants_and_numbers_keep_names() {
        let tokens = vec![
            FlatToken::Constant(String::from("pi")),
            op("Mul"),
            FlatToken::Integer(2.into()),
            op("Mul"),
            sym("r"),
        ];
        assert_eq!(
            SymbolContext::new().canonicalize(tokens),
            vec!["pi", "Mul", "2", "Mul", "x0"],
        );
    }

    #[test]
    fn numbering_carries_over() {
        let mut context = SymbolContext::new();
        assert_eq!(context.canonicalize(vec![sym("b")]), vec!["x0"]);
        assert_eq!(context.canonicalize(vec![sym("a"), op("Add"), sym("b")]), vec!["x1", "Add", "x0"]);
    }

    #[test]
    fn fresh_context_per_array() {
        let a = SymbolContext::new().canonicalize(vec![sym("a")]);
        let b = SymbolContext::new().canonicalize(vec![sym("b")]);
        assert_eq!(a, b);
    }
}
