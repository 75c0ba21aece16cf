/// Options controlling how two formulas are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// The minimum number of tokens a shared block must span to be reported by
    /// [`find_common_spans_with`](crate::find_common_spans_with).
    ///
    /// The default is 3, which is enough to rule out a lone operator between two variables
    /// matching everywhere.
    pub min_block_len: usize,

    /// The maximum length of either formula, in characters. If [`None`], inputs of any length are
    /// accepted.
    ///
    /// Locating shared spans costs time and memory quadratic in the number of tokens, so callers
    /// handling untrusted input should set this.
    pub max_input_len: Option<usize>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_block_len: 3,
            max_input_len: None,
        }
    }
}

impl MatchOptions {
    /// Wraps the given [`MatchOptions`] into a builder for further customization.
    pub fn into_builder(self) -> MatchOptionsBuilder {
        MatchOptionsBuilder(self)
    }

    /// Returns true if the input is longer than [`MatchOptions::max_input_len`] allows.
    pub fn exceeds_limit(&self, input: &str) -> bool {
        self.max_input_len.is_some_and(|max| input.chars().count() > max)
    }
}

/// Helper struct to build a [`MatchOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptionsBuilder(MatchOptions);

impl MatchOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum block length. See [`MatchOptions::min_block_len`] for more information.
    pub fn min_block_len(mut self, min_block_len: usize) -> Self {
        self.0.min_block_len = min_block_len;
        self
    }

    /// Sets the maximum input length. See [`MatchOptions::max_input_len`] for more information.
    pub fn max_input_len(mut self, max_input_len: Option<usize>) -> Self {
        self.0.max_input_len = max_input_len;
        self
    }

    /// Builds the [`MatchOptions`] struct.
    pub fn build(self) -> MatchOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn defaults() {
        let opts = MatchOptionsBuilder::new().build();
        assert_eq!(opts, MatchOptions { min_block_len: 3, max_input_len: None });
    }

    #[test]
    fn builder() {
        let opts = MatchOptionsBuilder::new()
            .min_block_len(5)
            .max_input_len(Some(4))
            .build();
        assert_eq!(opts.min_block_len, 5);
        assert!(opts.exceeds_limit("a+b+c"));
        assert!(!opts.exceeds_limit("αβγδ"));
        assert_eq!(opts.into_builder().max_input_len(None).build().max_input_len, None);
    }
}
