//! Ranking a library of known formulas against a query.

use crate::{canonical_array, check_len, find_common_spans_with, similarity, MatchOptions};
use formsim_error::Error;
use log::{debug, warn};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named formula, as stored in a formula library.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formula {
    /// The identifier of the formula in its store, if it has been stored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<i64>,

    /// A human-readable name, such as `Pythagorean theorem`.
    pub name: String,

    /// The LaTeX source of the formula.
    pub latex: String,

    /// A description of the formula and its variables.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,

    /// Where the formula was taken from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: String,
}

/// A formula of the library, scored against a query.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaMatch<'a> {
    /// The matched formula.
    pub formula: &'a Formula,

    /// The similarity of the query to the formula, from 0 to 100.
    pub score: f64,

    /// Character spans of the formula's LaTeX that it shares with the query.
    pub spans: Vec<Range<usize>>,
}

/// Scores every formula in the library against the query, and returns the matches from the most
/// to the least similar. Formulas with equal scores keep their library order.
///
/// Formulas that cannot be normalized, or that are longer than the options allow, are skipped.
/// Only a query that cannot be normalized is an error.
pub fn rank<'a>(
    query: &str,
    formulas: &'a [Formula],
    options: &MatchOptions,
) -> Result<Vec<FormulaMatch<'a>>, Error> {
    check_len(query, options)?;
    let query_array = canonical_array(query)?;

    let mut matches = formulas.iter()
        .filter_map(|formula| {
            let array = check_len(&formula.latex, options)
                .and_then(|_| canonical_array(&formula.latex));
            let array = match array {
                Ok(array) => array,
                Err(err) => {
                    warn!("skipping formula `{}`: {}", formula.name, err);
                    return None;
                },
            };

            let score = similarity::score(&query_array, &array);
            debug!("`{}` scored {:.2}", formula.name, score);
            Some(FormulaMatch {
                formula,
                score,
                spans: find_common_spans_with(&formula.latex, query, options),
            })
        })
        .collect::<Vec<_>>();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn formula(name: &str, latex: &str) -> Formula {
        Formula {
            id: None,
            name: name.to_owned(),
            latex: latex.to_owned(),
            description: String::new(),
            source: String::new(),
        }
    }

    fn library() -> Vec<Formula> {
        vec![
            formula("linear", "a + b"),
            formula("pythagorean", "a^2 + b^2 = c^2"),
            formula("broken", r"\frac{a}{"),
            formula("circle", "x^2 + y^2 = r^2"),
        ]
    }

    #[test]
    fn best_match_first() {
        let library = library();
        let matches = rank("u^2 + v^2 = w^2", &library, &MatchOptions::default()).unwrap();
        let names = matches.iter().map(|m| m.formula.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["pythagorean", "circle", "linear"]);
        assert_float_relative_eq!(matches[0].score, 100.0);
        assert!(!matches[0].spans.is_empty());
    }

    #[test]
    fn bad_query() {
        assert!(rank("x^", &library(), &MatchOptions::default()).is_err());
    }

    #[test]
    fn long_formulas_skipped() {
        let library = library();
        let options = MatchOptions::default().into_builder().max_input_len(Some(10)).build();
        let matches = rank("p + q", &library, &options).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].formula.name, "linear");
    }
}
