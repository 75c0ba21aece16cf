//! Finding runs of tokens two formulas share, with a consistent correspondence between their
//! variables.

use crate::similarity::Block;
use log::trace;
use std::collections::{HashMap, HashSet};
use super::abstraction::{Abstraction, VAR};

/// Finds every maximal run of equal tokens in the two generic arrays that is at least `min_len`
/// tokens long.
///
/// `dp[i][j]` holds the length of the common run ending just before `a[i]` and `b[j]`. The table
/// is walked from the bottom-right corner, so each run is met first at its last cell; the rest of
/// the run is then cleared, which keeps its shorter tails from being reported again.
pub fn structural_candidates(a: &[String], b: &[String], min_len: usize) -> Vec<Block> {
    let (n, m) = (a.len(), b.len());
    let width = m + 1;
    let mut dp = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            if a[i - 1] == b[j - 1] {
                dp[i * width + j] = dp[(i - 1) * width + j - 1] + 1;
            }
        }
    }

    let mut candidates = Vec::new();
    for i in (1..=n).rev() {
        for j in (1..=m).rev() {
            let size = dp[i * width + j];
            if size == 0 {
                continue;
            }

            for k in 0..size {
                dp[(i - k) * width + j - k] = 0;
            }
            if size >= min_len {
                candidates.push(Block { a: i - size, b: j - size, size });
            }
        }
    }
    candidates
}

/// Looks for the first position in the block where the variables of the two formulas stop
/// corresponding to each other.
///
/// Returns the offset of that position, and the offset to resume validation from: one past the
/// latest earlier position where either of the two clashing variables was seen.
fn first_divergence(block: Block, a: &Abstraction, b: &Abstraction) -> Option<(usize, usize)> {
    // placeholder -> local number, in order of first appearance within the block
    let mut local_a = HashMap::new();
    let mut local_b = HashMap::new();
    let mut last_a = HashMap::new();
    let mut last_b = HashMap::new();

    for k in 0..block.size {
        let (i, j) = (block.a + k, block.b + k);
        if a.generic[i] != VAR {
            continue;
        }

        let (var_a, var_b) = (a.indexed[i].as_str(), b.indexed[j].as_str());
        let next = local_a.len();
        let id_a = *local_a.entry(var_a).or_insert(next);
        let next = local_b.len();
        let id_b = *local_b.entry(var_b).or_insert(next);

        if id_a != id_b {
            let resume = last_a.get(var_a)
                .into_iter()
                .chain(last_b.get(var_b))
                .max()
                .map_or(k + 1, |seen| seen + 1);
            return Some((k, resume));
        }

        last_a.insert(var_a, k);
        last_b.insert(var_b, k);
    }

    None
}

/// Splits a structural candidate into the pieces whose variables correspond consistently.
/// Pieces shorter than `min_len` are dropped.
pub fn validate(candidate: Block, a: &Abstraction, b: &Abstraction, min_len: usize) -> Vec<Block> {
    let mut valid = Vec::new();
    let mut work = vec![candidate];
    while let Some(block) = work.pop() {
        let Some((split, resume)) = first_divergence(block, a, b) else {
            valid.push(block);
            continue;
        };
        trace!("block {:?} diverges at {}, resuming at {}", block, split, resume);

        if split >= min_len {
            valid.push(Block { size: split, ..block });
        }
        let rest = block.size - resume;
        if rest >= min_len {
            work.push(Block { a: block.a + resume, b: block.b + resume, size: rest });
        }
    }
    valid
}

/// Finds the consistent shared blocks of two formulas, without duplicates, ordered by
/// descending size (ties by position in `a`, then in `b`).
pub fn find_blocks(a: &Abstraction, b: &Abstraction, min_len: usize) -> Vec<Block> {
    let mut blocks = structural_candidates(&a.generic, &b.generic, min_len)
        .into_iter()
        .flat_map(|candidate| validate(candidate, a, b, min_len))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    blocks.sort_by(|x, y| y.size.cmp(&x.size).then(x.a.cmp(&y.a)).then(x.b.cmp(&y.b)));
    blocks
}

#[cfg(test)]
mod tests {
    use crate::spans::lexer::lex;
    use pretty_assertions::assert_eq;
    use super::*;

    fn abstraction(source: &str) -> Abstraction {
        Abstraction::new(&lex(source))
    }

    fn generic(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn each_run_reported_once() {
        // a single run of four tokens must not also be reported as its shorter tails
        let a = generic(&["VAR", "+", "VAR", "*"]);
        let candidates = structural_candidates(&a, &a, 1);
        assert_eq!(candidates.iter().filter(|block| block.size >= 3).count(), 1);
        assert!(candidates.contains(&Block { a: 0, b: 0, size: 4 }));
        assert!(!candidates.contains(&Block { a: 1, b: 1, size: 3 }));
    }

    #[test]
    fn off_diagonal_runs() {
        let (a, b) = (generic(&["(", "VAR", ")"]), generic(&["+", "(", "VAR", ")"]));
        assert_eq!(structural_candidates(&a, &b, 3), vec![Block { a: 0, b: 1, size: 3 }]);
    }

    #[test]
    fn inconsistent_variables_split() {
        let (a, b) = (abstraction("a+b"), abstraction("a+a"));
        let candidate = Block { a: 0, b: 0, size: 3 };
        assert_eq!(structural_candidates(&a.generic, &b.generic, 3), vec![candidate]);

        // with the size filter, neither piece survives
        assert!(validate(candidate, &a, &b, 3).is_empty());

        // without it, the prefix before the clash is kept, and matching resumes after `a`
        assert_eq!(validate(candidate, &a, &b, 1), vec![
            Block { a: 0, b: 0, size: 2 },
            Block { a: 1, b: 1, size: 2 },
        ]);
    }

    #[test]
    fn consistent_renaming_is_kept() {
        let (a, b) = (abstraction("x*y+x"), abstraction("p*q+p"));
        assert_eq!(find_blocks(&a, &b, 3)[0], Block { a: 0, b: 0, size: 5 });
    }

    #[test]
    fn resumes_after_clash() {
        // `x` in the first formula pairs with `a` and then with `b`
        let (a, b) = (abstraction("x+y*x+1"), abstraction("a+c*b+1"));
        let blocks = validate(Block { a: 0, b: 0, size: 7 }, &a, &b, 3);
        assert_eq!(blocks, vec![
            Block { a: 0, b: 0, size: 4 },
            Block { a: 1, b: 1, size: 6 },
        ]);
    }

    #[test]
    fn sorted_and_deduplicated() {
        let (a, b) = (abstraction("a+b+c"), abstraction("a+b+d"));
        assert_eq!(find_blocks(&a, &b, 3), vec![
            Block { a: 0, b: 0, size: 5 },
            Block { a: 0, b: 2, size: 3 },
            Block { a: 2, b: 0, size: 3 },
        ]);
    }
}
