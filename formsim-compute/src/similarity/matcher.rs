//! Ratcliff/Obershelp sequence matching.

use std::{collections::HashMap, hash::Hash};

/// A run of equal elements shared by two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Offset of the run in the first sequence.
    pub a: usize,

    /// Offset of the run in the second sequence.
    pub b: usize,

    /// Length of the run.
    pub size: usize,
}

/// Finds the matching blocks of two sequences.
///
/// The longest common contiguous run is found first (the earliest in `a` among the longest, then
/// the earliest in `b`), and the same is repeated on the unmatched parts to its left and to its
/// right. No element is ever treated as junk.
#[derive(Debug)]
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],

    /// Positions of every element of `b`, in increasing order.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Creates a matcher for the two sequences.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Finds the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`. The returned block has
    /// a size of zero if there is none.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let mut best = Block { a: alo, b: blo, size: 0 };

        // j2len[j] is the length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len = HashMap::new();
            for &j in self.b2j.get(&self.a[i]).into_iter().flatten() {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let k = j.checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0) + 1;
                new_j2len.insert(j, k);
                if k > best.size {
                    best = Block { a: i + 1 - k, b: j + 1 - k, size: k };
                }
            }
            j2len = new_j2len;
        }

        best
    }

    /// Returns the matching blocks, ordered by their position in `a`, with adjacent blocks merged.
    /// Unlike some implementations, no zero-sized sentinel block is appended.
    pub fn matching_blocks(&self) -> Vec<Block> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }

            blocks.push(block);
            if alo < block.a && blo < block.b {
                queue.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                queue.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
        }
        blocks.sort_by_key(|block| (block.a, block.b));

        let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                },
                _ => merged.push(block),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longest_match_prefers_earliest() {
        let (a, b) = (chars("abxab"), chars("ab"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.find_longest_match(0, 5, 0, 2), Block { a: 0, b: 0, size: 2 });
    }

    #[test]
    fn blocks_on_both_sides() {
        let (a, b) = (chars("qabxcd"), chars("abycdf"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.matching_blocks(), vec![
            Block { a: 1, b: 0, size: 2 },
            Block { a: 4, b: 3, size: 2 },
        ]);
    }

    #[test]
    fn no_common_elements() {
        let (a, b) = (chars("abc"), chars("xyz"));
        assert!(SequenceMatcher::new(&a, &b).matching_blocks().is_empty());
    }

    #[test]
    fn empty_sequences() {
        let empty: Vec<char> = Vec::new();
        let a = chars("abc");
        assert!(SequenceMatcher::new(&empty, &empty).matching_blocks().is_empty());
        assert!(SequenceMatcher::new(&a, &empty).matching_blocks().is_empty());
    }
}
