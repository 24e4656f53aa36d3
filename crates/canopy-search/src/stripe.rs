//! Stripe search.
//!
//! A query of `n` tokens is split into `groups` contiguous blocks for every
//! `groups` in `2..=n` and every choice of cut points. A path matches a partition
//! when some window of `groups` consecutive segments contains block `g` in segment
//! `g` for every block. The anchor is the path up to the end of the window.
//!
//! Partitions run from the coarsest (2 groups) to the finest (one token per
//! group). The single-group case is left to phrase search, and group counts
//! beyond the deepest indexed path are never tried.

use std::collections::HashSet;

use canopy_tree::PathIndex;

use crate::hit::{SearchHit, sort_hits};

/// Returns every way of cutting `n` items into `groups` non-empty contiguous
/// blocks, as block boundaries `[0, c1, .., n]`, in lexicographic order of cuts.
///
/// Boundaries are produced one at a time; nothing is materialized up front.
pub fn partitions(n: usize, groups: usize) -> Partitions {
    let valid = groups > 0 && groups <= n;
    Partitions {
        n,
        cuts: if valid { (1..groups).collect() } else { Vec::new() },
        done: !valid,
    }
}

/// Iterator over the block boundaries of one group count, see [`partitions`].
#[derive(Debug, Clone)]
pub struct Partitions {
    /// Number of items being cut.
    n: usize,
    /// Current cut points, strictly increasing within `1..n`.
    cuts: Vec<usize>,
    /// Set once the last combination has been yielded.
    done: bool,
}

impl Partitions {
    /// Moves `cuts` to the next combination in lexicographic order.
    fn advance(&mut self) {
        let k = self.cuts.len();
        // Cut `i` can go no further than `n - k + i` and still leave room for the rest.
        let movable = (0..k).rev().find(|&i| self.cuts[i] < self.n - k + i);
        match movable {
            Some(i) => {
                self.cuts[i] += 1;
                let base = self.cuts[i];
                for (offset, cut) in self.cuts[i + 1..].iter_mut().enumerate() {
                    *cut = base + offset + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl Iterator for Partitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut bounds = Vec::with_capacity(self.cuts.len() + 2);
        bounds.push(0);
        bounds.extend_from_slice(&self.cuts);
        bounds.push(self.n);
        self.advance();
        Some(bounds)
    }
}

/// Joins the tokens of each block with single spaces.
fn block_phrases(words: &[String], bounds: &[usize]) -> Vec<String> {
    bounds
        .windows(2)
        .map(|w| words[w[0]..w[1]].join(" "))
        .collect()
}

/// Returns the start of every window of `segments` whose segments contain the
/// phrases in order.
fn matching_windows<'a>(
    segments: &'a [String],
    phrases: &'a [String],
) -> impl Iterator<Item = usize> + 'a {
    let groups = phrases.len();
    let last_start = segments.len().checked_sub(groups).map_or(0, |l| l + 1);
    (0..last_start).filter(move |&i| {
        phrases
            .iter()
            .enumerate()
            .all(|(g, phrase)| segments[i + g].contains(phrase.as_str()))
    })
}

/// Runs stripe search for normalized query tokens against one path index.
///
/// Returns no hits for fewer than two tokens. Group counts above the deepest
/// path are skipped. Hits are deduplicated by anchor and sorted by
/// `(anchor length, path label)`.
pub fn stripe_matches(index: &PathIndex, words: &[String]) -> Vec<SearchHit> {
    let n = words.len();
    if n < 2 {
        return Vec::new();
    }

    // A window of `groups` segments cannot fit in a shorter path.
    let max_groups = index.npaths().iter().map(Vec::len).max().unwrap_or(0).min(n);

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut hits = Vec::new();

    for groups in 2..=max_groups {
        for bounds in partitions(n, groups) {
            let phrases = block_phrases(words, &bounds);
            for (parts, nparts) in index.iter() {
                for start in matching_windows(nparts, &phrases) {
                    let anchor = &parts[..start + groups];
                    if !seen.contains(anchor) {
                        seen.insert(anchor.to_vec());
                        hits.push(SearchHit::new(anchor.to_vec()));
                    }
                }
            }
        }
    }

    sort_hits(&mut hits);
    hits
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use canopy_tree::{TreeNode, to_words};
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.path_label.as_str()).collect()
    }

    fn all(n: usize, groups: usize) -> Vec<Vec<usize>> {
        partitions(n, groups).collect()
    }

    #[test]
    fn test_partitions() {
        assert_eq!(all(3, 2), vec![vec![0, 1, 3], vec![0, 2, 3]]);
        assert_eq!(all(3, 3), vec![vec![0, 1, 2, 3]]);
        assert_eq!(
            all(4, 3),
            vec![vec![0, 1, 2, 4], vec![0, 1, 3, 4], vec![0, 2, 3, 4]]
        );
        assert_eq!(all(2, 1), vec![vec![0, 2]]);
        assert!(all(2, 3).is_empty());
        assert!(all(2, 0).is_empty());
    }

    #[test]
    fn test_partition_count_is_binomial() {
        // C(9, 3) ways to place 3 cuts among 9 gaps.
        assert_eq!(partitions(10, 4).count(), 84);
        assert_eq!(partitions(30, 2).count(), 29);
    }

    fn brake_tree() -> PathIndex {
        let tree = TreeNode::structural("Root").with_child(
            TreeNode::structural("4 Brake")
                .with_child(TreeNode::structural("4.1 Light").with_child(
                    TreeNode::structural("4.1.1 Front lamp").with_child(TreeNode::value("LED")),
                ))
                .with_child(
                    TreeNode::structural("4.2 Brake light front").with_child(TreeNode::value("y")),
                ),
        );
        PathIndex::from_tree(&tree)
    }

    #[test]
    fn test_tokens_spread_over_adjacent_segments() {
        let index = brake_tree();
        let hits = stripe_matches(&index, &to_words("brake light front"));
        assert_eq!(
            labels(&hits),
            vec![
                // Two groups: "brake" | "light front".
                "Root > 4 Brake > 4.2 Brake light front",
                // Three groups: one token per level.
                "Root > 4 Brake > 4.1 Light > 4.1.1 Front lamp",
            ]
        );
    }

    #[test]
    fn test_window_anchor_at_window_end() {
        let index = brake_tree();
        let hits = stripe_matches(&index, &to_words("light front"));
        assert_eq!(labels(&hits), vec!["Root > 4 Brake > 4.1 Light > 4.1.1 Front lamp"]);
    }

    #[test]
    fn test_front_left_scenario() {
        let tree = TreeNode::structural("Root").with_child(
            TreeNode::structural("3 Lights").with_child(
                TreeNode::structural("3.3 Front").with_child(
                    TreeNode::structural("3.3.2 Left indicator").with_child(TreeNode::value("x")),
                ),
            ),
        );
        let index = PathIndex::from_tree(&tree);
        let hits = stripe_matches(&index, &to_words("front left"));
        // Only the window [3.3 Front, 3.3.2 Left indicator] matches; the value leaf
        // path hits the same window and is deduplicated.
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].anchor_parts,
            vec!["Root", "3 Lights", "3.3 Front", "3.3.2 Left indicator"]
        );
    }

    #[test]
    fn test_reversed_order_does_not_match() {
        let index = brake_tree();
        assert!(stripe_matches(&index, &to_words("front brake")).is_empty());
    }

    #[test]
    fn test_long_query_is_bounded_by_path_depth() {
        let tree = TreeNode::structural("Root").with_child(
            TreeNode::structural("1 Brake")
                .with_child(TreeNode::structural("1.1 Light").with_child(TreeNode::value("x"))),
        );
        let index = PathIndex::from_tree(&tree);
        let query: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();

        let started = Instant::now();
        assert!(stripe_matches(&index, &query).is_empty());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_more_tokens_than_levels_still_match() {
        let index = brake_tree();
        let hits = stripe_matches(&index, &to_words("4 brake 4.2 brake light front"));
        assert_eq!(labels(&hits), vec!["Root > 4 Brake > 4.2 Brake light front"]);
    }

    #[test]
    fn test_single_token_yields_nothing() {
        let index = brake_tree();
        assert!(stripe_matches(&index, &to_words("brake")).is_empty());
    }
}
