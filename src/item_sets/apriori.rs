//! Level-wise frequent itemset search (Apriori)
//!
//! Level k+1 candidates are joined from level-k itemsets sharing a (k-1)-item
//! prefix. A candidate survives only if each of its k-subsets is frequent
//! (downward closure), and only survivors are counted against the matrix.

use std::collections::HashSet;

use tracing::debug;

use super::itemset::{FrequentItemset, FrequentItemsets, Itemset};
use super::matrix::{intersect_in_place, Bitmap, IncidenceMatrix};
use super::ItemSetMiner;
use crate::config::{validate_max_len, validate_min_support};
use crate::error::MiningError;

/// Apriori frequent itemset miner
#[derive(Clone, Debug, Default)]
pub struct Apriori {
    max_len: Option<usize>,
}

/// A frequent itemset during the search, keyed by sorted column indices
struct Level {
    columns: Vec<usize>,
    tids: Bitmap,
    count: usize,
}

impl Apriori {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search after itemsets of `max_len` items
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub(crate) fn with_optional_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

impl ItemSetMiner for Apriori {
    fn mine<T>(
        &self,
        matrix: &IncidenceMatrix<T>,
        min_support: f64,
    ) -> Result<FrequentItemsets, MiningError> {
        validate_min_support(min_support)?;
        validate_max_len(self.max_len)?;

        let n = matrix.n_transactions();
        let Some(matrix) = matrix.non_empty() else {
            debug!("No transactions, nothing is frequent");
            return Ok(FrequentItemsets::empty(0));
        };

        let is_frequent = |count: usize| count as f64 / n as f64 >= min_support;

        let mut level: Vec<Level> = (0..matrix.n_items())
            .filter_map(|column| {
                let tids = matrix.column(column).clone();
                let count = tids.count_ones();
                is_frequent(count).then(|| Level {
                    columns: vec![column],
                    tids,
                    count,
                })
            })
            .collect();

        debug!(
            level = 1,
            candidates = matrix.n_items(),
            frequent = level.len(),
            "Apriori level complete"
        );

        let mut found = Vec::new();
        let mut size = 1;

        while !level.is_empty() {
            found.extend(level.iter().map(|entry| FrequentItemset {
                itemset: itemset_of(matrix, &entry.columns),
                count: entry.count,
                support: entry.count as f64 / n as f64,
            }));

            if self.max_len.is_some_and(|max| size >= max) {
                debug!(max_len = size, "Itemset length cap reached");
                break;
            }

            level = next_level(&level, size, &is_frequent);
            size += 1;
        }

        debug!(
            transactions = n,
            items = matrix.n_items(),
            frequent = found.len(),
            min_support,
            "Frequent itemset search finished"
        );

        Ok(FrequentItemsets::new(found, n))
    }
}

/// Join, prune and count level `size + 1` from the frequent itemsets of
/// level `size`.
///
/// `level` is sorted lexicographically by columns, so every partner sharing
/// a prefix with entry `i` follows it contiguously; the output keeps that
/// ordering.
fn next_level(level: &[Level], size: usize, is_frequent: &impl Fn(usize) -> bool) -> Vec<Level> {
    let known: HashSet<&[usize]> = level.iter().map(|entry| entry.columns.as_slice()).collect();
    let prefix = size - 1;

    let mut next = Vec::new();
    let mut candidates = 0usize;
    let mut pruned = 0usize;

    for (i, left) in level.iter().enumerate() {
        for right in &level[i + 1..] {
            if left.columns[..prefix] != right.columns[..prefix] {
                break;
            }

            let mut columns = left.columns.clone();
            columns.push(right.columns[prefix]);
            candidates += 1;

            if !subsets_are_frequent(&columns, &known) {
                pruned += 1;
                continue;
            }

            let mut tids = left.tids.clone();
            intersect_in_place(&mut tids, &right.tids);
            let count = tids.count_ones();
            if is_frequent(count) {
                next.push(Level {
                    columns,
                    tids,
                    count,
                });
            }
        }
    }

    debug!(
        level = size + 1,
        candidates,
        pruned,
        frequent = next.len(),
        "Apriori level complete"
    );

    next
}

/// Whether every subset one item smaller than `columns` is known frequent.
///
/// Dropping either of the last two columns gives the two joined parents, so
/// only the remaining positions need checking.
fn subsets_are_frequent(columns: &[usize], known: &HashSet<&[usize]>) -> bool {
    let mut subset = Vec::with_capacity(columns.len() - 1);
    (0..columns.len().saturating_sub(2)).all(|skip| {
        subset.clear();
        subset.extend(
            columns
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &column)| column),
        );
        known.contains(subset.as_slice())
    })
}

fn itemset_of<T>(matrix: &IncidenceMatrix<T>, columns: &[usize]) -> Itemset {
    columns
        .iter()
        .map(|&column| matrix.items()[column].as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_sets::encode;

    fn set(items: &[&str]) -> Itemset {
        items.iter().copied().collect()
    }

    fn baskets(baskets: &[&[&'static str]]) -> IncidenceMatrix<usize> {
        encode(
            baskets
                .iter()
                .enumerate()
                .flat_map(|(t, items)| items.iter().map(move |&item| (t, item))),
        )
    }

    #[test]
    fn test_finds_frequent_singletons_and_pairs() {
        let matrix = baskets(&[
            &["milk", "bread"],
            &["milk", "bread"],
            &["milk"],
            &["bread", "eggs"],
        ]);
        let itemsets = Apriori::new().mine(&matrix, 0.4).unwrap();

        assert_eq!(itemsets.support(&set(&["milk"])), Some(0.75));
        assert_eq!(itemsets.support(&set(&["bread"])), Some(0.75));
        assert_eq!(itemsets.support(&set(&["milk", "bread"])), Some(0.5));
        assert_eq!(itemsets.support(&set(&["eggs"])), None);
        assert_eq!(itemsets.len(), 3);
    }

    #[test]
    fn test_support_threshold_is_inclusive() {
        let matrix = baskets(&[&["a", "b"], &["a"], &["b"], &["c"]]);
        let itemsets = Apriori::new().mine(&matrix, 0.25).unwrap();
        assert_eq!(itemsets.support(&set(&["a", "b"])), Some(0.25));
        assert_eq!(itemsets.support(&set(&["c"])), Some(0.25));
    }

    #[test]
    fn test_finds_triples() {
        let matrix = baskets(&[
            &["a", "b", "c"],
            &["a", "b", "c"],
            &["a", "b"],
            &["c", "d"],
        ]);
        let itemsets = Apriori::new().mine(&matrix, 0.5).unwrap();

        assert_eq!(itemsets.support(&set(&["a", "b", "c"])), Some(0.5));
        assert_eq!(itemsets.get(&set(&["a", "b", "c"])).map(|e| e.count), Some(2));
        assert_eq!(itemsets.max_len(), 3);
        assert_eq!(itemsets.support(&set(&["c", "d"])), None);
    }

    #[test]
    fn test_full_support_keeps_only_universal_items() {
        let matrix = baskets(&[&["a", "b"], &["a", "c"], &["a", "b"]]);
        let itemsets = Apriori::new().mine(&matrix, 1.0).unwrap();
        assert_eq!(itemsets.len(), 1);
        assert_eq!(itemsets.support(&set(&["a"])), Some(1.0));
    }

    #[test]
    fn test_max_len_stops_search() {
        let matrix = baskets(&[&["a", "b", "c"], &["a", "b", "c"]]);
        let itemsets = Apriori::new().with_max_len(2).mine(&matrix, 0.5).unwrap();
        assert_eq!(itemsets.max_len(), 2);
        assert_eq!(itemsets.of_len(2).count(), 3);
        assert_eq!(itemsets.support(&set(&["a", "b", "c"])), None);
    }

    #[test]
    fn test_empty_matrix_has_no_frequent_itemsets() {
        let matrix = baskets(&[]);
        let itemsets = Apriori::new().mine(&matrix, 0.1).unwrap();
        assert!(itemsets.is_empty());
        assert_eq!(itemsets.n_transactions(), 0);
    }

    #[test]
    fn test_rejects_out_of_range_support() {
        let matrix = baskets(&[&["a"]]);
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                Apriori::new().mine(&matrix, bad),
                Err(MiningError::InvalidSupport { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_zero_max_len() {
        let matrix = baskets(&[&["a"]]);
        assert_eq!(
            Apriori::new().with_max_len(0).mine(&matrix, 0.5).unwrap_err(),
            MiningError::InvalidMaxLen
        );
    }

    #[test]
    fn test_subset_pruning() {
        let known_sets: Vec<Vec<usize>> = vec![vec![0, 1], vec![0, 2], vec![1, 2], vec![0, 3]];
        let known: HashSet<&[usize]> = known_sets.iter().map(Vec::as_slice).collect();

        assert!(subsets_are_frequent(&[0, 1, 2], &known));
        // {1, 3} was never frequent
        assert!(!subsets_are_frequent(&[0, 1, 3], &known));
    }
}
