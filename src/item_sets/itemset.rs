//! Itemsets and the frequent-itemset collection produced by a miner

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of distinct item names.
///
/// Miners only ever produce non-empty itemsets; an empty one can still be
/// built as a lookup key and simply matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itemset(BTreeSet<String>);

impl Itemset {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    /// Items in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn is_subset(&self, other: &Itemset) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Items of `self` that are not in `other`
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset(self.0.difference(&other.0).cloned().collect())
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset(self.0.union(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Itemset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Itemset(iter.into_iter().map(Into::into).collect())
    }
}

/// Renders as `item` for a singleton and `a, b, c` otherwise
impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item)?;
        }
        Ok(())
    }
}

/// An itemset together with how often it occurs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    /// Number of transactions containing every item
    pub count: usize,
    /// `count` divided by the number of transactions
    pub support: f64,
}

/// All frequent itemsets found by one mining run.
///
/// Downward closed: every non-empty subset of a member is also a member,
/// which is what lets rule generation look up antecedent and consequent
/// supports.
#[derive(Clone, Debug, Default)]
pub struct FrequentItemsets {
    entries: Vec<FrequentItemset>,
    lookup: HashMap<Itemset, usize>,
    n_transactions: usize,
}

impl FrequentItemsets {
    pub(crate) fn new(entries: Vec<FrequentItemset>, n_transactions: usize) -> Self {
        let lookup = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.itemset.clone(), i))
            .collect();
        Self {
            entries,
            lookup,
            n_transactions,
        }
    }

    pub(crate) fn empty(n_transactions: usize) -> Self {
        Self {
            n_transactions,
            ..Self::default()
        }
    }

    /// Itemsets ordered by size, then by discovery order within a size
    pub fn iter(&self) -> std::slice::Iter<'_, FrequentItemset> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, itemset: &Itemset) -> Option<&FrequentItemset> {
        self.lookup.get(itemset).map(|&i| &self.entries[i])
    }

    /// Support of a frequent itemset, `None` when it is not frequent
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.get(itemset).map(|entry| entry.support)
    }

    /// Frequent itemsets with exactly `len` items
    pub fn of_len(&self, len: usize) -> impl Iterator<Item = &FrequentItemset> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.itemset.len() == len)
    }

    /// Size of the largest frequent itemset, 0 when there are none
    pub fn max_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.itemset.len())
            .max()
            .unwrap_or(0)
    }

    /// Number of transactions the supports were computed over
    pub fn n_transactions(&self) -> usize {
        self.n_transactions
    }

    pub fn into_vec(self) -> Vec<FrequentItemset> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = &'a FrequentItemset;
    type IntoIter = std::slice::Iter<'a, FrequentItemset>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
