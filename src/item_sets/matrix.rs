//! Boolean transaction x item incidence matrix
//!
//! Each item owns a column bitmap with one bit per transaction. Support of an
//! itemset is the popcount of the AND of its columns.

use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;

pub(crate) type Bitmap = BitVec<usize, Lsb0>;

/// Which items appear in which transactions.
///
/// Row and column order follow first appearance in the input and carry no
/// meaning. The matrix is immutable once built.
#[derive(Clone, Debug)]
pub struct IncidenceMatrix<T> {
    transactions: Vec<T>,
    rows: HashMap<T, usize>,
    items: Vec<String>,
    columns: HashMap<String, usize>,
    bitmaps: Vec<Bitmap>,
}

impl<T> IncidenceMatrix<T> {
    pub(crate) fn from_parts(
        transactions: Vec<T>,
        rows: HashMap<T, usize>,
        items: Vec<String>,
        columns: HashMap<String, usize>,
        bitmaps: Vec<Bitmap>,
    ) -> Self {
        debug_assert_eq!(items.len(), bitmaps.len());
        debug_assert!(bitmaps.iter().all(|b| b.len() == transactions.len()));
        Self {
            transactions,
            rows,
            items,
            columns,
            bitmaps,
        }
    }

    /// Number of distinct transactions (rows)
    pub fn n_transactions(&self) -> usize {
        self.transactions.len()
    }

    /// Number of distinct items (columns)
    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// True when the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// `Some(self)` when there is at least one transaction.
    ///
    /// Lets callers branch on "no matching transactions" without inspecting
    /// dimensions themselves.
    pub fn non_empty(&self) -> Option<&Self> {
        (!self.is_empty()).then_some(self)
    }

    /// Transaction ids in row order
    pub fn transactions(&self) -> &[T] {
        &self.transactions
    }

    /// Item names in column order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Column index of an item
    pub fn item_index(&self, item: &str) -> Option<usize> {
        self.columns.get(item).copied()
    }

    /// Items present in the transaction at `row`.
    ///
    /// Yields nothing when `row` is out of range.
    pub fn transaction_items(&self, row: usize) -> impl Iterator<Item = &str> + '_ {
        self.items
            .iter()
            .zip(&self.bitmaps)
            .filter(move |(_, bitmap)| bitmap.get(row).map_or(false, |bit| *bit))
            .map(|(item, _)| item.as_str())
    }

    /// Number of transactions containing the item at `column`
    pub fn item_count(&self, column: usize) -> usize {
        self.bitmaps.get(column).map_or(0, |bitmap| bitmap.count_ones())
    }

    /// Number of transactions containing every item in `columns`.
    ///
    /// An empty column list matches every transaction; an out-of-range
    /// column matches none.
    pub fn support_count(&self, columns: &[usize]) -> usize {
        let Some((&first, rest)) = columns.split_first() else {
            return self.n_transactions();
        };
        let Some(mut acc) = self.bitmaps.get(first).cloned() else {
            return 0;
        };
        for &column in rest {
            match self.bitmaps.get(column) {
                Some(bitmap) => intersect_in_place(&mut acc, bitmap),
                None => return 0,
            }
        }
        acc.count_ones()
    }

    pub(crate) fn column(&self, column: usize) -> &Bitmap {
        &self.bitmaps[column]
    }
}

impl<T: Eq + Hash> IncidenceMatrix<T> {
    /// Row index of a transaction
    pub fn transaction_index(&self, transaction: &T) -> Option<usize> {
        self.rows.get(transaction).copied()
    }

    /// Whether `item` occurs in `transaction`; unknown ids and items are absent
    pub fn contains(&self, transaction: &T, item: &str) -> bool {
        match (self.transaction_index(transaction), self.item_index(item)) {
            (Some(row), Some(column)) => self.bitmaps[column][row],
            _ => false,
        }
    }
}

/// AND `other` into `acc` word by word.
///
/// Both bitmaps have the same length and zeroed tail bits, so the raw words
/// can be combined directly.
pub(crate) fn intersect_in_place(acc: &mut Bitmap, other: &Bitmap) {
    debug_assert_eq!(acc.len(), other.len());
    for (a, b) in acc.as_raw_mut_slice().iter_mut().zip(other.as_raw_slice()) {
        *a &= *b;
    }
}
