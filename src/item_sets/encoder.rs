//! One-hot encoding of a transaction log

use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matrix::{Bitmap, IncidenceMatrix};

/// One line of a transaction log: an item seen in a transaction
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionRecord<T> {
    pub transaction_id: T,
    pub item: String,
}

impl<T> TransactionRecord<T> {
    pub fn new(transaction_id: T, item: impl Into<String>) -> Self {
        Self {
            transaction_id,
            item: item.into(),
        }
    }
}

impl<T, S: Into<String>> From<(T, S)> for TransactionRecord<T> {
    fn from((transaction_id, item): (T, S)) -> Self {
        Self::new(transaction_id, item)
    }
}

/// Build the incidence matrix for a transaction log.
///
/// Records are grouped by transaction id and repeated items collapse to a
/// single presence bit. An empty log yields a matrix with no rows and no
/// columns.
pub fn encode<T, R, I>(records: I) -> IncidenceMatrix<T>
where
    T: Eq + Hash + Clone,
    R: Into<TransactionRecord<T>>,
    I: IntoIterator<Item = R>,
{
    let mut transactions = Vec::new();
    let mut rows: HashMap<T, usize> = HashMap::new();
    let mut items = Vec::new();
    let mut columns: HashMap<String, usize> = HashMap::new();
    let mut cells = Vec::new();

    for record in records {
        let TransactionRecord {
            transaction_id,
            item,
        } = record.into();

        let row = *rows.entry(transaction_id).or_insert_with_key(|id| {
            transactions.push(id.clone());
            transactions.len() - 1
        });

        let column = match columns.get(&item) {
            Some(&column) => column,
            None => {
                let column = items.len();
                columns.insert(item.clone(), column);
                items.push(item);
                column
            }
        };

        cells.push((row, column));
    }

    let mut bitmaps: Vec<Bitmap> = vec![bitvec![usize, Lsb0; 0; transactions.len()]; items.len()];
    for &(row, column) in &cells {
        bitmaps[column].set(row, true);
    }

    debug!(
        records = cells.len(),
        transactions = transactions.len(),
        items = items.len(),
        "Encoded transaction log"
    );

    IncidenceMatrix::from_parts(transactions, rows, items, columns, bitmaps)
}
