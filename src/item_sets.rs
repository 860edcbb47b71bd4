//! Frequent itemsets and association rules over transaction data
//!
//! Data flows one way: [`encode`] turns a transaction log into an
//! [`IncidenceMatrix`], an [`ItemSetMiner`] such as [`Apriori`] finds the
//! [`FrequentItemsets`], and [`association_rules`] derives rules from them.

mod apriori;
mod encoder;
mod itemset;
mod matrix;
mod rules;

pub use apriori::Apriori;
pub use encoder::{encode, TransactionRecord};
pub use itemset::{FrequentItemset, FrequentItemsets, Itemset};
pub use matrix::IncidenceMatrix;
pub use rules::{association_rules, AssociationRule, RuleMetric};

use crate::error::MiningError;

/// Finds every itemset whose support reaches `min_support`.
///
/// Implementations must reject `min_support` outside (0, 1] before reading
/// the matrix, and must treat a matrix without transactions as having no
/// frequent itemsets.
pub trait ItemSetMiner {
    fn mine<T>(
        &self,
        matrix: &IncidenceMatrix<T>,
        min_support: f64,
    ) -> Result<FrequentItemsets, MiningError>;
}
