//! # basket-miner
//!
//! Market basket analysis over retail transaction logs: one-hot encoding of
//! transactions, Apriori frequent itemset search and association rules.
//!
//! ## Pipeline
//!
//! - [`encode`]: `(transaction_id, item)` records to an [`IncidenceMatrix`]
//! - [`Apriori`] (an [`ItemSetMiner`]): frequent itemsets under a minimum support
//! - [`association_rules`]: rules filtered on any [`RuleMetric`]
//! - [`mine`] / [`RuleMiner`]: both phases with a lift threshold
//! - [`ranking`]: explicit sorting, top-N and single-item recommendations
//!
//! Loading the log, labelling dates and rendering results belong to the
//! caller.
//!
//! ## Invariants
//!
//! - Downward closure: every non-empty subset of a frequent itemset is frequent
//! - Every returned rule has `lift >= min_lift` and `0 <= confidence <= 1`
//! - Thresholds are validated before any counting; there are no partial results
//!
//! ## Usage Example
//!
//! ```
//! use basket_miner::{encode, mine, ranking::{top_rules, RuleOrder}};
//!
//! let matrix = encode(vec![
//!     (1, "bread"), (1, "butter"),
//!     (2, "bread"), (2, "butter"),
//!     (3, "jam"),
//! ]);
//!
//! let rules = mine(&matrix, 0.2, 1.0)?;
//! let top = top_rules(rules, RuleOrder::Support, 10);
//! assert_eq!(top[0].to_string(), "{bread} -> {butter}");
//! # Ok::<(), basket_miner::MiningError>(())
//! ```

pub mod config;
pub mod error;
pub mod item_sets;
pub mod miner;
pub mod ranking;

// Re-exports for convenience
pub use config::{MiningConfig, MiningConfigBuilder, DEFAULT_MIN_LIFT, DEFAULT_MIN_SUPPORT};
pub use error::MiningError;
pub use item_sets::{
    association_rules, encode, Apriori, AssociationRule, FrequentItemset, FrequentItemsets,
    IncidenceMatrix, ItemSetMiner, Itemset, RuleMetric, TransactionRecord,
};
pub use miner::{mine, RuleMiner};
pub use ranking::{recommend, sort_rules, top_rules, RuleOrder};
