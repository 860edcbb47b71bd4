//! Error types for basket mining

use thiserror::Error;

use crate::item_sets::RuleMetric;

/// Errors that can occur while mining itemsets and rules
///
/// Empty inputs and empty results are never errors. Every variant here is a
/// configuration problem detected before any counting starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("Invalid minimum support: {value} (must be in (0, 1])")]
    InvalidSupport { value: f64 },

    #[error("Invalid {metric} threshold: {value}")]
    InvalidThreshold { metric: RuleMetric, value: f64 },

    #[error("Invalid maximum itemset length: must be at least 1")]
    InvalidMaxLen,
}
