//! Configured entry point tying the itemset search to rule generation

use tracing::debug;

use crate::config::MiningConfig;
use crate::error::MiningError;
use crate::item_sets::{
    association_rules, Apriori, AssociationRule, FrequentItemsets, IncidenceMatrix, ItemSetMiner,
    RuleMetric,
};

/// Mines lift-filtered association rules with a validated configuration.
///
/// Holds no state besides its thresholds, so one miner can serve any number
/// of matrices.
#[derive(Clone, Debug, Default)]
pub struct RuleMiner {
    config: MiningConfig,
}

impl RuleMiner {
    /// Validates `config` up front; mining never sees bad thresholds
    pub fn new(config: MiningConfig) -> Result<Self, MiningError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Phase one only: the frequent itemsets of `matrix`
    pub fn frequent_itemsets<T>(
        &self,
        matrix: &IncidenceMatrix<T>,
    ) -> Result<FrequentItemsets, MiningError> {
        Apriori::new()
            .with_optional_max_len(self.config.max_len)
            .mine(matrix, self.config.min_support)
    }

    /// Every rule meeting both the support and the lift threshold, unordered
    pub fn mine<T>(&self, matrix: &IncidenceMatrix<T>) -> Result<Vec<AssociationRule>, MiningError> {
        let itemsets = self.frequent_itemsets(matrix)?;
        let rules = association_rules(&itemsets, RuleMetric::Lift, self.config.min_lift)?;

        debug!(
            min_support = self.config.min_support,
            min_lift = self.config.min_lift,
            itemsets = itemsets.len(),
            rules = rules.len(),
            "Mining finished"
        );

        Ok(rules)
    }
}

/// Mine `matrix` for rules with support >= `min_support` and lift >= `min_lift`.
///
/// Thresholds are checked before the matrix is read; an empty matrix or one
/// without co-occurring items gives an empty result rather than an error.
pub fn mine<T>(
    matrix: &IncidenceMatrix<T>,
    min_support: f64,
    min_lift: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    RuleMiner::new(MiningConfig {
        min_support,
        min_lift,
        max_len: None,
    })?
    .mine(matrix)
}
