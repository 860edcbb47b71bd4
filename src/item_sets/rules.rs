//! Association rules derived from frequent itemsets
//!
//! For a frequent itemset S and antecedent A (a non-empty proper subset),
//! the rule A -> S\A has
//! - support = support(S)
//! - confidence = support(S) / support(A)
//! - lift = confidence / support(S\A)
//! - leverage = support(S) - support(A) * support(S\A)
//! - conviction = (1 - support(S\A)) / (1 - confidence)

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::itemset::{FrequentItemsets, Itemset};
use crate::error::MiningError;

/// Metric a rule threshold applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMetric {
    Support,
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl RuleMetric {
    /// Reject thresholds the metric can never meaningfully be compared to.
    ///
    /// NaN is always invalid. Support and confidence live in [0, 1]; lift and
    /// conviction are non-negative; leverage may be negative.
    pub fn validate_threshold(self, value: f64) -> Result<(), MiningError> {
        let valid = match self {
            RuleMetric::Support | RuleMetric::Confidence => (0.0..=1.0).contains(&value),
            RuleMetric::Lift | RuleMetric::Conviction => value >= 0.0,
            RuleMetric::Leverage => !value.is_nan(),
        };
        if valid {
            Ok(())
        } else {
            Err(MiningError::InvalidThreshold {
                metric: self,
                value,
            })
        }
    }

    pub fn value(self, rule: &AssociationRule) -> f64 {
        match self {
            RuleMetric::Support => rule.support,
            RuleMetric::Confidence => rule.confidence,
            RuleMetric::Lift => rule.lift,
            RuleMetric::Leverage => rule.leverage,
            RuleMetric::Conviction => rule.conviction,
        }
    }
}

impl fmt::Display for RuleMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleMetric::Support => "support",
            RuleMetric::Confidence => "confidence",
            RuleMetric::Lift => "lift",
            RuleMetric::Leverage => "leverage",
            RuleMetric::Conviction => "conviction",
        })
    }
}

/// `antecedent -> consequent` with its interest measures
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    /// Infinite when confidence is 1
    pub conviction: f64,
}

impl AssociationRule {
    /// Measures from raw transaction counts; all counts must be non-zero
    fn from_counts(
        antecedent: Itemset,
        consequent: Itemset,
        joint: usize,
        antecedent_count: usize,
        consequent_count: usize,
        n_transactions: usize,
    ) -> Self {
        let n = n_transactions as f64;
        let support = joint as f64 / n;
        let antecedent_support = antecedent_count as f64 / n;
        let consequent_support = consequent_count as f64 / n;
        let confidence = joint as f64 / antecedent_count as f64;
        let conviction = if joint == antecedent_count {
            f64::INFINITY
        } else {
            (1.0 - consequent_support) / (1.0 - confidence)
        };

        Self {
            antecedent,
            consequent,
            antecedent_support,
            consequent_support,
            support,
            confidence,
            lift: confidence / consequent_support,
            leverage: support - antecedent_support * consequent_support,
            conviction,
        }
    }

    pub fn metric(&self, metric: RuleMetric) -> f64 {
        metric.value(self)
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} -> {{{}}}", self.antecedent, self.consequent)
    }
}

/// Every rule from `itemsets` whose `metric` reaches `min_threshold`.
///
/// Each frequent itemset of two or more items is split into every
/// antecedent/consequent pair. Output order follows the itemset collection
/// and is not meaningful; sort explicitly if it matters.
pub fn association_rules(
    itemsets: &FrequentItemsets,
    metric: RuleMetric,
    min_threshold: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    metric.validate_threshold(min_threshold)?;

    let n = itemsets.n_transactions();
    let mut rules = Vec::new();
    let mut considered = 0usize;

    for frequent in itemsets.iter().filter(|f| f.itemset.len() >= 2) {
        let items: Vec<&str> = frequent.itemset.iter().collect();

        for size in 1..items.len() {
            for chosen in items.iter().copied().combinations(size) {
                let antecedent: Itemset = chosen.into_iter().collect();
                let consequent = frequent.itemset.difference(&antecedent);

                // Present by downward closure
                let (Some(a), Some(c)) = (itemsets.get(&antecedent), itemsets.get(&consequent))
                else {
                    continue;
                };

                considered += 1;
                let rule = AssociationRule::from_counts(
                    antecedent,
                    consequent,
                    frequent.count,
                    a.count,
                    c.count,
                    n,
                );
                if rule.metric(metric) >= min_threshold {
                    trace!(rule = %rule, lift = rule.lift, confidence = rule.confidence, "Rule kept");
                    rules.push(rule);
                }
            }
        }
    }

    debug!(
        %metric,
        min_threshold,
        considered,
        kept = rules.len(),
        "Association rules generated"
    );

    Ok(rules)
}
