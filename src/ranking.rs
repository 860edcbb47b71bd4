//! Ordering and lookup over mined rules
//!
//! Mining returns rules in no particular order. Anything that presents them
//! (top-N tables, recommendations) sorts explicitly with these helpers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::item_sets::{AssociationRule, RuleMetric};

/// Descending sort key for rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOrder {
    Support,
    Confidence,
    Lift,
}

impl From<RuleOrder> for RuleMetric {
    fn from(order: RuleOrder) -> Self {
        match order {
            RuleOrder::Support => RuleMetric::Support,
            RuleOrder::Confidence => RuleMetric::Confidence,
            RuleOrder::Lift => RuleMetric::Lift,
        }
    }
}

/// Sort by `order` descending; ties fall back to antecedent then consequent
/// ascending so the result does not depend on mining order.
pub fn sort_rules(rules: &mut [AssociationRule], order: RuleOrder) {
    let metric = RuleMetric::from(order);
    rules.sort_by(|a, b| compare(a, b, metric));
}

/// The `n` best rules by `order`
pub fn top_rules(
    rules: impl IntoIterator<Item = AssociationRule>,
    order: RuleOrder,
    n: usize,
) -> Vec<AssociationRule> {
    let mut rules: Vec<AssociationRule> = rules.into_iter().collect();
    sort_rules(&mut rules, order);
    rules.truncate(n);
    rules
}

/// First rule, in the given order, whose antecedent is exactly `item`.
///
/// `None` means no recommendation exists for the item, which is an ordinary
/// outcome.
pub fn recommend<'a>(rules: &'a [AssociationRule], item: &str) -> Option<&'a AssociationRule> {
    rules
        .iter()
        .find(|rule| rule.antecedent.len() == 1 && rule.antecedent.contains(item))
}

fn compare(a: &AssociationRule, b: &AssociationRule, metric: RuleMetric) -> Ordering {
    metric
        .value(b)
        .total_cmp(&metric.value(a))
        .then_with(|| a.antecedent.cmp(&b.antecedent))
        .then_with(|| a.consequent.cmp(&b.consequent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_sets::Itemset;

    fn rule(a: &[&str], c: &[&str], support: f64, confidence: f64, lift: f64) -> AssociationRule {
        AssociationRule {
            antecedent: a.iter().copied().collect(),
            consequent: c.iter().copied().collect(),
            antecedent_support: 0.0,
            consequent_support: 0.0,
            support,
            confidence,
            lift,
            leverage: 0.0,
            conviction: 0.0,
        }
    }

    fn names(rules: &[AssociationRule]) -> Vec<String> {
        rules.iter().map(ToString::to_string).collect()
    }

    fn sample() -> Vec<AssociationRule> {
        vec![
            rule(&["a"], &["b"], 0.2, 0.9, 1.1),
            rule(&["b"], &["c"], 0.5, 0.4, 1.5),
            rule(&["c"], &["a"], 0.3, 0.6, 2.0),
        ]
    }

    #[test]
    fn test_sort_by_support() {
        let mut rules = sample();
        sort_rules(&mut rules, RuleOrder::Support);
        assert_eq!(names(&rules), vec!["{b} -> {c}", "{c} -> {a}", "{a} -> {b}"]);
    }

    #[test]
    fn test_sort_by_confidence() {
        let mut rules = sample();
        sort_rules(&mut rules, RuleOrder::Confidence);
        assert_eq!(names(&rules), vec!["{a} -> {b}", "{c} -> {a}", "{b} -> {c}"]);
    }

    #[test]
    fn test_sort_by_lift() {
        let mut rules = sample();
        sort_rules(&mut rules, RuleOrder::Lift);
        assert_eq!(names(&rules), vec!["{c} -> {a}", "{b} -> {c}", "{a} -> {b}"]);
    }

    #[test]
    fn test_ties_break_on_itemsets() {
        let mut rules = vec![
            rule(&["z"], &["a"], 0.5, 0.5, 1.0),
            rule(&["a"], &["z"], 0.5, 0.5, 1.0),
            rule(&["a"], &["b"], 0.5, 0.5, 1.0),
        ];
        sort_rules(&mut rules, RuleOrder::Support);
        assert_eq!(names(&rules), vec!["{a} -> {b}", "{a} -> {z}", "{z} -> {a}"]);
    }

    #[test]
    fn test_top_rules_truncates() {
        let top = top_rules(sample(), RuleOrder::Support, 2);
        assert_eq!(names(&top), vec!["{b} -> {c}", "{c} -> {a}"]);
        assert_eq!(top_rules(sample(), RuleOrder::Lift, 10).len(), 3);
        assert!(top_rules(Vec::new(), RuleOrder::Lift, 10).is_empty());
    }

    #[test]
    fn test_recommend_uses_given_order() {
        let mut rules = vec![
            rule(&["milk"], &["eggs"], 0.1, 0.3, 1.2),
            rule(&["milk", "bread"], &["jam"], 0.1, 0.9, 3.0),
            rule(&["milk"], &["bread"], 0.2, 0.8, 1.4),
        ];
        assert_eq!(
            recommend(&rules, "milk").map(|r| &r.consequent),
            Some(&["eggs"].into_iter().collect::<Itemset>())
        );

        sort_rules(&mut rules, RuleOrder::Confidence);
        assert_eq!(
            recommend(&rules, "milk").map(|r| r.consequent.to_string()),
            Some("bread".to_string())
        );
    }

    #[test]
    fn test_recommend_without_match() {
        assert!(recommend(&sample(), "cheese").is_none());
        assert!(recommend(&[], "milk").is_none());
    }
}
