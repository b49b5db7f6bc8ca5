//! Enumerates LHS/RHS partitions of frequent itemsets and computes their
//! interestingness statistics.

use crate::index::{ItemId, TransactionIndex};
use crate::types::{AssociationRule, FrequentItemset, RuleStats, INFINITE_CONVICTION};

/// For a frequent itemset `X` with `|X| >= 2`, enumerates every proper
/// non-empty subset LHS (RHS = X \ LHS), computes its stats, and keeps it
/// if confidence >= min_confidence and lift >= min_lift.
///
/// LHS sizes are iterated from 1 to `|X| - 1`; within each size,
/// combinations are iterated in lexicographic order of sorted item ids.
/// Both directions of a pair (A=>B and B=>A) are emitted independently
/// when both pass thresholds -- redundancy across directions is handled
/// by `crate::mining::redundancy`.
pub fn enumerate_rules(
    index: &TransactionIndex,
    itemset: &FrequentItemset,
    item_ids: &[ItemId],
    min_confidence: f64,
    min_lift: f64,
) -> Vec<AssociationRule> {
    let total = index.len();
    let mut rules = Vec::new();

    if item_ids.len() < 2 || total == 0 {
        return rules;
    }

    for lhs in proper_nonempty_subsets(item_ids) {
        let rhs: Vec<ItemId> = item_ids
            .iter()
            .copied()
            .filter(|id| !lhs.contains(id))
            .collect();
        if rhs.is_empty() {
            continue;
        }

        let lhs_count = index.count(&lhs);
        let rhs_count = index.count(&rhs);
        let lhs_support = lhs_count as f64 / total as f64;
        let rhs_support = rhs_count as f64 / total as f64;

        // Both are positive: lhs/rhs are subsets of a frequent itemset, so
        // they're at least as frequent as it, and the itemset is frequent.
        let confidence = itemset.support / lhs_support;
        let lift = confidence / rhs_support;
        let leverage = itemset.support - (lhs_support * rhs_support);
        let conviction = if confidence != 1.0 {
            (1.0 - rhs_support) / (1.0 - confidence)
        } else {
            INFINITE_CONVICTION
        };

        if confidence < min_confidence || lift < min_lift {
            continue;
        }

        rules.push(AssociationRule {
            antecedent: index.resolve(&lhs),
            consequent: index.resolve(&rhs),
            lhs_count,
            lhs_support,
            rhs_count,
            rhs_support,
            rule_count: itemset.count,
            rule_support: itemset.support,
            stats: RuleStats {
                confidence,
                lift,
                leverage,
                conviction,
            },
        });
    }

    rules
}

/// Every non-empty proper subset of `items` (items.len() - 1 sizes deep),
/// sizes ascending, each subset itself in ascending item-id order.
fn proper_nonempty_subsets(items: &[ItemId]) -> Vec<Vec<ItemId>> {
    let n = items.len();
    let mut subsets = Vec::with_capacity((1usize << n).saturating_sub(2));
    for size in 1..n {
        let mut combo = Vec::with_capacity(size);
        subsets_of_size(items, size, 0, &mut combo, &mut subsets);
    }
    subsets
}

fn subsets_of_size(
    items: &[ItemId],
    size: usize,
    start: usize,
    combo: &mut Vec<ItemId>,
    out: &mut Vec<Vec<ItemId>>,
) {
    if combo.len() == size {
        out.push(combo.clone());
        return;
    }
    if items.len() - start < size - combo.len() {
        return;
    }
    for i in start..items.len() {
        combo.push(items[i]);
        subsets_of_size(items, size, i + 1, combo, out);
        combo.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Transaction;
    use chrono::Utc;

    fn tx(items: &[&str]) -> Transaction {
        Transaction::new(
            "tx",
            items.iter().map(|s| s.to_string()).collect(),
            Utc::now(),
        )
    }

    fn ids(index: &TransactionIndex, items: &[&str]) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = items.iter().map(|s| index.item_id(s).unwrap()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn rule_count_for_pair_is_two_minus_two() {
        let transactions = vec![
            tx(&["A", "B", "C"]),
            tx(&["A", "B"]),
            tx(&["A", "C"]),
            tx(&["B", "C"]),
        ];
        let index = TransactionIndex::build(&transactions);
        let item_ids = ids(&index, &["A", "B"]);
        let itemset = FrequentItemset {
            items: index.resolve(&item_ids),
            count: index.count(&item_ids),
            support: index.count(&item_ids) as f64 / index.len() as f64,
        };
        let rules = enumerate_rules(&index, &itemset, &item_ids, 0.0, 0.0);
        // 2^2 - 2 = 2 rules: A=>B and B=>A.
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn confidence_one_reports_sentinel_conviction() {
        // Every transaction containing A also contains B => confidence(A=>B) == 1.
        let transactions = vec![tx(&["A", "B"]), tx(&["A", "B"]), tx(&["B", "C"])];
        let index = TransactionIndex::build(&transactions);
        let item_ids = ids(&index, &["A", "B"]);
        let itemset = FrequentItemset {
            items: index.resolve(&item_ids),
            count: index.count(&item_ids),
            support: index.count(&item_ids) as f64 / index.len() as f64,
        };
        let rules = enumerate_rules(&index, &itemset, &item_ids, 0.0, 0.0);
        let a_to_b = rules
            .iter()
            .find(|r| r.antecedent == vec!["A".to_string()])
            .unwrap();
        assert_eq!(a_to_b.stats.confidence, 1.0);
        assert_eq!(a_to_b.stats.conviction, INFINITE_CONVICTION);
    }

    #[test]
    fn thresholds_drop_low_confidence_and_low_lift_rules() {
        let transactions = vec![
            tx(&["A", "B", "C"]),
            tx(&["A", "B"]),
            tx(&["A", "C"]),
            tx(&["B", "C"]),
            tx(&["A"]),
        ];
        let index = TransactionIndex::build(&transactions);
        let item_ids = ids(&index, &["A", "B"]);
        let itemset = FrequentItemset {
            items: index.resolve(&item_ids),
            count: index.count(&item_ids),
            support: index.count(&item_ids) as f64 / index.len() as f64,
        };
        // A=>B has confidence 0.5 and lift < 1.0 in this corpus; require both high.
        let rules = enumerate_rules(&index, &itemset, &item_ids, 0.9, 0.0);
        assert!(rules.is_empty());
    }
}
