use serde::{Deserialize, Serialize};

/// An itemset: a set of items, represented at the API boundary as a
/// sorted, de-duplicated vector of item strings.
pub type ItemSet = Vec<String>;

/// Sentinel conviction value reported when confidence is exactly 1.0,
/// standing in for "infinite conviction" while staying finite and
/// serializable. Matches the original reference program's convention.
pub const INFINITE_CONVICTION: f64 = 100.0;

/// A frequent itemset discovered by the Apriori level-wise search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    pub items: ItemSet,
    pub count: usize,
    pub support: f64,
}

impl FrequentItemset {
    /// The level (itemset size) this frequent itemset was emitted at.
    pub fn level(&self) -> usize {
        self.items.len()
    }
}

/// The five interestingness measures computed for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleStats {
    /// P(consequent | antecedent) = support(A∪B) / support(A).
    pub confidence: f64,
    /// confidence / support(consequent).
    pub lift: f64,
    /// support(A∪B) − support(A)·support(B).
    pub leverage: f64,
    /// (1 − support(B)) / (1 − confidence), or `INFINITE_CONVICTION` at confidence == 1.
    pub conviction: f64,
}

/// An association rule A ⇒ B derived from a frequent itemset, carrying
/// both sides of the partition, their counts/supports, and the rule's
/// own count, support and interestingness statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,

    pub lhs_count: usize,
    pub lhs_support: f64,
    pub rhs_count: usize,
    pub rhs_support: f64,

    /// Count/support of the full itemset antecedent ∪ consequent.
    pub rule_count: usize,
    pub rule_support: f64,

    pub stats: RuleStats,
}

impl AssociationRule {
    pub fn confidence(&self) -> f64 {
        self.stats.confidence
    }

    pub fn lift(&self) -> f64 {
        self.stats.lift
    }

    pub fn leverage(&self) -> f64 {
        self.stats.leverage
    }

    pub fn conviction(&self) -> f64 {
        self.stats.conviction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> AssociationRule {
        AssociationRule {
            antecedent: vec!["A".to_string()],
            consequent: vec!["B".to_string()],
            lhs_count: 4,
            lhs_support: 0.8,
            rhs_count: 3,
            rhs_support: 0.6,
            rule_count: 3,
            rule_support: 0.6,
            stats: RuleStats {
                confidence: 0.8,
                lift: 1.5,
                leverage: 0.12,
                conviction: 2.0,
            },
        }
    }

    #[test]
    fn accessors_read_through_to_stats() {
        let rule = sample_rule();
        assert_eq!(rule.confidence(), 0.8);
        assert_eq!(rule.lift(), 1.5);
        assert_eq!(rule.leverage(), 0.12);
        assert_eq!(rule.conviction(), 2.0);
    }

    #[test]
    fn level_matches_itemset_size() {
        let itemset = FrequentItemset {
            items: vec!["A".to_string(), "B".to_string()],
            count: 2,
            support: 0.5,
        };
        assert_eq!(itemset.level(), 2);
    }
}
