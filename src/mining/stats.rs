use serde::{Deserialize, Serialize};

/// Mining run statistics, reported alongside the rule list.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MiningStats {
    pub transactions_processed: usize,
    pub vocabulary_size: usize,
    pub frequent_itemsets_count: usize,
    pub rules_generated: usize,
    /// Set when `max_rules` was hit before every frequent itemset had been
    /// evaluated for rules.
    pub rules_capped: bool,
    /// The `@NNNN` diagnostic marker, present iff `rules_capped`.
    pub cap_marker: Option<String>,
}

impl MiningStats {
    pub fn new() -> Self {
        Self::default()
    }
}
