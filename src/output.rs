//! Presentation layer: sorting the final rule list, rendering it as plain
//! text or JSON, and formatting the max-rules diagnostic marker.

use crate::errors::Result;
use crate::mining::stats::MiningStats;
use crate::types::AssociationRule;
use serde::{Deserialize, Serialize};

/// One of the eight presentation sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Lhs,
    Rhs,
    Confidence,
    Lift,
    Conviction,
    LhsSupport,
    RhsSupport,
    RuleSupport,
}

impl SortKey {
    fn from_magnitude(value: i32) -> Option<Self> {
        match value.unsigned_abs() {
            0 => Some(SortKey::Lhs),
            1 => Some(SortKey::Rhs),
            2 => Some(SortKey::Confidence),
            3 => Some(SortKey::Lift),
            4 => Some(SortKey::Conviction),
            5 => Some(SortKey::LhsSupport),
            6 => Some(SortKey::RhsSupport),
            7 => Some(SortKey::RuleSupport),
            _ => None,
        }
    }
}

/// Decodes a signed sort index: magnitude selects the key (0..=7),
/// sign selects direction. Positive (including zero) sorts ascending,
/// negative sorts descending.
pub fn decode_sort_index(index: i32) -> Option<(SortKey, bool)> {
    SortKey::from_magnitude(index).map(|key| (key, index < 0))
}

/// Sorts `rules` in place by `key`, descending when `descending` is true.
pub fn sort_rules(rules: &mut [AssociationRule], key: SortKey, descending: bool) {
    rules.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Lhs => a.antecedent.cmp(&b.antecedent),
            SortKey::Rhs => a.consequent.cmp(&b.consequent),
            SortKey::Confidence => a
                .stats
                .confidence
                .partial_cmp(&b.stats.confidence)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::Lift => a
                .stats
                .lift
                .partial_cmp(&b.stats.lift)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::Conviction => a
                .stats
                .conviction
                .partial_cmp(&b.stats.conviction)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::LhsSupport => a
                .lhs_support
                .partial_cmp(&b.lhs_support)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::RhsSupport => a
                .rhs_support
                .partial_cmp(&b.rhs_support)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::RuleSupport => a
                .rule_support
                .partial_cmp(&b.rule_support)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Truncates `rules` to at most `limit` entries, if given.
pub fn limit_rules(mut rules: Vec<AssociationRule>, limit: Option<usize>) -> Vec<AssociationRule> {
    if let Some(limit) = limit {
        rules.truncate(limit);
    }
    rules
}

/// Formats the max-rules diagnostic marker: `@` followed by the ceiling,
/// zero-padded to four digits.
pub fn format_cap_marker(ceiling: usize) -> String {
    format!("@{:04}", ceiling)
}

/// Renders a rule list as the original tool's numbered plain-text report.
pub fn render_plain_text(rules: &[AssociationRule]) -> String {
    let mut out = String::new();
    for (idx, rule) in rules.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}) {{{}}}([{}]{:.3}) ==> {{{}}}([{}]{:.3})\n",
            idx + 1,
            rule.antecedent.join(", "),
            rule.lhs_count,
            rule.lhs_support,
            rule.consequent.join(", "),
            rule.rhs_count,
            rule.rhs_support,
        ));
        out.push_str(&format!(
            "        Count:{:05}  Supp:{:.3}  Conf:{:.3}  Lift:{:.3}  Conv:{:.3}  Levr:{:.3}\n",
            rule.rule_count,
            rule.rule_support,
            rule.stats.confidence,
            rule.stats.lift,
            rule.stats.conviction,
            rule.stats.leverage,
        ));
    }
    out
}

/// The JSON report envelope: rules plus the run's mining statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport<'a> {
    pub rules: &'a [AssociationRule],
    pub stats: &'a MiningStats,
}

/// Renders a rule list and its mining statistics as pretty-printed JSON.
pub fn render_json(rules: &[AssociationRule], stats: &MiningStats) -> Result<String> {
    let report = JsonReport { rules, stats };
    Ok(serde_json::to_string_pretty(&report)?)
}
