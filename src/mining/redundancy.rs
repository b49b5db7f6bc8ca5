//! Post-mining redundancy removal over a finished rule list.
//!
//! Each of the three filters is selected by one bit of `mask` and consults
//! only the *original* rule list `rules`, never a partially-filtered one,
//! so the result is a pure function of `(rules, mask)` independent of
//! filter evaluation order.

use crate::config::redundancy_bits::{FIXED_ANTECEDENT, FIXED_CONSEQUENT, SYMMETRIC_SWAP};
use crate::types::AssociationRule;

/// Applies the redundancy filters selected by `mask` to `rules`, returning
/// a new list. `mask == 0` returns a clone of `rules` unchanged.
pub fn apply(rules: &[AssociationRule], mask: u8) -> Vec<AssociationRule> {
    if mask == 0 {
        return rules.to_vec();
    }

    rules
        .iter()
        .filter(|rule| {
            (mask & SYMMETRIC_SWAP == 0 || !is_redundant_symmetric_swap(rule, rules))
                && (mask & FIXED_CONSEQUENT == 0 || !is_redundant_fixed_consequent(rule, rules))
                && (mask & FIXED_ANTECEDENT == 0 || !is_redundant_fixed_antecedent(rule, rules))
        })
        .cloned()
        .collect()
}

/// Drops (A=>B) if (B=>A) exists with confidence >= that of (A=>B).
/// Equal-confidence reciprocal pairs are both dropped (each sees a match
/// satisfying `>=`); this literal behavior is preserved, see DESIGN.md.
fn is_redundant_symmetric_swap(rule: &AssociationRule, rules: &[AssociationRule]) -> bool {
    rules.iter().any(|other| {
        other.antecedent == rule.consequent
            && other.consequent == rule.antecedent
            && other.stats.confidence >= rule.stats.confidence
    })
}

/// Drops (A=>B) with |A| >= 2 if every (|A|-1)-subset A' of A has a rule
/// (A'=>B) present in `rules` with the same consequent B.
fn is_redundant_fixed_consequent(rule: &AssociationRule, rules: &[AssociationRule]) -> bool {
    if rule.antecedent.len() < 2 {
        return false;
    }
    proper_subsets_one_shorter(&rule.antecedent).iter().all(|subset| {
        rules
            .iter()
            .any(|other| &other.antecedent == subset && other.consequent == rule.consequent)
    })
}

/// Drops (A=>B) with |B| >= 2 if every (|B|-1)-subset B' of B has a rule
/// (A=>B') present in `rules` with the same antecedent A.
fn is_redundant_fixed_antecedent(rule: &AssociationRule, rules: &[AssociationRule]) -> bool {
    if rule.consequent.len() < 2 {
        return false;
    }
    proper_subsets_one_shorter(&rule.consequent).iter().all(|subset| {
        rules
            .iter()
            .any(|other| other.antecedent == rule.antecedent && &other.consequent == subset)
    })
}

/// Every subset of `items` with exactly one fewer element, preserving
/// relative order so equality with a stored antecedent/consequent is
/// meaningful (both sides are stored in the same canonical sorted order).
fn proper_subsets_one_shorter(items: &[String]) -> Vec<Vec<String>> {
    (0..items.len())
        .map(|skip| {
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| if i == skip { None } else { Some(item.clone()) })
                .collect()
        })
        .collect()
}
