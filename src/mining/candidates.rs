//! Level-wise candidate generation with anti-monotone pruning.

use crate::index::ItemId;
use ahash::AHashSet;

/// A canonical, sorted itemset of interned item ids.
pub type Candidate = Vec<ItemId>;

/// Produces level-1 candidates: one singleton per distinct item.
pub fn initial_candidates<I: Iterator<Item = ItemId>>(items: I) -> Vec<Candidate> {
    items.map(|id| vec![id]).collect()
}

/// Produces level-k candidates (k >= 2) from the confirmed frequent
/// (k-1)-itemsets `prev_frequent`.
///
/// Step 1 (join): forms every k-subset of the union of items appearing in
/// `prev_frequent`. Step 2 (prune, k >= 3 only): keeps a candidate iff all
/// of its (k-1)-subsets are themselves in `prev_frequent`. At k == 2 the
/// prune step is a no-op because every 1-subset is a singleton, and every
/// singleton is frequent by construction.
pub fn next_level(prev_frequent: &[Candidate], k: usize) -> Vec<Candidate> {
    debug_assert!(k >= 2);

    let mut universe: Vec<ItemId> = prev_frequent.iter().flatten().copied().collect();
    universe.sort_unstable();
    universe.dedup();

    let prev_set: AHashSet<&Candidate> = prev_frequent.iter().collect();

    let mut candidates: Vec<Candidate> = Vec::new();
    for combo in k_subsets(&universe, k) {
        if k >= 3 && !all_subsets_frequent(&combo, &prev_set) {
            continue;
        }
        candidates.push(combo);
    }
    candidates
}

/// Checks that every (k-1)-subset of `candidate` is present in `prev_set`.
fn all_subsets_frequent(candidate: &[ItemId], prev_set: &AHashSet<&Candidate>) -> bool {
    let k = candidate.len();
    for skip in 0..k {
        let subset: Candidate = candidate
            .iter()
            .enumerate()
            .filter_map(|(i, &id)| if i == skip { None } else { Some(id) })
            .collect();
        if !prev_set.contains(&subset) {
            return false;
        }
    }
    true
}

/// All size-`k` combinations of `items` (already sorted, deduplicated),
/// each returned in ascending order.
fn k_subsets(items: &[ItemId], k: usize) -> Vec<Candidate> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }
    let mut result = Vec::new();
    let mut combo = Vec::with_capacity(k);
    k_subsets_rec(items, k, 0, &mut combo, &mut result);
    result
}

fn k_subsets_rec(
    items: &[ItemId],
    k: usize,
    start: usize,
    combo: &mut Vec<ItemId>,
    result: &mut Vec<Candidate>,
) {
    if combo.len() == k {
        result.push(combo.clone());
        return;
    }
    let remaining_needed = k - combo.len();
    if items.len() - start < remaining_needed {
        return;
    }
    for i in start..items.len() {
        combo.push(items[i]);
        k_subsets_rec(items, k, i + 1, combo, result);
        combo.pop();
    }
}
