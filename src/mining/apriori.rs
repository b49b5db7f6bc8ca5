//! Level-wise frequent itemset search over a `TransactionIndex`.

use crate::index::TransactionIndex;
use crate::mining::candidates::{self, Candidate};
use crate::types::FrequentItemset;

/// Finds every frequent itemset up to `max_length` items, driving the
/// level-wise loop: evaluate the current level's candidates against the
/// index, keep those meeting `min_support`, hand the survivors to the
/// candidate generator for the next level, repeat until a level yields no
/// frequent itemsets or `max_length` is reached.
///
/// Itemsets are emitted in ascending level order; order within a level is
/// unspecified.
pub fn find_frequent_itemsets(
    index: &TransactionIndex,
    min_support: f64,
    max_length: usize,
) -> Vec<FrequentItemset> {
    find_frequent_itemsets_while(index, min_support, max_length, |_| true)
}

/// Same level-wise search as `find_frequent_itemsets`, but calls
/// `keep_going` immediately after each itemset is confirmed frequent. Once
/// `keep_going` returns `false`, the search stops right there -- no further
/// candidates at the current level and no further levels are evaluated.
/// The triggering itemset itself is still emitted.
///
/// This lets a caller (the orchestrator's `max_rules` ceiling) halt
/// itemset search itself rather than only truncating downstream rule
/// enumeration.
pub fn find_frequent_itemsets_while<F>(
    index: &TransactionIndex,
    min_support: f64,
    max_length: usize,
    mut keep_going: F,
) -> Vec<FrequentItemset>
where
    F: FnMut(&FrequentItemset) -> bool,
{
    let total = index.len();
    if total == 0 {
        return Vec::new();
    }
    let min_support_count = (min_support * total as f64).ceil() as usize;

    let mut frequent_itemsets = Vec::new();
    let mut level: usize = 1;
    let mut candidates: Vec<Candidate> = candidates::initial_candidates(index.items());

    'levels: while !candidates.is_empty() && level <= max_length {
        let mut frequent_k: Vec<Candidate> = Vec::new();

        for candidate in candidates {
            let count = index.count(&candidate);
            if count >= min_support_count {
                let support = count as f64 / total as f64;
                let itemset = FrequentItemset {
                    items: index.resolve(&candidate),
                    count,
                    support,
                };
                let should_continue = keep_going(&itemset);
                frequent_itemsets.push(itemset);
                frequent_k.push(candidate);
                if !should_continue {
                    break 'levels;
                }
            }
        }

        if frequent_k.is_empty() {
            break;
        }

        level += 1;
        candidates = if level <= max_length {
            candidates::next_level(&frequent_k, level)
        } else {
            Vec::new()
        };
    }

    frequent_itemsets
}
