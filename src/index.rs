//! The transaction index: interns item strings into dense ids and answers
//! `count(itemset)` via inverted posting lists. Built once per mining run
//! and never mutated afterwards.

use crate::transaction::Transaction;
use ahash::{AHashMap, AHashSet};

/// Dense identifier assigned to an item on first sighting. Stable for the
/// lifetime of one `TransactionIndex`.
pub type ItemId = u32;

/// Owns the normalized transactions and an inverted item -> posting-list
/// index, answering "how many transactions contain itemset S?" in time
/// proportional to the smallest posting list among S's items.
#[derive(Debug)]
pub struct TransactionIndex {
    vocabulary: Vec<String>,
    item_ids: AHashMap<String, ItemId>,
    // Sorted transaction ids that contain the item, indexed by ItemId.
    postings: Vec<Vec<u32>>,
    transaction_count: usize,
}

impl TransactionIndex {
    /// Builds the index from an ordered sequence of transactions. Each
    /// transaction's items are de-duplicated (order within a transaction
    /// is irrelevant); transactions are assigned sequential ids 0..N-1 in
    /// input order.
    pub fn build(transactions: &[Transaction]) -> Self {
        let mut item_ids: AHashMap<String, ItemId> = AHashMap::new();
        let mut vocabulary: Vec<String> = Vec::new();
        let mut postings: Vec<Vec<u32>> = Vec::new();

        for (tx_id, tx) in transactions.iter().enumerate() {
            let mut seen: AHashSet<ItemId> = AHashSet::with_capacity(tx.items.len());
            for item in &tx.items {
                let id = *item_ids.entry(item.clone()).or_insert_with(|| {
                    let id = vocabulary.len() as ItemId;
                    vocabulary.push(item.clone());
                    postings.push(Vec::new());
                    id
                });
                seen.insert(id);
            }
            for id in seen {
                postings[id as usize].push(tx_id as u32);
            }
        }

        for list in &mut postings {
            list.sort_unstable();
        }

        Self {
            vocabulary,
            item_ids,
            postings,
            transaction_count: transactions.len(),
        }
    }

    /// Total number of transactions the index was built from.
    pub fn len(&self) -> usize {
        self.transaction_count
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// All distinct item ids present in the corpus, in ascending order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> {
        0..self.vocabulary.len() as ItemId
    }

    /// Number of distinct items in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Resolves an interned item id back to its original string.
    pub fn item_name(&self, id: ItemId) -> &str {
        &self.vocabulary[id as usize]
    }

    /// Interns (or looks up) an item's id, if it exists in the vocabulary.
    pub fn item_id(&self, item: &str) -> Option<ItemId> {
        self.item_ids.get(item).copied()
    }

    /// Translates a slice of interned ids back into sorted item strings.
    pub fn resolve(&self, items: &[ItemId]) -> Vec<String> {
        items.iter().map(|&id| self.item_name(id).to_string()).collect()
    }

    /// Number of transactions whose item set is a superset of `itemset`.
    ///
    /// Empty `itemset` counts as the whole corpus; an itemset containing
    /// any item outside the vocabulary counts as zero.
    pub fn count(&self, itemset: &[ItemId]) -> usize {
        if itemset.is_empty() {
            return self.transaction_count;
        }
        if self.transaction_count == 0 {
            return 0;
        }

        let mut lists: Vec<&[u32]> = Vec::with_capacity(itemset.len());
        for &id in itemset {
            match self.postings.get(id as usize) {
                Some(list) => lists.push(list.as_slice()),
                None => return 0,
            }
        }
        // Smallest-first so the running intersection shrinks fastest.
        lists.sort_by_key(|list| list.len());

        let mut acc = lists[0].to_vec();
        for list in &lists[1..] {
            if acc.is_empty() {
                break;
            }
            acc = intersect_sorted(&acc, list);
        }
        acc.len()
    }
}

fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tx(items: &[&str]) -> Transaction {
        Transaction::new(
            "tx",
            items.iter().map(|s| s.to_string()).collect(),
            Utc::now(),
        )
    }

    fn build(rows: &[&[&str]]) -> TransactionIndex {
        let transactions: Vec<Transaction> = rows.iter().map(|r| tx(r)).collect();
        TransactionIndex::build(&transactions)
    }

    #[test]
    fn empty_itemset_counts_everything() {
        let idx = build(&[&["A", "B"], &["A"]]);
        assert_eq!(idx.count(&[]), 2);
    }

    #[test]
    fn empty_index_counts_zero() {
        let idx = build(&[]);
        assert_eq!(idx.len(), 0);
        assert_eq!(idx.count(&[]), 0);
    }

    #[test]
    fn unknown_item_counts_zero() {
        let idx = build(&[&["A", "B"]]);
        assert_eq!(idx.count(&[9999]), 0);
    }

    #[test]
    fn single_item_count() {
        let idx = build(&[&["A", "B"], &["A"], &["B", "C"]]);
        let a = idx.item_id("A").unwrap();
        assert_eq!(idx.count(&[a]), 2);
    }

    #[test]
    fn intersection_count() {
        let idx = build(&[&["A", "B", "C"], &["A", "B"], &["A", "C"], &["B", "C"]]);
        let a = idx.item_id("A").unwrap();
        let b = idx.item_id("B").unwrap();
        assert_eq!(idx.count(&[a, b]), 2);
    }

    #[test]
    fn anti_monotone_count() {
        let idx = build(&[&["A", "B", "C"], &["A", "B"], &["A"]]);
        let a = idx.item_id("A").unwrap();
        let b = idx.item_id("B").unwrap();
        let c = idx.item_id("C").unwrap();
        assert!(idx.count(&[a]) >= idx.count(&[a, b]));
        assert!(idx.count(&[a, b]) >= idx.count(&[a, b, c]));
    }

    #[test]
    fn duplicates_within_a_transaction_are_coalesced() {
        let transactions = vec![Transaction::new(
            "tx1",
            vec!["A".to_string(), "A".to_string(), "B".to_string()],
            Utc::now(),
        )];
        let idx = TransactionIndex::build(&transactions);
        let a = idx.item_id("A").unwrap();
        assert_eq!(idx.count(&[a]), 1);
    }
}
