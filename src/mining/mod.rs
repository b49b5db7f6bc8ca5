pub mod apriori;
pub mod candidates;
pub mod redundancy;
pub mod rules;
pub mod stats;

use crate::config::MiningConfig;
use crate::errors::{MiningError, Result};
use crate::index::TransactionIndex;
use crate::output;
use crate::transaction::Transaction;
use crate::types::AssociationRule;

/// Mines association rules directly from a pre-built `TransactionIndex`.
///
/// This is the pure core entry point: it validates `config`, runs the
/// index -> frequent itemsets -> rule enumeration -> redundancy filtering
/// pipeline, and returns the result alongside run statistics. The returned
/// rule list is unsorted; callers pick a presentation order via
/// `crate::output::sort_rules`.
///
/// Unlike `RuleMiner::mine_association_rules`, an empty index is not an
/// error: it simply yields an empty rule list.
pub fn mine_from_index(
    index: &TransactionIndex,
    config: &MiningConfig,
) -> Result<(Vec<AssociationRule>, stats::MiningStats)> {
    config.validate()?;

    let mut run_stats = stats::MiningStats {
        transactions_processed: index.len(),
        vocabulary_size: index.vocabulary_size(),
        ..stats::MiningStats::default()
    };

    if index.is_empty() {
        return Ok((Vec::new(), run_stats));
    }

    let mut raw_rules = Vec::new();
    let mut capped = false;

    // Enumerate rules for each itemset as soon as it's confirmed frequent,
    // so that once `max_rules` is reached the itemset search itself halts
    // rather than running to completion with rule enumeration truncated
    // downstream.
    let frequent_itemsets = apriori::find_frequent_itemsets_while(
        index,
        config.min_support,
        config.max_length,
        |itemset| {
            if itemset.level() < 2 {
                return true;
            }

            let mut item_ids: Vec<_> = itemset
                .items
                .iter()
                .map(|name| index.item_id(name).expect("item resolved from this index"))
                .collect();
            item_ids.sort_unstable();

            let mut itemset_rules = rules::enumerate_rules(
                index,
                itemset,
                &item_ids,
                config.min_confidence,
                config.min_lift,
            );
            raw_rules.append(&mut itemset_rules);

            if raw_rules.len() >= config.max_rules {
                capped = true;
                false
            } else {
                true
            }
        },
    );
    run_stats.frequent_itemsets_count = frequent_itemsets.len();

    if capped {
        run_stats.rules_capped = true;
        run_stats.cap_marker = Some(output::format_cap_marker(config.max_rules));
    }

    let rules = redundancy::apply(&raw_rules, config.redundancy_mask);
    run_stats.rules_generated = rules.len();

    Ok((rules, run_stats))
}

/// Owns the accumulated transactions and config, and drives the full
/// mining pipeline: index, frequent itemsets, rule enumeration (capped by
/// `max_rules`), redundancy filtering. A convenience wrapper over
/// `mine_from_index` that treats zero accumulated transactions as an error.
pub struct RuleMiner {
    config: MiningConfig,
    transactions: Vec<Transaction>,
    stats: stats::MiningStats,
}

impl RuleMiner {
    /// Creates a new miner with the given configuration.
    pub fn new(config: MiningConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            stats: stats::MiningStats::default(),
        }
    }

    /// Adds a batch of transactions to mine.
    pub fn add_transactions(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        if transactions.is_empty() {
            return Err(MiningError::InsufficientData(
                "No transactions provided".to_string(),
            ));
        }
        self.transactions.extend(transactions);
        Ok(())
    }

    /// Adds a single transaction (streaming support).
    ///
    /// # Example
    /// ```no_run
    /// use apriori_miner::{RuleMiner, MiningConfig, Transaction};
    /// use chrono::Utc;
    ///
    /// let mut miner = RuleMiner::new(MiningConfig::default());
    /// let transaction = Transaction::new("tx1", vec!["A".to_string()], Utc::now());
    /// miner.add_transaction(transaction)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<()> {
        self.transactions.push(transaction);
        Ok(())
    }

    /// Adds transactions from a fallible iterator (batch streaming).
    ///
    /// # Example
    /// ```no_run
    /// use apriori_miner::{RuleMiner, MiningConfig};
    /// use apriori_miner::data_loader::{DataLoader, DatasetFormat};
    ///
    /// let mut miner = RuleMiner::new(MiningConfig::default());
    /// let transactions = DataLoader::from_csv_path("file.csv", DatasetFormat::Basket)?;
    /// miner.add_transactions_from_iter(transactions.into_iter().map(Ok))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add_transactions_from_iter<I>(&mut self, iter: I) -> Result<()>
    where
        I: Iterator<Item = Result<Transaction>>,
    {
        let mut count = 0;
        for transaction_result in iter {
            let transaction = transaction_result?;
            self.transactions.push(transaction);
            count += 1;
        }

        if count == 0 {
            return Err(MiningError::InsufficientData(
                "No transactions provided from iterator".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of transactions accumulated so far.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Runs the full pipeline and returns the surviving association rules,
    /// unsorted. Pick a presentation order with `crate::output::sort_rules`.
    pub fn mine_association_rules(&mut self) -> Result<Vec<AssociationRule>> {
        self.config.validate()?;

        if self.transactions.is_empty() {
            return Err(MiningError::InsufficientData(
                "No transactions to mine".to_string(),
            ));
        }

        let index = TransactionIndex::build(&self.transactions);
        let (rules, run_stats) = mine_from_index(&index, &self.config)?;
        self.stats = run_stats;

        Ok(rules)
    }

    /// Statistics from the most recent mining run.
    pub fn stats(&self) -> &stats::MiningStats {
        &self.stats
    }
}
