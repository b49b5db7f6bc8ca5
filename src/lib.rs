//! # apriori-miner
//!
//! Association rule mining over transactional data using the Apriori
//! algorithm: level-wise frequent itemset search, rule enumeration with
//! confidence/lift/leverage/conviction, and configurable redundancy
//! filtering.
//!
//! ## Quick Start
//!
//! ```rust
//! use apriori_miner::{RuleMiner, Transaction, MiningConfig};
//! use chrono::Utc;
//!
//! // Load transactions
//! let transactions = vec![
//!     Transaction::new("tx1", vec!["Laptop".to_string(), "Mouse".to_string()], Utc::now()),
//!     Transaction::new("tx2", vec!["Laptop".to_string(), "Keyboard".to_string()], Utc::now()),
//!     Transaction::new("tx3", vec!["Laptop".to_string(), "Mouse".to_string()], Utc::now()),
//! ];
//!
//! // Configure mining
//! let config = MiningConfig {
//!     min_support: 0.3,
//!     min_confidence: 0.5,
//!     min_lift: 1.0,
//!     ..MiningConfig::default()
//! };
//!
//! // Mine rules
//! let mut miner = RuleMiner::new(config);
//! miner.add_transactions(transactions).unwrap();
//! let rules = miner.mine_association_rules().unwrap();
//! ```

pub mod config;
pub mod errors;
pub mod index;
pub mod transaction;
pub mod types;

// Mining pipeline: index, candidates, apriori, rules, redundancy.
pub mod mining;

// Data loading from Excel/CSV.
pub mod data_loader;
pub use data_loader::DatasetFormat;

// Presentation: sorting, plain-text and JSON rendering, diagnostic marker.
pub mod output;

// Re-exports
pub use config::MiningConfig;
pub use errors::{MiningError, Result};
pub use index::TransactionIndex;
pub use mining::{mine_from_index, RuleMiner};
pub use transaction::Transaction;
pub use types::{AssociationRule, FrequentItemset, ItemSet, RuleStats, INFINITE_CONVICTION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let config = MiningConfig::default();
        let miner = RuleMiner::new(config);
        assert!(miner.transaction_count() == 0);
    }
}
