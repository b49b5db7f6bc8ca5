use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One input record: an unordered collection of items, plus bookkeeping
/// fields useful to loaders and exporters. Duplicate items within a
/// transaction are tolerated here and coalesced when the transaction is
/// indexed for mining (see `crate::index::TransactionIndex`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<String>,
    pub group_id: Option<String>,
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new<S: Into<String>>(id: S, items: Vec<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            items,
            group_id: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a transaction tagged with the group (e.g. detail-format
    /// invoice/order id) it was assembled from.
    pub fn with_group<S: Into<String>, G: Into<String>>(
        id: S,
        items: Vec<String>,
        timestamp: DateTime<Utc>,
        group_id: G,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            items,
            group_id: Some(group_id.into()),
            metadata: HashMap::new(),
        }
    }

    /// Attach metadata to the transaction.
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Check if the transaction contains an item.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Check if the transaction contains every item in `items`.
    pub fn contains_all(&self, items: &[String]) -> bool {
        items.iter().all(|item| self.contains(item))
    }
}
