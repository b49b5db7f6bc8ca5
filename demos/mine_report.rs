//! Mines a small sample of e-commerce transactions and renders the
//! resulting rules through the presentation layer: sorted by descending
//! lift, then emitted as both the plain-text report and a JSON document.

use apriori_miner::output::{self, SortKey};
use apriori_miner::{MiningConfig, RuleMiner, Transaction};
use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Mining Report Demo ===\n");

    let transactions = vec![
        Transaction::new(
            "tx1",
            vec!["Laptop".to_string(), "Mouse".to_string(), "Keyboard".to_string()],
            Utc::now(),
        ),
        Transaction::new(
            "tx2",
            vec!["Laptop".to_string(), "Mouse".to_string()],
            Utc::now(),
        ),
        Transaction::new(
            "tx3",
            vec!["Laptop".to_string(), "Mouse".to_string(), "USB-C Hub".to_string()],
            Utc::now(),
        ),
        Transaction::new(
            "tx4",
            vec!["Laptop".to_string(), "Mouse".to_string()],
            Utc::now(),
        ),
        Transaction::new(
            "tx5",
            vec!["Phone".to_string(), "Phone Case".to_string()],
            Utc::now(),
        ),
        Transaction::new(
            "tx6",
            vec!["Phone".to_string(), "Phone Case".to_string()],
            Utc::now(),
        ),
    ];

    println!("Loaded {} transactions\n", transactions.len());

    let config = MiningConfig {
        min_support: 0.3,
        min_confidence: 0.7,
        min_lift: 1.0,
        ..MiningConfig::default()
    };

    let mut miner = RuleMiner::new(config);
    miner.add_transactions(transactions)?;

    // `mine_association_rules` returns the rules unsorted; the caller
    // chooses a presentation order.
    let mut rules = miner.mine_association_rules()?;
    output::sort_rules(&mut rules, SortKey::Lift, true);

    if let Some(marker) = miner.stats().cap_marker.as_deref() {
        println!("Mining capped: {}\n", marker);
    }

    println!("=== Plain-Text Report ===\n");
    print!("{}", output::render_plain_text(&rules));

    println!("\n=== JSON Report ===\n");
    println!("{}", output::render_json(&rules, miner.stats())?);

    Ok(())
}
