use crate::arith;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::greeting::greet;
use crate::ledger::{Ledger, NewTransaction, Transaction, User};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub title: String,
    pub greeting: String,
    pub sample_sum: i64,
    pub user: User,
    pub balance: i64,
    pub transactions: Vec<Transaction>,
}

/// Record the configured transactions for the configured user and summarise the result.
pub fn run_demo(config: &DemoConfig) -> Result<DemoReport> {
    info!(user = %config.user.name, "demo: starting");

    let greeting = greet(&config.greeting);
    let sample_sum = arith::add(10, 20);

    let mut ledger = Ledger::new();
    for tx in &config.transactions {
        ledger.add_transaction(NewTransaction {
            id: tx.id.clone(),
            kind: tx.kind,
            amount: tx.amount,
            user: config.user.clone(),
        })?;
    }

    let balance = ledger.balance(config.user.id);
    let transactions: Vec<Transaction> = ledger
        .user_transactions(config.user.id)
        .into_iter()
        .cloned()
        .collect();

    info!(
        balance,
        transactions = transactions.len(),
        "demo: ledger complete"
    );

    Ok(DemoReport {
        title: config.title.clone(),
        greeting,
        sample_sum,
        user: config.user.clone(),
        balance,
        transactions,
    })
}
