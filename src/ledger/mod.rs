mod types;

pub use types::{NewTransaction, Transaction, TransactionKind, User};

use crate::arith;
use crate::error::{Error, Result};
use chrono::Utc;
use tracing::debug;

/// In-memory record of debit and credit transactions, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `tx` with the current time and record it.
    ///
    /// Fails without touching the ledger if the amount is not positive, the id
    /// is blank, the id was already recorded, or the user's balance would no
    /// longer fit in an `i64`.
    pub fn add_transaction(&mut self, tx: NewTransaction) -> Result<&Transaction> {
        if tx.amount <= 0 {
            return Err(Error::ledger(format!(
                "transaction {} has non-positive amount {}",
                tx.id, tx.amount
            )));
        }
        if tx.id.trim().is_empty() {
            return Err(Error::ledger("transaction id cannot be empty"));
        }
        if self.transactions.iter().any(|t| t.id == tx.id) {
            return Err(Error::ledger(format!("duplicate transaction id {}", tx.id)));
        }

        let current = self.balance(tx.user.id);
        let projected = match tx.kind {
            TransactionKind::Credit => current.checked_add(tx.amount),
            TransactionKind::Debit => current.checked_sub(tx.amount),
        };
        if projected.is_none() {
            return Err(Error::ledger(format!(
                "transaction {} would overflow balance of user {}",
                tx.id, tx.user.id
            )));
        }

        let recorded = Transaction::stamp(tx, Utc::now());
        debug!(
            id = %recorded.id,
            kind = %recorded.kind,
            amount = recorded.amount,
            user_id = recorded.user.id,
            "recorded transaction"
        );
        self.transactions.push(recorded);
        self.transactions
            .last()
            .ok_or_else(|| Error::ledger("transaction was not recorded"))
    }

    /// Sum of the user's credits minus the sum of their debits.
    ///
    /// `add_transaction` refuses anything that would take this outside `i64`.
    pub fn balance(&self, user_id: u64) -> i64 {
        self.transactions
            .iter()
            .filter(|t| t.user.id == user_id)
            .fold(0, |balance, t| match t.kind {
                TransactionKind::Credit => arith::add(balance, t.amount),
                TransactionKind::Debit => arith::subtract(balance, t.amount),
            })
    }

    pub fn user_transactions(&self, user_id: u64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.user.id == user_id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
