use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// A transaction that has not been recorded yet; the ledger assigns the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Amount in minor currency units. Always positive; `kind` carries the sign.
    pub amount: i64,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: i64,
    pub user: User,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn stamp(tx: NewTransaction, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: tx.id,
            kind: tx.kind,
            amount: tx.amount,
            user: tx.user,
            timestamp,
        }
    }
}
