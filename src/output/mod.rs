use crate::demo::DemoReport;
use crate::error::Error;
use crate::ledger::{Transaction, TransactionKind};
use askama::Template;
use chrono::Utc;

#[derive(Template)]
#[template(path = "statement.txt")]
struct Statement {
    title: String,
    generated_at: String,
    greeting: String,
    user_name: String,
    user_email: String,
    transactions: Vec<TransactionView>,
    credit_total: i64,
    debit_total: i64,
    balance: i64,
    transaction_count: usize,
}

#[allow(dead_code)] // fields used by Askama template
struct TransactionView {
    id: String,
    kind: String,
    amount_fmt: String,
    timestamp: String,
}

fn signed_amount(t: &Transaction) -> String {
    match t.kind {
        TransactionKind::Credit => format!("+{}", t.amount),
        TransactionKind::Debit => format!("-{}", t.amount),
    }
}

fn transaction_to_view(t: &Transaction) -> TransactionView {
    TransactionView {
        id: t.id.clone(),
        kind: t.kind.to_string(),
        amount_fmt: signed_amount(t),
        timestamp: t.timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

/// Sum of the amounts of one kind, or `None` if it does not fit in an `i64`.
fn total(transactions: &[Transaction], kind: TransactionKind) -> Option<i64> {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .try_fold(0i64, |sum, t| sum.checked_add(t.amount))
}

/// Render a demo report as a plain-text account statement.
pub fn render_statement(report: &DemoReport) -> anyhow::Result<String> {
    let statement = Statement {
        title: report.title.clone(),
        generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        greeting: report.greeting.clone(),
        user_name: report.user.name.clone(),
        user_email: report.user.email.clone(),
        transactions: report.transactions.iter().map(transaction_to_view).collect(),
        credit_total: total(&report.transactions, TransactionKind::Credit)
            .ok_or_else(|| Error::ledger("credit total overflows i64"))?,
        debit_total: total(&report.transactions, TransactionKind::Debit)
            .ok_or_else(|| Error::ledger("debit total overflows i64"))?,
        balance: report.balance,
        transaction_count: report.transactions.len(),
    };

    let text = statement
        .render()
        .map_err(|e| Error::template(format!("statement: {e}")))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::User;

    fn transaction(id: &str, kind: TransactionKind, amount: i64) -> Transaction {
        Transaction {
            id: id.into(),
            kind,
            amount,
            user: User {
                id: 1,
                name: "Test User".into(),
                email: "test@example.com".into(),
                active: None,
            },
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn signed_amount_follows_kind() {
        assert_eq!(
            signed_amount(&transaction("a", TransactionKind::Credit, 500)),
            "+500"
        );
        assert_eq!(
            signed_amount(&transaction("b", TransactionKind::Debit, 150)),
            "-150"
        );
    }

    #[test]
    fn totals_split_by_kind() {
        let txs = vec![
            transaction("a", TransactionKind::Credit, 500),
            transaction("b", TransactionKind::Debit, 150),
            transaction("c", TransactionKind::Credit, 25),
        ];
        assert_eq!(total(&txs, TransactionKind::Credit), Some(525));
        assert_eq!(total(&txs, TransactionKind::Debit), Some(150));
        assert_eq!(total(&[], TransactionKind::Debit), Some(0));
    }

    #[test]
    fn total_reports_overflow() {
        let txs = vec![
            transaction("a", TransactionKind::Credit, i64::MAX),
            transaction("b", TransactionKind::Debit, 10),
            transaction("c", TransactionKind::Credit, 10),
        ];
        assert_eq!(total(&txs, TransactionKind::Credit), None);
        assert_eq!(total(&txs, TransactionKind::Debit), Some(10));
    }

    #[test]
    fn statement_refuses_overflowing_totals() {
        let transactions = vec![
            transaction("a", TransactionKind::Credit, i64::MAX),
            transaction("b", TransactionKind::Debit, 10),
            transaction("c", TransactionKind::Credit, 10),
        ];
        let report = DemoReport {
            title: "Overflow".into(),
            greeting: "Hello, Module System!".into(),
            sample_sum: 30,
            user: transactions[0].user.clone(),
            balance: i64::MAX,
            transactions,
        };
        let err = render_statement(&report).unwrap_err();
        assert!(err.to_string().contains("credit total overflows"));
    }
}
