//! Income/expense ledger

use crate::error::{Result, ToolbeltError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => f.write_str("Income"),
            TransactionKind::Expense => f.write_str("Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Ok(TransactionKind::Income),
            "expense" | "out" => Ok(TransactionKind::Expense),
            _ => Err(format!(
                "Invalid transaction type: '{}'. Valid types are: income, expense",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ToolbeltError::InvalidInput(format!(
                "amount must be a positive number, got {}",
                amount
            )));
        }
        Ok(Transaction {
            kind,
            amount,
            description: description.trim().to_string(),
            date,
        })
    }

    /// Amount with its sign applied to the balance
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Transactions plus their running balance, as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub count: usize,
}

impl Ledger {
    /// Recompute the balance from the transactions; the stored figure is
    /// never trusted on its own.
    pub fn reconciled(mut self) -> Self {
        self.balance = self.transactions.iter().map(Transaction::signed_amount).sum();
        self
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.balance += transaction.signed_amount();
        self.transactions.push(transaction);
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Window of `limit` transactions starting at `start` (0-based)
    pub fn page(&self, start: usize, limit: usize) -> &[Transaction] {
        let start = start.min(self.transactions.len());
        let end = start.saturating_add(limit).min(self.transactions.len());
        &self.transactions[start..end]
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            balance: self.balance,
            count: self.transactions.len(),
            ..Summary::default()
        };
        for t in &self.transactions {
            match t.kind {
                TransactionKind::Income => summary.income += t.amount,
                TransactionKind::Expense => summary.expenses += t.amount,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    fn tx(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction::new(kind, amount, "test", date()).unwrap()
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(Transaction::new(TransactionKind::Income, 0.0, "x", date()).is_err());
        assert!(Transaction::new(TransactionKind::Expense, -5.0, "x", date()).is_err());
        assert!(Transaction::new(TransactionKind::Expense, f64::NAN, "x", date()).is_err());
    }

    #[test]
    fn test_record_updates_balance() {
        let mut ledger = Ledger::default();
        ledger.record(tx(TransactionKind::Income, 100.0));
        ledger.record(tx(TransactionKind::Expense, 30.5));
        assert_eq!(ledger.balance(), 69.5);
    }

    #[test]
    fn test_reconcile_overrides_stored_balance() {
        let json = r#"{"transactions":[{"type":"Income","amount":50.0,"description":"pay","date":"2025-01-17"}],"balance":999}"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.reconciled().balance(), 50.0);
    }

    #[test]
    fn test_page_bounds() {
        let mut ledger = Ledger::default();
        for i in 1..=5 {
            ledger.record(tx(TransactionKind::Income, i as f64));
        }
        assert_eq!(ledger.page(0, 2).len(), 2);
        assert_eq!(ledger.page(4, 10).len(), 1);
        assert!(ledger.page(10, 10).is_empty());
        assert_eq!(ledger.page(3, 2)[0].amount, 4.0);
    }

    #[test]
    fn test_summary() {
        let mut ledger = Ledger::default();
        ledger.record(tx(TransactionKind::Income, 10.0));
        ledger.record(tx(TransactionKind::Income, 5.0));
        ledger.record(tx(TransactionKind::Expense, 3.0));
        let summary = ledger.summary();
        assert_eq!(summary.income, 15.0);
        assert_eq!(summary.expenses, 3.0);
        assert_eq!(summary.balance, 12.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_kind_serializes_capitalized() {
        let json = serde_json::to_string(&tx(TransactionKind::Expense, 1.0)).unwrap();
        assert!(json.contains("\"type\":\"Expense\""));
    }
}
