//! Personal finance use case

use crate::domain::finance::{Ledger, Summary, Transaction};
use crate::error::Result;
use crate::infrastructure::workspace::{Store, FINANCE_FILE};
use tracing::{info, warn};

/// Service over `finance_data.json`
pub struct FinanceService<S: Store> {
    store: S,
}

/// One page of transactions with enough context to number them
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 0-based index of the first entry
    pub start: usize,
    pub total: usize,
    pub transactions: Vec<Transaction>,
}

impl<S: Store> FinanceService<S> {
    pub fn new(store: S) -> Self {
        FinanceService { store }
    }

    fn load(&self) -> Result<Ledger> {
        let stored: Ledger = self.store.load_json(FINANCE_FILE)?;
        let stored_balance = stored.balance();
        let ledger = stored.reconciled();
        if (ledger.balance() - stored_balance).abs() > 1e-9 {
            warn!(
                stored = stored_balance,
                computed = ledger.balance(),
                "stored balance disagreed with transactions; using computed value"
            );
        }
        Ok(ledger)
    }

    /// Record a transaction and return the new balance
    pub fn add(&self, transaction: Transaction) -> Result<f64> {
        let mut ledger = self.load()?;
        info!(
            kind = %transaction.kind,
            amount = transaction.amount,
            date = %transaction.date,
            "transaction recorded"
        );
        ledger.record(transaction);
        self.store.save_json(FINANCE_FILE, &ledger)?;
        Ok(ledger.balance())
    }

    pub fn list(&self, start: usize, limit: usize) -> Result<Page> {
        let ledger = self.load()?;
        Ok(Page {
            start: start.min(ledger.transactions().len()),
            total: ledger.transactions().len(),
            transactions: ledger.page(start, limit).to_vec(),
        })
    }

    pub fn balance(&self) -> Result<f64> {
        Ok(self.load()?.balance())
    }

    pub fn summary(&self) -> Result<Summary> {
        Ok(self.load()?.summary())
    }
}
