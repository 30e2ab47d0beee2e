pub mod json_backend;

use serde::{Deserialize, Serialize};

use crate::core::services::SummaryService;
use crate::domain::{Account, DateWindow, Item, Loan, Transaction};
use crate::errors::SourceResult;

/// Read-only access to one user's records.
///
/// Implementations own fetching and any retry policy; the dashboard assembler
/// calls each method once and propagates the first error it sees.
pub trait FinanceSource: Send + Sync {
    fn accounts(&self) -> SourceResult<Vec<Account>>;

    /// Non-filtered by deletion; only the date window is applied.
    fn transactions(&self, window: DateWindow) -> SourceResult<Vec<Transaction>>;

    fn active_loans(&self) -> SourceResult<Vec<Loan>>;

    fn items(&self) -> SourceResult<Vec<Item>>;
}

/// A fully materialized set of records, as exported from the remote store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Serves a [`Snapshot`] held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    snapshot: Snapshot,
}

impl MemorySource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Snapshot> for MemorySource {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

impl FinanceSource for MemorySource {
    fn accounts(&self) -> SourceResult<Vec<Account>> {
        Ok(self.snapshot.accounts.clone())
    }

    fn transactions(&self, window: DateWindow) -> SourceResult<Vec<Transaction>> {
        Ok(SummaryService::within(&self.snapshot.transactions, window))
    }

    fn active_loans(&self) -> SourceResult<Vec<Loan>> {
        Ok(self
            .snapshot
            .loans
            .iter()
            .filter(|loan| loan.active)
            .cloned()
            .collect())
    }

    fn items(&self) -> SourceResult<Vec<Item>> {
        Ok(self.snapshot.items.clone())
    }
}
