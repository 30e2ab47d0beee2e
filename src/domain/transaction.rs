//! Income and expense records as delivered by the data source.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub income_type: Option<IncomeType>,
    pub date: NaiveDate,
    #[serde(default, alias = "is_deleted")]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn income(date: NaiveDate, amount: f64, income_type: IncomeType) -> Self {
        Self::with_kind(TransactionKind::Income, date, amount, Some(income_type))
    }

    pub fn expense(date: NaiveDate, amount: f64) -> Self {
        Self::with_kind(TransactionKind::Expense, date, amount, None)
    }

    fn with_kind(
        kind: TransactionKind,
        date: NaiveDate,
        amount: f64,
        income_type: Option<IncomeType>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            income_type,
            date,
            deleted: false,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_passive_income(&self) -> bool {
        self.kind == TransactionKind::Income && self.income_type == Some(IncomeType::Passive)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Direction of a transaction. Kinds the engine does not know about are kept
/// as [`TransactionKind::Other`] and ignored by aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    #[serde(other)]
    Other,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    /// Earned without active labor, e.g. dividends or rent.
    Passive,
    Active,
    #[serde(other)]
    Other,
}
