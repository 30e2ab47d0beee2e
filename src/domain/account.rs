use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A cash or bank account whose balance feeds the liquidity buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        alias = "current_balance",
        deserialize_with = "lenient_amount"
    )]
    pub balance: f64,
    /// Excluded accounts are listed but never counted in the total balance.
    #[serde(default, alias = "is_excluded")]
    pub exclude_from_total: bool,
}

impl Account {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            exclude_from_total: false,
        }
    }

    /// Marks the account as excluded from the total balance.
    pub fn excluded(mut self) -> Self {
        self.exclude_from_total = true;
        self
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}
