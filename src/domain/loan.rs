use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A recurring loan obligation. Only active loans count as passive expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Loan {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub monthly_payment: f64,
    #[serde(default = "Loan::default_active", alias = "is_active")]
    pub active: bool,
}

impl Loan {
    pub fn new(name: impl Into<String>, monthly_payment: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            monthly_payment,
            active: true,
        }
    }

    pub fn closed(mut self) -> Self {
        self.active = false;
        self
    }

    fn default_active() -> bool {
        true
    }
}

impl Identifiable for Loan {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Loan {
    fn name(&self) -> &str {
        &self.name
    }
}
