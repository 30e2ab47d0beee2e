use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Something the user owns or owes, valued at its current worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub current_value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, current_value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            current_value,
        }
    }
}

impl Identifiable for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Neutral items (and unknown kinds) are tracked but never valued into net worth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Asset,
    Liability,
    #[serde(other)]
    Neutral,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Asset => "Asset",
            ItemKind::Liability => "Liability",
            ItemKind::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}
