//! Derived values produced by the services. They are rebuilt on every call
//! and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Account, Item, Loan, ReportPeriod, Transaction};

/// Income and expense totals for one period.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodTotals {
    pub income: f64,
    pub expense: f64,
    pub passive_income: f64,
    pub net: f64,
}

/// Owned items split into assets and liabilities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemTotals {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
}

/// Every aggregate the dashboard shows, flattened.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub income: f64,
    pub expense: f64,
    pub passive_income: f64,
    pub net: f64,
    pub total_balance: f64,
    pub passive_expense: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub items_net_worth: f64,
}

impl FinancialSummary {
    pub fn compose(
        totals: PeriodTotals,
        total_balance: f64,
        passive_expense: f64,
        items: ItemTotals,
    ) -> Self {
        Self {
            income: totals.income,
            expense: totals.expense,
            passive_income: totals.passive_income,
            net: totals.net,
            total_balance,
            passive_expense,
            total_assets: items.total_assets,
            total_liabilities: items.total_liabilities,
            items_net_worth: items.net_worth,
        }
    }

    /// The subset of the summary the health score is computed from.
    pub fn health_inputs(&self) -> HealthInputs {
        HealthInputs {
            income: self.income,
            expense: self.expense,
            passive_income: self.passive_income,
            passive_expense: self.passive_expense,
            total_balance: self.total_balance,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthInputs {
    pub income: f64,
    pub expense: f64,
    pub passive_income: f64,
    /// Sum of active loans' monthly payments.
    pub passive_expense: f64,
    pub total_balance: f64,
}

/// Points awarded per band. When income is zero the three income bands are
/// replaced by a single flat `no_income` award.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthBands {
    pub debt_service: Option<u8>,
    pub savings_rate: Option<u8>,
    pub passive_income: Option<u8>,
    pub no_income: Option<u8>,
    pub liquidity: u8,
}

impl HealthBands {
    pub fn total(&self) -> u8 {
        [
            self.debt_service,
            self.savings_rate,
            self.passive_income,
            self.no_income,
            Some(self.liquidity),
        ]
        .into_iter()
        .flatten()
        .sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Inclusive lower bounds: 80, 60, 40, 20.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Grade::A,
            60..=79 => Grade::B,
            40..=59 => Grade::C,
            20..=39 => Grade::D,
            _ => Grade::E,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthScore {
    pub score: u8,
    pub grade: Grade,
    pub bands: HealthBands,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreedomLevel {
    Freedom,
    Almost,
    Progress,
    Start,
}

impl FreedomLevel {
    pub fn label(self) -> &'static str {
        match self {
            FreedomLevel::Freedom => "Financially Free",
            FreedomLevel::Almost => "Almost There",
            FreedomLevel::Progress => "In Progress",
            FreedomLevel::Start => "Getting Started",
        }
    }

    pub fn color(self) -> StatusColor {
        match self {
            FreedomLevel::Freedom => StatusColor::Green,
            FreedomLevel::Almost => StatusColor::Blue,
            FreedomLevel::Progress => StatusColor::Yellow,
            FreedomLevel::Start => StatusColor::Gray,
        }
    }
}

/// Presentation hint only; the engine never renders colors itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Blue,
    Yellow,
    Gray,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FreedomStatus {
    pub status: FreedomLevel,
    pub label: &'static str,
    pub color: StatusColor,
}

impl From<FreedomLevel> for FreedomStatus {
    fn from(status: FreedomLevel) -> Self {
        Self {
            status,
            label: status.label(),
            color: status.color(),
        }
    }
}

/// Everything the dashboard needs for one period: raw records plus derived values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardReport {
    pub period: ReportPeriod,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub loans: Vec<Loan>,
    pub items: Vec<Item>,
    pub summary: FinancialSummary,
    pub health: HealthScore,
    pub status: FreedomStatus,
}
