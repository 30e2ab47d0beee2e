//! Composite financial health score.
//!
//! The score is the sum of four independently bounded bands, each worth at
//! most 25 points:
//!
//! | band           | measure                          | awards              |
//! |----------------|----------------------------------|---------------------|
//! | debt service   | loan payments / income           | 25 / 15 / 5         |
//! | savings rate   | (income - expense) / income      | 25 / 15 / 10 / 0    |
//! | passive income | passive income / income          | 25 / 15 / 10 / 5    |
//! | liquidity      | total balance / expense          | 25 / 20 / 15 / 10 / 0 |
//!
//! Without income the three ratio bands cannot be computed and are replaced
//! by a flat [`NO_INCOME_AWARD`]; without expenses the liquidity band is a
//! flat [`NO_EXPENSE_AWARD`]. A user with no income therefore tops out at 55
//! and one with neither income nor expenses scores exactly 45.

use crate::domain::{Grade, HealthBands, HealthInputs, HealthScore};

/// Replaces the debt-service, savings-rate and passive-income bands when income is zero.
pub const NO_INCOME_AWARD: u8 = 30;
/// Liquidity award when there are no expenses to cover.
pub const NO_EXPENSE_AWARD: u8 = 15;

pub struct HealthService;

impl HealthService {
    pub fn score(inputs: &HealthInputs) -> HealthScore {
        let bands = Self::bands(inputs);
        let score = bands.total();
        let grade = Grade::from_score(score);
        tracing::debug!(score, %grade, ?bands, "scored financial health");
        HealthScore {
            score,
            grade,
            bands,
        }
    }

    pub fn bands(inputs: &HealthInputs) -> HealthBands {
        let liquidity = Self::liquidity_band(inputs.total_balance, inputs.expense);
        if inputs.income > 0.0 {
            HealthBands {
                debt_service: Some(Self::debt_service_band(
                    inputs.passive_expense / inputs.income,
                )),
                savings_rate: Some(Self::savings_rate_band(
                    (inputs.income - inputs.expense) / inputs.income,
                )),
                passive_income: Some(Self::passive_income_band(
                    inputs.passive_income / inputs.income,
                )),
                no_income: None,
                liquidity,
            }
        } else {
            HealthBands {
                no_income: Some(NO_INCOME_AWARD),
                liquidity,
                ..HealthBands::default()
            }
        }
    }

    fn debt_service_band(ratio: f64) -> u8 {
        if ratio < 0.30 {
            25
        } else if ratio < 0.50 {
            15
        } else {
            5
        }
    }

    fn savings_rate_band(rate: f64) -> u8 {
        if rate >= 0.20 {
            25
        } else if rate >= 0.10 {
            15
        } else if rate > 0.0 {
            10
        } else {
            0
        }
    }

    fn passive_income_band(ratio: f64) -> u8 {
        if ratio >= 0.50 {
            25
        } else if ratio >= 0.20 {
            15
        } else if ratio > 0.0 {
            10
        } else {
            5
        }
    }

    fn liquidity_band(balance: f64, expense: f64) -> u8 {
        if expense <= 0.0 {
            return NO_EXPENSE_AWARD;
        }
        if balance >= 3.0 * expense {
            25
        } else if balance >= 2.0 * expense {
            20
        } else if balance >= expense {
            15
        } else if balance > 0.0 {
            10
        } else {
            0
        }
    }
}
