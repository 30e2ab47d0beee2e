#![doc(test(attr(deny(warnings))))]

//! Financial aggregation and health scoring.
//!
//! Given one user's accounts, transactions, loans and owned items, the engine
//! derives period totals, a 0-100 health score with a letter grade and a
//! financial freedom status. Every service is a pure function of its inputs;
//! fetching records is left to a [`storage::FinanceSource`].
//!
//! ```
//! use finhealth::core::services::{HealthService, StatusService};
//! use finhealth::domain::{FreedomLevel, Grade, HealthInputs};
//!
//! let health = HealthService::score(&HealthInputs {
//!     income: 10_000_000.0,
//!     expense: 6_000_000.0,
//!     passive_income: 0.0,
//!     passive_expense: 2_000_000.0,
//!     total_balance: 15_000_000.0,
//! });
//! assert_eq!((health.score, health.grade), (75, Grade::B));
//! assert_eq!(StatusService::level(500.0, 1_000.0), FreedomLevel::Almost);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("finhealth tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
