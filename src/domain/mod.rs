//! Read-only input records and the reporting period they are scoped to.

pub mod account;
pub mod common;
pub mod item;
pub mod loan;
pub mod period;
pub mod report;
pub mod transaction;

pub use account::Account;
pub use common::{amount_from_value, lenient_amount, parse_amount, Identifiable, NamedEntity};
pub use item::{Item, ItemKind};
pub use loan::Loan;
pub use period::{DateWindow, PeriodError, ReportPeriod};
pub use report::{
    DashboardReport, FinancialSummary, FreedomLevel, FreedomStatus, Grade, HealthBands,
    HealthInputs, HealthScore, ItemTotals, PeriodTotals, StatusColor,
};
pub use transaction::{IncomeType, Transaction, TransactionKind};
