//! Assembles the composite dashboard report for one period.

use crate::core::services::{
    BalanceService, HealthService, ItemsService, LoanService, StatusService, SummaryService,
};
use crate::domain::{
    Account, DashboardReport, FinancialSummary, Item, Loan, ReportPeriod, Transaction,
};
use crate::errors::SourceResult;
use crate::storage::FinanceSource;

/// Orchestrates the aggregation services against a [`FinanceSource`].
///
/// Each fetch happens once; the first failing fetch is returned as-is and no
/// retry is attempted.
pub struct DashboardService;

impl DashboardService {
    pub fn assemble<S>(source: &S, period: ReportPeriod) -> SourceResult<DashboardReport>
    where
        S: FinanceSource + ?Sized,
    {
        let accounts = source.accounts()?;
        let transactions = source.transactions(period.window())?;
        let loans = source.active_loans()?;
        let items = source.items()?;
        let report = Self::from_snapshot(period, accounts, transactions, loans, items);
        tracing::info!(
            period = %period.label(),
            score = report.health.score,
            grade = %report.health.grade,
            status = ?report.status.status,
            "assembled dashboard"
        );
        Ok(report)
    }

    /// Assembles the dashboard for the current calendar month.
    pub fn assemble_current<S>(source: &S) -> SourceResult<DashboardReport>
    where
        S: FinanceSource + ?Sized,
    {
        Self::assemble(source, ReportPeriod::current())
    }

    /// Builds a report from records that were already fetched. `transactions`
    /// are expected to be limited to `period` by the caller.
    pub fn from_snapshot(
        period: ReportPeriod,
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        loans: Vec<Loan>,
        items: Vec<Item>,
    ) -> DashboardReport {
        let summary = FinancialSummary::compose(
            SummaryService::period_totals(&transactions),
            BalanceService::total_balance(&accounts),
            LoanService::passive_expense(&loans),
            ItemsService::totals(&items),
        );
        let health = HealthService::score(&summary.health_inputs());
        let status = StatusService::classify(summary.passive_income, summary.expense);
        DashboardReport {
            period,
            accounts,
            transactions,
            loans,
            items,
            summary,
            health,
            status,
        }
    }
}
