//! Period income and expense totals.

use crate::domain::{DateWindow, PeriodTotals, Transaction, TransactionKind};

/// Folds a period's transactions into income and expense totals.
///
/// See also: [`crate::domain::PeriodTotals`] for the returned data model.
pub struct SummaryService;

impl SummaryService {
    /// Totals non-deleted transactions. The caller is responsible for date
    /// filtering; kinds other than income and expense are ignored.
    pub fn period_totals(transactions: &[Transaction]) -> PeriodTotals {
        let totals = transactions
            .iter()
            .filter(|txn| !txn.deleted)
            .fold(PeriodTotals::default(), |mut acc, txn| {
                match txn.kind {
                    TransactionKind::Income => {
                        acc.income += txn.amount;
                        if txn.is_passive_income() {
                            acc.passive_income += txn.amount;
                        }
                    }
                    TransactionKind::Expense => acc.expense += txn.amount,
                    TransactionKind::Other => {}
                }
                acc
            });
        let totals = PeriodTotals {
            net: totals.income - totals.expense,
            ..totals
        };
        tracing::debug!(
            count = transactions.len(),
            income = totals.income,
            expense = totals.expense,
            "summarized period transactions"
        );
        totals
    }

    /// Keeps the transactions dated inside `window`, preserving order.
    pub fn within(transactions: &[Transaction], window: DateWindow) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| window.contains(txn.date))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IncomeType, ReportPeriod};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn empty_input_yields_zeros() {
        assert_eq!(SummaryService::period_totals(&[]), PeriodTotals::default());
    }

    #[test]
    fn splits_passive_from_active_income() {
        let txns = vec![
            Transaction::income(day(1), 3_000.0, IncomeType::Active),
            Transaction::income(day(2), 500.0, IncomeType::Passive),
            Transaction::expense(day(3), 1_200.0),
        ];
        let totals = SummaryService::period_totals(&txns);
        assert_eq!(totals.income, 3_500.0);
        assert_eq!(totals.passive_income, 500.0);
        assert_eq!(totals.expense, 1_200.0);
        assert_eq!(totals.net, 2_300.0);
    }

    #[test]
    fn deleted_and_unknown_kinds_are_skipped() {
        let mut deleted = Transaction::expense(day(4), 900.0);
        deleted.deleted = true;
        let mut transfer = Transaction::expense(day(5), 50.0);
        transfer.kind = TransactionKind::Other;
        let totals = SummaryService::period_totals(&[deleted, transfer]);
        assert_eq!(totals, PeriodTotals::default());
    }

    #[test]
    fn income_without_subtype_is_not_passive() {
        let mut txn = Transaction::income(day(6), 100.0, IncomeType::Active);
        txn.income_type = None;
        let totals = SummaryService::period_totals(&[txn]);
        assert_eq!(totals.income, 100.0);
        assert_eq!(totals.passive_income, 0.0);
    }

    #[test]
    fn within_keeps_only_window_dates() {
        let txns = vec![
            Transaction::expense(day(30), 1.0),
            Transaction::expense(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 2.0),
        ];
        let window = ReportPeriod::new(2024, 4).unwrap().window();
        let kept = SummaryService::within(&txns, window);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].amount, 1.0);
    }
}
