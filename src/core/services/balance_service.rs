use crate::domain::Account;

pub struct BalanceService;

impl BalanceService {
    /// Sums the balances of accounts that are not excluded from the total.
    pub fn total_balance(accounts: &[Account]) -> f64 {
        let total = accounts
            .iter()
            .filter(|account| !account.exclude_from_total)
            .fold(0.0, |sum, account| sum + account.balance);
        tracing::debug!(count = accounts.len(), total, "summed account balances");
        total
    }
}
