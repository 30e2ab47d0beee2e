use crate::domain::Loan;

pub struct LoanService;

impl LoanService {
    /// Monthly obligations of active loans; closed loans contribute nothing
    /// even when the source hands them over.
    pub fn passive_expense(loans: &[Loan]) -> f64 {
        let total = loans
            .iter()
            .filter(|loan| loan.active)
            .fold(0.0, |sum, loan| sum + loan.monthly_payment);
        tracing::debug!(count = loans.len(), total, "summed active loan payments");
        total
    }
}
