use crate::domain::{FreedomLevel, FreedomStatus};

/// Classifies how far passive income goes towards covering expenses.
pub struct StatusService;

impl StatusService {
    pub fn classify(passive_income: f64, expense: f64) -> FreedomStatus {
        FreedomStatus::from(Self::level(passive_income, expense))
    }

    /// Rules are checked top to bottom and the first match wins.
    ///
    /// `Freedom` requires expenses; `Almost` has no such guard, so a user
    /// with neither passive income nor expenses lands on `Almost` (0 >= 0)
    /// rather than `Start`.
    pub fn level(passive_income: f64, expense: f64) -> FreedomLevel {
        match (passive_income, expense) {
            (passive, expense) if passive >= expense && expense > 0.0 => FreedomLevel::Freedom,
            (passive, expense) if passive >= 0.5 * expense => FreedomLevel::Almost,
            (passive, _) if passive > 0.0 => FreedomLevel::Progress,
            _ => FreedomLevel::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusColor;

    #[test]
    fn covering_expenses_is_freedom() {
        let status = StatusService::classify(2_000.0, 1_500.0);
        assert_eq!(status.status, FreedomLevel::Freedom);
        assert_eq!(status.color, StatusColor::Green);
        assert_eq!(StatusService::level(1_500.0, 1_500.0), FreedomLevel::Freedom);
    }

    #[test]
    fn half_coverage_is_almost() {
        assert_eq!(StatusService::level(500_000.0, 1_000_000.0), FreedomLevel::Almost);
    }

    #[test]
    fn some_passive_income_is_progress() {
        assert_eq!(StatusService::level(100.0, 1_000.0), FreedomLevel::Progress);
    }

    #[test]
    fn no_passive_income_with_expenses_is_start() {
        let status = StatusService::classify(0.0, 1_000.0);
        assert_eq!(status.status, FreedomLevel::Start);
        assert_eq!(status.label, "Getting Started");
    }

    #[test]
    fn zero_income_and_zero_expense_is_almost_not_start() {
        assert_eq!(StatusService::level(0.0, 0.0), FreedomLevel::Almost);
    }

    #[test]
    fn passive_income_without_expenses_is_almost() {
        // The freedom rule needs expenses, so the second rule catches this.
        assert_eq!(StatusService::level(800.0, 0.0), FreedomLevel::Almost);
    }
}
