use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported calendar")]
    YearOutOfRange(i32),
    #[error("date window end must be after start")]
    InvalidRange,
}

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if end <= start {
            return Err(PeriodError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Last day that still falls inside the window.
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.start)
    }
}

/// The calendar month a dashboard is assembled for.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
    window: DateWindow,
}

impl ReportPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let start =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::YearOutOfRange(year))?;
        let end = start
            .checked_add_months(Months::new(1))
            .ok_or(PeriodError::YearOutOfRange(year))?;
        Ok(Self {
            year,
            month,
            window: DateWindow::new(start, end)?,
        })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self {
            year: date.year(),
            month: date.month(),
            window: DateWindow { start, end },
        }
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// `YYYY-MM` label used in logs and report headers.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_window_is_half_open() {
        let period = ReportPeriod::new(2024, 2).unwrap();
        let window = period.window();
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 3, 1));
        assert_eq!(window.last_day(), date(2024, 2, 29));
        assert!(window.contains(date(2024, 2, 29)));
        assert!(!window.contains(date(2024, 3, 1)));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let window = ReportPeriod::new(2023, 12).unwrap().window();
        assert_eq!(window.end, date(2024, 1, 1));
    }

    #[test]
    fn rejects_invalid_month() {
        assert_eq!(ReportPeriod::new(2024, 13), Err(PeriodError::InvalidMonth(13)));
        assert_eq!(ReportPeriod::new(2024, 0), Err(PeriodError::InvalidMonth(0)));
    }

    #[test]
    fn containing_matches_explicit_month() {
        assert_eq!(
            ReportPeriod::containing(date(2025, 7, 19)),
            ReportPeriod::new(2025, 7).unwrap()
        );
        assert_eq!(ReportPeriod::new(2025, 7).unwrap().label(), "2025-07");
    }

    #[test]
    fn window_rejects_empty_range() {
        let day = date(2024, 1, 1);
        assert_eq!(DateWindow::new(day, day), Err(PeriodError::InvalidRange));
    }
}
