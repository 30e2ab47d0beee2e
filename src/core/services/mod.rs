pub mod balance_service;
pub mod dashboard_service;
pub mod health_service;
pub mod items_service;
pub mod loan_service;
pub mod status_service;
pub mod summary_service;

pub use balance_service::BalanceService;
pub use dashboard_service::DashboardService;
pub use health_service::{HealthService, NO_EXPENSE_AWARD, NO_INCOME_AWARD};
pub use items_service::ItemsService;
pub use loan_service::LoanService;
pub use status_service::StatusService;
pub use summary_service::SummaryService;
