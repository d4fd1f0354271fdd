pub(crate) mod analytics_constants;
pub(crate) mod analytics_model;
pub(crate) mod analytics_service;
pub(crate) mod analytics_traits;
pub(crate) mod insights;
pub(crate) mod period_aggregator;
pub(crate) mod periods;
pub(crate) mod recurring_detector;


pub use analytics_constants::*;
pub use analytics_model::{
    BudgetSuggestion, CategorySlice, FinancialHealth, HealthClassification, MonthlyEvolution,
    PeriodComparison, PeriodStats, PeriodTotals, RecurringExpense, RecurringFrequency,
};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
pub use insights::{build_budget_suggestion, build_financial_health, HealthInputs};
pub use period_aggregator::{build_category_breakdown, build_monthly_evolution, CategorizedAmount};
pub use periods::{balance_change, percent_change, DateRange, PeriodSelection, PeriodToken};
pub use recurring_detector::detect_recurring_expenses;
