use super::analytics_model::{
    BudgetSuggestion, CategorySlice, FinancialHealth, MonthlyEvolution, PeriodComparison,
    PeriodStats, RecurringExpense,
};
use super::periods::PeriodSelection;
use crate::Result;

/// Trait defining the analytics service interface. All operations are pure
/// reads composed from store queries.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Expense share per category within the resolved window
    fn get_expense_breakdown(
        &self,
        user_id: &str,
        period: PeriodSelection,
    ) -> Result<Vec<CategorySlice>>;
    /// Income share per category within the resolved window
    fn get_income_breakdown(
        &self,
        user_id: &str,
        period: PeriodSelection,
    ) -> Result<Vec<CategorySlice>>;
    /// Totals for every named period with changes against the paired
    /// previous window
    fn get_period_stats(&self, user_id: &str) -> Result<Vec<PeriodStats>>;
    /// Zero-filled month-by-month income and expense series
    fn get_monthly_evolution(
        &self,
        user_id: &str,
        period: PeriodSelection,
    ) -> Result<Vec<MonthlyEvolution>>;
    /// Expense series repeating at a near-constant amount and cadence,
    /// scanned over the user's full history
    fn get_recurring_expenses(&self, user_id: &str) -> Result<Vec<RecurringExpense>>;
    /// Composite health score over the last 12 months
    fn get_financial_health(&self, user_id: &str) -> Result<FinancialHealth>;
    /// 50/30/20 budget targets from the last 12 months of income
    fn get_budget_suggestion(&self, user_id: &str) -> Result<BudgetSuggestion>;
    /// Two windows side by side with differences and percentage changes
    fn compare_periods(
        &self,
        user_id: &str,
        current: PeriodSelection,
        previous: PeriodSelection,
    ) -> Result<PeriodComparison>;
    /// The heaviest expense categories of the window
    fn get_top_villains(
        &self,
        user_id: &str,
        period: PeriodSelection,
        limit: Option<usize>,
    ) -> Result<Vec<CategorySlice>>;
}
