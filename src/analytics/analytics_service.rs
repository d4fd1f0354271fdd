use chrono::{Local, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::analytics_constants::{ANALYTICS_WINDOW_MONTHS, DEFAULT_TOP_VILLAINS_LIMIT};
use super::analytics_model::{
    BudgetSuggestion, CategorySlice, FinancialHealth, MonthlyEvolution, PeriodComparison,
    PeriodStats, PeriodTotals, RecurringExpense,
};
use super::analytics_traits::AnalyticsServiceTrait;
use super::insights::{build_budget_suggestion, build_financial_health, HealthInputs};
use super::period_aggregator::{
    build_category_breakdown, build_monthly_evolution, CategorizedAmount,
};
use super::periods::{balance_change, percent_change, DateRange, PeriodSelection, PeriodToken};
use super::recurring_detector::detect_recurring_expenses;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::incomes::{Income, IncomeRepositoryTrait};
use crate::Result;

/// Service deriving spending analytics from income and expense records
pub struct AnalyticsService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

fn income_amounts(incomes: &[Income]) -> Vec<CategorizedAmount> {
    incomes
        .iter()
        .map(|income| CategorizedAmount {
            category: income.category.clone(),
            amount: income.amount,
            date: income.income_date,
        })
        .collect()
}

fn expense_amounts(expenses: &[Expense]) -> Vec<CategorizedAmount> {
    expenses
        .iter()
        .map(|expense| CategorizedAmount {
            category: expense.category.clone(),
            amount: expense.amount,
            date: expense.expense_date,
        })
        .collect()
}

impl AnalyticsService {
    /// Creates a new AnalyticsService instance with injected dependencies
    pub fn new(
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            income_repository,
            expense_repository,
        }
    }

    fn fetch_incomes(&self, user_id: &str, range: &DateRange) -> Result<Vec<Income>> {
        self.income_repository
            .list_by_user(user_id, Some(range.start), Some(range.end))
    }

    fn fetch_expenses(&self, user_id: &str, range: &DateRange) -> Result<Vec<Expense>> {
        self.expense_repository
            .list_by_user(user_id, Some(range.start), Some(range.end))
    }

    /// Income and expense totals of one window, in major currency units
    fn period_totals(&self, user_id: &str, range: &DateRange) -> Result<(Decimal, Decimal)> {
        let income_cents: i64 = self
            .fetch_incomes(user_id, range)?
            .iter()
            .map(|income| income.amount)
            .sum();
        let expense_cents: i64 = self
            .fetch_expenses(user_id, range)?
            .iter()
            .map(|expense| expense.amount)
            .sum();
        Ok((
            Decimal::new(income_cents, 2),
            Decimal::new(expense_cents, 2),
        ))
    }

    fn totals_of(&self, user_id: &str, range: DateRange) -> Result<PeriodTotals> {
        let (income, expense) = self.period_totals(user_id, &range)?;
        Ok(PeriodTotals {
            range,
            income,
            expense,
            balance: income - expense,
        })
    }

    pub(crate) fn expense_breakdown_at(
        &self,
        user_id: &str,
        period: PeriodSelection,
        today: NaiveDate,
    ) -> Result<Vec<CategorySlice>> {
        let range = period.resolve(today);
        let expenses = self.fetch_expenses(user_id, &range)?;
        Ok(build_category_breakdown(&expense_amounts(&expenses)))
    }

    pub(crate) fn income_breakdown_at(
        &self,
        user_id: &str,
        period: PeriodSelection,
        today: NaiveDate,
    ) -> Result<Vec<CategorySlice>> {
        let range = period.resolve(today);
        let incomes = self.fetch_incomes(user_id, &range)?;
        Ok(build_category_breakdown(&income_amounts(&incomes)))
    }

    pub(crate) fn period_stats_at(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<PeriodStats>> {
        let mut stats = Vec::with_capacity(PeriodToken::ALL.len());
        for token in PeriodToken::ALL {
            let current = self.totals_of(user_id, token.resolve(today))?;
            let previous = self.totals_of(user_id, token.resolve_previous(today))?;
            stats.push(PeriodStats {
                period: token,
                range: current.range,
                income: current.income,
                expense: current.expense,
                balance: current.balance,
                income_change: percent_change(current.income, previous.income),
                expense_change: percent_change(current.expense, previous.expense),
                balance_change: balance_change(current.balance, previous.balance),
            });
        }
        Ok(stats)
    }

    pub(crate) fn monthly_evolution_at(
        &self,
        user_id: &str,
        period: PeriodSelection,
        today: NaiveDate,
    ) -> Result<Vec<MonthlyEvolution>> {
        let range = period.resolve(today);
        let incomes = self.fetch_incomes(user_id, &range)?;
        let expenses = self.fetch_expenses(user_id, &range)?;
        Ok(build_monthly_evolution(
            &income_amounts(&incomes),
            &expense_amounts(&expenses),
            range.start_day(),
            range.end_day(),
        ))
    }

    pub(crate) fn financial_health_at(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<FinancialHealth> {
        let range = PeriodToken::Last12Months.resolve(today);
        let incomes = self.fetch_incomes(user_id, &range)?;
        let expenses = self.fetch_expenses(user_id, &range)?;

        let total_income = Decimal::new(incomes.iter().map(|i| i.amount).sum::<i64>(), 2);
        let total_expense = Decimal::new(expenses.iter().map(|e| e.amount).sum::<i64>(), 2);

        let evolution = build_monthly_evolution(
            &income_amounts(&incomes),
            &expense_amounts(&expenses),
            range.start_day(),
            range.end_day(),
        );
        let active_months = evolution
            .iter()
            .filter(|month| !month.income.is_zero() || !month.expense.is_zero())
            .count();
        let positive_months = evolution
            .iter()
            .filter(|month| month.balance > Decimal::ZERO)
            .count();

        let recurring_annual: Decimal = detect_recurring_expenses(&expenses)
            .iter()
            .map(|series| series.annual_impact)
            .sum();
        let recurring_monthly_impact = recurring_annual / Decimal::from(ANALYTICS_WINDOW_MONTHS);

        Ok(build_financial_health(HealthInputs {
            total_income,
            total_expense,
            positive_months,
            active_months,
            recurring_monthly_impact,
        }))
    }

    pub(crate) fn budget_suggestion_at(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<BudgetSuggestion> {
        let range = PeriodToken::Last12Months.resolve(today);
        let (income, expense) = self.period_totals(user_id, &range)?;
        Ok(build_budget_suggestion(income, expense))
    }

    pub(crate) fn compare_periods_at(
        &self,
        user_id: &str,
        current_period: PeriodSelection,
        previous_period: PeriodSelection,
        today: NaiveDate,
    ) -> Result<PeriodComparison> {
        let current = self.totals_of(user_id, current_period.resolve(today))?;
        let previous = self.totals_of(user_id, previous_period.resolve(today))?;

        Ok(PeriodComparison {
            income_difference: current.income - previous.income,
            expense_difference: current.expense - previous.expense,
            balance_difference: current.balance - previous.balance,
            income_change: percent_change(current.income, previous.income),
            expense_change: percent_change(current.expense, previous.expense),
            balance_change: balance_change(current.balance, previous.balance),
            current,
            previous,
        })
    }

    pub(crate) fn top_villains_at(
        &self,
        user_id: &str,
        period: PeriodSelection,
        limit: Option<usize>,
        today: NaiveDate,
    ) -> Result<Vec<CategorySlice>> {
        let mut breakdown = self.expense_breakdown_at(user_id, period, today)?;
        breakdown.truncate(limit.unwrap_or(DEFAULT_TOP_VILLAINS_LIMIT));
        Ok(breakdown)
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_expense_breakdown(
        &self,
        user_id: &str,
        period: PeriodSelection,
    ) -> Result<Vec<CategorySlice>> {
        self.expense_breakdown_at(user_id, period, Local::now().date_naive())
    }

    fn get_income_breakdown(
        &self,
        user_id: &str,
        period: PeriodSelection,
    ) -> Result<Vec<CategorySlice>> {
        self.income_breakdown_at(user_id, period, Local::now().date_naive())
    }

    fn get_period_stats(&self, user_id: &str) -> Result<Vec<PeriodStats>> {
        debug!("Calculating period stats for user {}", user_id);
        self.period_stats_at(user_id, Local::now().date_naive())
    }

    fn get_monthly_evolution(
        &self,
        user_id: &str,
        period: PeriodSelection,
    ) -> Result<Vec<MonthlyEvolution>> {
        self.monthly_evolution_at(user_id, period, Local::now().date_naive())
    }

    fn get_recurring_expenses(&self, user_id: &str) -> Result<Vec<RecurringExpense>> {
        let expenses = self.expense_repository.list_by_user(user_id, None, None)?;
        Ok(detect_recurring_expenses(&expenses))
    }

    fn get_financial_health(&self, user_id: &str) -> Result<FinancialHealth> {
        debug!("Calculating financial health for user {}", user_id);
        self.financial_health_at(user_id, Local::now().date_naive())
    }

    fn get_budget_suggestion(&self, user_id: &str) -> Result<BudgetSuggestion> {
        self.budget_suggestion_at(user_id, Local::now().date_naive())
    }

    fn compare_periods(
        &self,
        user_id: &str,
        current: PeriodSelection,
        previous: PeriodSelection,
    ) -> Result<PeriodComparison> {
        self.compare_periods_at(user_id, current, previous, Local::now().date_naive())
    }

    fn get_top_villains(
        &self,
        user_id: &str,
        period: PeriodSelection,
        limit: Option<usize>,
    ) -> Result<Vec<CategorySlice>> {
        self.top_villains_at(user_id, period, limit, Local::now().date_naive())
    }
}
