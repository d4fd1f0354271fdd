use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::periods::{DateRange, PeriodToken};

/// One category's share of a period's records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category: String,
    pub value: Decimal,
    /// Share of the period total, in percent rounded to 2 decimals
    pub percentage: Decimal,
    /// Palette color assigned by first-seen order
    pub color: String,
}

/// Totals for one named period with changes against its paired previous
/// window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub period: PeriodToken,
    pub range: DateRange,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub income_change: Decimal,
    pub expense_change: Decimal,
    pub balance_change: Decimal,
}

/// One month of income and expense flow within an evolution window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEvolution {
    /// Calendar month bucket, formatted YYYY-MM
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

impl MonthlyEvolution {
    pub fn empty(month: String) -> Self {
        Self {
            month,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// How often a recurring expense series repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Irregular,
}

impl RecurringFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringFrequency::Weekly => "weekly",
            RecurringFrequency::Biweekly => "biweekly",
            RecurringFrequency::Monthly => "monthly",
            RecurringFrequency::Irregular => "irregular",
        }
    }
}

/// An expense series judged to repeat at a near-constant amount and cadence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub name: String,
    pub category: String,
    pub average_amount: Decimal,
    pub frequency: RecurringFrequency,
    pub occurrences: usize,
    pub average_interval_days: Decimal,
    pub annual_impact: Decimal,
}

/// Health score classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthClassification {
    Excellent,
    Good,
    Attention,
    Critical,
}

/// Composite financial health over the last 12 months
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealth {
    /// 0 to 100, higher is healthier
    pub score: i32,
    pub classification: HealthClassification,
    pub expense_to_income_ratio: Decimal,
    pub positive_month_ratio: Decimal,
    pub recurring_ratio: Decimal,
}

/// 50/30/20 split of the average monthly income
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSuggestion {
    pub average_monthly_income: Decimal,
    pub average_monthly_expense: Decimal,
    pub essentials_target: Decimal,
    pub lifestyle_target: Decimal,
    pub savings_target: Decimal,
}

/// Income, expense and balance totals of one resolved window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub range: DateRange,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Two windows side by side with their differences and percentage changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub current: PeriodTotals,
    pub previous: PeriodTotals,
    pub income_difference: Decimal,
    pub expense_difference: Decimal,
    pub balance_difference: Decimal,
    pub income_change: Decimal,
    pub expense_change: Decimal,
    pub balance_change: Decimal,
}
