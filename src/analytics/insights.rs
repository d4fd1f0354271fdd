use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analytics_constants::ANALYTICS_WINDOW_MONTHS;
use super::analytics_model::{BudgetSuggestion, FinancialHealth, HealthClassification};
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Inputs already aggregated over the last-12-months window
pub struct HealthInputs {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Months whose balance came out positive
    pub positive_months: usize,
    /// Months with any income or expense at all
    pub active_months: usize,
    /// Annualized recurring impact divided by 12
    pub recurring_monthly_impact: Decimal,
}

/// Scores financial health from 100 downward through fixed penalty tiers.
pub fn build_financial_health(inputs: HealthInputs) -> FinancialHealth {
    let mut score: i32 = 100;

    let expense_to_income_ratio = if inputs.total_income.is_zero() {
        Decimal::ZERO
    } else {
        inputs.total_expense / inputs.total_income
    };
    score -= spending_penalty(inputs.total_income, inputs.total_expense, expense_to_income_ratio);

    let positive_month_ratio = if inputs.active_months == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(inputs.positive_months as i64) / Decimal::from(inputs.active_months as i64)
    };
    if inputs.active_months > 0 {
        score -= consistency_penalty(positive_month_ratio);
    }

    let average_monthly_income = inputs.total_income / Decimal::from(ANALYTICS_WINDOW_MONTHS);
    let recurring_ratio = if average_monthly_income.is_zero() {
        Decimal::ZERO
    } else {
        inputs.recurring_monthly_impact / average_monthly_income
    };
    score -= obligation_penalty(
        average_monthly_income,
        inputs.recurring_monthly_impact,
        recurring_ratio,
    );

    let score = score.clamp(0, 100);
    FinancialHealth {
        score,
        classification: classify(score),
        expense_to_income_ratio: expense_to_income_ratio.round_dp(DISPLAY_DECIMAL_PRECISION),
        positive_month_ratio: positive_month_ratio.round_dp(DISPLAY_DECIMAL_PRECISION),
        recurring_ratio: recurring_ratio.round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}

fn spending_penalty(income: Decimal, expense: Decimal, ratio: Decimal) -> i32 {
    if income.is_zero() {
        // Spending with no income at all lands in the worst tier.
        return if expense > Decimal::ZERO { 40 } else { 0 };
    }
    if ratio > dec!(1.0) {
        40
    } else if ratio > dec!(0.9) {
        30
    } else if ratio > dec!(0.7) {
        15
    } else if ratio > dec!(0.5) {
        5
    } else {
        0
    }
}

fn consistency_penalty(positive_ratio: Decimal) -> i32 {
    if positive_ratio < dec!(0.25) {
        30
    } else if positive_ratio < dec!(0.5) {
        20
    } else if positive_ratio < dec!(0.75) {
        10
    } else {
        0
    }
}

fn obligation_penalty(
    average_monthly_income: Decimal,
    recurring_monthly_impact: Decimal,
    ratio: Decimal,
) -> i32 {
    if average_monthly_income.is_zero() {
        return if recurring_monthly_impact > Decimal::ZERO {
            30
        } else {
            0
        };
    }
    if ratio > dec!(0.5) {
        30
    } else if ratio > dec!(0.3) {
        20
    } else if ratio > dec!(0.15) {
        10
    } else {
        0
    }
}

fn classify(score: i32) -> HealthClassification {
    if score >= 80 {
        HealthClassification::Excellent
    } else if score >= 60 {
        HealthClassification::Good
    } else if score >= 40 {
        HealthClassification::Attention
    } else {
        HealthClassification::Critical
    }
}

/// 50/30/20 split of the average monthly income over the last 12 months.
pub fn build_budget_suggestion(
    total_income: Decimal,
    total_expense: Decimal,
) -> BudgetSuggestion {
    let months = Decimal::from(ANALYTICS_WINDOW_MONTHS);
    let average_monthly_income = (total_income / months).round_dp(DISPLAY_DECIMAL_PRECISION);
    let average_monthly_expense = (total_expense / months).round_dp(DISPLAY_DECIMAL_PRECISION);

    BudgetSuggestion {
        average_monthly_income,
        average_monthly_expense,
        essentials_target: (average_monthly_income * dec!(0.5))
            .round_dp(DISPLAY_DECIMAL_PRECISION),
        lifestyle_target: (average_monthly_income * dec!(0.3)).round_dp(DISPLAY_DECIMAL_PRECISION),
        savings_target: (average_monthly_income * dec!(0.2)).round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}
