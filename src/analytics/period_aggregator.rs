use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::analytics_constants::{CATEGORY_COLOR_PALETTE, TOP_CATEGORY_LIMIT};
use super::analytics_model::{CategorySlice, MonthlyEvolution};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::utils::time_utils::{get_months_between, month_key};

/// A dated record reduced to what the aggregator needs
pub struct CategorizedAmount {
    pub category: String,
    /// Minor currency units (cents)
    pub amount: i64,
    pub date: NaiveDateTime,
}

/// Sums amounts per category, assigns palette colors by first-seen order,
/// sorts descending by value and keeps the top 10.
pub fn build_category_breakdown(records: &[CategorizedAmount]) -> Vec<CategorySlice> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in records {
        if !totals.contains_key(record.category.as_str()) {
            first_seen.push(record.category.as_str());
        }
        *totals.entry(record.category.as_str()).or_insert(0) += record.amount;
    }

    let grand_total: i64 = totals.values().sum();

    let mut slices: Vec<CategorySlice> = first_seen
        .iter()
        .enumerate()
        .map(|(order, category)| {
            let value_cents = totals.get(category).copied().unwrap_or(0);
            let value = Decimal::new(value_cents, 2);
            let percentage = if grand_total == 0 {
                Decimal::ZERO
            } else {
                (Decimal::from(value_cents) / Decimal::from(grand_total) * dec!(100))
                    .round_dp(DISPLAY_DECIMAL_PRECISION)
            };
            CategorySlice {
                category: category.to_string(),
                value,
                percentage,
                color: CATEGORY_COLOR_PALETTE[order % CATEGORY_COLOR_PALETTE.len()].to_string(),
            }
        })
        .collect();

    slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.category.cmp(&b.category)));
    slices.truncate(TOP_CATEGORY_LIMIT);
    slices
}

/// Buckets incomes and expenses into zero-filled calendar months, oldest
/// first, deriving balance = income - expense per bucket.
pub fn build_monthly_evolution(
    incomes: &[CategorizedAmount],
    expenses: &[CategorizedAmount],
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
) -> Vec<MonthlyEvolution> {
    let mut buckets: Vec<MonthlyEvolution> = get_months_between(start_date, end_date)
        .into_iter()
        .map(|month| MonthlyEvolution::empty(month_key(month)))
        .collect();

    let index: HashMap<String, usize> = buckets
        .iter()
        .enumerate()
        .map(|(position, bucket)| (bucket.month.clone(), position))
        .collect();

    for income in incomes {
        if let Some(&position) = index.get(&month_key(income.date.date())) {
            buckets[position].income += Decimal::new(income.amount, 2);
        }
    }
    for expense in expenses {
        if let Some(&position) = index.get(&month_key(expense.date.date())) {
            buckets[position].expense += Decimal::new(expense.amount, 2);
        }
    }
    for bucket in &mut buckets {
        bucket.balance = bucket.income - bucket.expense;
    }

    buckets
}
