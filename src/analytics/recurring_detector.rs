use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::analytics_constants::{
    BIWEEKLY_ANNUAL_MULTIPLIER, BIWEEKLY_GAP_CEILING_DAYS, IRREGULAR_ANNUAL_MULTIPLIER,
    MONTHLY_ANNUAL_MULTIPLIER, MONTHLY_GAP_CEILING_DAYS, RECURRING_MIN_OCCURRENCES,
    WEEKLY_ANNUAL_MULTIPLIER, WEEKLY_GAP_CEILING_DAYS,
};
use super::analytics_model::{RecurringExpense, RecurringFrequency};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::expenses::Expense;

struct SeriesEntry {
    amount: Decimal,
    date: NaiveDateTime,
}

struct Series {
    display_name: String,
    category: String,
    entries: Vec<SeriesEntry>,
}

/// Scans a user's expenses for series that repeat at a near-constant amount
/// and interval. Groups are keyed by lowercased name and category; a group
/// qualifies only when every amount stays within 10% of the group mean.
pub fn detect_recurring_expenses(expenses: &[Expense]) -> Vec<RecurringExpense> {
    let mut groups: HashMap<(String, String), Series> = HashMap::new();

    for expense in expenses {
        let key = (expense.name.to_lowercase(), expense.category.clone());
        let series = groups.entry(key).or_insert_with(|| Series {
            display_name: expense.name.clone(),
            category: expense.category.clone(),
            entries: Vec::new(),
        });
        series.entries.push(SeriesEntry {
            amount: Decimal::new(expense.amount, 2),
            date: expense.expense_date,
        });
    }

    let mut recurring: Vec<RecurringExpense> = groups
        .into_values()
        .filter_map(evaluate_series)
        .collect();

    recurring.sort_by(|a, b| {
        b.annual_impact
            .cmp(&a.annual_impact)
            .then_with(|| a.name.cmp(&b.name))
    });
    recurring
}

fn evaluate_series(mut series: Series) -> Option<RecurringExpense> {
    if series.entries.len() < RECURRING_MIN_OCCURRENCES {
        return None;
    }

    let count = Decimal::from(series.entries.len());
    let mean: Decimal = series.entries.iter().map(|e| e.amount).sum::<Decimal>() / count;

    // Every entry must sit strictly within 10% of the mean, otherwise the
    // series is too noisy to be an obligation.
    let tolerance = mean.abs() * dec!(0.10);
    if series
        .entries
        .iter()
        .any(|entry| (entry.amount - mean).abs() >= tolerance)
    {
        return None;
    }

    series.entries.sort_by_key(|entry| entry.date);
    let gap_total: i64 = series
        .entries
        .windows(2)
        .map(|pair| (pair[1].date.date() - pair[0].date.date()).num_days())
        .sum();
    let gap_count = series.entries.len() as i64 - 1;
    let average_gap = Decimal::from(gap_total) / Decimal::from(gap_count);

    let frequency = classify_frequency(average_gap);
    let annual_impact =
        (mean * Decimal::from(annual_multiplier(frequency))).round_dp(DISPLAY_DECIMAL_PRECISION);

    Some(RecurringExpense {
        name: series.display_name,
        category: series.category,
        average_amount: mean.round_dp(DISPLAY_DECIMAL_PRECISION),
        frequency,
        occurrences: series.entries.len(),
        average_interval_days: average_gap.round_dp(DISPLAY_DECIMAL_PRECISION),
        annual_impact,
    })
}

fn classify_frequency(average_gap: Decimal) -> RecurringFrequency {
    if average_gap <= Decimal::from(WEEKLY_GAP_CEILING_DAYS) {
        RecurringFrequency::Weekly
    } else if average_gap <= Decimal::from(BIWEEKLY_GAP_CEILING_DAYS) {
        RecurringFrequency::Biweekly
    } else if average_gap <= Decimal::from(MONTHLY_GAP_CEILING_DAYS) {
        RecurringFrequency::Monthly
    } else {
        RecurringFrequency::Irregular
    }
}

fn annual_multiplier(frequency: RecurringFrequency) -> i64 {
    match frequency {
        RecurringFrequency::Weekly => WEEKLY_ANNUAL_MULTIPLIER,
        RecurringFrequency::Biweekly => BIWEEKLY_ANNUAL_MULTIPLIER,
        RecurringFrequency::Monthly => MONTHLY_ANNUAL_MULTIPLIER,
        RecurringFrequency::Irregular => IRREGULAR_ANNUAL_MULTIPLIER,
    }
}
