use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::utils::time_utils::{end_of_day, first_of_month, last_of_month, start_of_day};

/// Named shorthand for a resolved date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodToken {
    ThisMonth,
    LastMonth,
    ThisYear,
    #[serde(rename = "last-12-months")]
    Last12Months,
}

impl PeriodToken {
    pub const ALL: [PeriodToken; 4] = [
        PeriodToken::ThisMonth,
        PeriodToken::LastMonth,
        PeriodToken::ThisYear,
        PeriodToken::Last12Months,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodToken::ThisMonth => "this-month",
            PeriodToken::LastMonth => "last-month",
            PeriodToken::ThisYear => "this-year",
            PeriodToken::Last12Months => "last-12-months",
        }
    }

    /// Inclusive bounds of the period as seen from the given day
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            PeriodToken::ThisMonth => {
                DateRange::from_days(first_of_month(today), last_of_month(today))
            }
            PeriodToken::LastMonth => {
                let anchor = shift_months_back(today, 1);
                DateRange::from_days(first_of_month(anchor), last_of_month(anchor))
            }
            PeriodToken::ThisYear => DateRange::from_days(
                first_of_year(today),
                NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
            ),
            PeriodToken::Last12Months => {
                DateRange::from_days(first_of_month(shift_months_back(today, 11)), today)
            }
        }
    }

    /// The paired comparison window that precedes this period
    pub fn resolve_previous(&self, today: NaiveDate) -> DateRange {
        match self {
            PeriodToken::ThisMonth => PeriodToken::LastMonth.resolve(today),
            PeriodToken::LastMonth => {
                let anchor = shift_months_back(today, 2);
                DateRange::from_days(first_of_month(anchor), last_of_month(anchor))
            }
            PeriodToken::ThisYear => {
                let last_year = today.year() - 1;
                DateRange::from_days(
                    NaiveDate::from_ymd_opt(last_year, 1, 1).unwrap_or(today),
                    NaiveDate::from_ymd_opt(last_year, 12, 31).unwrap_or(today),
                )
            }
            PeriodToken::Last12Months => {
                let current_start = first_of_month(shift_months_back(today, 11));
                let previous_start = shift_months_back(current_start, 12);
                let previous_end = current_start.pred_opt().unwrap_or(current_start);
                DateRange::from_days(previous_start, previous_end)
            }
        }
    }
}

/// A named period or an explicit inclusive day pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", untagged)]
pub enum PeriodSelection {
    Token(PeriodToken),
    Custom { start: NaiveDate, end: NaiveDate },
}

impl PeriodSelection {
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            PeriodSelection::Token(token) => token.resolve(today),
            PeriodSelection::Custom { start, end } => DateRange::from_days(*start, *end),
        }
    }
}

/// Inclusive datetime bounds of a resolved period. The end bound always sits
/// at 23:59:59.999 of its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }
}

fn shift_months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Percentage change between two period totals. A zero previous total maps
/// to 100 when anything appeared, 0 otherwise.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        if current > Decimal::ZERO {
            dec!(100)
        } else {
            Decimal::ZERO
        }
    } else {
        ((current - previous) / previous * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// Balance variant of percent_change. Balances can go negative, so the
/// denominator is the magnitude of the previous balance.
pub fn balance_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        if current > Decimal::ZERO {
            dec!(100)
        } else {
            Decimal::ZERO
        }
    } else {
        ((current - previous) / previous.abs() * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}
