/// Fixed palette cycled over breakdown categories in first-seen order
pub const CATEGORY_COLOR_PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#2ECC71", "#E74C3C",
    "#3498DB", "#F39C12",
];

/// Breakdowns keep at most this many categories
pub const TOP_CATEGORY_LIMIT: usize = 10;

/// Top villains default to this many categories when no limit is given
pub const DEFAULT_TOP_VILLAINS_LIMIT: usize = 5;

/// Minimum entries before a group can be considered recurring
pub const RECURRING_MIN_OCCURRENCES: usize = 2;

/// Average day-gap ceilings for frequency classification
pub const WEEKLY_GAP_CEILING_DAYS: i64 = 7;
pub const BIWEEKLY_GAP_CEILING_DAYS: i64 = 14;
pub const MONTHLY_GAP_CEILING_DAYS: i64 = 35;

/// Yearly occurrence multipliers per frequency. The irregular multiplier is
/// a legacy heuristic kept for output compatibility.
pub const WEEKLY_ANNUAL_MULTIPLIER: i64 = 52;
pub const BIWEEKLY_ANNUAL_MULTIPLIER: i64 = 26;
pub const MONTHLY_ANNUAL_MULTIPLIER: i64 = 12;
pub const IRREGULAR_ANNUAL_MULTIPLIER: i64 = 6;

/// Months in the composite analytics window
pub const ANALYTICS_WINDOW_MONTHS: i64 = 12;
