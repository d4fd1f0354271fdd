/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Implied decimal places for operation quantities
pub const QUANTITY_SCALE: u32 = 4;

/// Implied decimal places for monetary amounts
pub const MONEY_SCALE: u32 = 2;

/// Number of sibling rows created for a recurring income
pub const RECURRING_INCOME_MONTHS: u32 = 12;
