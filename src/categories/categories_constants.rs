/// Category types
///
/// A category applies either to income records or to expense records;
/// the (name, type) pair is globally unique.
pub const CATEGORY_TYPE_INCOME: &str = "income";

pub const CATEGORY_TYPE_EXPENSE: &str = "expense";

pub const CATEGORY_TYPES: &[&str] = &[CATEGORY_TYPE_INCOME, CATEGORY_TYPE_EXPENSE];
