use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's current holding in one asset, derived entirely from the
/// operation ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub asset_class: String,
    pub currency: String,
    pub quantity: Decimal,
    /// Capital still allocated to the position at weighted average cost
    pub invested: Decimal,
    pub average_price: Decimal,
    /// No live pricing is integrated, so this equals invested capital
    pub current_value: Decimal,
    pub profit: Decimal,
    pub profit_percentage: Decimal,
    /// This position's share of the total invested capital, in percent
    pub portfolio_share: Decimal,
    /// Brokers seen across the asset's operations, comma separated
    pub brokers: String,
    pub first_buy_date: Option<NaiveDateTime>,
    pub last_operation_date: Option<NaiveDateTime>,
    /// Whole days between the first buy and the latest operation
    pub holding_days: i64,
}

/// One month of investment flows within an evolution window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentEvolution {
    /// Calendar month bucket, formatted YYYY-MM
    pub month: String,
    /// Sum of BUY totals in the month
    pub invested: Decimal,
    /// Sum of SELL totals in the month
    pub divested: Decimal,
    /// Sum of DIVIDEND, INTEREST and SPLIT totals in the month
    pub earnings: Decimal,
}

impl InvestmentEvolution {
    pub fn empty(month: String) -> Self {
        Self {
            month,
            invested: Decimal::ZERO,
            divested: Decimal::ZERO,
            earnings: Decimal::ZERO,
        }
    }
}
