use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::portfolio_model::{InvestmentEvolution, Position};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::operations::{
    Operation, OPERATION_KIND_BUY, OPERATION_KIND_DIVIDEND, OPERATION_KIND_INTEREST,
    OPERATION_KIND_SELL, OPERATION_KIND_SPLIT,
};
use crate::utils::time_utils::{get_months_between, month_key};

/// Running per-asset state while folding the ledger
#[derive(Default)]
struct PositionState {
    asset_class: String,
    quantity: Decimal,
    invested: Decimal,
    first_buy_date: Option<NaiveDateTime>,
    last_operation_date: Option<NaiveDateTime>,
    brokers: Vec<String>,
}

impl PositionState {
    fn apply(&mut self, operation: &Operation) {
        if self.asset_class.is_empty() {
            self.asset_class = operation.asset_class.clone();
        }

        match operation.kind.as_str() {
            OPERATION_KIND_BUY => {
                self.quantity += operation.quantity;
                self.invested += operation.total_amount;
                self.first_buy_date = Some(match self.first_buy_date {
                    Some(existing) => existing.min(operation.operation_date),
                    None => operation.operation_date,
                });
            }
            OPERATION_KIND_SELL => {
                // Weighted average cost, not FIFO lots. Oversells clamp the
                // position at zero instead of going negative.
                let average_cost = if self.quantity.is_zero() {
                    Decimal::ZERO
                } else {
                    self.invested / self.quantity
                };
                let cost_removed = operation.quantity.min(self.quantity) * average_cost;
                self.quantity = (self.quantity - operation.quantity).max(Decimal::ZERO);
                self.invested = (self.invested - cost_removed).max(Decimal::ZERO);
            }
            // Dividends, interest and splits leave the position untouched;
            // they only feed the monthly evolution series.
            _ => {}
        }

        self.last_operation_date = Some(match self.last_operation_date {
            Some(existing) => existing.max(operation.operation_date),
            None => operation.operation_date,
        });

        if let Some(broker) = &operation.broker {
            if !self.brokers.iter().any(|known| known == broker) {
                self.brokers.push(broker.clone());
            }
        }
    }
}

/// Folds a user's full ledger into one position per (symbol, currency) pair
/// that still holds a positive quantity.
pub fn calculate_positions(operations: &[Operation]) -> Vec<Position> {
    let mut states: HashMap<(String, String), PositionState> = HashMap::new();

    for operation in operations {
        let key = (operation.symbol.clone(), operation.currency.clone());
        states.entry(key).or_default().apply(operation);
    }

    let survivors: Vec<((String, String), PositionState)> = states
        .into_iter()
        .filter(|(_, state)| state.quantity > Decimal::ZERO)
        .collect();

    let total_invested: Decimal = survivors.iter().map(|(_, state)| state.invested).sum();

    let mut positions: Vec<Position> = survivors
        .into_iter()
        .map(|((symbol, currency), state)| {
            build_position(symbol, currency, state, total_invested)
        })
        .collect();

    positions.sort_by(|a, b| a.symbol.cmp(&b.symbol).then_with(|| a.currency.cmp(&b.currency)));
    positions
}

fn build_position(
    symbol: String,
    currency: String,
    state: PositionState,
    total_invested: Decimal,
) -> Position {
    let average_price = if state.quantity.is_zero() {
        Decimal::ZERO
    } else {
        state.invested / state.quantity
    };
    let current_value = state.invested;
    let profit = current_value - state.invested;
    let profit_percentage = if state.invested.is_zero() {
        Decimal::ZERO
    } else {
        (profit / state.invested * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    };
    let portfolio_share = if total_invested.is_zero() {
        Decimal::ZERO
    } else {
        (state.invested / total_invested * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    };
    let holding_days = match (state.first_buy_date, state.last_operation_date) {
        (Some(first), Some(last)) => (last.date() - first.date()).num_days(),
        _ => 0,
    };

    Position {
        symbol,
        asset_class: state.asset_class,
        currency,
        quantity: state.quantity,
        invested: state.invested,
        average_price,
        current_value,
        profit,
        profit_percentage,
        portfolio_share,
        brokers: state.brokers.join(", "),
        first_buy_date: state.first_buy_date,
        last_operation_date: state.last_operation_date,
        holding_days,
    }
}

/// Buckets the ledger into zero-filled calendar months, oldest first,
/// splitting flows into invested, divested and earnings lines.
pub fn calculate_investment_evolution(
    operations: &[Operation],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<InvestmentEvolution> {
    let mut buckets: Vec<InvestmentEvolution> = get_months_between(start_date, end_date)
        .into_iter()
        .map(|month| InvestmentEvolution::empty(month_key(month)))
        .collect();

    let index: HashMap<String, usize> = buckets
        .iter()
        .enumerate()
        .map(|(position, bucket)| (bucket.month.clone(), position))
        .collect();

    for operation in operations {
        let key = month_key(operation.operation_date.date());
        if let Some(&position) = index.get(&key) {
            match operation.kind.as_str() {
                OPERATION_KIND_BUY => buckets[position].invested += operation.total_amount,
                OPERATION_KIND_SELL => buckets[position].divested += operation.total_amount,
                OPERATION_KIND_DIVIDEND | OPERATION_KIND_INTEREST | OPERATION_KIND_SPLIT => {
                    buckets[position].earnings += operation.total_amount
                }
                _ => {}
            }
        }
    }

    buckets
}
