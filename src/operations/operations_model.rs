use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::operations_constants::OPERATION_KINDS;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MONEY_SCALE, QUANTITY_SCALE};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing one investment ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub asset_class: String,
    pub kind: String,
    pub operation_date: NaiveDateTime,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Always quantity * unit price, rounded to 2 decimal places
    pub total_amount: Decimal,
    pub currency: String,
    pub broker: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub asset_class: String,
    pub kind: String,
    pub operation_date: NaiveDateTime,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewOperation {
    /// Validates the new operation data
    pub fn validate(&self) -> Result<()> {
        validate_operation_fields(
            &self.symbol,
            &self.kind,
            &self.currency,
            self.quantity,
            self.unit_price,
        )
    }

    /// Total amount derived from quantity and unit price
    pub fn computed_total(&self) -> Decimal {
        (self.quantity * self.unit_price).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// Input model for updating an existing ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUpdate {
    pub id: Option<String>,
    pub symbol: String,
    pub asset_class: String,
    pub kind: String,
    pub operation_date: NaiveDateTime,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OperationUpdate {
    /// Validates the operation update data
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Operation ID is required for updates".to_string(),
            )));
        }
        validate_operation_fields(
            &self.symbol,
            &self.kind,
            &self.currency,
            self.quantity,
            self.unit_price,
        )
    }

    /// Total amount derived from quantity and unit price
    pub fn computed_total(&self) -> Decimal {
        (self.quantity * self.unit_price).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

fn validate_operation_fields(
    symbol: &str,
    kind: &str,
    currency: &str,
    quantity: Decimal,
    unit_price: Decimal,
) -> Result<()> {
    if symbol.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Operation symbol cannot be empty".to_string(),
        )));
    }
    if !OPERATION_KINDS.contains(&kind) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Unknown operation kind: {}",
            kind
        ))));
    }
    if currency.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Operation currency cannot be empty".to_string(),
        )));
    }
    if quantity <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Operation quantity must be positive".to_string(),
        )));
    }
    if unit_price < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Operation unit price cannot be negative".to_string(),
        )));
    }
    Ok(())
}

/// Database model for operations. Quantity carries 4 implied decimal places,
/// unit price and total amount carry 2.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::operations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OperationDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub asset_class: String,
    pub kind: String,
    pub operation_date: NaiveDateTime,
    pub quantity: i64,
    pub unit_price: i64,
    pub total_amount: i64,
    pub currency: String,
    pub broker: Option<String>,
    pub notes: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

/// Converts a decimal value to its fixed-point storage representation
pub(crate) fn to_scaled(value: Decimal, scale: u32) -> Result<i64> {
    let factor = Decimal::from(10_i64.pow(scale));
    (value.round_dp(scale) * factor).to_i64().ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Value {} does not fit fixed-point storage",
            value
        )))
    })
}

/// Reads a fixed-point storage value back into a decimal
pub(crate) fn from_scaled(raw: i64, scale: u32) -> Decimal {
    Decimal::new(raw, scale)
}

// Conversion implementations
impl From<OperationDB> for Operation {
    fn from(db: OperationDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            asset_class: db.asset_class,
            kind: db.kind,
            operation_date: db.operation_date,
            quantity: from_scaled(db.quantity, QUANTITY_SCALE),
            unit_price: from_scaled(db.unit_price, MONEY_SCALE),
            total_amount: from_scaled(db.total_amount, MONEY_SCALE),
            currency: db.currency,
            broker: db.broker,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl OperationDB {
    pub fn try_from_new(user_id: &str, domain: NewOperation) -> Result<Self> {
        let now = chrono::Utc::now().naive_utc();
        let total_amount = to_scaled(domain.computed_total(), MONEY_SCALE)?;
        Ok(Self {
            id: domain.id.unwrap_or_default(),
            user_id: user_id.to_string(),
            symbol: domain.symbol,
            asset_class: domain.asset_class,
            kind: domain.kind,
            operation_date: domain.operation_date,
            quantity: to_scaled(domain.quantity, QUANTITY_SCALE)?,
            unit_price: to_scaled(domain.unit_price, MONEY_SCALE)?,
            total_amount,
            currency: domain.currency,
            broker: domain.broker,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrites the mutable fields from an update, recomputing the total
    pub fn apply_update(&mut self, update: OperationUpdate) -> Result<()> {
        self.total_amount = to_scaled(update.computed_total(), MONEY_SCALE)?;
        self.symbol = update.symbol;
        self.asset_class = update.asset_class;
        self.kind = update.kind;
        self.operation_date = update.operation_date;
        self.quantity = to_scaled(update.quantity, QUANTITY_SCALE)?;
        self.unit_price = to_scaled(update.unit_price, MONEY_SCALE)?;
        self.currency = update.currency;
        self.broker = update.broker;
        self.notes = update.notes;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(())
    }
}
