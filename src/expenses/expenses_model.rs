use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an expense record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    /// Amount in minor currency units (cents)
    pub amount: i64,
    pub expense_date: NaiveDateTime,
    pub card_id: Option<String>,
    pub is_paid: bool,
    pub installment_number: Option<i32>,
    pub installment_total: Option<i32>,
    pub group_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    /// Per-installment amount when installment_total > 1
    pub amount: i64,
    pub expense_date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    /// Requested number of monthly installments; values above 1 fan out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_total: Option<i32>,
    /// Filled internally when an installment purchase fans out into siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_number: Option<i32>,
    /// Filled internally when an installment purchase fans out into siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl NewExpense {
    /// Validates the new expense data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense name cannot be empty".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense category cannot be empty".to_string(),
            )));
        }
        if self.amount <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense amount must be positive".to_string(),
            )));
        }
        if let Some(total) = self.installment_total {
            if total < 1 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Installment total must be at least 1".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an existing expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub expense_date: NaiveDateTime,
    /// None unlinks the expense from any card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    pub is_paid: bool,
}

impl ExpenseUpdate {
    /// Validates the expense update data
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense name cannot be empty".to_string(),
            )));
        }
        if self.amount <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Database model for expenses
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
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub expense_date: NaiveDateTime,
    pub card_id: Option<String>,
    pub is_paid: bool,
    pub installment_number: Option<i32>,
    pub installment_total: Option<i32>,
    pub group_id: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category: db.category,
            amount: db.amount,
            expense_date: db.expense_date,
            card_id: db.card_id,
            is_paid: db.is_paid,
            installment_number: db.installment_number,
            installment_total: db.installment_total,
            group_id: db.group_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl ExpenseDB {
    pub fn from_new(user_id: &str, domain: NewExpense) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: user_id.to_string(),
            name: domain.name,
            category: domain.category,
            amount: domain.amount,
            expense_date: domain.expense_date,
            card_id: domain.card_id,
            is_paid: domain.is_paid,
            installment_number: domain.installment_number,
            installment_total: domain.installment_total,
            group_id: domain.group_id,
            created_at: now,
            updated_at: now,
        }
    }
}
