use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an income record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    /// Amount in minor currency units (cents)
    pub amount: i64,
    pub income_date: NaiveDateTime,
    pub is_recurring: bool,
    pub group_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new income record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub income_date: NaiveDateTime,
    #[serde(default)]
    pub is_recurring: bool,
    /// Filled internally when a recurring income fans out into siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl NewIncome {
    /// Validates the new income data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income name cannot be empty".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income category cannot be empty".to_string(),
            )));
        }
        if self.amount <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing income record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub income_date: NaiveDateTime,
}

impl IncomeUpdate {
    /// Validates the income update data
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income name cannot be empty".to_string(),
            )));
        }
        if self.amount <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Database model for incomes
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
#[diesel(table_name = crate::schema::incomes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IncomeDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub income_date: NaiveDateTime,
    pub is_recurring: bool,
    pub group_id: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<IncomeDB> for Income {
    fn from(db: IncomeDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category: db.category,
            amount: db.amount,
            income_date: db.income_date,
            is_recurring: db.is_recurring,
            group_id: db.group_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl IncomeDB {
    pub fn from_new(user_id: &str, domain: NewIncome) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: user_id.to_string(),
            name: domain.name,
            category: domain.category,
            amount: domain.amount,
            income_date: domain.income_date,
            is_recurring: domain.is_recurring,
            group_id: domain.group_id,
            created_at: now,
            updated_at: now,
        }
    }
}
