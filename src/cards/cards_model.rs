use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a credit card in the system
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub total_limit: i64,
    pub closing_day: i32,
    pub due_day: i32,
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Card enriched with the limit consumed by its linked expenses
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub total_limit: i64,
    pub used_limit: i64,
    pub available_limit: i64,
    pub closing_day: i32,
    pub due_day: i32,
    pub is_default: bool,
}

impl CardSummary {
    pub fn from_card(card: Card, used_limit: i64) -> Self {
        Self {
            available_limit: card.total_limit - used_limit,
            id: card.id,
            user_id: card.user_id,
            name: card.name,
            total_limit: card.total_limit,
            used_limit,
            closing_day: card.closing_day,
            due_day: card.due_day,
            is_default: card.is_default,
        }
    }
}

/// Input model for creating a new card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub total_limit: i64,
    pub closing_day: i32,
    pub due_day: i32,
    pub is_default: bool,
}

impl NewCard {
    /// Validates the new card data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card name cannot be empty".to_string(),
            )));
        }
        if self.total_limit < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card limit cannot be negative".to_string(),
            )));
        }
        validate_cycle_day("Closing day", self.closing_day)?;
        validate_cycle_day("Due day", self.due_day)?;
        Ok(())
    }
}

/// Input model for updating an existing card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    pub id: Option<String>,
    pub name: String,
    pub total_limit: i64,
    pub closing_day: i32,
    pub due_day: i32,
    pub is_default: bool,
}

impl CardUpdate {
    /// Validates the card update data
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card name cannot be empty".to_string(),
            )));
        }
        if self.total_limit < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card limit cannot be negative".to_string(),
            )));
        }
        validate_cycle_day("Closing day", self.closing_day)?;
        validate_cycle_day("Due day", self.due_day)?;
        Ok(())
    }
}

fn validate_cycle_day(label: &str, day: i32) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} must be between 1 and 31, got {}",
            label, day
        ))));
    }
    Ok(())
}

/// Database model for cards
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
#[diesel(table_name = crate::schema::cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CardDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub total_limit: i64,
    pub closing_day: i32,
    pub due_day: i32,
    pub is_default: bool,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<CardDB> for Card {
    fn from(db: CardDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            total_limit: db.total_limit,
            closing_day: db.closing_day,
            due_day: db.due_day,
            is_default: db.is_default,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl CardDB {
    pub fn from_new(user_id: &str, domain: NewCard) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: user_id.to_string(),
            name: domain.name,
            total_limit: domain.total_limit,
            closing_day: domain.closing_day,
            due_day: domain.due_day,
            is_default: domain.is_default,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CardUpdate> for CardDB {
    fn from(domain: CardUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: String::new(), // This will be filled from existing record
            name: domain.name,
            total_limit: domain.total_limit,
            closing_day: domain.closing_day,
            due_day: domain.due_day,
            is_default: domain.is_default,
            created_at: NaiveDateTime::default(), // This will be filled from existing record
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
