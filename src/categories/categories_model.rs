use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::categories_constants::CATEGORY_TYPES;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a category in the system
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub category_type: String,
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category_type: String,
    pub icon: Option<String>,
}

impl NewCategory {
    /// Validates the new category data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        if !CATEGORY_TYPES.contains(&self.category_type.as_str()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown category type: {}",
                self.category_type
            ))));
        }
        Ok(())
    }
}

/// Input model for updating an existing category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: Option<String>,
    pub name: String,
    pub category_type: String,
    pub icon: Option<String>,
}

impl CategoryUpdate {
    /// Validates the category update data
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        if !CATEGORY_TYPES.contains(&self.category_type.as_str()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown category type: {}",
                self.category_type
            ))));
        }
        Ok(())
    }
}

/// Database model for categories
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
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub category_type: String,
    pub icon: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            category_type: db.category_type,
            icon: db.icon,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCategory> for CategoryDB {
    fn from(domain: NewCategory) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            category_type: domain.category_type,
            icon: domain.icon,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CategoryUpdate> for CategoryDB {
    fn from(domain: CategoryUpdate) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            category_type: domain.category_type,
            icon: domain.icon,
            created_at: NaiveDateTime::default(), // This will be filled from existing record
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
