use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::categories_errors::CategoryError;
use super::categories_model::{Category, CategoryDB, CategoryUpdate, NewCategory};
use super::categories_traits::CategoryRepositoryTrait;
use crate::db::get_connection;
use crate::schema::categories;
use crate::Result;

/// Repository for managing category data in the database
pub struct CategoryRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl CategoryRepositoryTrait for CategoryRepository {
    /// Lists categories, optionally filtered by type
    fn list(&self, category_type_filter: Option<&str>) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        let mut query = categories::table.into_boxed();

        if let Some(category_type) = category_type_filter {
            query = query.filter(categories::category_type.eq(category_type.to_string()));
        }

        let results = query
            .order(categories::name.asc())
            .load::<CategoryDB>(&mut conn)
            .map_err(CategoryError::from)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    /// Retrieves a category by its ID
    fn get_by_id(&self, category_id: &str) -> Result<Category> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        let category = categories::table
            .find(category_id)
            .first::<CategoryDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => CategoryError::NotFound(format!(
                    "Category with id {} not found",
                    category_id
                )),
                _ => CategoryError::DatabaseError(e.to_string()),
            })?;

        Ok(category.into())
    }

    /// Creates a new category in the database
    fn create(&self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;

        let mut category_db: CategoryDB = new_category.into();
        category_db.id = Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        diesel::insert_into(categories::table)
            .values(&category_db)
            .execute(&mut conn)
            .map_err(CategoryError::from)?;

        Ok(category_db.into())
    }

    /// Updates an existing category in the database
    fn update(&self, category_update: CategoryUpdate) -> Result<Category> {
        category_update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        let mut category_db: CategoryDB = category_update.into();
        let existing = categories::table
            .find(&category_db.id)
            .first::<CategoryDB>(&mut conn)
            .map_err(CategoryError::from)?;

        category_db.created_at = existing.created_at;
        category_db.updated_at = chrono::Utc::now().naive_utc();

        diesel::update(categories::table.find(&category_db.id))
            .set(&category_db)
            .execute(&mut conn)
            .map_err(CategoryError::from)?;

        Ok(category_db.into())
    }

    /// Deletes a category by its ID and returns the number of deleted records
    fn delete(&self, category_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(categories::table.find(category_id))
            .execute(&mut conn)
            .map_err(CategoryError::from)?;

        if affected == 0 {
            return Err(CategoryError::NotFound(format!(
                "Category with id {} not found",
                category_id
            ))
            .into());
        }

        Ok(affected)
    }
}
