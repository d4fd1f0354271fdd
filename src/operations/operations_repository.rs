use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::operations_errors::OperationError;
use super::operations_model::{NewOperation, Operation, OperationDB, OperationUpdate};
use super::operations_traits::OperationRepositoryTrait;
use crate::db::get_connection;
use crate::schema::operations;
use crate::Result;

/// Repository for managing investment ledger entries in the database
pub struct OperationRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl OperationRepository {
    /// Creates a new OperationRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl OperationRepositoryTrait for OperationRepository {
    /// Lists a user's ledger entries in date order, optionally bounded by an
    /// inclusive date range
    fn list_by_user(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Operation>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OperationError::DatabaseError(e.to_string()))?;

        let mut query = operations::table
            .filter(operations::user_id.eq(user_id))
            .into_boxed();

        if let Some(start) = start_date {
            query = query.filter(operations::operation_date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(operations::operation_date.le(end));
        }

        let results = query
            .order(operations::operation_date.asc())
            .load::<OperationDB>(&mut conn)
            .map_err(OperationError::from)?;

        Ok(results.into_iter().map(Operation::from).collect())
    }

    /// Retrieves a ledger entry by its ID
    fn get_by_id(&self, operation_id: &str) -> Result<Operation> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OperationError::DatabaseError(e.to_string()))?;

        let operation = operations::table
            .find(operation_id)
            .first::<OperationDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => OperationError::NotFound(format!(
                    "Operation with id {} not found",
                    operation_id
                )),
                _ => OperationError::DatabaseError(e.to_string()),
            })?;

        Ok(operation.into())
    }

    /// Inserts a new ledger entry with its derived total amount
    fn create(&self, user_id: &str, new_operation: NewOperation) -> Result<Operation> {
        new_operation.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| OperationError::DatabaseError(e.to_string()))?;

        let mut operation_db = OperationDB::try_from_new(user_id, new_operation)?;
        operation_db.id = Uuid::new_v4().to_string();

        diesel::insert_into(operations::table)
            .values(&operation_db)
            .execute(&mut conn)
            .map_err(OperationError::from)?;

        Ok(operation_db.into())
    }

    /// Updates an existing ledger entry, recomputing its total amount
    fn update(&self, operation_update: OperationUpdate) -> Result<Operation> {
        operation_update.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| OperationError::DatabaseError(e.to_string()))?;

        let operation_id = operation_update.id.clone().unwrap_or_default();
        let mut operation_db = operations::table
            .find(&operation_id)
            .first::<OperationDB>(&mut conn)
            .map_err(OperationError::from)?;

        operation_db.apply_update(operation_update)?;

        diesel::update(operations::table.find(&operation_id))
            .set(&operation_db)
            .execute(&mut conn)
            .map_err(OperationError::from)?;

        Ok(operation_db.into())
    }

    /// Deletes a ledger entry and returns the deleted row
    fn delete(&self, operation_id: &str) -> Result<Operation> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OperationError::DatabaseError(e.to_string()))?;

        let operation = operations::table
            .find(operation_id)
            .first::<OperationDB>(&mut conn)
            .map_err(OperationError::from)?;

        diesel::delete(operations::table.find(operation_id))
            .execute(&mut conn)
            .map_err(OperationError::from)?;

        Ok(operation.into())
    }
}
