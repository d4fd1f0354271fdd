use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::incomes_errors::IncomeError;
use super::incomes_model::{Income, IncomeDB, IncomeUpdate, NewIncome};
use super::incomes_traits::IncomeRepositoryTrait;
use crate::db::get_connection;
use crate::schema::incomes;
use crate::Result;

/// Repository for managing income data in the database
pub struct IncomeRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl IncomeRepository {
    /// Creates a new IncomeRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl IncomeRepositoryTrait for IncomeRepository {
    /// Lists a user's incomes, optionally bounded by an inclusive date range
    fn list_by_user(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Income>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| IncomeError::DatabaseError(e.to_string()))?;

        let mut query = incomes::table
            .filter(incomes::user_id.eq(user_id))
            .into_boxed();

        if let Some(start) = start_date {
            query = query.filter(incomes::income_date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(incomes::income_date.le(end));
        }

        let results = query
            .order(incomes::income_date.asc())
            .load::<IncomeDB>(&mut conn)
            .map_err(IncomeError::from)?;

        Ok(results.into_iter().map(Income::from).collect())
    }

    /// Retrieves an income record by its ID
    fn get_by_id(&self, income_id: &str) -> Result<Income> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| IncomeError::DatabaseError(e.to_string()))?;

        let income = incomes::table
            .find(income_id)
            .first::<IncomeDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    IncomeError::NotFound(format!("Income with id {} not found", income_id))
                }
                _ => IncomeError::DatabaseError(e.to_string()),
            })?;

        Ok(income.into())
    }

    /// Inserts a batch of income rows in one transaction
    fn create_many(&self, user_id: &str, new_incomes: Vec<NewIncome>) -> Result<Vec<Income>> {
        for new_income in &new_incomes {
            new_income.validate()?;
        }

        let mut conn =
            get_connection(&self.pool).map_err(|e| IncomeError::DatabaseError(e.to_string()))?;

        let rows: Vec<IncomeDB> = new_incomes
            .into_iter()
            .map(|new_income| {
                let mut income_db = IncomeDB::from_new(user_id, new_income);
                income_db.id = Uuid::new_v4().to_string();
                income_db
            })
            .collect();

        conn.transaction::<_, IncomeError, _>(|tx_conn| {
            diesel::insert_into(incomes::table)
                .values(&rows)
                .execute(tx_conn)?;
            Ok(())
        })?;

        Ok(rows.into_iter().map(Income::from).collect())
    }

    /// Updates an existing income record
    fn update(&self, income_update: IncomeUpdate) -> Result<Income> {
        income_update.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| IncomeError::DatabaseError(e.to_string()))?;

        let income_id = income_update.id.clone().unwrap_or_default();
        let mut income_db = incomes::table
            .find(&income_id)
            .first::<IncomeDB>(&mut conn)
            .map_err(IncomeError::from)?;

        income_db.name = income_update.name;
        income_db.category = income_update.category;
        income_db.amount = income_update.amount;
        income_db.income_date = income_update.income_date;
        income_db.updated_at = chrono::Utc::now().naive_utc();

        diesel::update(incomes::table.find(&income_id))
            .set(&income_db)
            .execute(&mut conn)
            .map_err(IncomeError::from)?;

        Ok(income_db.into())
    }

    /// Deletes an income record and returns the deleted row
    fn delete(&self, income_id: &str) -> Result<Income> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| IncomeError::DatabaseError(e.to_string()))?;

        let income = incomes::table
            .find(income_id)
            .first::<IncomeDB>(&mut conn)
            .map_err(IncomeError::from)?;

        diesel::delete(incomes::table.find(income_id))
            .execute(&mut conn)
            .map_err(IncomeError::from)?;

        Ok(income.into())
    }

    /// Deletes every sibling row of a recurring income group
    fn delete_group(&self, user_id: &str, group_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| IncomeError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(
            incomes::table
                .filter(incomes::user_id.eq(user_id))
                .filter(incomes::group_id.eq(group_id)),
        )
        .execute(&mut conn)
        .map_err(IncomeError::from)?;

        if affected == 0 {
            return Err(IncomeError::NotFound(format!(
                "No incomes found for group {}",
                group_id
            ))
            .into());
        }

        Ok(affected)
    }
}
