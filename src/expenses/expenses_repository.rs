use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::expenses_errors::ExpenseError;
use super::expenses_model::{Expense, ExpenseDB, ExpenseUpdate, NewExpense};
use super::expenses_traits::ExpenseRepositoryTrait;
use crate::db::get_connection;
use crate::schema::expenses;
use crate::Result;

/// Repository for managing expense data in the database
pub struct ExpenseRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl ExpenseRepositoryTrait for ExpenseRepository {
    /// Lists a user's expenses, optionally bounded by an inclusive date range
    fn list_by_user(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Expense>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let mut query = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .into_boxed();

        if let Some(start) = start_date {
            query = query.filter(expenses::expense_date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(expenses::expense_date.le(end));
        }

        let results = query
            .order(expenses::expense_date.asc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(ExpenseError::from)?;

        Ok(results.into_iter().map(Expense::from).collect())
    }

    /// Retrieves an expense record by its ID
    fn get_by_id(&self, expense_id: &str) -> Result<Expense> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let expense = expenses::table
            .find(expense_id)
            .first::<ExpenseDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    ExpenseError::NotFound(format!("Expense with id {} not found", expense_id))
                }
                _ => ExpenseError::DatabaseError(e.to_string()),
            })?;

        Ok(expense.into())
    }

    /// Inserts a batch of expense rows in one transaction
    fn create_many(&self, user_id: &str, new_expenses: Vec<NewExpense>) -> Result<Vec<Expense>> {
        for new_expense in &new_expenses {
            new_expense.validate()?;
        }

        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let rows: Vec<ExpenseDB> = new_expenses
            .into_iter()
            .map(|new_expense| {
                let mut expense_db = ExpenseDB::from_new(user_id, new_expense);
                expense_db.id = Uuid::new_v4().to_string();
                expense_db
            })
            .collect();

        conn.transaction::<_, ExpenseError, _>(|tx_conn| {
            diesel::insert_into(expenses::table)
                .values(&rows)
                .execute(tx_conn)?;
            Ok(())
        })?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    /// Updates an existing expense record
    fn update(&self, expense_update: ExpenseUpdate) -> Result<Expense> {
        expense_update.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let expense_id = expense_update.id.clone().unwrap_or_default();
        let mut expense_db = expenses::table
            .find(&expense_id)
            .first::<ExpenseDB>(&mut conn)
            .map_err(ExpenseError::from)?;

        expense_db.name = expense_update.name;
        expense_db.category = expense_update.category;
        expense_db.amount = expense_update.amount;
        expense_db.expense_date = expense_update.expense_date;
        expense_db.card_id = expense_update.card_id;
        expense_db.is_paid = expense_update.is_paid;
        expense_db.updated_at = chrono::Utc::now().naive_utc();

        diesel::update(expenses::table.find(&expense_id))
            .set(&expense_db)
            .execute(&mut conn)
            .map_err(ExpenseError::from)?;

        Ok(expense_db.into())
    }

    /// Deletes an expense record and returns the deleted row
    fn delete(&self, expense_id: &str) -> Result<Expense> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let expense = expenses::table
            .find(expense_id)
            .first::<ExpenseDB>(&mut conn)
            .map_err(ExpenseError::from)?;

        diesel::delete(expenses::table.find(expense_id))
            .execute(&mut conn)
            .map_err(ExpenseError::from)?;

        Ok(expense.into())
    }

    /// Deletes every sibling row of an installment group
    fn delete_group(&self, user_id: &str, group_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(
            expenses::table
                .filter(expenses::user_id.eq(user_id))
                .filter(expenses::group_id.eq(group_id)),
        )
        .execute(&mut conn)
        .map_err(ExpenseError::from)?;

        if affected == 0 {
            return Err(ExpenseError::NotFound(format!(
                "No expenses found for group {}",
                group_id
            ))
            .into());
        }

        Ok(affected)
    }

    /// Sums linked expense amounts per card for the given user
    fn sum_by_card(&self, user_id: &str) -> Result<Vec<(String, i64)>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        let totals = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::card_id.is_not_null())
            .group_by(expenses::card_id)
            .select((expenses::card_id, diesel::dsl::sum(expenses::amount)))
            .load::<(Option<String>, Option<BigDecimal>)>(&mut conn)
            .map_err(ExpenseError::from)?;

        Ok(totals
            .into_iter()
            .filter_map(|(card_id, total)| {
                card_id.map(|id| (id, total.and_then(|t| t.to_i64()).unwrap_or(0)))
            })
            .collect())
    }
}
