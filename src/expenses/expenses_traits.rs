use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::Result;

/// Trait defining the expense repository interface
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn list_by_user(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Expense>>;
    fn get_by_id(&self, expense_id: &str) -> Result<Expense>;
    fn create_many(&self, user_id: &str, new_expenses: Vec<NewExpense>) -> Result<Vec<Expense>>;
    fn update(&self, expense_update: ExpenseUpdate) -> Result<Expense>;
    fn delete(&self, expense_id: &str) -> Result<Expense>;
    fn delete_group(&self, user_id: &str, group_id: &str) -> Result<usize>;
    /// Sums linked expense amounts per card for the given user
    fn sum_by_card(&self, user_id: &str) -> Result<Vec<(String, i64)>>;
}

/// Trait defining the expense service interface
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    /// Creates an expense; an installment total above 1 fans out into
    /// monthly sibling rows sharing a group id
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Vec<Expense>>;
    async fn update_expense(
        &self,
        user_id: &str,
        expense_update: ExpenseUpdate,
    ) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    async fn delete_expense_group(&self, user_id: &str, group_id: &str) -> Result<usize>;
}
