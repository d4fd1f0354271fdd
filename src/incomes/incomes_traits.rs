use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::Result;

/// Trait defining the contract for Income repository operations.
pub trait IncomeRepositoryTrait: Send + Sync {
    fn list_by_user(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Income>>;
    fn get_by_id(&self, income_id: &str) -> Result<Income>;
    fn create_many(&self, user_id: &str, new_incomes: Vec<NewIncome>) -> Result<Vec<Income>>;
    fn update(&self, income_update: IncomeUpdate) -> Result<Income>;
    fn delete(&self, income_id: &str) -> Result<Income>;
    fn delete_group(&self, user_id: &str, group_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Income service operations.
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    fn get_incomes(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Income>>;
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income>;
    /// Creates one income record, or twelve monthly siblings when the
    /// income is flagged recurring. Returns every created row.
    async fn create_income(&self, user_id: &str, new_income: NewIncome) -> Result<Vec<Income>>;
    async fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income>;
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<Income>;
    async fn delete_income_group(&self, user_id: &str, group_id: &str) -> Result<usize>;
}
