use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::operations_model::{NewOperation, Operation, OperationUpdate};
use crate::Result;

/// Trait defining the operation repository interface
pub trait OperationRepositoryTrait: Send + Sync {
    fn list_by_user(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Operation>>;
    fn get_by_id(&self, operation_id: &str) -> Result<Operation>;
    fn create(&self, user_id: &str, new_operation: NewOperation) -> Result<Operation>;
    fn update(&self, operation_update: OperationUpdate) -> Result<Operation>;
    fn delete(&self, operation_id: &str) -> Result<Operation>;
}

/// Trait defining the operation service interface
#[async_trait]
pub trait OperationServiceTrait: Send + Sync {
    fn get_operations(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Operation>>;
    fn get_operation(&self, user_id: &str, operation_id: &str) -> Result<Operation>;
    /// Creates a ledger entry; the total amount is always derived from
    /// quantity and unit price, never taken from the caller
    async fn create_operation(
        &self,
        user_id: &str,
        new_operation: NewOperation,
    ) -> Result<Operation>;
    async fn update_operation(
        &self,
        user_id: &str,
        operation_update: OperationUpdate,
    ) -> Result<Operation>;
    async fn delete_operation(&self, user_id: &str, operation_id: &str) -> Result<Operation>;
}
