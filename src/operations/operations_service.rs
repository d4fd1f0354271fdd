use chrono::NaiveDateTime;
use log::debug;
use std::sync::Arc;

use super::operations_errors::OperationError;
use super::operations_model::{NewOperation, Operation, OperationUpdate};
use super::operations_traits::{OperationRepositoryTrait, OperationServiceTrait};
use crate::Result;

/// Service for managing a user's investment ledger
pub struct OperationService {
    operation_repository: Arc<dyn OperationRepositoryTrait>,
}

impl OperationService {
    /// Creates a new OperationService instance
    pub fn new(operation_repository: Arc<dyn OperationRepositoryTrait>) -> Self {
        Self {
            operation_repository,
        }
    }

    /// Fetches a ledger entry and checks it belongs to the requesting user
    fn ensure_owned(&self, user_id: &str, operation_id: &str) -> Result<Operation> {
        let operation = self.operation_repository.get_by_id(operation_id)?;
        if operation.user_id != user_id {
            return Err(OperationError::Forbidden(format!(
                "Operation {} does not belong to the requesting user",
                operation_id
            ))
            .into());
        }
        Ok(operation)
    }
}

#[async_trait::async_trait]
impl OperationServiceTrait for OperationService {
    fn get_operations(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Operation>> {
        self.operation_repository
            .list_by_user(user_id, start_date, end_date)
    }

    fn get_operation(&self, user_id: &str, operation_id: &str) -> Result<Operation> {
        self.ensure_owned(user_id, operation_id)
    }

    async fn create_operation(
        &self,
        user_id: &str,
        new_operation: NewOperation,
    ) -> Result<Operation> {
        debug!(
            "Creating {} operation on {} for user {}",
            new_operation.kind, new_operation.symbol, user_id
        );
        self.operation_repository.create(user_id, new_operation)
    }

    async fn update_operation(
        &self,
        user_id: &str,
        operation_update: OperationUpdate,
    ) -> Result<Operation> {
        if let Some(operation_id) = operation_update.id.as_deref() {
            self.ensure_owned(user_id, operation_id)?;
        }
        self.operation_repository.update(operation_update)
    }

    async fn delete_operation(&self, user_id: &str, operation_id: &str) -> Result<Operation> {
        self.ensure_owned(user_id, operation_id)?;
        self.operation_repository.delete(operation_id)
    }
}
