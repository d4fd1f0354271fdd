pub(crate) mod operations_constants;
pub(crate) mod operations_errors;
pub(crate) mod operations_model;
pub(crate) mod operations_repository;
pub(crate) mod operations_service;
pub(crate) mod operations_traits;

#[cfg(test)]
mod operations_tests;

pub use operations_constants::*;
pub use operations_errors::OperationError;
pub use operations_model::{NewOperation, Operation, OperationDB, OperationUpdate};
pub use operations_repository::OperationRepository;
pub use operations_service::OperationService;
pub use operations_traits::{OperationRepositoryTrait, OperationServiceTrait};
