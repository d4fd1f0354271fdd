// Module declarations
pub(crate) mod categories_constants;
pub(crate) mod categories_errors;
pub(crate) mod categories_model;
pub(crate) mod categories_repository;
pub(crate) mod categories_service;
pub(crate) mod categories_traits;

#[cfg(test)]
mod categories_tests;

// Re-export the public interface
pub use categories_constants::*;
pub use categories_errors::CategoryError;
pub use categories_model::{Category, CategoryDB, CategoryUpdate, NewCategory};
pub use categories_repository::CategoryRepository;
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
