pub(crate) mod incomes_errors;
pub(crate) mod incomes_model;
pub(crate) mod incomes_repository;
pub(crate) mod incomes_service;
pub(crate) mod incomes_traits;


pub use incomes_errors::IncomeError;
pub use incomes_model::{Income, IncomeDB, IncomeUpdate, NewIncome};
pub use incomes_repository::IncomeRepository;
pub use incomes_service::IncomeService;
pub use incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
