pub(crate) mod cards_errors;
pub(crate) mod cards_model;
pub(crate) mod cards_repository;
pub(crate) mod cards_service;
pub(crate) mod cards_traits;


pub use cards_errors::CardError;
pub use cards_model::{Card, CardDB, CardSummary, CardUpdate, NewCard};
pub use cards_repository::CardRepository;
pub use cards_service::CardService;
pub use cards_traits::{CardRepositoryTrait, CardServiceTrait};
