pub mod db;

pub mod analytics;
pub mod cards;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod incomes;
pub mod market_data;
pub mod operations;
pub mod portfolio;
pub mod schema;
pub mod utils;

pub use errors::{Error, Result};
