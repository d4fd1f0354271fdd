use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Expense not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for ExpenseError {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::NotFound => ExpenseError::NotFound("Expense not found".to_string()),
            _ => ExpenseError::DatabaseError(error.to_string()),
        }
    }
}
