use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for income-related operations
#[derive(Debug, Error)]
pub enum IncomeError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for IncomeError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => IncomeError::NotFound("Record not found".to_string()),
            _ => IncomeError::DatabaseError(err.to_string()),
        }
    }
}
