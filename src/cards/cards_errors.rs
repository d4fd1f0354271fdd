use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for card-related operations
#[derive(Debug, Error)]
pub enum CardError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for CardError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => CardError::NotFound("Record not found".to_string()),
            _ => CardError::DatabaseError(err.to_string()),
        }
    }
}
