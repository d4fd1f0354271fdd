use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Operation not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for OperationError {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::NotFound => OperationError::NotFound("Operation not found".to_string()),
            _ => OperationError::DatabaseError(error.to_string()),
        }
    }
}
