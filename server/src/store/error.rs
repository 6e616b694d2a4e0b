use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event with id '{0}' not found")]
    NotFound(String),

    #[error("Invalid event: {0}")]
    Validation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
