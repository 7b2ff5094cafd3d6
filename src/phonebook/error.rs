use crate::model::RecordLookup;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Number already exists: {0}")]
    DuplicateNumber(String),

    #[error("Record not found ({0})")]
    NotFound(RecordLookup),

    #[error("{0}")]
    InvalidLookup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl PhonebookError {
    /// Whether the shell can recover by asking the user again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PhonebookError::Validation(_)
                | PhonebookError::DuplicateNumber(_)
                | PhonebookError::NotFound(_)
                | PhonebookError::InvalidLookup(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
