use crate::types::LogicId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogicError {
    #[error("Duplicate logic type id {id} (registering '{name}')")]
    DuplicateId { id: LogicId, name: String },

    #[error("Duplicate logic type name '{name}'")]
    DuplicateName { name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type LogicResult<T> = Result<T, LogicError>;
