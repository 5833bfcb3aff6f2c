// Domain Error Types

use thiserror::Error;

use super::ids::QueueId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Duplicate queue id in process queue set: {0}")]
    DuplicateQueueId(QueueId),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
