// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Memo block not found: {0}")]
    BlockNotFound(String),
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Unknown search scope: {0}")]
    UnknownScope(String),
    #[error("{0}")]
    Format(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
