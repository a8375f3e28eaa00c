// src/domain/mod.rs
pub mod error;
pub mod format;
pub mod memo;
pub mod search;

pub use error::DomainError;
pub use format::Format;
pub use memo::MemoBlock;
pub use search::SearchScope;
