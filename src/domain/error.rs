// src/domain/error.rs
use thiserror::Error;

use crate::constants::MIN_NAME_QUERY_CHARS;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("search term must not be empty")]
    EmptyQuery,
    #[error("name search needs at least {MIN_NAME_QUERY_CHARS} characters, got {0:?}")]
    NameQueryTooShort(String),
    #[error("tolerance must be one of 0, 5, 10, 15 or 20, got {0:?}")]
    InvalidTolerance(String),
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("export error: {0}")]
    Export(String),
}
