// src/domain/mod.rs
pub mod drug;
pub mod error;

pub use drug::{Drug, SearchField, Tolerance};
pub use error::DomainError;
