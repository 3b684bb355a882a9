// src/ports/mod.rs
pub mod table;

pub use table::TablePresenter;
