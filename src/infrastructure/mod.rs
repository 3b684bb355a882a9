// src/infrastructure/mod.rs
pub mod config;
pub mod http_catalog;
pub mod json_store;
pub mod xlsx;

pub use config::Config;
pub use http_catalog::HttpCatalog;
pub use json_store::JsonFileStore;
pub use xlsx::XlsxExporter;
