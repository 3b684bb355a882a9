// src/application/mod.rs
pub mod compat_match;
pub mod drug_search;
pub mod export;
pub mod saved_list;

pub use compat_match::{arrange_results, CompatMatch, ResultFilter};
pub use drug_search::{CatalogGateway, DrugSearch, Resolution};
pub use export::{to_rows, ListExporter, SpreadsheetWriter};
pub use saved_list::{DrugStore, SavedList};
