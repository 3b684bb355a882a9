// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CatalogGateway, DrugStore};
use crate::domain::{DomainError, Drug, SearchField, Tolerance};

/// Minimal catalog record for tests: id and name set, everything else the
/// normalized defaults
pub fn drug(id: i64, item_name: &str) -> Drug {
    Drug {
        id,
        item_name: item_name.to_string(),
        ..Drug::default()
    }
}

/// Like [`drug`], with a dosage form for same-form filter tests
pub fn drug_with_form(id: i64, item_name: &str, form_code_name: &str) -> Drug {
    Drug {
        form_code_name: form_code_name.to_string(),
        ..drug(id, item_name)
    }
}

/// Shared mock catalog for testing use cases that depend on CatalogGateway
///
/// Results are keyed on the exact (field, query) pair or base id; anything
/// unconfigured answers with an empty result set, like a backend with no
/// matching rows. Every dispatched call is recorded so tests can assert
/// what went over the wire.
///
/// # Examples
///
/// ```
/// use pharmatc::util::testing::{drug, MockCatalog};
/// use pharmatc::domain::SearchField;
///
/// let mock = MockCatalog::builder()
///     .with_search(SearchField::ItemName, "아스피린", vec![drug(1, "아스피린정")])
///     .with_match(1, vec![drug(2, "타이레놀정")])
///     .build();
/// ```
pub struct MockCatalog {
    search_results: HashMap<(SearchField, String), Vec<Drug>>,
    match_results: HashMap<i64, Vec<Drug>>,
    search_calls: RefCell<Vec<(SearchField, String)>>,
    match_calls: RefCell<Vec<(i64, Tolerance)>>,
}

impl MockCatalog {
    pub fn builder() -> MockCatalogBuilder {
        MockCatalogBuilder::new()
    }

    /// Queries dispatched through search_by_field, in call order
    pub fn search_calls(&self) -> Vec<(SearchField, String)> {
        self.search_calls.borrow().clone()
    }

    /// Base ids and tolerances dispatched through match_by_base, in call order
    pub fn match_calls(&self) -> Vec<(i64, Tolerance)> {
        self.match_calls.borrow().clone()
    }
}

impl CatalogGateway for MockCatalog {
    fn search_by_field(&self, field: SearchField, query: &str) -> Result<Vec<Drug>, DomainError> {
        self.search_calls
            .borrow_mut()
            .push((field, query.to_string()));

        Ok(self
            .search_results
            .get(&(field, query.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn match_by_base(&self, base_id: i64, tolerance: Tolerance) -> Result<Vec<Drug>, DomainError> {
        self.match_calls.borrow_mut().push((base_id, tolerance));

        Ok(self
            .match_results
            .get(&base_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Builder for MockCatalog
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockCatalogBuilder {
    search_results: HashMap<(SearchField, String), Vec<Drug>>,
    match_results: HashMap<i64, Vec<Drug>>,
}

impl MockCatalogBuilder {
    pub fn new() -> Self {
        Self {
            search_results: HashMap::new(),
            match_results: HashMap::new(),
        }
    }

    /// Configure the records returned for one (field, query) pair
    pub fn with_search(mut self, field: SearchField, query: &str, results: Vec<Drug>) -> Self {
        self.search_results.insert((field, query.to_string()), results);
        self
    }

    /// Configure the compatible records returned for one base id
    pub fn with_match(mut self, base_id: i64, results: Vec<Drug>) -> Self {
        self.match_results.insert(base_id, results);
        self
    }

    pub fn build(self) -> MockCatalog {
        MockCatalog {
            search_results: self.search_results,
            match_results: self.match_results,
            search_calls: RefCell::new(Vec::new()),
            match_calls: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MockCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory drug store for testing SavedList without touching disk
pub struct MockDrugStore {
    drugs: Vec<Drug>,
}

impl MockDrugStore {
    pub fn builder() -> MockDrugStoreBuilder {
        MockDrugStoreBuilder::new()
    }
}

impl DrugStore for MockDrugStore {
    fn load(&mut self) -> Vec<Drug> {
        self.drugs.clone()
    }

    fn save(&mut self, drug: Drug) -> Result<bool, DomainError> {
        if self.drugs.iter().any(|d| d.id == drug.id) {
            return Ok(false);
        }
        self.drugs.push(drug);
        Ok(true)
    }

    fn remove(&mut self, id: i64) -> Result<Option<Drug>, DomainError> {
        match self.drugs.iter().position(|d| d.id == id) {
            Some(index) => Ok(Some(self.drugs.remove(index))),
            None => Ok(None),
        }
    }
}

/// Builder for MockDrugStore
pub struct MockDrugStoreBuilder {
    drugs: Vec<Drug>,
}

impl MockDrugStoreBuilder {
    pub fn new() -> Self {
        Self { drugs: Vec::new() }
    }

    /// Pre-fill the store with a saved drug
    pub fn with_saved(mut self, drug: Drug) -> Self {
        self.drugs.push(drug);
        self
    }

    pub fn build(self) -> MockDrugStore {
        MockDrugStore { drugs: self.drugs }
    }
}

impl Default for MockDrugStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
