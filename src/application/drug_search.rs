// src/application/drug_search.rs
use crate::constants::MIN_NAME_QUERY_CHARS;
use crate::domain::{DomainError, Drug, SearchField, Tolerance};

/// The two calls the backend catalog exposes.
pub trait CatalogGateway {
    /// Filtered lookup on one catalog column. Returns the decoded record
    /// array; a well-formed but non-array response is an empty vec.
    fn search_by_field(&self, field: SearchField, query: &str) -> Result<Vec<Drug>, DomainError>;

    /// Dimensional-tolerance match anchored on the base record's id. The
    /// matching rules themselves live in the backend.
    fn match_by_base(&self, base_id: i64, tolerance: Tolerance) -> Result<Vec<Drug>, DomainError>;
}

impl<C: CatalogGateway + ?Sized> CatalogGateway for &C {
    fn search_by_field(&self, field: SearchField, query: &str) -> Result<Vec<Drug>, DomainError> {
        (**self).search_by_field(field, query)
    }

    fn match_by_base(&self, base_id: i64, tolerance: Tolerance) -> Result<Vec<Drug>, DomainError> {
        (**self).match_by_base(base_id, tolerance)
    }
}

/// What a lookup meant to single out one base drug actually found.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NotFound,
    One(Drug),
    /// The query matched several records; the caller decides how to present
    /// them and ask the user to narrow down.
    Many(Vec<Drug>),
}

pub struct DrugSearch<C: CatalogGateway> {
    catalog: C,
}

impl<C: CatalogGateway> DrugSearch<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Validate the query, then hit the catalog. Validation failures never
    /// reach the network.
    pub fn search(&self, field: SearchField, raw_query: &str) -> Result<Vec<Drug>, DomainError> {
        let query = validate_query(field, raw_query)?;
        self.catalog.search_by_field(field, query)
    }

    /// Search expecting a single record, e.g. to pick a match base or to
    /// save one drug.
    pub fn resolve(&self, field: SearchField, raw_query: &str) -> Result<Resolution, DomainError> {
        let mut hits = self.search(field, raw_query)?;
        Ok(match hits.len() {
            0 => Resolution::NotFound,
            1 => Resolution::One(hits.remove(0)),
            _ => Resolution::Many(hits),
        })
    }
}

/// Trim the query and apply the per-field floor. Name searches need
/// [`MIN_NAME_QUERY_CHARS`] characters; code searches only need to be
/// non-empty.
fn validate_query(field: SearchField, raw_query: &str) -> Result<&str, DomainError> {
    let query = raw_query.trim();
    if query.is_empty() {
        return Err(DomainError::EmptyQuery);
    }
    if field == SearchField::ItemName && query.chars().count() < MIN_NAME_QUERY_CHARS {
        return Err(DomainError::NameQueryTooShort(query.to_string()));
    }
    Ok(query)
}
