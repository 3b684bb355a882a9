// src/infrastructure/http_catalog.rs
use crate::application::CatalogGateway;
use crate::domain::{DomainError, Drug, SearchField, Tolerance};
use crate::infrastructure::config::ApiConfig;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Body of the match endpoint. Keyed on the numeric database id; the
/// backend also accepts a legacy `itemSeq` key which we do not send.
#[derive(Debug, Serialize, PartialEq)]
struct MatchRequest {
    id: i64,
    tolerance: u8,
}

/// Envelope of the match endpoint. `matchedDrugs` can be absent or null,
/// both of which read as no matches.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchResponse {
    #[serde(default)]
    matched_drugs: Option<Vec<Drug>>,
}

/// Catalog gateway talking to the pharmatc backend over HTTP.
pub struct HttpCatalog {
    http: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        debug!(%base_url, "Creating new HttpCatalog");

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    fn search_url(&self) -> String {
        format!("{}/api/v1/drugs/search", self.base_url)
    }

    fn match_url(&self) -> String {
        format!("{}/api/v1/match", self.base_url)
    }
}

/// A search body must be a JSON array of records; any other shape reads
/// as an empty result set.
fn decode_search_body(body: Value) -> Result<Vec<Drug>, DomainError> {
    if !body.is_array() {
        debug!("Search response is not a JSON array, treating as empty");
        return Ok(Vec::new());
    }

    serde_json::from_value(body)
        .map_err(|e| DomainError::Catalog(format!("Failed to decode search response: {}", e)))
}

/// A match body must be a JSON object; its `matchedDrugs` field holds the
/// records. Any other shape reads as an empty result set.
fn decode_match_body(body: Value) -> Result<Vec<Drug>, DomainError> {
    if !body.is_object() {
        debug!("Match response is not a JSON object, treating as empty");
        return Ok(Vec::new());
    }

    let response: MatchResponse = serde_json::from_value(body)
        .map_err(|e| DomainError::Catalog(format!("Failed to decode match response: {}", e)))?;

    Ok(response.matched_drugs.unwrap_or_default())
}

impl CatalogGateway for HttpCatalog {
    #[instrument(level = "debug", skip(self))]
    fn search_by_field(&self, field: SearchField, query: &str) -> Result<Vec<Drug>, DomainError> {
        let response = self
            .http
            .get(self.search_url())
            .query(&[(field.query_param(), query)])
            .send()
            .map_err(|e| DomainError::Catalog(format!("Search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Catalog(format!(
                "Search failed with HTTP {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| DomainError::Catalog(format!("Search response is not JSON: {}", e)))?;

        let drugs = decode_search_body(body)?;
        debug!(count = drugs.len(), "Search returned records");
        Ok(drugs)
    }

    #[instrument(level = "debug", skip(self))]
    fn match_by_base(&self, base_id: i64, tolerance: Tolerance) -> Result<Vec<Drug>, DomainError> {
        let request = MatchRequest {
            id: base_id,
            tolerance: tolerance.percent(),
        };

        let response = self
            .http
            .post(self.match_url())
            .json(&request)
            .send()
            .map_err(|e| DomainError::Catalog(format!("Match request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Catalog(format!(
                "Match failed with HTTP {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| DomainError::Catalog(format!("Match response is not JSON: {}", e)))?;

        let drugs = decode_match_body(body)?;
        debug!(count = drugs.len(), "Match returned records");
        Ok(drugs)
    }
}
