//! Search endpoint contract: raw request parameters in, status and body out

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{AppService, SearchFilters};

/// Message returned with a failed search
pub const SEARCH_FAILED: &str = "Failed to search apps";

pub const STATUS_OK: u16 = 200;
pub const STATUS_SERVER_ERROR: u16 = 500;

/// Raw query parameters of a search request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub category: Option<String>,
    /// Comma-separated tag list
    pub tags: Option<String>,
}

impl SearchParams {
    /// Translate request parameters into search filters
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            query: self.query.clone().unwrap_or_default(),
            category: self.category.clone().filter(|c| !c.is_empty()),
            tags: self.tags.as_deref().map(split_tags).filter(|t| !t.is_empty()),
        }
    }
}

/// Split a comma-separated tag list, trimming segments and dropping empty ones
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Response of the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    fn failure() -> Self {
        Self {
            status: STATUS_SERVER_ERROR,
            body: serde_json::json!({ "message": SEARCH_FAILED }),
        }
    }
}

/// Handle a search request against `service`
pub fn search(service: &mut impl AppService, params: &SearchParams) -> EndpointResponse {
    let filters = params.to_filters();

    let results = match service.search_apps(&filters) {
        Ok(results) => results,
        Err(e) => {
            warn!(error = %e, cause = ?std::error::Error::source(&e), "search request failed");
            return EndpointResponse::failure();
        }
    };

    match serde_json::to_value(&results) {
        Ok(body) => EndpointResponse {
            status: STATUS_OK,
            body,
        },
        Err(e) => {
            warn!(error = %e, "failed to encode search results");
            EndpointResponse::failure()
        }
    }
}
