use crate::catalog::{AppService, SearchResults};
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::endpoint::{self, SearchParams, SEARCH_FAILED};
use crate::error::{CatalogError, Result};
use crate::output;

/// Handle the search command through the search endpoint
pub fn search(
    service: &mut impl AppService,
    args: &SearchArgs,
    format: OutputFormat,
) -> Result<String> {
    let params = SearchParams {
        query: args.query.clone(),
        category: args.category.clone(),
        tags: args.tags.clone(),
    };

    let response = endpoint::search(service, &params);
    if !response.is_success() {
        let message = response.body["message"].as_str().unwrap_or(SEARCH_FAILED);
        return Err(CatalogError::endpoint(response.status, message));
    }

    match format {
        OutputFormat::Json => output::json::format_json(&response.body),
        OutputFormat::Pretty => {
            let results: SearchResults = serde_json::from_value(response.body)?;
            Ok(output::pretty::format_search_results(&results))
        }
    }
}
