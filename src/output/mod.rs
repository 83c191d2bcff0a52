pub mod json;
pub mod pretty;

use crate::catalog::App;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a list of apps based on output format
pub fn format_apps(apps: &[App], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_apps(apps)),
        OutputFormat::Json => json::format_apps(apps),
    }
}

/// Format a single app based on output format
pub fn format_app(app: &App, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_app(app)),
        OutputFormat::Json => json::format_app(app),
    }
}

/// Format category counts based on output format
pub fn format_categories(categories: &[(String, usize)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_categories(categories)),
        OutputFormat::Json => json::format_categories(categories),
    }
}
