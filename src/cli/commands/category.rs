use crate::catalog::{AppService, CatalogService};
use crate::cli::args::{CategoryArgs, OutputFormat};
use crate::error::Result;
use crate::output;

/// Handle the category command
pub fn category(
    service: &mut impl AppService,
    args: &CategoryArgs,
    format: OutputFormat,
) -> Result<String> {
    let apps = service.get_apps_by_category(&args.name)?;
    output::format_apps(&apps, format)
}

/// Handle the categories command
pub fn categories(service: &mut CatalogService, format: OutputFormat) -> Result<String> {
    let categories = service.categories()?;
    output::format_categories(&categories, format)
}
