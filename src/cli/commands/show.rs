use crate::catalog::AppService;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::error::{CatalogError, Result};
use crate::output;

/// Handle the show command
pub fn show(
    service: &mut impl AppService,
    args: &ShowArgs,
    format: OutputFormat,
) -> Result<String> {
    let app = service
        .get_app_by_id(&args.id)?
        .ok_or_else(|| CatalogError::AppNotFound(args.id.clone()))?;

    output::format_app(&app, format)
}
