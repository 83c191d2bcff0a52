use crate::catalog::AppService;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::output;

/// Handle the list command
pub fn list(
    service: &mut impl AppService,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<String> {
    let mut apps = service.get_all_apps()?;
    if let Some(limit) = args.limit {
        apps.truncate(limit);
    }

    output::format_apps(&apps, format)
}
