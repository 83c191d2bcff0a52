//! Cache inspection

use colored::Colorize;

use crate::catalog::CatalogService;
use crate::cli::args::{CacheArgs, CacheCommands, OutputFormat};
use crate::error::Result;

/// Handle cache commands
pub fn cache(
    service: &mut CatalogService,
    args: &CacheArgs,
    format: OutputFormat,
) -> Result<String> {
    match &args.command {
        CacheCommands::Status => status(service, format),
    }
}

/// Load the dataset through the cache, then report what the cache holds
fn status(service: &mut CatalogService, format: OutputFormat) -> Result<String> {
    service.load()?;
    let status = service.cache_status();
    let ttl_secs = service.cache_ttl().as_secs();

    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Cache Status".bold()));
            output.push_str(&format!("TTL: {}\n\n", format_age(ttl_secs)));

            output.push_str(&"Apps Cache:\n".dimmed().to_string());
            if status.exists {
                if let Some(count) = status.count {
                    output.push_str(&format!("  Entries: {}\n", count));
                }
                if let Some(age) = status.age_secs {
                    let age_str = format_age(age);
                    if status.fresh {
                        output.push_str(&format!("  Age: {} {}\n", age_str, "(fresh)".green()));
                    } else {
                        output.push_str(&format!("  Age: {} {}\n", age_str, "(stale)".yellow()));
                    }
                }
            } else {
                output.push_str(&format!("  {}\n", "Not cached".dimmed()));
            }

            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "ttl_secs": ttl_secs,
                "apps": status,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

/// Format age in human-readable form
fn format_age(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
