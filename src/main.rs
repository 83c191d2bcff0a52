use std::io;

use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use appcat::catalog::CatalogService;
use appcat::cli::args::{Cli, Commands, CompletionsArgs, OutputFormat};
use appcat::cli::commands;
use appcat::config::{Config, Paths};
use appcat::error::CatalogError;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CatalogError> {
    // Handle completions command early (no config or dataset needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    let paths = Paths::new()?;
    let mut config = Config::load_from(&paths)?;
    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    let output = match &cli.command {
        Commands::Config(args) => commands::config(&mut config, &paths, args, format)?,
        Commands::Completions(_) => unreachable!(), // Handled above

        // Everything else reads the dataset
        _ => {
            let data_path = config.data_path(cli.data.as_ref());
            let mut service = CatalogService::with_ttl(data_path, config.cache.ttl_secs);

            match &cli.command {
                Commands::List(args) => commands::list(&mut service, args, format)?,
                Commands::Search(args) => commands::search(&mut service, args, format)?,
                Commands::Show(args) => commands::show(&mut service, args, format)?,
                Commands::Category(args) => commands::category(&mut service, args, format)?,
                Commands::Categories => commands::categories(&mut service, format)?,
                Commands::Cache(args) => commands::cache(&mut service, args, format)?,
                Commands::Config(_) | Commands::Completions(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
