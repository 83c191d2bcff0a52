use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Browse and search a catalog of apps
#[derive(Parser)]
#[command(name = "appcat")]
#[command(version, propagate_version = true)]
#[command(about = "Browse and search a catalog of apps")]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the dataset file
    #[arg(long, env = "APPCAT_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Write shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    /// Parse a configured format name, falling back to pretty
    pub fn from_config(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all apps in the catalog
    #[command(alias = "ls")]
    List(ListArgs),

    /// Search apps by text, category and tags
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Show a single app by id
    Show(ShowArgs),

    /// List apps in a category
    Category(CategoryArgs),

    /// List categories with app counts
    Categories,

    /// Inspect the dataset cache
    Cache(CacheArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Maximum number of apps to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles, descriptions and tags
    pub query: Option<String>,

    /// Only apps in this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only apps with any of these tags (comma-separated)
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// App id
    pub id: String,
}

/// Arguments for the category command
#[derive(Args)]
pub struct CategoryArgs {
    /// Category name (case-sensitive)
    pub name: String,
}

/// Arguments for the cache command
#[derive(Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Cache subcommands
#[derive(Subcommand)]
pub enum CacheCommands {
    /// Load the dataset and show cache status
    Status,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., data.path)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
