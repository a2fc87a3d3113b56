use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoexplorer
#[derive(Debug, Parser)]
#[command(
    name = "geoexplorer",
    version,
    about = "Look up countries by name (French spellings welcome) on REST Countries"
)]
pub struct CliArgs {
    /// Base URL of the REST Countries API (default: https://restcountries.com)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// JSON alias table to use instead of the built-in French one
    #[arg(short = 'a', long = "aliases", global = true)]
    pub aliases: Option<PathBuf>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long = "timeout-secs", global = true)]
    pub timeout_secs: Option<u64>,

    /// Reuse the full dataset for this many seconds between fallback scans
    #[arg(long = "dataset-ttl-secs", global = true)]
    pub dataset_ttl_secs: Option<u64>,

    /// Log resolution steps to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a country by name (e.g. "Côte d'Ivoire", "japon", "Peru")
    Search {
        /// Country name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List the quick-select shortcuts, or look one up by name or number
    Quick {
        /// Shortcut name or its 1-based number in the list
        choice: Option<String>,
    },

    /// Print the alias table in use
    Aliases,

    /// Read queries from stdin, one per line, until EOF or "quit"
    Interactive,
}
