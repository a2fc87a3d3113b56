//! geoexplorer: look up countries from your terminal
//!
//! Usage examples
//! --------------
//!
//! - Search by name (English or French, accents optional)
//!   $ geoexplorer search cote d\'ivoire
//!   $ geoexplorer search Japon
//!
//! - List the quick-select shortcuts, then pick one by number or name
//!   $ geoexplorer quick
//!   $ geoexplorer quick 3
//!
//! - Keep one session (and its cache) open
//!   $ geoexplorer interactive
//!
//! Configuration
//! -------------
//!
//! `GEOEXPLORER_BASE_URL`, `GEOEXPLORER_ALIASES`, `GEOEXPLORER_TIMEOUT_SECS`
//! and `GEOEXPLORER_DATASET_TTL_SECS` provide defaults; the matching flags
//! override them.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoexplorer_core::prelude::*;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    // Logs go to stderr so rendered output stays clean.
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let cfg = build_config(&args)?;
    let aliases = cfg.load_aliases().context("loading alias table")?;

    let outcome = match args.command {
        Commands::Aliases => {
            for (key, term) in aliases.iter() {
                println!("{key} -> {term}");
            }
            return Ok(ExitCode::SUCCESS);
        }

        Commands::Quick { choice: None } => {
            println!("Raccourcis :");
            for (i, name) in QUICK_COUNTRIES.iter().enumerate() {
                println!("  {}. {}", i + 1, name);
            }
            return Ok(ExitCode::SUCCESS);
        }

        Commands::Search { query } => {
            open_explorer(&cfg, aliases)?.handle_search(&query.join(" "))?
        }

        Commands::Quick {
            choice: Some(choice),
        } => match quick_choice(&choice) {
            Some(name) => open_explorer(&cfg, aliases)?.quick_select(name)?,
            None => {
                eprintln!(
                    "No shortcut number {choice} (1-{})",
                    QUICK_COUNTRIES.len()
                );
                return Ok(ExitCode::from(2));
            }
        },

        Commands::Interactive => {
            run_interactive(&mut open_explorer(&cfg, aliases)?)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    Ok(match outcome {
        SearchOutcome::Displayed(_) | SearchOutcome::Placeholder => ExitCode::SUCCESS,
        SearchOutcome::NotFound => ExitCode::from(1),
        SearchOutcome::ConnectionError => ExitCode::from(3),
    })
}

type CliExplorer = Explorer<RestCountriesClient, TextPresenter<io::Stdout>>;

fn open_explorer(cfg: &ExplorerConfig, aliases: AliasTable) -> anyhow::Result<CliExplorer> {
    let client = RestCountriesClient::from_config(cfg)
        .with_context(|| format!("creating client for {}", cfg.base_url))?;
    tracing::debug!("using {}", cfg.base_url);

    let resolver = CountryResolver::new(client)
        .with_aliases(aliases)
        .with_dataset_ttl(cfg.dataset_ttl());
    Ok(Explorer::new(resolver, TextPresenter::new(io::stdout())))
}

/// Environment defaults, then command-line overrides.
fn build_config(args: &CliArgs) -> anyhow::Result<ExplorerConfig> {
    let mut cfg = ExplorerConfig::from_env().context("reading GEOEXPLORER_* variables")?;
    if let Some(url) = &args.base_url {
        cfg.base_url = url.clone();
    }
    if let Some(path) = &args.aliases {
        cfg.aliases_path = Some(path.clone());
    }
    if args.timeout_secs.is_some() {
        cfg.timeout_secs = args.timeout_secs;
    }
    if args.dataset_ttl_secs.is_some() {
        cfg.dataset_ttl_secs = args.dataset_ttl_secs;
    }
    Ok(cfg)
}

/// A 1-based shortcut number or a free name. Out-of-range numbers yield `None`.
fn quick_choice(choice: &str) -> Option<&str> {
    match choice.trim().parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| QUICK_COUNTRIES.get(i)).copied(),
        Err(_) => Some(choice),
    }
}

fn run_interactive<S, P>(explorer: &mut Explorer<S, P>) -> anyhow::Result<()>
where
    S: CountrySource,
    P: Presenter,
{
    explorer.start()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nPays > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let query = line.trim();

        if matches!(query, "quit" | "exit" | "q") {
            break;
        }
        explorer.handle_search(query)?;
    }

    tracing::debug!(
        "session ends with {} cached countries",
        explorer.resolver().cached_len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_choice_by_number_or_name() {
        assert_eq!(quick_choice("1"), Some("France"));
        assert_eq!(quick_choice(" 7 "), Some("Côte d'Ivoire"));
        assert_eq!(quick_choice("0"), None);
        assert_eq!(quick_choice("99"), None);
        assert_eq!(quick_choice("Pérou"), Some("Pérou"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "geoexplorer",
            "--base-url",
            "http://localhost:1",
            "--timeout-secs",
            "2",
            "aliases",
        ]);
        let cfg = build_config(&args).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:1");
        assert_eq!(cfg.timeout_secs, Some(2));
    }
}
