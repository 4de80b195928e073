//! Site-Indexer main entry point
//!
//! This is the command-line interface for the Site-Indexer crawler.

use anyhow::Context;
use clap::Parser;
use site_indexer::config::{load_config_with_hash, validate, Config};
use site_indexer::crawler::crawl_site;
use site_indexer::output::{print_failures, print_results, print_statistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Indexer: crawl one site and search its text
///
/// Site-Indexer fetches every page reachable from the seed address that
/// stays under the seed's address prefix, then lists the pages whose text
/// contains the keyword.
#[derive(Parser, Debug)]
#[command(name = "site-indexer")]
#[command(version)]
#[command(about = "Crawl one site and search its text", long_about = None)]
struct Cli {
    /// Seed address; overrides `crawler.seed` from the config
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Keyword to search for; overrides `search.keyword` from the config
    #[arg(value_name = "KEYWORD")]
    keyword: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum link hops from the seed
    #[arg(long)]
    max_depth: Option<u32>,

    /// Maximum number of pages to fetch
    #[arg(long)]
    max_pages: Option<usize>,

    /// Print crawl statistics after the results
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    tracing::info!(
        "Seed: {}, keyword: {:?}, max depth: {:?}, max pages: {:?}",
        config.crawler.seed,
        config.search.keyword,
        config.crawler.max_depth,
        config.crawler.max_pages
    );

    let crawler = crawl_site(&config)
        .await
        .context("Failed to set up the crawler")?;

    let results = crawler.search(&config.search.keyword);
    print_results(&results).context("Failed to write search results")?;

    if cli.stats {
        println!();
        print_statistics(crawler.stats()).context("Failed to write statistics")?;
        print_failures(crawler.visited()).context("Failed to write failed pages")?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_indexer=info,warn"),
            1 => EnvFilter::new("site_indexer=debug,info"),
            2 => EnvFilter::new("site_indexer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout carries only the results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file (or defaults) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(seed) = &cli.seed {
        config.crawler.seed = seed.clone();
    }
    if let Some(keyword) = &cli.keyword {
        config.search.keyword = keyword.clone();
    }
    if cli.max_depth.is_some() {
        config.crawler.max_depth = cli.max_depth;
    }
    if cli.max_pages.is_some() {
        config.crawler.max_pages = cli.max_pages;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}
