//! Fugotcha command-line entry point
//!
//! Parses arguments, configures logging, and runs one scrape session.
//! Exit code 0 covers normal completion, including reaching the end of the
//! series early; any validation or fatal extraction failure exits 1.

use clap::Parser;
use fugotcha::config::{self, validation, SessionConfig};
use fugotcha::output::{CsvFileSink, CsvStdoutSink, RecordSink};
use fugotcha::{FugotchaError, HttpDriver, ScrapeSession, SessionSummary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Fugotcha: scrape the Fugazi Live Series on dischord.com
///
/// Visits release pages starting at the given slug, follows "next" links,
/// and writes one CSV record per page: slug, release ID, show details,
/// then the track list.
#[derive(Parser, Debug)]
#[command(name = "fugotcha")]
#[command(version)]
#[command(about = "Scrape the Fugazi Live Series on dischord.com", long_about = None)]
struct Cli {
    /// Slug of the page to scrape (the URL after "fugazi_live_series/")
    #[arg(short, long, value_name = "SLUG")]
    page: String,

    /// Number of pages to scrape; 0 scrapes until the series ends
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    count: u32,

    /// Write CSV to this file instead of stdout; must not already exist
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(summary) => {
            tracing::info!("Done: {} page(s) scraped", summary.pages_scraped);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fugotcha=info,warn"),
            1 => EnvFilter::new("fugotcha=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    // CSV may be going to stdout; keep logs off it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Validates input, builds the session, and runs it against the chosen sink
async fn run(cli: Cli) -> Result<SessionSummary, FugotchaError> {
    let slug = validation::normalize_slug(&cli.page)?;

    let base_url = Url::parse(config::DEFAULT_BASE_URL)
        .map_err(|e| FugotchaError::Validation(format!("Bad base URL: {e}")))?;
    let config = SessionConfig::new(base_url, slug, cli.count);

    match cli.output {
        Some(path) => {
            let mut sink = CsvFileSink::create(&path, config.csv)?;
            scrape(config, &mut sink).await
        }
        None => {
            let mut sink = CsvStdoutSink::new(config.csv);
            scrape(config, &mut sink).await
        }
    }
}

async fn scrape<S: RecordSink>(
    config: SessionConfig,
    sink: &mut S,
) -> Result<SessionSummary, FugotchaError> {
    let start = config.start_url()?;
    let driver = HttpDriver::new(start.clone()).map_err(|e| FugotchaError::Http {
        url: start.to_string(),
        source: e,
    })?;

    ScrapeSession::new(config, driver).run(sink).await
}
