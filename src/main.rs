mod client;
mod config;
mod engine;
mod generator;
mod models;
mod types;

use std::io::{stderr, stdout, IsTerminal, Write};
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::client::HttpTransport;
use crate::config::{ConfigError, SeederConfig, TransportFailurePolicy};
use crate::engine::Seeder;
use crate::generator::GeneratorSettings;
use crate::types::DateRange;

/// Seeds a transactions API with randomly generated records, one POST at a time.
#[derive(Debug, Parser)]
#[command(name = "transaction-seeder", version)]
struct Cli {
    /// Endpoint the records are POSTed to.
    #[arg(long)]
    url: Option<String>,
    /// Bearer token; when present 500 records are sent with an Authorization header, otherwise 1000 without.
    #[arg(long)]
    token: Option<String>,
    /// Overrides the number of records sent.
    #[arg(long)]
    count: Option<usize>,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// First value date that can be generated (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    start_date: Option<NaiveDate>,
    /// Last value date that can be generated (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    end_date: Option<NaiveDate>,
    /// Keep going when a request gets no response instead of stopping the run.
    #[arg(long)]
    continue_on_transport_error: bool,
    /// One of: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    log_level: String
}

impl Cli {
    fn into_config(self) -> Result<SeederConfig, ConfigError> {
        let mut config = match self.token {
            Some(token) => SeederConfig::authenticated(token),
            None => SeederConfig::unauthenticated()
        };

        if let Some(url) = self.url {
            config = config.with_endpoint(url);
        }

        if let Some(count) = self.count {
            config = config.with_count(count);
        }

        if self.continue_on_transport_error {
            config = config.with_transport_failure_policy(TransportFailurePolicy::Continue);
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            let defaults = DateRange::default();
            let date_range = DateRange::new(
                self.start_date.unwrap_or(defaults.start()),
                self.end_date.unwrap_or(defaults.end())
            )?;

            config = config.with_generator(GeneratorSettings { date_range, ..GeneratorSettings::default() });
        }

        config.validate()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let seed = cli.seed;
    let config = cli.into_config()?;
    let count = config.count;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng()
    };

    info!("Sending {count} transactions to {}", config.endpoint);

    let seeder = Seeder::new(config, HttpTransport::new());

    let timer = Instant::now();
    let report = seeder.run(&mut rng).await?;
    let duration = timer.elapsed();

    info!("Submitted {} of {} transactions ({} failed) in: {duration:?}", report.succeeded, report.attempted, report.failed());

    for failure in &report.failures {
        debug!("Transaction {} failed: {:?}", failure.sequence, failure.reason);
    }

    let mut output = stdout().lock();
    writeln!(output, "Done generating {} transactions", seeder.count())?;
    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout only carries the completion banner, per-record progress goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_ansi(stderr().is_terminal())
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
