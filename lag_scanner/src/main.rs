use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use lag_scanner::{
    cli::{
        commands::{Cli, Commands},
        params::resolve_scan_config,
    },
    io::parquet::read_panel,
    pipeline,
    scan::filter::filter_complete,
};
use tracing::info;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => {
            let config = resolve_scan_config(&args).context("failed to load scan config")?;
            let raw = read_panel(&args.input)
                .with_context(|| format!("read panel {}", args.input.display()))?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let report = pipeline::run(&raw, &config, &mut out)?;

            info!(
                pairs = report.outcome.pairs_examined,
                candidates = report.outcome.candidates.len(),
                capped = report.outcome.capped,
                "done"
            );
        }

        Commands::Inspect { input } => {
            let raw = read_panel(&input)
                .with_context(|| format!("read panel {}", input.display()))?;
            let panel = filter_complete(&raw);

            match (raw.dates().first(), raw.dates().last()) {
                (Some(first), Some(last)) => {
                    println!("{} days from {first} to {last}", raw.len());
                }
                _ => println!("0 days"),
            }
            println!("{} tickers", raw.ticker_count());
            println!("{} stocks", panel.ticker_count());
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lag_scanner=info,lag_scan=info"));

    fmt().with_env_filter(env_filter).with_target(false).init();
}
