use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::scan::validator::ChangeWindow;

#[derive(Parser)]
#[command(author, version, about = "Lagged pairwise correlation scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the panel, scan all ticker pairs, and validate sign agreement
    Scan(ScanArgs),

    /// Summarize a panel file without scanning it
    Inspect {
        /// Path to a price panel (e.g. close.parquet)
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Path to a price panel (e.g. close.parquet)
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Optional TOML file with scan parameters; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Largest lag in trading days
    #[arg(long)]
    pub max_lag: Option<usize>,

    /// Minimum absolute correlation (exclusive)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Stop after this many candidates
    #[arg(long)]
    pub cap: Option<usize>,

    /// Pairs between throughput reports
    #[arg(long)]
    pub batch_size: Option<u64>,

    /// Sign-agreement anchor: fixed or sliding
    #[arg(long)]
    pub change_window: Option<ChangeWindow>,
}
