use crate::{cli::commands::ScanArgs, config::ScanConfig, errors::Result};

/// Resolve scan parameters: defaults, then the TOML file, then CLI flags.
pub fn resolve_scan_config(args: &ScanArgs) -> Result<ScanConfig> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load_path(path)?,
        None => ScanConfig::default(),
    };
    if let Some(max_lag) = args.max_lag {
        config.max_lag = max_lag;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(cap) = args.cap {
        config.cap = cap;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(window) = args.change_window {
        config.change_window = window;
    }
    Ok(config)
}
