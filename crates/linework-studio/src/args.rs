use std::path::PathBuf;

use clap::Parser;
use linework::logging::LoggingConfig;

/// Draws one frame with every linework generator and writes it as SVG.
#[derive(Parser, Debug)]
#[command(name = "linework-studio", version)]
pub struct Args {
    /// Output SVG file.
    #[arg(default_value = "linework-demo.svg")]
    pub output: PathBuf,

    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,
}

impl Args {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig { env_filter: self.log.clone(), ..LoggingConfig::default() }
    }
}
