use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "csv-gateway")]
#[command(about = "Joins three remote collections into a CSV file on request")]
pub struct CliArgs {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
