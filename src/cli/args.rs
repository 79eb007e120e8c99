use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Resolve domains to IPv4 addresses and flag AWS or GCP hosted ones"
)]
pub struct Args {
    /// Path to the newline-delimited domain list
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write results to PATH (.xlsx or .txt)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the results table to the console
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Path to configuration file (TOML)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
