//! CLI argument parsing via clap.

use clap::Parser;

/// Interactive console manager for a student roster file.
#[derive(Debug, Parser)]
#[command(name = "starosta", version)]
pub struct Args {
    /// Roster file to use instead of the configured one.
    pub file: Option<String>,

    /// Path to config file (default: ./starosta.toml or ~/.config/starosta/starosta.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
