pub mod check;
pub mod expand;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "addrq")]
#[command(about = "Expands compact service address queries.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Refuse queries producing more than N addresses
    #[arg(long, global = true, value_name = "N")]
    pub limit: Option<usize>,
    /// Treat empty segments (e.g. a trailing comma) as errors
    #[arg(long, global = true)]
    pub reject_empty: bool,
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every address a query expands to
    #[command(alias = "e")]
    Expand { query: String },
    /// Validate a query and summarize its expansion
    #[command(alias = "c")]
    Check { query: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
