mod commands;
mod terminal;

use addrq_common::Config;
use commands::{CommandLine, Commands, check, expand};
use terminal::{logging, print};
use tracing::error;

fn main() {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        max_addresses: commands.limit,
        reject_empty_segments: commands.reject_empty,
    };

    let result = match commands.command {
        Commands::Expand { query } => expand::expand(&query, &cfg),
        Commands::Check { query } => {
            print::header("checking query");
            check::check(&query, &cfg)
        }
    };

    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}
