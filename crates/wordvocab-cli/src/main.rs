mod commands;
mod input_output;
mod logging;
mod store_args;

use clap::Parser;
use commands::Commands;

use crate::{logging::LogArgs, store_args::StoreArgs};

/// wordvocab: learn a word vocabulary, then encode and decode with it.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub store: StoreArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run(&args.store)
}
