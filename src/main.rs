mod cli;
mod commands;

use clap::Parser;

use crate::cli::CliArgs;

fn main() -> miette::Result<()> {
    let opts = CliArgs::parse();
    commands::init_logging(opts.verbose);
    log::debug!("Parsed arguments: {:?}", opts);
    commands::dispatch(opts)
}
