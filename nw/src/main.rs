mod args;
mod pipeline;
mod util;
mod viz;

use args::{Cli, SubCommands};
use pipeline::{align, random};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    env_logger::init();

    match Cli::parse().command {
        SubCommands::Align(args) => {
            align(&args)?;
        }
        SubCommands::Random(args) => {
            random(&args)?;
        }
    }
    Ok(())
}
