//! tansaku: scan files for many keywords at once

use clap::Parser;
use tansaku_cli::{commands::Commands, CliResult};

#[derive(Debug, Parser)]
#[command(name = "tansaku", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => args.execute(),
        Commands::Tokenize(args) => args.execute(),
        Commands::Dump(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}
