//! wordstream command-line entry point

use clap::Parser;
use wordstream_cli::commands::Commands;

/// Word segmentation and part-of-speech tagging over sentence streams
#[derive(Debug, Parser)]
#[command(name = "wordstream", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
