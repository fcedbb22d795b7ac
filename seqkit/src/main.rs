mod batch;
mod common;
mod debug;
mod group;
mod shuffle;
mod slice;
mod sort;
mod unique;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level for diagnostics written to stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle lines into a random order.
    Shuffle(shuffle::Shuffle),
    /// Sort lines.
    Sort(sort::Sort),
    /// Remove repeated lines, keeping the first occurrence.
    Unique(unique::Unique),
    /// Reverse the order of lines.
    Reverse(slice::Reverse),
    /// Output the first lines.
    Take(slice::Take),
    /// Repeat lines until a number of lines is output.
    Cycle(slice::Cycle),
    /// Join lines into batches of a fixed size.
    Batch(batch::Batch),
    /// Group lines by a field.
    Group(group::Group),
    /// Print lines in a debug section, one numbered item per line.
    Debug(debug::Inspect),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(cli.log_level)
        .init();

    match cli.command {
        Commands::Shuffle(shuffle) => shuffle.run()?,
        Commands::Sort(sort) => sort.run()?,
        Commands::Unique(unique) => unique.run()?,
        Commands::Reverse(reverse) => reverse.run()?,
        Commands::Take(take) => take.run()?,
        Commands::Cycle(cycle) => cycle.run()?,
        Commands::Batch(batch) => batch.run()?,
        Commands::Group(group) => group.run()?,
        Commands::Debug(debug) => debug.run()?,
    }
    Ok(())
}
