use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dotdict=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(cli.json);

    match &cli.command {
        Commands::Get(args) => commands::read::get(&cli.file, args, format),
        Commands::Find(args) => commands::read::find(&cli.file, args, format),
        Commands::Set(args) => commands::edit::set(&cli.file, args, format),
        Commands::Delete(args) => commands::edit::delete(&cli.file, args, format),
        Commands::Merge(args) => commands::edit::merge_file(&cli.file, args, format),
        Commands::Encode(args) => commands::codec::encode(&cli.file, args, format),
        Commands::Decode(args) => commands::codec::decode(args, format),
    }
}
