use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{optimize::OptimizeArgs, resolve::ResolveArgs};

mod file_utils;
mod optimize;
mod resolve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign delivery cities to trucks and print the cheapest plan found
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Print the all-pairs shortest travel costs of a city map
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args)?,
        Commands::Resolve { args } => resolve::run(args)?,
    }

    Ok(())
}
