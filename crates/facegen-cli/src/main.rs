// crates/facegen-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "facegen-cli")]
#[command(about = "Deterministic per-character face generation", long_about = None)]
pub struct Cli {
    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate appearances for a character list (JSONL out)
    Generate(cmd::generate::GenerateArgs),

    /// Catalog tools (raw catalog JSON)
    Catalog(cmd::catalog::CatalogArgs),

    /// Parse a color value and show its linear / display channels
    Color(cmd::color::ColorArgs),

    /// Print the PRNG stream for an identifier
    Stream(cmd::stream::StreamArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Catalog(args) => cmd::catalog::run(args),
        Commands::Color(args) => cmd::color::run(args),
        Commands::Stream(args) => cmd::stream::run(args),
    }
}
