//! sbgnet CLI - batch conversion for process description networks.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::convert::Format;

#[derive(Parser)]
#[command(name = "sbgnet")]
#[command(author, version, about = "sbgnet - SBGN process description network tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more input documents into a single network
    Convert {
        /// Input files (textual notation, or .json snapshots)
        inputs: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "txt")]
        format: Format,

        /// Collapse gene expression patterns before writing
        #[arg(long)]
        simplify: bool,
    },

    /// Show collection and view counts for an input document
    Stats {
        /// Input file
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Convert {
            inputs,
            output,
            format,
            simplify,
        } => commands::convert::run(&inputs, output.as_deref(), format, simplify),
        Commands::Stats { input } => commands::stats::run(&input),
    }
}
