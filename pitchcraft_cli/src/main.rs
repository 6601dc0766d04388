// CLI entry point for Pitchcraft.
//
// Turns a one-sentence startup idea into a pitch (name, tagline, copy, brand
// colors, logo), keeps pitches in a JSON file, and exports a landing page as
// React source or a static HTML preview. Command bodies live in
// `commands.rs`; this file parses arguments and sets up logging.
//
// Usage:
//   pitchcraft [--store <path>] [--seed <n>] [--banks <file>] <command>
//
// Logging goes to stderr through `env_logger` (default `warn`, override with
// `RUST_LOG=debug` to see every generated choice).

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pitchcraft_core::store::DEFAULT_STORE_FILE;

#[derive(Parser)]
#[command(name = "pitchcraft", version, about = "Generate startup pitches and landing pages")]
struct Cli {
    /// Pitch store file
    #[arg(long, global = true, env = "PITCHCRAFT_STORE", default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,
    /// Seed for reproducible output (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Phrase-bank JSON to use instead of the built-in banks
    #[arg(long, global = true)]
    banks: Option<PathBuf>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate and save a new pitch
    New {
        /// The startup idea, in a sentence
        #[arg(long)]
        idea: String,
        /// Industry, e.g. "technology" or "food & beverage"
        #[arg(long)]
        industry: String,
        /// formal or fun
        #[arg(long, default_value = "formal")]
        tone: String,
    },
    /// List saved pitches, newest first
    List,
    /// Print one pitch as JSON
    Show { id: String },
    /// Set one text field of a pitch
    Edit {
        id: String,
        /// name, tagline, elevator, problem, solution, target or logo
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
    },
    /// Re-run generation for a pitch, keeping its id, industry and tone
    Regenerate {
        id: String,
        /// New idea (defaults to the pitch's elevator)
        #[arg(long)]
        idea: Option<String>,
    },
    /// Render a landing page with a fresh layout variation
    Landing {
        id: String,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write a static HTML preview instead of React source
        #[arg(long)]
        html: bool,
    },
    /// Write one SVG logo per style
    Logos {
        id: String,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the share link for a pitch
    Share {
        id: String,
        #[arg(long, default_value = commands::DEFAULT_BASE_URL)]
        base_url: String,
    },
    /// Delete one pitch
    Delete { id: String },
    /// Delete every pitch
    Clear,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(e) = commands::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
