// src/cli/args.rs
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tokcost",
    version,
    about = "Compare token and byte costs across serialization formats"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare datasets across every registered format
    Compare {
        /// Dataset names (presets and --file names; defaults to all of them)
        datasets: Vec<String>,
        /// Baseline format for the percentage column
        #[arg(long, short)]
        baseline: Option<String>,
        /// Custom dataset as NAME=PATH pointing at a JSON file
        #[arg(long, short, value_name = "NAME=PATH")]
        file: Vec<String>,
        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List registered formats in table order
    Formats,
    /// List built-in preset datasets
    Presets,
    /// Print one dataset serialized in one format
    Render {
        format: String,
        dataset: String,
        #[arg(long, short, value_name = "NAME=PATH")]
        file: Vec<String>,
    },
    /// Tokenize a dataset's rendition and show the token preview
    Tokens {
        dataset: String,
        /// Format to serialize with (defaults to the configured baseline)
        #[arg(long)]
        format: Option<String>,
        #[arg(long, short, value_name = "NAME=PATH")]
        file: Vec<String>,
        /// Emit tokens and metrics as JSON instead of the preview
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for the compare command (also the bare-invocation default).
#[derive(Debug, Clone, Default)]
pub struct CompareArgs {
    pub datasets: Vec<String>,
    pub baseline: Option<String>,
    pub file: Vec<String>,
    pub json: bool,
}
