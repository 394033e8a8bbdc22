// src/bin/tokcost.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tokcost_core::cli::{handlers, Cli, CompareArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(command) => handlers::dispatch(command),
        // Bare `tokcost` compares every preset with the configured baseline.
        None => handlers::handle_compare(&CompareArgs::default()),
    }
}
