// src/cli/handlers.rs
//! Command handlers: resolve datasets, drive the core, render output.
//!
//! This is the presentation boundary. Raw user text (custom dataset files)
//! is parsed here with `serde_json`; the core only ever sees structured
//! values.

use std::fs;

use anyhow::{anyhow, Result};
use colored::Colorize;
use serde_json::Value;

use super::args::{Commands, CompareArgs};
use crate::cache::MetricsCache;
use crate::compare::build_comparison;
use crate::config::Config;
use crate::datasets;
use crate::error::TokcostError;
use crate::formats;
use crate::metrics::measure;
use crate::reporting;
use crate::tokens::tokenize;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Compare {
            datasets,
            baseline,
            file,
            json,
        } => handle_compare(&CompareArgs {
            datasets,
            baseline,
            file,
            json,
        }),
        Commands::Formats => {
            handle_formats();
            Ok(())
        }
        Commands::Presets => {
            handle_presets();
            Ok(())
        }
        Commands::Render {
            format,
            dataset,
            file,
        } => handle_render(&format, &dataset, &file),
        Commands::Tokens {
            dataset,
            format,
            file,
            json,
        } => handle_tokens(&dataset, format.as_deref(), &file, json),
    }
}

/// Runs a comparison and prints the table or JSON report.
///
/// # Errors
/// Returns error on an unknown baseline or dataset, or unreadable --file.
pub fn handle_compare(args: &CompareArgs) -> Result<()> {
    let config = Config::load();
    let baseline = args
        .baseline
        .clone()
        .unwrap_or_else(|| config.preferences.baseline.clone());

    let custom = load_custom(&args.file)?;
    let names: Vec<String> = if args.datasets.is_empty() {
        default_dataset_names(&custom)
    } else {
        args.datasets.clone()
    };
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let resolver = make_resolver(custom);
    let mut cache = MetricsCache::new();
    let report = build_comparison(&baseline, &name_refs, resolver, &mut cache)?;

    if args.json {
        println!("{}", reporting::json::format_report(&report)?);
    } else {
        reporting::print_report(&report);
    }
    Ok(())
}

fn handle_formats() {
    for name in formats::names() {
        println!("{name}");
    }
}

fn handle_presets() {
    for name in datasets::preset_names() {
        println!("{name}");
    }
}

/// Prints one dataset serialized with one format, verbatim.
///
/// # Errors
/// Returns error on an unknown format or dataset, or unreadable --file.
pub fn handle_render(format: &str, dataset: &str, files: &[String]) -> Result<()> {
    let resolver = make_resolver(load_custom(files)?);
    let value = resolve_or_fail(&resolver, dataset)?;
    println!("{}", formats::serialize(format, &value)?);
    Ok(())
}

/// Serializes, tokenizes, and previews one dataset.
///
/// # Errors
/// Returns error on an unknown format or dataset, or unreadable --file.
pub fn handle_tokens(
    dataset: &str,
    format: Option<&str>,
    files: &[String],
    json: bool,
) -> Result<()> {
    let config = Config::load();
    let format = format.unwrap_or(config.preferences.baseline.as_str());

    let resolver = make_resolver(load_custom(files)?);
    let value = resolve_or_fail(&resolver, dataset)?;
    let text = formats::serialize(format, &value)?;

    let tokens = tokenize(&text);
    let metrics = measure(&text);

    if json {
        println!("{}", reporting::json::format_tokens(&tokens, metrics)?);
    } else {
        reporting::print_token_preview(&tokens, config.preferences.preview_limit);
        println!(
            "\n📊 {} tokens, {} bytes ({format})",
            metrics.token_count.to_string().yellow().bold(),
            metrics.byte_length
        );
    }
    Ok(())
}

/// Parses each `NAME=PATH` entry and reads the JSON file behind it.
/// Order is preserved; a custom name shadows a preset of the same name.
fn load_custom(entries: &[String]) -> Result<Vec<(String, Value)>> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let (name, path) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=PATH, got '{entry}'"))?;
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        out.push((name.to_string(), value));
    }
    Ok(out)
}

/// The resolver seam the engine consumes: custom datasets first, then
/// presets.
fn make_resolver(custom: Vec<(String, Value)>) -> impl Fn(&str) -> Option<Value> {
    move |name| {
        custom
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .or_else(|| datasets::resolve_preset(name).cloned())
    }
}

fn resolve_or_fail(resolver: &impl Fn(&str) -> Option<Value>, name: &str) -> Result<Value> {
    resolver(name).ok_or_else(|| {
        TokcostError::UnknownDataset {
            name: name.to_string(),
        }
        .into()
    })
}

/// Default comparison set: every preset, then every custom dataset in the
/// order the --file flags were given.
fn default_dataset_names(custom: &[(String, Value)]) -> Vec<String> {
    datasets::preset_names()
        .into_iter()
        .map(str::to_string)
        .chain(custom.iter().map(|(name, _)| name.clone()))
        .collect()
}
