// src/reporting/console.rs
//! Terminal rendering of comparison reports and token previews.
//!
//! Everything here is presentation: truncation, color, alignment. The
//! numbers come from the core untouched.

use colored::Colorize;

use crate::cache::CacheStats;
use crate::compare::{ComparisonReport, FormatCell};
use crate::tokens::{Token, TokenKind};

/// Prints the dataset x format matrix with the percentage column, one
/// block per dataset, cells in registry order.
pub fn print_report(report: &ComparisonReport) {
    println!("📊 Baseline: {}\n", report.baseline.cyan().bold());

    for row in &report.rows {
        println!("{}", row.dataset.blue().bold());
        for cell in &row.cells {
            print_cell(cell, report.baseline);
        }
        println!();
    }

    print_cache_stats(&report.cache);
}

fn print_cell(cell: &FormatCell, baseline: &str) {
    let name = format!("{:<13}", cell.format);

    if let Some(err) = &cell.error {
        println!("  {name} {}", format!("error: {err}").yellow());
        return;
    }

    let tok = format!("{:>7} tok", cell.metrics.token_count);
    let bytes = format!("{:>7} B", cell.metrics.byte_length);
    let delta = if cell.format == baseline {
        "   base".dimmed()
    } else {
        let label = format!("{:>+6.1}%", cell.delta_pct);
        if cell.favorable {
            label.green()
        } else {
            label.red()
        }
    };

    println!("  {name}{tok}{bytes}  {delta}");
}

fn print_cache_stats(stats: &CacheStats) {
    println!(
        "{} {} entries, {} requests, {} hits",
        "cache:".dimmed(),
        stats.size,
        stats.requests,
        stats.hits
    );
}

/// Prints a colored token preview, truncated to `limit` tokens with a
/// remainder note. Truncation lives here, not in the tokenizer.
pub fn print_token_preview(tokens: &[Token], limit: usize) {
    let shown = tokens.len().min(limit);

    for token in &tokens[..shown] {
        let piece = match token.kind {
            TokenKind::Str => token.text.green(),
            TokenKind::Word => token.text.normal(),
            TokenKind::Punct => token.text.dimmed(),
        };
        print!("{piece} ");
    }
    println!();

    if tokens.len() > limit {
        println!(
            "{}",
            format!("... and {} more tokens", tokens.len() - limit).dimmed()
        );
    }
}
