// src/reporting/json.rs
//! Machine-readable report rendering for the `--json` flags.

use crate::compare::ComparisonReport;
use crate::error::Result;
use crate::metrics::Metrics;
use crate::tokens::Token;

/// Formats the comparison report as pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_report(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Formats a token stream plus its metrics as pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_tokens(tokens: &[Token], metrics: Metrics) -> Result<String> {
    let doc = serde_json::json!({
        "metrics": metrics,
        "tokens": tokens,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}
