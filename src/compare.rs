// src/compare.rs
//! The comparison engine: registry x dataset list, through the cache.

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, MetricsCache};
use crate::error::{Result, TokcostError};
use crate::formats::FormatKind;
use crate::metrics::{measure, Metrics};

/// One `(dataset, format)` result.
///
/// A degraded cell (serializer failure) carries zero metrics and the error
/// text; it never aborts the rest of the comparison.
#[derive(Debug, Clone, Serialize)]
pub struct FormatCell {
    pub format: &'static str,
    pub metrics: Metrics,
    /// Signed percentage vs the row's baseline token count, one decimal.
    pub delta_pct: f64,
    /// Tie with the baseline counts as favorable (`<= 0`, not `< 0`).
    pub favorable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One dataset's cells, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub dataset: String,
    pub cells: Vec<FormatCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub baseline: &'static str,
    pub rows: Vec<ComparisonRow>,
    pub cache: CacheStats,
}

/// Builds the dataset x format comparison matrix.
///
/// Rows follow the input dataset order, cells follow registry order;
/// nothing is sorted by value. Metrics come from the cache when present
/// and are computed + stored on miss.
///
/// # Errors
/// `UnknownFormat` if `baseline` is not registered (no rows are produced),
/// `UnknownDataset` if the resolver cannot supply a named dataset. Both
/// are caller errors and are never retried or silently defaulted.
pub fn build_comparison<F>(
    baseline: &str,
    dataset_names: &[&str],
    resolver: F,
    cache: &mut MetricsCache,
) -> Result<ComparisonReport>
where
    F: Fn(&str) -> Option<Value>,
{
    let baseline_kind = FormatKind::from_name(baseline).ok_or_else(|| {
        TokcostError::UnknownFormat {
            name: baseline.to_string(),
        }
    })?;

    let mut rows = Vec::with_capacity(dataset_names.len());
    for name in dataset_names {
        let value = resolver(name).ok_or_else(|| TokcostError::UnknownDataset {
            name: (*name).to_string(),
        })?;
        rows.push(build_row(name, &value, baseline_kind, cache));
    }

    Ok(ComparisonReport {
        baseline: baseline_kind.name(),
        rows,
        cache: cache.stats(),
    })
}

fn build_row(
    dataset: &str,
    value: &Value,
    baseline_kind: FormatKind,
    cache: &mut MetricsCache,
) -> ComparisonRow {
    let measured: Vec<(FormatKind, Result<Metrics>)> = FormatKind::ALL
        .into_iter()
        .map(|kind| (kind, cell_metrics(cache, dataset, kind, value)))
        .collect();

    let baseline_tokens = measured
        .iter()
        .find(|(kind, _)| *kind == baseline_kind)
        .and_then(|(_, res)| res.as_ref().ok())
        .map_or(0, |m| m.token_count);
    // Division guard: a zero-token baseline counts as one.
    let baseline_tokens = if baseline_tokens == 0 { 1 } else { baseline_tokens };

    let cells = measured
        .into_iter()
        .map(|(kind, res)| build_cell(kind, res, baseline_tokens))
        .collect();

    ComparisonRow {
        dataset: dataset.to_string(),
        cells,
    }
}

fn build_cell(kind: FormatKind, res: Result<Metrics>, baseline_tokens: usize) -> FormatCell {
    let (metrics, error) = match res {
        Ok(m) => (m, None),
        Err(e) => (Metrics::default(), Some(e.to_string())),
    };
    let delta_pct = percentage_delta(metrics.token_count, baseline_tokens);

    FormatCell {
        format: kind.name(),
        metrics,
        delta_pct,
        favorable: delta_pct <= 0.0,
        error,
    }
}

/// Cache-through metric computation for one cell. A serializer failure is
/// returned without caching anything.
fn cell_metrics(
    cache: &mut MetricsCache,
    dataset: &str,
    kind: FormatKind,
    value: &Value,
) -> Result<Metrics> {
    if let Some(metrics) = cache.get(dataset, kind.name()) {
        return Ok(metrics);
    }
    let text = kind.render(value)?;
    let metrics = measure(&text);
    cache.set(dataset, kind.name(), metrics);
    Ok(metrics)
}

/// Signed percentage of `token_count` against `baseline`, rounded to one
/// decimal place: `round(((t - b) / b) * 1000) / 10`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage_delta(token_count: usize, baseline: usize) -> f64 {
    let t = token_count as f64;
    let b = baseline as f64;
    (((t - b) / b) * 1000.0).round() / 10.0
}
