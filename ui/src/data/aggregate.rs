//! Reductions over filtered rows feeding the summary tiles and charts.
//!
//! Everything here is pure and total over empty input: empty rows produce an
//! empty `Vec` or a `None` mean, never a NaN that leaks into the UI.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use super::record::SalaryRecord;

/// Headline numbers for the four summary tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub row_count: usize,
    /// `None` when no rows are selected; the tile renders "N/A".
    pub mean_usd: Option<f64>,
    pub distinct_titles: usize,
    pub distinct_company_sizes: usize,
}

impl Summary {
    pub fn from_records(records: &[SalaryRecord]) -> Self {
        let mut titles = BTreeSet::new();
        let mut sizes = BTreeSet::new();
        for record in records {
            titles.insert(record.title.as_str());
            sizes.insert(record.company_size.as_str());
        }

        Self {
            row_count: records.len(),
            mean_usd: mean(records.iter().map(|r| r.usd)),
            distinct_titles: titles.len(),
            distinct_company_sizes: sizes.len(),
        }
    }
}

/// Mean salary per job title, top `limit` titles, highest mean first.
/// Ties break by title so the cut is deterministic.
pub fn top_titles_by_mean(records: &[SalaryRecord], limit: usize) -> Vec<(String, f64)> {
    let mut means = grouped_means(records.iter().map(|r| (r.title.as_str(), r.usd)));
    means.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    means.truncate(limit);
    means
}

/// One fixed-width salary bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bucket salaries into `bins` equal-width bins spanning `[min, max]`. The
/// maximum value lands in the last bin; a single-valued range still yields a
/// populated unit-width first bin.
pub fn histogram(records: &[SalaryRecord], bins: usize) -> Vec<HistogramBin> {
    if records.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        min = min.min(record.usd);
        max = max.max(record.usd);
    }

    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for record in records {
        let index = (((record.usd - min) / width) as usize).min(bins - 1);
        out[index].count += 1;
    }

    out
}

/// Frequency of each remote-work category, most common first (ties by label).
pub fn remote_breakdown(records: &[SalaryRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.remote.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Mean salary by residence country, restricted to rows with the given job
/// title, highest mean first.
pub fn country_means(records: &[SalaryRecord], title: &str) -> Vec<(String, f64)> {
    let mut means = grouped_means(
        records
            .iter()
            .filter(|r| r.title == title)
            .map(|r| (r.residence_iso3.as_str(), r.usd)),
    );
    means.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    means
}

fn grouped_means<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for (key, value) in pairs {
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, n))| (key.to_string(), sum / n as f64))
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for value in values {
        sum += value;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}
