use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics for one value sequence, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub sum: f64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// Upper median: element ⌊n/2⌋ of the sorted values.
    pub median: f64,
    /// Population standard deviation (divisor n).
    pub std_dev: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sum={:.2} average={:.2} max={:.2} min={:.2} median={:.2} stdDev={:.2}",
            self.sum, self.average, self.max, self.min, self.median, self.std_dev
        )
    }
}

/// Round half away from zero to 2 decimal places.
///
/// Magnitudes too large to scale by 100 are returned as-is; f64 has no
/// fractional digits left there.
pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / 100.0
}

/// Compute the six summaries of `values`.
///
/// NaN entries are not rejected; they make every summary NaN except the
/// median, where they sort last.
pub fn summarize(values: &[f64]) -> Result<Statistics> {
    if values.is_empty() {
        return Err(Error::InvalidInput(
            "statistics need at least one value".into(),
        ));
    }
    let count = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let average = sum / count;

    let max = values.iter().copied().reduce(nan_max).unwrap_or(f64::NAN);
    let min = values.iter().copied().reduce(nan_min).unwrap_or(f64::NAN);

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = sorted[sorted.len() / 2];

    let variance = values
        .iter()
        .map(|v| {
            let d = v - average;
            d * d
        })
        .sum::<f64>()
        / count;

    Ok(Statistics {
        sum: round2(sum),
        average: round2(average),
        max: round2(max),
        min: round2(min),
        median: round2(median),
        std_dev: round2(variance.sqrt()),
    })
}

// f64::max/min ignore NaN; here NaN wins.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}
