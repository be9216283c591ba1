//! Visual Analytics - Correlation heatmap and distribution histogram data
//!
//! Produces the numbers behind the charts; drawing them is the surface's job.

use serde::Serialize;

use crate::constants::MAX_HISTOGRAM_BINS;
use super::loader::{present, Dataset};
use super::summary::{quantile, sample_std};
use super::DatasetError;

/// Points on the KDE curve
pub const KDE_GRID_POINTS: usize = 200;

// ============================================================================
// CORRELATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// `values[i][j]`, `None` where the coefficient is undefined
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

/// Pearson coefficient over rows where both values are present
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise correlation of all numeric columns
pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let columns = dataset.numeric_columns();

    let values = columns
        .iter()
        .map(|(_, xs)| columns.iter().map(|(_, ys)| pearson(xs, ys)).collect())
        .collect();

    CorrelationMatrix {
        columns: columns.into_iter().map(|(name, _)| name).collect(),
        values,
    }
}

// ============================================================================
// HISTOGRAM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KdePoint {
    pub x: f64,
    /// Density scaled to histogram counts
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub column: String,
    /// `counts.len() + 1` ascending edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bin_width: f64,
    /// Empty when the column has fewer than two distinct values
    pub kde: Vec<KdePoint>,
}

/// Bin count picked like numpy's "auto": the smaller of the Sturges and
/// Freedman-Diaconis widths, Sturges alone when the IQR is zero.
/// Never more than [`MAX_HISTOGRAM_BINS`].
pub fn auto_bin_count(sorted: &[f64]) -> usize {
    let n = sorted.len();
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return 1;
    };
    let range = last - first;
    if range == 0.0 {
        return 1;
    }

    let sturges = range / ((n as f64).log2() + 1.0);
    let iqr = quantile(sorted, 0.75).unwrap_or(0.0) - quantile(sorted, 0.25).unwrap_or(0.0);
    let fd = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);

    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };
    let bins = (range / width).ceil();
    if bins.is_finite() && bins < MAX_HISTOGRAM_BINS as f64 {
        (bins as usize).max(1)
    } else {
        MAX_HISTOGRAM_BINS
    }
}

/// Histogram plus KDE curve for one numeric column. An explicit `bins` is
/// clamped to `1..=MAX_HISTOGRAM_BINS`.
pub fn histogram(dataset: &Dataset, column: &str, bins: Option<usize>) -> Result<Histogram, DatasetError> {
    let values = dataset.numeric_column(column)?;
    let mut sorted = present(&values);
    if sorted.is_empty() {
        return Err(DatasetError::NoData(column.to_string()));
    }
    sorted.sort_by(f64::total_cmp);

    let bin_count = match bins {
        Some(b) if b > 0 => b.min(MAX_HISTOGRAM_BINS),
        _ => auto_bin_count(&sorted),
    };

    let (mut low, mut high) = (sorted[0], sorted[sorted.len() - 1]);
    if low == high {
        low -= 0.5;
        high += 0.5;
    }

    let bin_width = (high - low) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count).map(|i| low + bin_width * i as f64).collect();

    let mut counts = vec![0usize; bin_count];
    for v in &sorted {
        let index = (((v - low) / (high - low)) * bin_count as f64).floor() as usize;
        counts[index.min(bin_count - 1)] += 1;
    }

    let kde = gaussian_kde(&sorted, low, high, bin_width);

    Ok(Histogram {
        column: column.to_string(),
        edges,
        counts,
        bin_width,
        kde,
    })
}

/// Gaussian KDE with Scott's bandwidth, scaled so the curve sits on the bars
fn gaussian_kde(sorted: &[f64], low: f64, high: f64, bin_width: f64) -> Vec<KdePoint> {
    let n = sorted.len() as f64;
    let bandwidth = match sample_std(sorted) {
        Some(std) if std > 0.0 => std * n.powf(-0.2),
        _ => return Vec::new(),
    };

    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let step = (high - low) / (KDE_GRID_POINTS - 1) as f64;

    (0..KDE_GRID_POINTS)
        .map(|i| {
            let x = low + step * i as f64;
            let density: f64 = sorted
                .iter()
                .map(|xi| (-0.5 * ((x - xi) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            KdePoint { x, y: density * n * bin_width }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect() {
        let xs = [Some(1.0), Some(2.0), Some(3.0)];
        let ys = [Some(2.0), Some(4.0), Some(6.0)];
        let zs = [Some(3.0), Some(2.0), Some(1.0)];

        assert!((pearson(&xs, &ys).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &zs).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_pairwise_complete() {
        let xs = [Some(1.0), None, Some(2.0), Some(3.0)];
        let ys = [Some(1.0), Some(100.0), Some(2.0), Some(3.0)];
        assert!((pearson(&xs, &ys).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_undefined() {
        let xs = [Some(1.0), Some(1.0), Some(1.0)];
        let ys = [Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(pearson(&xs, &ys), None);
        assert_eq!(pearson(&[Some(1.0)], &[Some(2.0)]), None);
    }

    #[test]
    fn test_auto_bins() {
        assert_eq!(auto_bin_count(&[]), 1);
        assert_eq!(auto_bin_count(&[5.0, 5.0]), 1);

        // 8 evenly spread points: Sturges width 7/4 beats FD width 7/2 → 4 bins
        let sorted: Vec<f64> = (0..8).map(f64::from).collect();
        assert_eq!(auto_bin_count(&sorted), 4);
    }

    #[test]
    fn test_auto_bins_capped_for_outlier() {
        let mut sorted: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.001).collect();
        sorted.push(1e9);

        assert_eq!(auto_bin_count(&sorted), MAX_HISTOGRAM_BINS);
    }
}
