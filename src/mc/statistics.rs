// src/mc/statistics.rs
//! Summary statistics over simulated values
//!
//! # Definitions
//!
//! - **Mean**: arithmetic mean
//! - **Pn**: linear-interpolation percentile at rank `n/100 · (m - 1)` of
//!   the sorted values, the same definition used for final values and for
//!   every per-step band
//!
//! Overflowed paths (`+inf`) and NaN are not errors; they flow through
//! into the statistics and are reported with a warning.

use crate::math_utils::{percentile, percentile_sorted};
use bitflags::bitflags;
use ndarray::{Array2, ArrayView1, Axis};
use std::cmp::Ordering;
use tracing::warn;

/// Mean and 5th/50th/95th percentiles of one set of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

impl SummaryStatistics {
    pub fn from_values(values: &[f64]) -> Self {
        let mean = if values.is_empty() {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };

        let stats = SummaryStatistics {
            mean,
            p5: percentile(values, 0.05),
            p50: percentile(values, 0.50),
            p95: percentile(values, 0.95),
        };

        if !stats.is_finite() {
            warn!(
                mean = stats.mean,
                p5 = stats.p5,
                p50 = stats.p50,
                p95 = stats.p95,
                "summary statistics contain non-finite values"
            );
        }

        stats
    }

    pub fn from_view(values: ArrayView1<f64>) -> Self {
        let values: Vec<f64> = values.iter().copied().collect();
        Self::from_values(&values)
    }

    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.p5.is_finite() && self.p50.is_finite() && self.p95.is_finite()
    }

    /// Labelled view: `[("Mean", _), ("P5", _), ("P50", _), ("P95", _)]`
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Mean", self.mean),
            ("P5", self.p5),
            ("P50", self.p50),
            ("P95", self.p95),
        ]
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries()
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map(|&(_, value)| value)
    }
}

bitflags! {
    /// Which per-step bands to compute
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BandSet: u32 {
        const MEAN = 1 << 0;
        const P5   = 1 << 1;
        const P50  = 1 << 2;
        const P95  = 1 << 3;
        const PERCENTILES = Self::P5.bits() | Self::P50.bits() | Self::P95.bits();
        const ALL = Self::MEAN.bits() | Self::PERCENTILES.bits();
    }
}

/// Mean path and percentile bands, one entry per ensemble column
#[derive(Debug, Clone, PartialEq)]
pub struct PathBands {
    pub years: Vec<i32>,
    pub mean: Option<Vec<f64>>,
    pub p5: Option<Vec<f64>>,
    pub p50: Option<Vec<f64>>,
    pub p95: Option<Vec<f64>>,
}

impl PathBands {
    /// Reduce each column of `paths` (rows = paths, columns = steps)
    ///
    /// Unselected bands are `None`.
    pub fn from_paths(paths: &Array2<f64>, years: &[i32], bands: BandSet) -> Self {
        let steps = paths.ncols();
        let want = |flag: BandSet| {
            if bands.contains(flag) {
                Some(Vec::<f64>::with_capacity(steps))
            } else {
                None
            }
        };

        let mut mean = want(BandSet::MEAN);
        let mut p5 = want(BandSet::P5);
        let mut p50 = want(BandSet::P50);
        let mut p95 = want(BandSet::P95);
        let needs_sort = bands.intersects(BandSet::PERCENTILES);

        for column in paths.axis_iter(Axis(1)) {
            if let Some(mean) = mean.as_mut() {
                mean.push(column.iter().sum::<f64>() / column.len() as f64);
            }
            if !needs_sort {
                continue;
            }

            let mut sorted: Vec<f64> = column.iter().copied().collect();
            let has_nan = sorted.iter().any(|v| v.is_nan());
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            let at = |p: f64| {
                if has_nan {
                    f64::NAN
                } else {
                    percentile_sorted(&sorted, p)
                }
            };

            if let Some(p5) = p5.as_mut() {
                p5.push(at(0.05));
            }
            if let Some(p50) = p50.as_mut() {
                p50.push(at(0.50));
            }
            if let Some(p95) = p95.as_mut() {
                p95.push(at(0.95));
            }
        }

        PathBands {
            years: years.to_vec(),
            mean,
            p5,
            p50,
            p95,
        }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
