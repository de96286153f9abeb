// src/estimation/estimator.rs
//! Closed-form moment estimation of GBM parameters
//!
//! # Mathematical Framework
//!
//! Given log-returns r_1..r_m of an annual series:
//! ```text
//! μ = (1/m) Σ r_i
//! σ = √( Σ (r_i - μ)² / (m - 1) )
//! ```
//! σ uses the sample (Bessel-corrected) variance, so at least two
//! log-returns, i.e. three observations, are required.

use crate::data::{HistoricalSeries, Observation};
use crate::error::{ForecastError, ForecastResult};
use statrs::statistics::Statistics;
use tracing::debug;

/// Fewest observations that yield a defined sample volatility
pub const MIN_OBSERVATIONS: usize = 3;

/// Drift and volatility of the log-return process
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub mu: f64,
    pub sigma: f64,
}

/// Estimated parameters plus the point the simulation starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub parameters: ModelParameters,
    pub last_value: f64,
    pub last_year: i32,
}

impl Estimate {
    pub fn mu(&self) -> f64 {
        self.parameters.mu
    }

    pub fn sigma(&self) -> f64 {
        self.parameters.sigma
    }
}

/// Estimate (μ, σ, last value, last year) from a historical series
///
/// # Errors
///
/// `InsufficientData` when the series has fewer than [`MIN_OBSERVATIONS`]
/// points.
pub fn estimate(series: &HistoricalSeries) -> ForecastResult<Estimate> {
    let last = match series.last() {
        Some(obs) => *obs,
        None => {
            return Err(ForecastError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: 0,
            })
        }
    };

    let parameters = estimate_parameters(&series.log_returns())?;

    debug!(
        observations = series.len(),
        mu = parameters.mu,
        sigma = parameters.sigma,
        last_year = last.year,
        last_value = last.value,
        "estimated GBM parameters"
    );

    Ok(Estimate {
        parameters,
        last_value: last.value,
        last_year: last.year,
    })
}

/// Convenience wrapper: validate and sort raw pairs, then [`estimate`]
pub fn estimate_from_pairs(pairs: &[(i32, f64)]) -> ForecastResult<Estimate> {
    let series = HistoricalSeries::new(
        pairs
            .iter()
            .map(|&(year, value)| Observation::new(year, value))
            .collect(),
    )?;
    estimate(&series)
}

/// Sample mean and Bessel-corrected standard deviation of log-returns
///
/// `InsufficientData` counts observations (returns + 1), not returns.
pub fn estimate_parameters(log_returns: &[f64]) -> ForecastResult<ModelParameters> {
    if log_returns.len() + 1 < MIN_OBSERVATIONS {
        return Err(ForecastError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: log_returns.len() + 1,
        });
    }

    let mu = log_returns.iter().mean();
    let sigma = log_returns.iter().std_dev();

    Ok(ModelParameters { mu, sigma })
}
