// src/forecast.rs
//! Estimate-then-simulate pipeline
//!
//! ```text
//! HistoricalSeries → log-returns → (μ, σ, last value, last year)
//!                  → GBM ensemble starting the year after the last observation
//! ```

use crate::analytics::gbm_analytic;
use crate::data::{HistoricalSeries, ReturnRow};
use crate::error::{ForecastError, ForecastResult};
use crate::estimation::{self, Estimate};
use crate::mc::simulator::{self, SimulationConfig, SimulationResult};
use crate::mc::statistics::SummaryStatistics;
use crate::rng;
use rand::Rng;
use tracing::info;

/// Everything a presentation layer needs from one forecast run
#[derive(Debug, Clone)]
pub struct Forecast {
    pub estimate: Estimate,
    pub returns: Vec<ReturnRow>,
    pub config: SimulationConfig,
    pub simulation: SimulationResult,
}

impl Forecast {
    /// Year label of the final ensemble column
    pub fn horizon_year(&self) -> Option<i32> {
        self.simulation.years.last().copied()
    }

    /// Closed-form mean and percentiles for the same parameters and horizon
    pub fn analytic_reference(&self) -> ForecastResult<SummaryStatistics> {
        gbm_analytic::terminal_summary(
            self.estimate.last_value,
            self.estimate.mu(),
            self.estimate.sigma(),
            self.config.prediction_steps as f64 * self.config.dt,
        )
    }
}

/// Estimate parameters from `series` and simulate forward, seeded from `config.seed`
///
/// Columns are labelled from `last_year + 1` unless `config.start_year` is set.
pub fn run_forecast(
    series: &HistoricalSeries,
    config: &SimulationConfig,
) -> ForecastResult<Forecast> {
    let mut rng = rng::seed_rng_from_u64(config.seed);
    run_forecast_with_rng(series, config, &mut rng)
}

pub fn run_forecast_with_rng<R: Rng + ?Sized>(
    series: &HistoricalSeries,
    config: &SimulationConfig,
    rng: &mut R,
) -> ForecastResult<Forecast> {
    let estimate = estimation::estimate(series)?;

    let start_year = match config.start_year {
        Some(year) => year,
        None => estimate
            .last_year
            .checked_add(1)
            .ok_or_else(|| ForecastError::InvalidParameters {
                parameter: "start_year".to_string(),
                value: f64::from(estimate.last_year),
                constraint: "year after the last observation must fit in i32".to_string(),
            })?,
    };
    let config = SimulationConfig {
        start_year: Some(start_year),
        ..config.clone()
    };

    let simulation = simulator::simulate_with_rng(
        estimate.last_value,
        estimate.mu(),
        estimate.sigma(),
        &config,
        rng,
    )?;

    info!(
        last_year = estimate.last_year,
        mu = estimate.mu(),
        sigma = estimate.sigma(),
        n_simulations = config.n_simulations,
        mean = simulation.statistics.mean,
        p5 = simulation.statistics.p5,
        p95 = simulation.statistics.p95,
        "forecast complete"
    );

    Ok(Forecast {
        estimate,
        returns: series.return_table(),
        config,
        simulation,
    })
}
