//! # gbm-forecast: Monte Carlo Forecasting of Annual Series
//!
//! Fits a Geometric Brownian Motion to a historical annual series (for
//! example a regional poverty line) and projects it forward by simulating a
//! large ensemble of random paths.
//!
//! ## Key Features
//!
//! - **Closed-form estimation**: drift and volatility from log-return moments
//! - **Exact GBM stepping**: no discretization bias in the log
//! - **Reproducible**: injectable RNG or explicit seed, bit-identical reruns
//! - **Full ensemble**: every path retained for per-step bands and path sampling
//! - **Typed errors**: insufficient data, invalid observations, invalid parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_forecast::data::HistoricalSeries;
//! use gbm_forecast::forecast::run_forecast;
//! use gbm_forecast::mc::simulator::SimulationConfig;
//!
//! let series = HistoricalSeries::from_pairs(vec![
//!     (2020, 446_000.0),
//!     (2021, 463_000.0),
//!     (2022, 491_000.0),
//!     (2023, 520_000.0),
//! ])
//! .expect("valid series");
//!
//! let config = SimulationConfig {
//!     n_simulations: 10_000,
//!     prediction_steps: 5,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! let forecast = run_forecast(&series, &config).expect("valid forecast");
//! let stats = forecast.simulation.statistics;
//! println!("P5 {:.0}  P50 {:.0}  P95 {:.0}", stats.p5, stats.p50, stats.p95);
//! ```
//!
//! ## Mathematical Foundation
//!
//! With log-returns r_i = ln(v_i / v_{i-1}), μ is their mean and σ their
//! sample standard deviation. Each path then follows
//! S_t = S_{t-1} · exp((μ - σ²/2)dt + σ√dt · Z_t) with Z_t ~ N(0,1).

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod data;
pub mod estimation;
pub mod models;
pub mod mc;
pub mod analytics;
pub mod forecast;

// Re-export commonly used types for convenience
pub use data::{HistoricalSeries, Observation};
pub use error::{ForecastError, ForecastResult};
pub use estimation::{estimate, Estimate, ModelParameters};
pub use forecast::{run_forecast, Forecast};
pub use mc::simulator::{simulate, SimulationConfig, SimulationResult};
pub use mc::statistics::{BandSet, PathBands, SummaryStatistics};
