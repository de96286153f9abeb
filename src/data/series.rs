// src/data/series.rs
//! Historical Series
//!
//! An annual series of strictly positive observations, one per year, kept
//! sorted ascending by year. Parsing raw spreadsheets is someone else's job:
//! this type only accepts already-numeric `(year, value)` pairs and rejects
//! anything the log transform cannot handle.
//!
//! # Log-Returns
//!
//! For an N-point series the log-return series has N-1 elements:
//! ```text
//! r_i = ln(v_i / v_{i-1}),   i = 1..N-1
//! ```

use crate::error::{ForecastError, ForecastResult};

/// One annual observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(year: i32, value: f64) -> Self {
        Observation { year, value }
    }
}

/// One row of the log-return table shown next to the history chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnRow {
    pub year: i32,
    pub value: f64,
    pub log_return: f64,
}

/// Validated, year-sorted historical series
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSeries {
    observations: Vec<Observation>,
}

impl HistoricalSeries {
    /// Sort by year and validate every observation
    ///
    /// # Errors
    ///
    /// `InvalidValue` for a non-finite or non-positive value, or for a year
    /// that appears more than once.
    pub fn new(mut observations: Vec<Observation>) -> ForecastResult<Self> {
        for obs in &observations {
            Self::validate_observation(obs)?;
        }

        observations.sort_by_key(|obs| obs.year);

        if let Some(pair) = observations.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(ForecastError::InvalidValue {
                year: pair[1].year,
                value: pair[1].value,
                reason: "duplicate year (one observation per year)".to_string(),
            });
        }

        Ok(HistoricalSeries { observations })
    }

    pub fn from_pairs<I>(pairs: I) -> ForecastResult<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(year, value)| Observation::new(year, value))
                .collect(),
        )
    }

    fn validate_observation(obs: &Observation) -> ForecastResult<()> {
        if !obs.value.is_finite() {
            return Err(ForecastError::InvalidValue {
                year: obs.year,
                value: obs.value,
                reason: "must be a finite number".to_string(),
            });
        }
        if obs.value <= 0.0 {
            return Err(ForecastError::InvalidValue {
                year: obs.year,
                value: obs.value,
                reason: "must be positive (log-return undefined)".to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn years(&self) -> Vec<i32> {
        self.observations.iter().map(|obs| obs.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.value).collect()
    }

    /// Most recent observation, the simulation starting point
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// `ln(v_i / v_{i-1})` for consecutive observations; empty for N < 2
    pub fn log_returns(&self) -> Vec<f64> {
        self.observations
            .windows(2)
            .map(|w| log_return(w[0].value, w[1].value))
            .collect()
    }

    /// Observations from the second onward, each paired with its log-return
    pub fn return_table(&self) -> Vec<ReturnRow> {
        self.observations
            .windows(2)
            .map(|w| ReturnRow {
                year: w[1].year,
                value: w[1].value,
                log_return: log_return(w[0].value, w[1].value),
            })
            .collect()
    }
}

/// `ln(next / prev)`, falling back to `ln(next) - ln(prev)` when the ratio
/// itself leaves the normal range
fn log_return(prev: f64, next: f64) -> f64 {
    let ratio = next / prev;
    if ratio.is_normal() {
        ratio.ln()
    } else {
        next.ln() - prev.ln()
    }
}
