// src/analytics/gbm_analytic.rs
//! Closed-form terminal distribution of GBM
//!
//! # Mathematical Foundation
//!
//! Under the exact discretization the log of the terminal value is normal:
//! ```text
//! ln S_T ~ N( ln S0 + (μ - σ²/2)·h,  σ²·h ),   h = T·dt
//! ```
//!
//! so the terminal value is lognormal with
//! ```text
//! E[S_T]      = S0 · exp(μh)
//! Q_q(S_T)    = S0 · exp((μ - σ²/2)h + σ√h · Φ⁻¹(q))
//! ```
//!
//! These are the targets the Monte Carlo statistics converge to.

use crate::error::{validation::*, ForecastError, ForecastResult};
use crate::math_utils::norm_cdf;
use crate::mc::statistics::SummaryStatistics;
use crate::models::gbm::Gbm;
use statrs::distribution::{ContinuousCDF, Normal};

/// E[S_T] = S0 · exp(μh)
pub fn expected_terminal_value(s0: f64, mu: f64, horizon: f64) -> f64 {
    s0 * (mu * horizon).exp()
}

/// Standard normal quantile Φ⁻¹(q)
fn standard_normal_quantile(q: f64) -> ForecastResult<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| ForecastError::InvalidParameters {
        parameter: "normal".to_string(),
        value: 1.0,
        constraint: e.to_string(),
    })?;
    Ok(normal.inverse_cdf(q))
}

/// q-quantile of S_T for horizon `h = steps · dt`
///
/// # Errors
///
/// `InvalidParameters` for an invalid model, non-positive horizon, or `q`
/// outside `[0, 1]`.
pub fn terminal_quantile(
    s0: f64,
    mu: f64,
    sigma: f64,
    horizon: f64,
    q: f64,
) -> ForecastResult<f64> {
    let model = Gbm::new(s0, mu, sigma)?;
    validate_positive("horizon", horizon)?;
    validate_probability("q", q)?;

    let log_drift = model.log_drift(horizon);
    if model.sigma == 0.0 {
        return Ok(s0 * log_drift.exp());
    }

    let z = standard_normal_quantile(q)?;
    Ok(s0 * (log_drift + model.shock_scale(horizon) * z).exp())
}

/// P(S_T ≤ threshold) = Φ((ln(x/S0) - (μ - σ²/2)h) / (σ√h))
pub fn terminal_cdf(
    s0: f64,
    mu: f64,
    sigma: f64,
    horizon: f64,
    threshold: f64,
) -> ForecastResult<f64> {
    let model = Gbm::new(s0, mu, sigma)?;
    validate_positive("horizon", horizon)?;
    if threshold <= 0.0 {
        return Ok(0.0);
    }

    let log_ratio = (threshold / s0).ln() - model.log_drift(horizon);
    if model.sigma == 0.0 {
        return Ok(if log_ratio >= 0.0 { 1.0 } else { 0.0 });
    }

    Ok(norm_cdf(log_ratio / model.shock_scale(horizon)))
}

/// Mean, P5, P50 and P95 of S_T in closed form
pub fn terminal_summary(
    s0: f64,
    mu: f64,
    sigma: f64,
    horizon: f64,
) -> ForecastResult<SummaryStatistics> {
    Ok(SummaryStatistics {
        mean: expected_terminal_value(s0, mu, horizon),
        p5: terminal_quantile(s0, mu, sigma, horizon, 0.05)?,
        p50: terminal_quantile(s0, mu, sigma, horizon, 0.50)?,
        p95: terminal_quantile(s0, mu, sigma, horizon, 0.95)?,
    })
}
