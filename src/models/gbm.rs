// src/models/gbm.rs
use crate::error::{validation::*, ForecastResult};

/// Geometric Brownian Motion with drift `mu` and volatility `sigma` per unit time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> ForecastResult<Self> {
        validate_positive("s0", s0)?;
        validate_finite("mu", mu)?;
        validate_non_negative("sigma", sigma)?;
        Ok(Gbm { s0, mu, sigma })
    }

    /// Log-space drift over one step: (μ - σ²/2)·dt
    pub fn log_drift(&self, dt: f64) -> f64 {
        (self.mu - 0.5 * self.sigma * self.sigma) * dt
    }

    /// Log-space shock scale over one step: σ·√dt
    pub fn shock_scale(&self, dt: f64) -> f64 {
        self.sigma * dt.sqrt()
    }

    /// S_{t+dt} = S_t · exp((μ - σ²/2)dt + σ√dt·Z)
    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * (self.log_drift(dt) + self.shock_scale(dt) * normal_draw).exp()
    }

    /// E[S_t] = S_0 · exp(μt)
    pub fn expected_value(&self, t: f64) -> f64 {
        self.s0 * (self.mu * t).exp()
    }
}
