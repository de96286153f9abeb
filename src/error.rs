// src/error.rs
use std::fmt;

/// Error types for estimation and simulation
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Too few historical observations to estimate model parameters
    InsufficientData { required: usize, actual: usize },

    /// An observation that breaks the log transform (non-positive, non-finite)
    /// or repeats a year already present in the series
    InvalidValue {
        year: i32,
        value: f64,
        reason: String,
    },

    /// Invalid simulation input (start value, drift, volatility, counts, step size)
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InsufficientData { required, actual } => {
                write!(
                    f,
                    "Insufficient data: need at least {} observations, got {}",
                    required, actual
                )
            }
            ForecastError::InvalidValue {
                year,
                value,
                reason,
            } => {
                write!(f, "Invalid observation for year {} = {}: {}", year, value, reason)
            }
            ForecastError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
        }
    }
}

impl std::error::Error for ForecastError {}

/// Result type alias for gbm-forecast operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Validation utilities
pub mod validation {
    use super::{ForecastError, ForecastResult};

    /// Validate that a parameter is positive and finite
    pub fn validate_positive(name: &str, value: f64) -> ForecastResult<()> {
        // `!(value > 0.0)` also rejects NaN
        if !(value > 0.0) || !value.is_finite() {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0) and finite".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative and finite
    pub fn validate_non_negative(name: &str, value: f64) -> ForecastResult<()> {
        if !(value >= 0.0) || !value.is_finite() {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0) and finite".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> ForecastResult<()> {
        if !value.is_finite() {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a path or step count
    pub fn validate_count(name: &str, count: usize) -> ForecastResult<()> {
        if count == 0 {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value: 0.0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a probability level used for percentiles and quantiles
    pub fn validate_probability(name: &str, p: f64) -> ForecastResult<()> {
        if !(0.0..=1.0).contains(&p) {
            Err(ForecastError::InvalidParameters {
                parameter: name.to_string(),
                value: p,
                constraint: "must be in range [0, 1]".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("s0", 1_000_000.0).is_ok());
        assert!(validate_positive("s0", 0.0).is_err());
        assert!(validate_positive("s0", -5.0).is_err());
        assert!(validate_positive("s0", f64::NAN).is_err());
        assert!(validate_positive("s0", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", 0.05).is_ok());
        assert!(validate_non_negative("sigma", -1e-12).is_err());
        assert!(validate_non_negative("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("mu", -0.3).is_ok());
        assert!(validate_finite("mu", f64::NAN).is_err());
        assert!(validate_finite("mu", f64::INFINITY).is_err());
        assert!(validate_finite("mu", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count("n_simulations", 1).is_ok());
        assert!(validate_count("n_simulations", 0).is_err());
    }

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability("q", 0.0).is_ok());
        assert!(validate_probability("q", 1.0).is_ok());
        assert!(validate_probability("q", 1.01).is_err());
        assert!(validate_probability("q", f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = ForecastError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be non-negative".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("non-negative"));
    }

    #[test]
    fn test_insufficient_data_display() {
        let error = ForecastError::InsufficientData {
            required: 3,
            actual: 1,
        };

        let display = format!("{}", error);
        assert!(display.contains("at least 3"));
        assert!(display.contains("got 1"));
    }

    #[test]
    fn test_invalid_value_display() {
        let error = ForecastError::InvalidValue {
            year: 2020,
            value: 0.0,
            reason: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("2020"));
        assert!(display.contains("positive"));
    }
}
