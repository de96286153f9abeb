pub mod estimator;

pub use estimator::{
    estimate, estimate_from_pairs, estimate_parameters, Estimate, ModelParameters,
    MIN_OBSERVATIONS,
};
