// src/mc/simulator.rs
use crate::error::{validation::*, ForecastError, ForecastResult};
use crate::mc::statistics::{BandSet, PathBands, SummaryStatistics};
use crate::models::gbm::Gbm;
use crate::rng;
use ndarray::{s, Array1, Array2, ArrayView1};
use rand::seq::index;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub n_simulations: usize,
    pub prediction_steps: usize,
    pub dt: f64,
    pub seed: u64,
    pub start_year: Option<i32>, // None labels columns 0..=T
}

impl SimulationConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> ForecastResult<()> {
        validate_count("n_simulations", self.n_simulations)?;
        validate_count("prediction_steps", self.prediction_steps)?;
        validate_positive("dt", self.dt)?;
        if self.horizon_label().is_none() {
            return Err(ForecastError::InvalidParameters {
                parameter: "start_year".to_string(),
                value: f64::from(self.start_year.unwrap_or(0)),
                constraint: format!(
                    "start_year + prediction_steps ({}) must fit in i32",
                    self.prediction_steps
                ),
            });
        }
        Ok(())
    }

    /// Label of the final column, `None` when it does not fit in `i32`
    pub fn horizon_label(&self) -> Option<i32> {
        let steps = i32::try_from(self.prediction_steps).ok()?;
        self.start_year.unwrap_or(0).checked_add(steps)
    }

    /// Column labels: `[start, start + 1, ..., start + T]`
    ///
    /// Stops at `i32::MAX` for a config that fails [`validate`](Self::validate).
    pub fn years(&self) -> Vec<i32> {
        let start = self.start_year.unwrap_or(0);
        (0..=self.prediction_steps)
            .map_while(|t| i32::try_from(t).ok().and_then(|t| start.checked_add(t)))
            .collect()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_simulations: 10_000,
            prediction_steps: 5,
            dt: 1.0,
            seed: 12345,
            start_year: None,
        }
    }
}

/// Full ensemble plus its reductions
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// `n_simulations × (T + 1)`, column 0 is S0 for every row
    pub paths: Array2<f64>,
    pub years: Vec<i32>,
    /// Column T of `paths`
    pub final_values: Array1<f64>,
    pub statistics: SummaryStatistics,
}

impl SimulationResult {
    pub fn n_simulations(&self) -> usize {
        self.paths.nrows()
    }

    pub fn prediction_steps(&self) -> usize {
        self.paths.ncols().saturating_sub(1)
    }

    pub fn path(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        if index < self.paths.nrows() {
            Some(self.paths.row(index))
        } else {
            None
        }
    }

    /// Share of paths whose final value is at or below `threshold`
    pub fn fraction_at_or_below(&self, threshold: f64) -> f64 {
        let hits = self.final_values.iter().filter(|&&v| v <= threshold).count();
        hits as f64 / self.final_values.len() as f64
    }

    /// Per-step mean and percentile bands
    pub fn bands(&self, bands: BandSet) -> PathBands {
        PathBands::from_paths(&self.paths, &self.years, bands)
    }

    /// Pick up to `n_to_show` distinct path indices, uniformly without replacement
    pub fn sample_path_indices<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_to_show: usize,
    ) -> Vec<usize> {
        sample_path_indices(rng, self.n_simulations(), n_to_show)
    }
}

/// Terminal values only, for callers that never inspect individual paths
#[derive(Debug, Clone)]
pub struct FinalValueSummary {
    pub years: Vec<i32>,
    pub final_values: Array1<f64>,
    pub statistics: SummaryStatistics,
}

/// Simulate GBM paths seeded from `cfg.seed`
///
/// # Math Framework
///
/// Exact discretization of dS = μS dt + σS dW:
/// ```text
/// S_{p,0} = S0
/// S_{p,t} = S_{p,t-1} · exp((μ - σ²/2)dt + σ√dt · Z_{p,t})
/// ```
/// with Z drawn as one `(n_simulations × T)` matrix before the recurrence.
///
/// # Errors
///
/// `InvalidParameters` for non-positive `s0`, non-finite `mu`, negative
/// `sigma`, zero counts, or non-positive `dt`. Overflow to `+inf` is not an
/// error and flows into the statistics.
pub fn simulate(
    s0: f64,
    mu: f64,
    sigma: f64,
    cfg: &SimulationConfig,
) -> ForecastResult<SimulationResult> {
    let mut rng = rng::seed_rng_from_u64(cfg.seed);
    simulate_with_rng(s0, mu, sigma, cfg, &mut rng)
}

/// Same as [`simulate`] drawing from an injected generator; `cfg.seed` is ignored
pub fn simulate_with_rng<R: Rng + ?Sized>(
    s0: f64,
    mu: f64,
    sigma: f64,
    cfg: &SimulationConfig,
    rng: &mut R,
) -> ForecastResult<SimulationResult> {
    cfg.validate()?;
    let model = Gbm::new(s0, mu, sigma)?;

    let paths =
        geometric_brownian_motion(&model, cfg.prediction_steps, cfg.dt, cfg.n_simulations, rng);
    let final_values = paths.column(cfg.prediction_steps).to_owned();
    let statistics = SummaryStatistics::from_view(final_values.view());

    debug!(
        n_simulations = cfg.n_simulations,
        prediction_steps = cfg.prediction_steps,
        dt = cfg.dt,
        mean = statistics.mean,
        p50 = statistics.p50,
        "simulated GBM ensemble"
    );

    Ok(SimulationResult {
        paths,
        years: cfg.years(),
        final_values,
        statistics,
    })
}

/// Terminal values only, seeded from `cfg.seed`
///
/// Returns exactly the `final_values` of [`simulate`] with the same inputs,
/// in O(n_simulations) memory.
pub fn simulate_final_values(
    s0: f64,
    mu: f64,
    sigma: f64,
    cfg: &SimulationConfig,
) -> ForecastResult<FinalValueSummary> {
    let mut rng = rng::seed_rng_from_u64(cfg.seed);
    simulate_final_values_with_rng(s0, mu, sigma, cfg, &mut rng)
}

pub fn simulate_final_values_with_rng<R: Rng + ?Sized>(
    s0: f64,
    mu: f64,
    sigma: f64,
    cfg: &SimulationConfig,
    rng: &mut R,
) -> ForecastResult<FinalValueSummary> {
    cfg.validate()?;
    let model = Gbm::new(s0, mu, sigma)?;

    // Path-major draw order, identical to the shock matrix in `rng::draw_shocks`
    let mut final_values = Array1::<f64>::zeros(cfg.n_simulations);
    for slot in final_values.iter_mut() {
        let mut level = model.s0;
        for _ in 0..cfg.prediction_steps {
            level = model.exact_step(level, cfg.dt, rng::get_normal_draw(rng));
        }
        *slot = level;
    }
    let statistics = SummaryStatistics::from_view(final_values.view());

    debug!(
        n_simulations = cfg.n_simulations,
        prediction_steps = cfg.prediction_steps,
        mean = statistics.mean,
        "simulated GBM terminal values"
    );

    Ok(FinalValueSummary {
        years: cfg.years(),
        final_values,
        statistics,
    })
}

/// Build the `n_paths × (steps + 1)` ensemble for an already validated model
pub fn geometric_brownian_motion<R: Rng + ?Sized>(
    model: &Gbm,
    steps: usize,
    dt: f64,
    n_paths: usize,
    rng: &mut R,
) -> Array2<f64> {
    let shocks = rng::draw_shocks(rng, n_paths, steps);

    let mut paths = Array2::<f64>::zeros((n_paths, steps + 1));
    paths.column_mut(0).fill(model.s0);

    for (mut row, z_row) in paths.outer_iter_mut().zip(shocks.outer_iter()) {
        let mut level = model.s0;
        for (slot, &z) in row.slice_mut(s![1..]).iter_mut().zip(z_row.iter()) {
            level = model.exact_step(level, dt, z);
            *slot = level;
        }
    }

    paths
}

/// `min(n_to_show, n_paths)` distinct indices in `0..n_paths`
pub fn sample_path_indices<R: Rng + ?Sized>(
    rng: &mut R,
    n_paths: usize,
    n_to_show: usize,
) -> Vec<usize> {
    index::sample(rng, n_paths, n_to_show.min(n_paths)).into_vec()
}
