// tests/integration_test.rs
use gbm_forecast::analytics::gbm_analytic;
use gbm_forecast::data::HistoricalSeries;
use gbm_forecast::error::ForecastError;
use gbm_forecast::estimation::estimate_from_pairs;
use gbm_forecast::forecast::run_forecast;
use gbm_forecast::mc::simulator::{simulate, simulate_with_rng, SimulationConfig};
use gbm_forecast::mc::statistics::BandSet;
use gbm_forecast::rng;

fn poverty_line_series() -> HistoricalSeries {
    HistoricalSeries::from_pairs(vec![
        (2015, 407_000.0),
        (2016, 428_000.0),
        (2017, 441_000.0),
        (2018, 463_000.0),
        (2019, 481_000.0),
        (2020, 502_000.0),
        (2021, 519_000.0),
        (2022, 548_000.0),
        (2023, 577_000.0),
    ])
    .expect("valid series")
}

#[test]
fn test_mc_vs_analytic_terminal_distribution() {
    let s0 = 100.0;
    let mu = 0.05;
    let sigma = 0.1;

    let cfg = SimulationConfig {
        n_simulations: 200_000,
        prediction_steps: 5,
        seed: 42,
        ..Default::default()
    };

    let result = simulate(s0, mu, sigma, &cfg).expect("Valid configuration");
    let analytic = gbm_analytic::terminal_summary(s0, mu, sigma, 5.0).expect("Valid parameters");

    println!("\nMC statistics: {:?}", result.statistics);
    println!("Analytic statistics: {:?}", analytic);

    let pairs = result.statistics.entries().into_iter().zip(analytic.entries());
    for ((label, mc), (_, exact)) in pairs {
        let rel_error = (mc - exact).abs() / exact;
        assert!(rel_error < 0.01, "{} relative error exceeds 1%: {}", label, rel_error);
    }
}

#[test]
fn test_mc_exceedance_matches_closed_form() {
    let cfg = SimulationConfig {
        n_simulations: 100_000,
        prediction_steps: 3,
        seed: 314,
        ..Default::default()
    };
    let result = simulate(1_000.0, 0.02, 0.2, &cfg).expect("Valid configuration");

    for threshold in [800.0, 1_000.0, 1_300.0] {
        let mc = result.fraction_at_or_below(threshold);
        let exact = gbm_analytic::terminal_cdf(1_000.0, 0.02, 0.2, 3.0, threshold)
            .expect("Valid parameters");
        assert!((mc - exact).abs() < 0.01, "threshold {}: {} vs {}", threshold, mc, exact);
    }
}

#[test]
fn test_example_constant_scenario() {
    let cfg = SimulationConfig {
        n_simulations: 5,
        prediction_steps: 3,
        ..Default::default()
    };

    let result = simulate(1_000_000.0, 0.0, 0.0, &cfg).expect("Valid configuration");

    for row in result.paths.outer_iter() {
        assert_eq!(row.to_vec(), vec![1_000_000.0; 4]);
    }
    for (_, value) in result.statistics.entries() {
        assert_eq!(value, 1_000_000.0);
    }
    assert_eq!(result.years, vec![0, 1, 2, 3]);
}

#[test]
fn test_example_growth_scenario() {
    let est = estimate_from_pairs(&[(2018, 100.0), (2019, 110.0), (2020, 121.0)])
        .expect("two log-returns are enough");

    assert!((est.mu() - 0.09531).abs() < 1e-5);
    assert_eq!(est.sigma(), 0.0);
}

#[test]
fn test_boundaries() {
    let cfg = SimulationConfig {
        prediction_steps: 0,
        ..Default::default()
    };
    assert!(matches!(
        simulate(100.0, 0.0, 0.1, &cfg),
        Err(ForecastError::InvalidParameters { .. })
    ));

    assert!(matches!(
        estimate_from_pairs(&[(2024, 100.0)]),
        Err(ForecastError::InsufficientData { .. })
    ));
}

#[test]
fn test_zero_volatility_follows_exponential_growth() {
    let s0 = 250_000.0;
    let mu = 0.04;
    let cfg = SimulationConfig {
        n_simulations: 25,
        prediction_steps: 10,
        ..Default::default()
    };

    let result = simulate(s0, mu, 0.0, &cfg).expect("Valid configuration");
    for row in result.paths.outer_iter() {
        for (t, &value) in row.iter().enumerate() {
            let expected = s0 * (mu * t as f64).exp();
            assert!(
                ((value - expected) / expected).abs() < 1e-12,
                "step {}: {} vs {}",
                t,
                value,
                expected
            );
        }
    }
}

#[test]
fn test_reproducible_with_same_seed() {
    let cfg = SimulationConfig {
        n_simulations: 1_000,
        prediction_steps: 8,
        seed: 7,
        ..Default::default()
    };

    let a = simulate(512_000.0, 0.05, 0.03, &cfg).expect("Valid configuration");
    let b = simulate(512_000.0, 0.05, 0.03, &cfg).expect("Valid configuration");
    assert_eq!(a.paths, b.paths);

    let other = SimulationConfig { seed: 8, ..cfg.clone() };
    let c = simulate(512_000.0, 0.05, 0.03, &other).expect("Valid configuration");
    assert_ne!(a.paths, c.paths);

    let mut rng1 = rng::seed_rng_from_u64(1234);
    let mut rng2 = rng::seed_rng_from_u64(1234);
    let d = simulate_with_rng(512_000.0, 0.05, 0.03, &cfg, &mut rng1).expect("Valid configuration");
    let e = simulate_with_rng(512_000.0, 0.05, 0.03, &cfg, &mut rng2).expect("Valid configuration");
    assert_eq!(d.paths, e.paths);
}

#[test]
fn test_forecast_pipeline_bands() {
    let cfg = SimulationConfig {
        n_simulations: 20_000,
        prediction_steps: 5,
        seed: 2025,
        ..Default::default()
    };

    let forecast = run_forecast(&poverty_line_series(), &cfg).expect("valid forecast");
    let bands = forecast.simulation.bands(BandSet::ALL);

    assert_eq!(bands.years, (2024..=2029).collect::<Vec<_>>());

    let p5 = bands.p5.as_ref().expect("p5 selected");
    let p50 = bands.p50.as_ref().expect("p50 selected");
    let p95 = bands.p95.as_ref().expect("p95 selected");
    let mean = bands.mean.as_ref().expect("mean selected");

    for t in 0..bands.len() {
        assert!(p5[t] <= p50[t] && p50[t] <= p95[t], "bands out of order at step {}", t);
    }
    assert_eq!(mean[0], 577_000.0);

    // the last column of the bands is the final-value summary
    let last = bands.len() - 1;
    assert_eq!(p5[last], forecast.simulation.statistics.p5);
    assert_eq!(p50[last], forecast.simulation.statistics.p50);
    assert_eq!(p95[last], forecast.simulation.statistics.p95);

    // steady growth history: the median forecast keeps rising
    assert!(p50[last] > 577_000.0);

    let reference = forecast.analytic_reference().expect("valid reference");
    let rel_error = (forecast.simulation.statistics.p50 - reference.p50).abs() / reference.p50;
    assert!(rel_error < 0.01, "median relative error exceeds 1%: {}", rel_error);
}

#[test]
fn test_display_path_sampling_is_deterministic() {
    let cfg = SimulationConfig {
        n_simulations: 500,
        prediction_steps: 3,
        ..Default::default()
    };
    let result = simulate(100.0, 0.02, 0.1, &cfg).expect("Valid configuration");

    let mut rng1 = rng::seed_rng_from_u64(11);
    let mut rng2 = rng::seed_rng_from_u64(11);
    let a = result.sample_path_indices(&mut rng1, 100);
    let b = result.sample_path_indices(&mut rng2, 100);

    assert_eq!(a, b);
    assert_eq!(a.len(), 100);
}
