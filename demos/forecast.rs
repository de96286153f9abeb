// demos/forecast.rs
use gbm_forecast::data::HistoricalSeries;
use gbm_forecast::forecast::run_forecast;
use gbm_forecast::math_utils::Timer;
use gbm_forecast::mc::simulator::SimulationConfig;
use gbm_forecast::mc::statistics::BandSet;
use gbm_forecast::rng;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gbm_forecast=info".parse().expect("valid directive")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let n_simulations = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let prediction_steps = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5);

    println!("Running gbm-forecast Monte Carlo Demo\n");

    // Monthly poverty line per capita (currency units), one value per year
    let series = HistoricalSeries::from_pairs(vec![
        (2013, 352_000.0),
        (2014, 369_000.0),
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
    .expect("Valid series");

    let config = SimulationConfig {
        n_simulations,
        prediction_steps,
        seed: 42,
        ..Default::default()
    };

    let mut timer = Timer::new();
    timer.start();
    let forecast = run_forecast(&series, &config).expect("Valid forecast");
    let elapsed = timer.elapsed_ms();

    println!("--- Historical Log Returns ---");
    for row in &forecast.returns {
        println!("{}  {:>12.0}  {:+.6}", row.year, row.value, row.log_return);
    }

    println!("\n--- Parameters ---");
    println!("Last year:    {}", forecast.estimate.last_year);
    println!("Last value:   {:.0}", forecast.estimate.last_value);
    println!("Drift (mu):   {:.6}", forecast.estimate.mu());
    println!("Vol (sigma):  {:.6}", forecast.estimate.sigma());
    println!(
        "Simulations:  {} paths x {} steps ({:.1} ms)",
        config.n_simulations, config.prediction_steps, elapsed
    );

    let horizon = forecast.horizon_year().unwrap_or_default();
    let reference = forecast.analytic_reference().expect("Valid parameters");

    println!("\n--- Forecast for {} ---", horizon);
    println!("{:<6} {:>14} {:>14}", "", "Monte Carlo", "Closed form");
    for ((label, mc), (_, exact)) in forecast
        .simulation
        .statistics
        .entries()
        .iter()
        .zip(reference.entries().iter())
    {
        println!("{:<6} {:>14.0} {:>14.0}", label, mc, exact);
    }

    println!("\n--- Per-Year Bands ---");
    let bands = forecast.simulation.bands(BandSet::ALL);
    if let (Some(mean), Some(p5), Some(p50), Some(p95)) =
        (&bands.mean, &bands.p5, &bands.p50, &bands.p95)
    {
        println!("{:<6} {:>12} {:>12} {:>12} {:>12}", "Year", "Mean", "P5", "P50", "P95");
        for (t, year) in bands.years.iter().enumerate() {
            println!(
                "{:<6} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
                year, mean[t], p5[t], p50[t], p95[t]
            );
        }
    }

    println!("\n--- Sample Paths ---");
    let mut display_rng = rng::seed_rng_from_u64(7);
    for index in forecast.simulation.sample_path_indices(&mut display_rng, 5) {
        if let Some(path) = forecast.simulation.path(index) {
            let values: Vec<String> = path.iter().map(|v| format!("{:.0}", v)).collect();
            println!("path {:>6}: {}", index, values.join(" -> "));
        }
    }
}
