// demos/error_handling.rs
use gbm_forecast::data::HistoricalSeries;
use gbm_forecast::error::ForecastError;
use gbm_forecast::estimation::estimate_from_pairs;
use gbm_forecast::mc::simulator::{simulate, SimulationConfig};

fn main() {
    println!("Error Handling Demo for gbm-forecast");
    println!("====================================\n");

    // Test 1: Too few observations
    println!("1. Estimating from a single observation...");

    match estimate_from_pairs(&[(2023, 577_000.0)]) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Two observations give one log-return, sample volatility undefined
    println!("\n2. Estimating from two observations...");

    match estimate_from_pairs(&[(2022, 548_000.0), (2023, 577_000.0)]) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Non-positive observation
    println!("\n3. Building a series with a zero value...");

    match HistoricalSeries::from_pairs(vec![(2021, 519_000.0), (2022, 0.0), (2023, 577_000.0)]) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Duplicate year
    println!("\n4. Building a series with a repeated year...");

    let repeated = vec![(2022, 548_000.0), (2022, 549_000.0), (2023, 577_000.0)];
    match HistoricalSeries::from_pairs(repeated) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Zero prediction steps
    println!("\n5. Simulating with zero prediction steps...");

    let no_steps = SimulationConfig {
        prediction_steps: 0,
        ..Default::default()
    };

    match simulate(577_000.0, 0.05, 0.01, &no_steps) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Overflow is accepted and reported, not an error
    println!("\n6. Simulating with an explosive drift...");

    let long_horizon = SimulationConfig {
        n_simulations: 100,
        prediction_steps: 50,
        ..Default::default()
    };

    match simulate(1e200, 20.0, 0.0, &long_horizon) {
        Ok(result) => println!(
            "   ✓ Completed, mean = {} (finite: {})",
            result.statistics.mean,
            result.statistics.is_finite()
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");

    match simulate(-1.0, 0.05, 0.01, &SimulationConfig::default()) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(ForecastError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!("   ✓ Caught InvalidParameters: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
