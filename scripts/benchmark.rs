// scripts/benchmark.rs
use gbm_forecast::analytics::gbm_analytic;
use gbm_forecast::math_utils::Timer;
use gbm_forecast::mc::simulator::{simulate, simulate_final_values, SimulationConfig};
use gbm_forecast::mc::statistics::BandSet;
use std::env;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    value: f64,
    analytic_value: Option<f64>,
    relative_error: Option<f64>,
}

const S0: f64 = 577_000.0;
const MU: f64 = 0.045;
const SIGMA: f64 = 0.02;
const STEPS: usize = 10;

fn run_simulation_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let analytic = gbm_analytic::terminal_summary(S0, MU, SIGMA, STEPS as f64)
        .expect("Valid parameters");

    for &paths in &[10_000, 100_000, 1_000_000] {
        println!("Running benchmarks with {} paths...", paths);

        let cfg = SimulationConfig {
            n_simulations: paths,
            prediction_steps: STEPS,
            seed: 42,
            ..Default::default()
        };

        // Full ensemble
        let mut timer = Timer::new();
        timer.start();
        let result = simulate(S0, MU, SIGMA, &cfg).expect("Valid configuration");
        let time_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("Full ensemble P50 ({}k paths)", paths / 1000),
            paths,
            time_ms,
            throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
            value: result.statistics.p50,
            analytic_value: Some(analytic.p50),
            relative_error: Some((result.statistics.p50 - analytic.p50).abs() / analytic.p50),
        });

        // Per-step bands over the ensemble just built
        timer.start();
        let bands = result.bands(BandSet::ALL);
        let bands_ms = timer.elapsed_ms();
        let last_p95 = bands
            .p95
            .as_ref()
            .and_then(|p95| p95.last().copied())
            .unwrap_or(f64::NAN);

        results.push(BenchmarkResult {
            name: format!("Per-step bands ({}k paths)", paths / 1000),
            paths,
            time_ms: bands_ms,
            throughput_paths_per_sec: paths as f64 / (bands_ms / 1000.0),
            value: last_p95,
            analytic_value: Some(analytic.p95),
            relative_error: Some((last_p95 - analytic.p95).abs() / analytic.p95),
        });

        // Terminal values only
        timer.start();
        let lean = simulate_final_values(S0, MU, SIGMA, &cfg).expect("Valid configuration");
        let lean_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("Final values Mean ({}k paths)", paths / 1000),
            paths,
            time_ms: lean_ms,
            throughput_paths_per_sec: paths as f64 / (lean_ms / 1000.0),
            value: lean.statistics.mean,
            analytic_value: Some(analytic.mean),
            relative_error: Some((lean.statistics.mean - analytic.mean).abs() / analytic.mean),
        });
    }

    results
}

fn main() {
    println!("gbm-forecast Benchmark Suite");
    println!("============================\n");

    println!("Gathering system information...");
    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!();

    println!("Running simulation benchmarks...");
    let results = run_simulation_benchmarks();

    println!("\n{:=<110}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<110}", "");
    println!(
        "{:<36} {:>9} {:>12} {:>15} {:>12} {:>12} {:>10}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Value", "Analytic", "Rel Error"
    );
    println!("{:-<110}", "");

    for result in &results {
        println!(
            "{:<36} {:>9} {:>12.2} {:>15.0} {:>12.0} {:>12} {:>10}",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result
                .analytic_value
                .map(|v| format!("{:.0}", v))
                .unwrap_or_else(|| "N/A".to_string()),
            result
                .relative_error
                .map(|e| format!("{:.3}%", e * 100.0))
                .unwrap_or_else(|| "N/A".to_string())
        );
    }

    println!("{:=<110}", "");
    println!("\nBenchmark complete!");
    println!("To reproduce: cargo run --bin benchmark --release");
}
