//! Step timing across grid sizes, plus a seeded soak run checking that the
//! alive-cell counter never drifts from a full recount.

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use life_engine::{GameEngine, Seed};

fn benchmark_steps(size: usize, iterations: u32) -> f64 {
    let seed = Seed::Random { density: 0.3, rng_seed: Some(size as u64) };
    let Ok(mut engine) = GameEngine::new(size, size, &seed) else {
        return f64::NAN;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Random mix of steps, run toggles and clicks on one engine.
/// Returns the first operation at which the counter disagreed with a recount.
fn soak(seed: u64, operations: usize) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let size_x = rng.random_range(1..40);
    let size_y = rng.random_range(1..40);
    let density = rng.random_range(0.0..=1.0);
    let mut engine = GameEngine::new(size_x, size_y, &Seed::Random { density, rng_seed: Some(seed) })
        .map_err(|e| e.to_string())?;

    for op in 0..operations {
        match rng.random_range(0..10) {
            0..=3 => {
                engine.step_generation();
            }
            4 => engine.toggle_running(),
            5 => engine.set_god_mode(!engine.is_god_mode()),
            _ => {
                let index = rng.random_range(0..size_x * size_y);
                engine.toggle_cell(index).map_err(|e| e.to_string())?;
            }
        }
        if engine.alive_cells_count() != engine.count_alive() {
            return Err(format!(
                "seed {seed}: counter {} != recount {} after op {op}",
                engine.alive_cells_count(),
                engine.count_alive()
            ));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Generation step timing ===\n");
    println!("{:>10} {:>12} {:>14}", "Size", "ms/gen", "Mcells/s");
    println!("{:-<38}", "");

    let iterations = 20;
    for size in [50, 100, 200, 500, 1000] {
        let ms = benchmark_steps(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>14.1}",
            format!("{size}x{size}"),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    println!("\n=== Counter soak ===\n");
    let seeds = 256u64;
    let operations = 500;
    let start = Instant::now();
    let failures: Vec<String> = (0..seeds)
        .into_par_iter()
        .filter_map(|seed| soak(seed, operations).err())
        .collect();
    info!("Soak of {seeds} seeds finished in {:.2?}", start.elapsed());

    if failures.is_empty() {
        println!("{seeds} seeds x {operations} operations: counter consistent");
    } else {
        failures.iter().for_each(|f| println!("FAIL {f}"));
        std::process::exit(1);
    }
}
