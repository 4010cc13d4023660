/// Canonical measured-region walk-through.
///
/// Brackets a 1,000,000-iteration no-op loop with counter reads, ten trials,
/// once with the raw read pair and once with the overhead-compensated Timer.
///
/// Run with: cargo run --release --example measure_loop
use std::hint::black_box;

use hwcounter::counter::{
    Timer, is_invariant, measure_overhead, read_cycle_counter, read_cycle_counter_end,
    read_cycle_counter_serializing,
};

const ITERATIONS: u64 = 1_000_000;
const TRIALS: usize = 10;

fn spin() {
    for i in 0..ITERATIONS {
        black_box(i);
    }
}

fn main() {
    println!("=== Hardware cycle counter walk-through ===\n");
    println!("invariant counter: {}", is_invariant());
    println!("instrument overhead: {} cycles\n", measure_overhead().value());

    println!("--- Raw non-serializing reads ---");
    for trial in 0..TRIALS {
        let start = read_cycle_counter();
        spin();
        let end = read_cycle_counter();
        println!("trial {trial:2}: {:>12} cycles", (end - start).value());
    }

    println!("\n--- Serializing read pair ---");
    for trial in 0..TRIALS {
        let start = read_cycle_counter_serializing();
        spin();
        let end = read_cycle_counter_end();
        println!("trial {trial:2}: {:>12} cycles", (end - start).value());
    }

    println!("\n--- Timer (overhead compensated) ---");
    for trial in 0..TRIALS {
        let timer = Timer::start();
        spin();
        println!("trial {trial:2}: {:>12} cycles", timer.stop().value());
    }
}
