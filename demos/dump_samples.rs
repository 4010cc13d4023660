/// Records per-call cycle intervals for a checksum workload over random data
/// and exports the raw samples for offline analysis: one CSV row per sample,
/// run metadata as JSON on stdout.
///
/// Run with: cargo run --release --example dump_samples
use std::error::Error;

use hwcounter::counter::{is_invariant, measure, measure_overhead};
use hwcounter::types::cycles::Cycles;
use rand::Rng;
use serde::Serialize;

const NUM_SAMPLES: usize = 10_000;
const WORKLOAD_LEN: usize = 4_096;
const OUTPUT_PATH: &str = "cycle_samples.csv";

#[derive(Serialize)]
struct Sample {
    trial: usize,
    checksum: u64,
    cycles: Cycles,
}

#[derive(Serialize)]
struct RunMetadata {
    invariant_counter: bool,
    instrument_overhead: Cycles,
    samples: usize,
    workload_len: usize,
    output: &'static str,
}

fn checksum(data: &[u64]) -> u64 {
    data.iter().fold(0u64, |acc, &word| {
        acc.rotate_left(7).wrapping_add(word)
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let data: Vec<u64> = (0..WORKLOAD_LEN).map(|_| rng.random()).collect();

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)?;
    for trial in 0..NUM_SAMPLES {
        let (sum, cycles) = measure(|| checksum(&data));
        writer.serialize(Sample {
            trial,
            checksum: sum,
            cycles,
        })?;
    }
    writer.flush()?;

    let metadata = RunMetadata {
        invariant_counter: is_invariant(),
        instrument_overhead: measure_overhead(),
        samples: NUM_SAMPLES,
        workload_len: WORKLOAD_LEN,
        output: OUTPUT_PATH,
    };
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
