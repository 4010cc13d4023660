/// Measures one region with the timestamp counter and the kernel's hardware
/// cycle counter at the same time. On an invariant-counter machine pinned to
/// one core the two figures land in the same ballpark; a large gap points at
/// frequency scaling or migration skewing the timestamp intervals.
///
/// Run with: cargo run --release --example perf_crosscheck
#[cfg(target_os = "linux")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::hint::black_box;

    use hwcounter::counter::{read_cycle_counter_end, read_cycle_counter_serializing};
    use perf_event::Builder;
    use perf_event::events::Hardware;

    let mut counter = Builder::new().kind(Hardware::CPU_CYCLES).build()?;

    let start = read_cycle_counter_serializing();
    counter.enable()?;
    for i in 0..10_000_000u64 {
        black_box(i);
    }
    counter.disable()?;
    let end = read_cycle_counter_end();

    println!("timestamp counter interval: {:>12} cycles", (end - start).value());
    println!("perf hardware counter:      {:>12} cycles", counter.read()?);

    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("the hardware counter cross-check needs Linux perf events");
}
