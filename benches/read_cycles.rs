use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use hwcounter::counter::{
    Timer, read_cycle_counter, read_cycle_counter_end, read_cycle_counter_serializing,
};

fn bench_reads(c: &mut Criterion) {
    c.bench_function("read_cycle_counter", |b| {
        b.iter(|| black_box(read_cycle_counter()))
    });

    c.bench_function("read_cycle_counter_serializing", |b| {
        b.iter(|| black_box(read_cycle_counter_serializing()))
    });

    c.bench_function("read_cycle_counter_end", |b| {
        b.iter(|| black_box(read_cycle_counter_end()))
    });

    c.bench_function("serializing_pair", |b| {
        b.iter(|| {
            let start = read_cycle_counter_serializing();
            let end = read_cycle_counter_end();
            black_box(end - start)
        })
    });

    c.bench_function("timer_round_trip", |b| {
        b.iter(|| {
            let timer = Timer::start();
            black_box(timer.stop())
        })
    });

    // Wall-clock baseline the counter is meant to beat.
    c.bench_function("instant_now_baseline", |b| b.iter(|| black_box(Instant::now())));
}

criterion_group!(benches, bench_reads);
criterion_main!(benches);
