use std::hint::black_box;

use super::rdtsc::{read_cycle_counter_end, read_cycle_counter_serializing};
use crate::types::cycles::Cycles;

/// Smallest interval the serializing read pair reports around an empty
/// region, taken as the minimum of three trials. This is the cost of the
/// instruments themselves and can be subtracted from a measurement.
pub fn measure_overhead() -> Cycles {
    let mut overhead = Cycles::define(u64::MAX);

    for _ in 0..3 {
        let start = read_cycle_counter_serializing();
        black_box(());
        let end = read_cycle_counter_end();
        let elapsed = end - start;
        if elapsed < overhead {
            overhead = elapsed;
        }
    }

    overhead
}

/// Brackets a code region and reports the cycles it consumed, compensated
/// for the cost of the reads themselves.
///
/// ```
/// # #[cfg(any(target_arch = "x86_64", target_arch = "x86"))] {
/// use hwcounter::counter::Timer;
///
/// let timer = Timer::start();
/// // region under measurement
/// let elapsed = timer.stop();
/// # }
/// ```
pub struct Timer {
    start: Cycles,
    overhead: Cycles,
}

impl Timer {
    /// Measures the instrument overhead, then takes the serializing start
    /// read. The overhead measurement happens first so it is not part of the
    /// bracketed region.
    pub fn start() -> Self {
        let overhead = measure_overhead();
        Self {
            start: read_cycle_counter_serializing(),
            overhead,
        }
    }

    /// Takes the serializing end read and returns the elapsed cycles minus
    /// the overhead measured at [`Timer::start`]. A region cheaper than the
    /// instruments reports zero.
    pub fn stop(self) -> Cycles {
        let end = read_cycle_counter_end();
        (end - self.start).saturating_sub(self.overhead)
    }
}

/// Runs `op` between the serializing read pair and returns its result along
/// with the raw interval, with no overhead compensation.
#[inline(always)]
pub fn measure<F, R>(op: F) -> (R, Cycles)
where
    F: FnOnce() -> R,
{
    let start = read_cycle_counter_serializing();
    let result = op();
    let end = read_cycle_counter_end();
    (result, end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy(iterations: u64) -> u64 {
        let mut acc = 0u64;
        for i in 0..iterations {
            acc = acc.wrapping_add(black_box(i));
        }
        acc
    }

    /// Minimum interval over several trials; filters out deltas inflated by
    /// interrupts or preemption.
    fn min_cycles(trials: usize, iterations: u64) -> u64 {
        (0..trials)
            .map(|_| measure(|| busy(iterations)).1.value())
            .min()
            .unwrap()
    }

    #[test]
    fn overhead_is_sane() {
        let overhead = measure_overhead();
        assert!(overhead.value() > 0);
        assert!(overhead.value() < 1_000_000, "overhead: {overhead:?}");
    }

    #[test]
    fn timer_reports_work() {
        let timer = Timer::start();
        black_box(busy(10_000));
        let elapsed = timer.stop();
        assert!(elapsed.value() > 0);
    }

    #[test]
    fn measure_returns_the_closure_value() {
        let (value, elapsed) = measure(|| busy(1_000));
        assert_eq!(value, (0..1_000u64).sum::<u64>());
        assert!(elapsed.value() > 0);
    }

    #[test]
    fn cost_scales_with_iteration_count() {
        let base = min_cycles(5, 2_000_000);
        let doubled = min_cycles(5, 4_000_000);

        // Doubling the work should roughly double the cycles. The tolerance
        // is wide: frequency transitions and shared hardware add noise even
        // after min-filtering.
        let ratio = doubled as f64 / base as f64;
        assert!(
            ratio > 1.2 && ratio < 3.4,
            "doubling the workload changed cycles by {ratio:.2}x"
        );
    }

    #[test]
    fn million_iteration_scenario_is_reproducible() {
        let mut trials: Vec<u64> = (0..10)
            .map(|_| measure(|| busy(1_000_000)).1.value())
            .collect();

        assert!(trials.iter().all(|&t| t > 0));

        // Drop the two largest trials (interrupt outliers), then the spread
        // of the rest stays within a small factor.
        trials.sort_unstable();
        let kept = &trials[..8];
        let min = kept[0];
        let max = kept[7];
        assert!(
            max <= min.saturating_mul(5),
            "trials spread too far: min {min}, max {max}"
        );
    }
}
