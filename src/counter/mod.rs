pub mod timer;
mod rdtsc;

pub use rdtsc::{
    is_invariant, is_supported, read_cycle_counter, read_cycle_counter_end,
    read_cycle_counter_serializing,
};
pub use timer::{Timer, measure, measure_overhead};
