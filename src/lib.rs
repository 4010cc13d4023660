//! Access to the CPU's hardware timestamp counter for counting the processor
//! cycles spent in a code region, with lower overhead and jitter than
//! wall-clock timers.
//!
//! The usage contract is two reads bracketing the region under measurement:
//!
//! ```
//! # #[cfg(any(target_arch = "x86_64", target_arch = "x86"))] {
//! use hwcounter::counter::read_cycle_counter;
//!
//! let start = read_cycle_counter();
//! // region under measurement
//! let end = read_cycle_counter();
//! let elapsed = end - start;
//! # }
//! ```
//!
//! `elapsed` is a cycle count, not a duration; converting it to wall-clock
//! time needs a separately obtained cycles-per-second factor, which this
//! crate does not provide.
//!
//! Caveats that are the caller's responsibility:
//!
//! - Both reads must happen on the same logical CPU, and intervals spanning a
//!   thread hand-off or core migration are only meaningful when the counter
//!   is invariant and synchronized across cores (query with
//!   [`counter::is_invariant`], not enforced by the reads).
//! - [`counter::read_cycle_counter`] is not a serializing read: out-of-order
//!   execution may sample the counter before earlier instructions retire.
//!   The serializing pair [`counter::read_cycle_counter_serializing`] /
//!   [`counter::read_cycle_counter_end`] is stricter and slower.
//! - The counter wraps at 2^64. A single wrap between two reads still
//!   subtracts to the correct distance; ordering beyond that is undefined.
//!
//! Only x86 and x86_64 expose the counter instruction. On other
//! architectures the [`counter`] module does not exist and dependent code
//! fails to build.

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod counter;
pub mod types;
