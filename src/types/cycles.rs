use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A raw value of the hardware timestamp counter.
///
/// Comparable and subtractable; the difference of two reads taken in program
/// order on the same logical CPU is the elapsed-cycle interval between them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cycles(u64);

impl Cycles {
    pub fn define(count: u64) -> Self {
        Self(count)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Subtraction that clamps at zero instead of wrapping. Used when
    /// compensating an interval for instrument overhead, where a region
    /// cheaper than the instrument itself reads as zero cycles.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sub for Cycles {
    type Output = Cycles;

    /// Modular difference. A read taken after the counter wraps at 2^64
    /// still subtracts to the correct distance from a read taken before;
    /// ordering beyond one wrap is undefined.
    fn sub(self, rhs: Self) -> Cycles {
        Cycles(self.0.wrapping_sub(rhs.0))
    }
}
