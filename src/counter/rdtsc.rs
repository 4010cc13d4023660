#[cfg(target_arch = "x86")]
use core::arch::x86::{__cpuid, __rdtscp, _rdtsc};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{__cpuid, __rdtscp, _rdtsc};
use core::sync::atomic::{Ordering, compiler_fence};

use crate::types::cycles::Cycles;

/// Reads the time stamp counter.
///
/// The processor monotonically increments the counter every clock cycle and
/// resets it to 0 whenever the processor is reset. This is the cheapest read:
/// the compiler fences keep surrounding code from being reordered across it,
/// but RDTSC itself is not a serializing instruction. It does not wait until
/// all previous instructions have been executed before reading the counter,
/// and subsequent instructions may begin execution before the read is
/// performed. Callers who need the strict ordering should use
/// [`read_cycle_counter_serializing`] and [`read_cycle_counter_end`] instead.
#[inline(always)]
pub fn read_cycle_counter() -> Cycles {
    compiler_fence(Ordering::SeqCst);
    // SAFETY: RDTSC is a side-effect-free read, available on every x86 CPU
    // this module compiles for.
    let count = unsafe { _rdtsc() };
    compiler_fence(Ordering::SeqCst);
    Cycles::define(count)
}

/// Reads the time stamp counter after draining the pipeline.
///
/// CPUID serializes: every instruction issued before this call has retired
/// by the time RDTSC samples the counter. Suitable for the start of a
/// measured region. Costs tens of cycles more than [`read_cycle_counter`].
#[inline(always)]
pub fn read_cycle_counter_serializing() -> Cycles {
    compiler_fence(Ordering::SeqCst);
    // SAFETY: CPUID and RDTSC are unprivileged and side-effect free.
    let count = unsafe {
        __cpuid(0);
        _rdtsc()
    };
    compiler_fence(Ordering::SeqCst);
    Cycles::define(count)
}

/// Serializing read for the end of a measured region.
///
/// RDTSCP waits until all previous instructions have executed before
/// sampling the counter; the trailing CPUID keeps later instructions from
/// starting ahead of the sample. Pairs with
/// [`read_cycle_counter_serializing`].
#[inline(always)]
pub fn read_cycle_counter_end() -> Cycles {
    let mut aux = 0u32;
    compiler_fence(Ordering::SeqCst);
    // SAFETY: RDTSCP and CPUID are unprivileged and side-effect free; `aux`
    // receives IA32_TSC_AUX and is discarded.
    let count = unsafe {
        let count = __rdtscp(&mut aux);
        __cpuid(0);
        count
    };
    compiler_fence(Ordering::SeqCst);
    Cycles::define(count)
}

/// Returns true if the time stamp counter is supported.
pub fn is_supported() -> bool {
    // SAFETY: CPUID leaf 1 is available on every CPU with CPUID itself.
    unsafe { __cpuid(0x0000_0001).edx & (1 << 4) != 0 }
}

/// Returns true if the time stamp counter is invariant, i.e. not affected by
/// frequency changes or the power state of the CPU. Intervals spanning a
/// core migration are only meaningful on hardware where this holds; the read
/// functions themselves never check it.
pub fn is_invariant() -> bool {
    // SAFETY: unsupported extended leaves return zeros, which reads as
    // "not invariant".
    unsafe { __cpuid(0x8000_0007).edx & (1 << 8) != 0 }
}
