//! CPU burn workload implementation.

use std::hint::black_box;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

/// A workload that occupies the CPU with a fixed amount of arithmetic.
///
/// The accumulation is routed through `black_box` and the result is consumed
/// by the caller, so the compiler cannot collapse the loop into a closed-form
/// value. To an attached profiler one burn reads as a solid slice of on-CPU
/// time with no blocking inside it.
#[derive(Default)]
pub struct Burn {
    /// The ID of the CPU that the burn last ran on.
    cpu_id: AtomicU32,
}

impl Burn {
    /// Number of accumulation steps in one burn.
    pub const ITERATIONS: u64 = 100_000;

    /// Run one burn and return the accumulated value.
    ///
    /// Also records the CPU the thread was on when the burn ended, for
    /// progress reporting.
    pub fn run(&self) -> u64 {
        let mut sum: u64 = 0;
        for i in 0..Self::ITERATIONS {
            sum = black_box(sum.wrapping_add(i * i));
        }
        if let Some(cpu) = Self::current_cpu() {
            self.cpu_id.store(cpu, Ordering::Relaxed);
        }
        sum
    }

    /// Get the ID of the CPU that the burn last ran on.
    pub fn last_cpu(&self) -> u32 {
        self.cpu_id.load(Ordering::Relaxed)
    }

    /// Get the ID of the CPU that the current thread is running on, or None
    /// if the information is not available.
    fn current_cpu() -> Option<u32> {
        let cpu = unsafe { libc::sched_getcpu() };
        if cpu >= 0 { Some(cpu as u32) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_checksum() {
        let burn = Burn::default();

        // The accumulation is exact, so the result must equal the plain sum
        // of squares over the same range.
        let expected: u64 = (0..Burn::ITERATIONS).map(|i| i * i).sum();
        assert_eq!(burn.run(), expected);
    }

    #[test]
    fn test_burn_is_repeatable() {
        let burn = Burn::default();
        assert_eq!(burn.run(), burn.run());
    }

    #[test]
    fn test_burn_records_cpu() {
        let burn = Burn::default();
        burn.run();

        // Check that the CPU ID was updated.
        println!("Last CPU: {}", burn.last_cpu());
    }
}
