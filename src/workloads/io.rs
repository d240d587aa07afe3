//! Blocking I/O workload implementation.

use std::thread;
use std::time::Duration;
use std::time::Instant;

/// Block the calling thread for the given duration, standing in for a slow
/// synchronous read.
///
/// The thread is parked in the kernel for the whole wait, so an attached
/// profiler sees an off-CPU slice rather than busy waiting.
///
/// # Arguments
///
/// * `duration` - The duration to stay blocked
///
/// # Returns
///
/// The wall-clock time actually spent blocked, never less than `duration`.
pub fn stall(duration: Duration) -> Duration {
    let start = Instant::now();
    thread::sleep(duration);
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stall_blocks_for_duration() {
        let blocked = stall(Duration::from_millis(10));
        assert!(blocked >= Duration::from_millis(10));
    }

    #[test]
    fn test_stall_zero_returns_immediately() {
        let blocked = stall(Duration::ZERO);
        assert!(blocked < Duration::from_secs(1));
    }
}
