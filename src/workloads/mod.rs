//! Workload phases executed by the worker threads.

use std::fmt;

pub mod cpu;
pub mod io;
pub mod lock;

/// The kind of work a worker performs in one cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fixed numeric accumulation, on-CPU the whole time.
    Cpu,

    /// Blocking wait, off-CPU for a fixed duration.
    Io,

    /// Acquire the shared lock and hold it, contending with other workers.
    Lock,
}

impl Phase {
    /// Select the phase for a 1-based cycle index.
    ///
    /// The rotation is fixed: cycle 1 is I/O, cycle 2 is lock, cycle 3 is
    /// CPU, then the pattern repeats. Every worker uses the same selector,
    /// so the kind sequence is identical across workers and across runs.
    pub fn for_cycle(cycle: u32) -> Self {
        match cycle % 3 {
            0 => Phase::Cpu,
            1 => Phase::Io,
            _ => Phase::Lock,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Cpu => write!(f, "cpu"),
            Phase::Io => write!(f, "io"),
            Phase::Lock => write!(f, "lock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    use super::*;

    #[test]
    fn test_rotation_over_ten_cycles() {
        let phases: Vec<Phase> = (1..=10).map(Phase::for_cycle).collect();

        // The first three cycles fix the whole pattern.
        assert_eq!(phases[0], Phase::Io);
        assert_eq!(phases[1], Phase::Lock);
        assert_eq!(phases[2], Phase::Cpu);

        let count = |kind| phases.iter().filter(|p| **p == kind).count();
        assert_eq!(count(Phase::Cpu), 3);
        assert_eq!(count(Phase::Io), 4);
        assert_eq!(count(Phase::Lock), 3);
    }

    #[test]
    fn test_rotation_is_periodic() {
        fn prop_period_three(cycle: u32) -> TestResult {
            if cycle > u32::MAX - 3 {
                return TestResult::discard();
            }
            TestResult::from_bool(Phase::for_cycle(cycle) == Phase::for_cycle(cycle + 3))
        }

        quickcheck(prop_period_three as fn(u32) -> TestResult);
    }

    #[test]
    fn test_rotation_covers_every_kind() {
        fn prop_window_has_all_kinds(cycle: u32) -> TestResult {
            if cycle > u32::MAX - 3 {
                return TestResult::discard();
            }
            let window = [
                Phase::for_cycle(cycle),
                Phase::for_cycle(cycle + 1),
                Phase::for_cycle(cycle + 2),
            ];
            let ok = window.contains(&Phase::Cpu)
                && window.contains(&Phase::Io)
                && window.contains(&Phase::Lock);
            TestResult::from_bool(ok)
        }

        quickcheck(prop_window_has_all_kinds as fn(u32) -> TestResult);
    }
}
