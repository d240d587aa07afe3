//! Fixed workload target for exercising external profilers and tracers.
//!
//! Drives a small set of worker threads through a fixed rotation of CPU
//! burn, blocking I/O, and lock contention phases. Every run produces the
//! same phase schedule, so a profiler attached to the process can be
//! checked against known ground truth.

pub mod driver;
pub mod workloads;
