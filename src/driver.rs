//! Worker scheduling: fan-out, per-cycle phase rotation, fan-in.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;

use crate::workloads::Phase;
use crate::workloads::cpu::Burn;
use crate::workloads::io;
use crate::workloads::lock::SharedLock;

/// Fixed number of concurrent workers.
pub const NUM_WORKERS: u32 = 3;

/// Fixed number of cycles each worker runs.
pub const WORK_CYCLES: u32 = 10;

/// Phase timing shared by every worker.
#[derive(Copy, Clone, Debug)]
pub struct Timing {
    /// How long the I/O phase stays blocked.
    pub io_wait: Duration,

    /// How long the lock phase holds the shared lock.
    pub lock_hold: Duration,

    /// Pause between consecutive cycles.
    pub cycle_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            io_wait: Duration::from_millis(500),
            lock_hold: Duration::from_millis(200),
            cycle_delay: Duration::from_millis(100),
        }
    }
}

/// What a worker hands back when it finishes.
#[derive(Debug)]
pub struct WorkerReport {
    /// Worker identity, 1-based.
    pub id: u32,

    /// Phase kind executed on each cycle, in order.
    pub phases: Vec<Phase>,
}

/// Drives a fixed set of workers through the phase rotation.
///
/// The driver owns the shared lock, spawns one named thread per worker, and
/// blocks until every worker has run all of its cycles.
pub struct Driver {
    workers: u32,
    cycles: u32,
    timing: Timing,
}

impl Driver {
    /// Create a driver with the production phase timing.
    ///
    /// # Arguments
    ///
    /// * `workers` - Number of workers to spawn (>= 1)
    /// * `cycles` - Number of cycles each worker runs (>= 1)
    pub fn new(workers: u32, cycles: u32) -> Self {
        Self::with_timing(workers, cycles, Timing::default())
    }

    /// Create a driver with explicit phase timing.
    pub fn with_timing(workers: u32, cycles: u32, timing: Timing) -> Self {
        Self {
            workers,
            cycles,
            timing,
        }
    }

    /// Start all workers and block until every one has finished.
    ///
    /// # Returns
    ///
    /// One report per worker, in worker order. Fails if the host refuses to
    /// start a worker thread; the caller is expected to treat that as fatal,
    /// no partial run is attempted.
    pub fn run(&self) -> Result<Vec<WorkerReport>> {
        let lock = Arc::new(SharedLock::default());

        let mut handles = Vec::with_capacity(self.workers as usize);
        for id in 1..=self.workers {
            let lock = Arc::clone(&lock);
            let cycles = self.cycles;
            let timing = self.timing;
            let handle = thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn(move || worker_loop(id, cycles, timing, &lock))
                .with_context(|| format!("unable to start worker {id}"))?;
            handles.push(handle);
        }

        let mut reports = Vec::with_capacity(handles.len());
        for handle in handles {
            let report = handle
                .join()
                .map_err(|_| anyhow!("worker exited abnormally"))?;
            reports.push(report);
        }
        Ok(reports)
    }
}

/// One worker: run `cycles` cycles, each executing the phase the rotation
/// selects for it, with a fixed delay between cycles.
fn worker_loop(id: u32, cycles: u32, timing: Timing, lock: &SharedLock) -> WorkerReport {
    println!("worker {id} started");

    let burn = Burn::default();
    let mut phases = Vec::with_capacity(cycles as usize);
    for cycle in 1..=cycles {
        let phase = Phase::for_cycle(cycle);
        match phase {
            Phase::Cpu => {
                println!("worker {id}: cycle {cycle} - burning cpu");
                let sum = burn.run();
                println!(
                    "worker {id}: cycle {cycle} - cpu burn done (sum={sum}, cpu={})",
                    burn.last_cpu()
                );
            }
            Phase::Io => {
                println!("worker {id}: cycle {cycle} - blocking on io");
                let blocked = io::stall(timing.io_wait);
                println!(
                    "worker {id}: cycle {cycle} - io done ({}ms blocked)",
                    blocked.as_millis()
                );
            }
            Phase::Lock => {
                println!("worker {id}: cycle {cycle} - waiting for lock");
                let guard = lock.acquire();
                println!("worker {id}: cycle {cycle} - lock acquired");
                thread::sleep(timing.lock_hold);
                drop(guard);
                println!("worker {id}: cycle {cycle} - lock released");
            }
        }
        phases.push(phase);

        thread::sleep(timing.cycle_delay);
    }

    println!("worker {id} finished");
    WorkerReport { id, phases }
}
