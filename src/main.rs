//! Binary entry point for the workload target.
//!
//! This delegates to the driver implementation in the library. It takes no
//! arguments and reads no configuration; everything about the run is fixed.

use anyhow::Result;

use proftarget::driver::Driver;
use proftarget::driver::NUM_WORKERS;
use proftarget::driver::WORK_CYCLES;

fn main() -> Result<()> {
    println!("starting workload target (pid: {})", std::process::id());
    println!(
        "running {NUM_WORKERS} workers for {WORK_CYCLES} cycles each, roughly {} seconds",
        WORK_CYCLES * 2
    );
    println!("workload mix: cpu burn, blocking io, lock contention");
    println!();

    let driver = Driver::new(NUM_WORKERS, WORK_CYCLES);
    driver.run()?;

    println!();
    println!("all workers finished");
    Ok(())
}
